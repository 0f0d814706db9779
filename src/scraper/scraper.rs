// scraper.rs
use crate::config::ScrapeConfig;
use crate::domain::{Listing, ThresholdFilter};
use crate::errors::{FetchError, ListingError};
use crate::scraper::parser::parse_listings;
use crate::scraper::transport::{HttpTransport, Transport};
use std::time::Duration;
use tracing::{info, warn};

/// How many times to ask again after an HTTP 429, and how long to wait.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Wait after the `attempt`-th rate-limited request: base * 2^attempt.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

pub struct RealEstateScraper<T = HttpTransport> {
    transport: T,
    retry: RetryPolicy,
    filter: ThresholdFilter,
}

impl RealEstateScraper<HttpTransport> {
    pub fn new(cfg: &ScrapeConfig) -> Result<Self, FetchError> {
        let transport = HttpTransport::new(&cfg.user_agent, cfg.timeout)?;
        let retry = RetryPolicy {
            max_attempts: cfg.max_attempts,
            base_delay: cfg.backoff_base,
        };
        Ok(Self::with_transport(transport, retry, ThresholdFilter::default()))
    }
}

impl<T: Transport> RealEstateScraper<T> {
    pub fn with_transport(transport: T, retry: RetryPolicy, filter: ThresholdFilter) -> Self {
        Self {
            transport,
            retry,
            filter,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch, parse and filter one page. Fetch failures are logged and
    /// give an empty result rather than an error.
    pub fn scrape(&self, url: &str) -> Vec<Listing> {
        info!("🌐 Fetching data from {url}");

        let html = match self.fetch_html(url) {
            Ok(html) => html,
            Err(e) => {
                warn!("❌ Failed to fetch the webpage: {url}, Error: {e}");
                return Vec::new();
            }
        };

        collect_matches(parse_listings(&html, url), &self.filter)
    }

    /// GET with exponential backoff on HTTP 429 only. Transport errors and
    /// any other non-2xx status give up straight away.
    pub fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let max_attempts = self.retry.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            let resp = self.transport.get(url)?;

            if resp.is_success() {
                return Ok(resp.body);
            }

            if !resp.is_rate_limited() {
                return Err(FetchError::Status {
                    status: resp.status,
                    url: url.to_string(),
                });
            }

            if attempt == max_attempts {
                break;
            }

            let wait = self.retry.delay_for(attempt);
            warn!("⏳ Rate limited (attempt {attempt}/{max_attempts}). Retrying in {wait:?}...");
            std::thread::sleep(wait);
        }

        Err(FetchError::RateLimited {
            attempts: max_attempts,
        })
    }
}

/// Keeps the listings the filter admits, logging the fate of every entry.
pub fn collect_matches(
    results: Vec<Result<Listing, ListingError>>,
    filter: &ThresholdFilter,
) -> Vec<Listing> {
    let mut data = Vec::new();

    for result in results {
        match result {
            Ok(listing) if filter.admits(&listing) => {
                info!("✅ Added listing: {listing}");
                data.push(listing);
            }
            Ok(listing) => info!("⏭️ Skipped listing: {listing}"),
            Err(e) => warn!("⚠️ Error parsing listing: {e}"),
        }
    }

    data
}
