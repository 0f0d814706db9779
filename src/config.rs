// config.rs
use crate::errors::ConfigError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://www.realtor.com/realestateandhomes-search/Allegheny-County_PA";
pub const DEFAULT_OUTPUT: &str = "real_estate_listings.xlsx";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Everything the scraper binary needs, read from the environment.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub url: String,
    pub output: String,
    pub user_agent: String,
    pub max_attempts: u32,
    pub backoff_base: Duration,
    pub timeout: Duration,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_attempts: 5,
            backoff_base: Duration::from_millis(1000),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ScrapeConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(url) = lookup("SCRAPE_URL") {
            cfg.url = url;
        }
        if let Some(output) = lookup("SCRAPE_OUTPUT") {
            cfg.output = output;
        }
        if let Some(ua) = lookup("SCRAPE_USER_AGENT") {
            cfg.user_agent = ua;
        }
        if let Some(n) = parse_var::<u32, _>(&lookup, "SCRAPE_MAX_ATTEMPTS")? {
            if n == 0 {
                return Err(ConfigError::Invalid {
                    key: "SCRAPE_MAX_ATTEMPTS",
                    value: n.to_string(),
                });
            }
            cfg.max_attempts = n;
        }
        if let Some(ms) = parse_var::<u64, _>(&lookup, "SCRAPE_BACKOFF_BASE_MS")? {
            cfg.backoff_base = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "SCRAPE_TIMEOUT_SECS")? {
            cfg.timeout = Duration::from_secs(secs);
        }

        Ok(cfg)
    }
}

/// Settings for the zigzag binary.
#[derive(Debug, Clone)]
pub struct ZigzagConfig {
    pub interval: Duration,
    pub frames: Option<u64>,
}

impl Default for ZigzagConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            frames: None,
        }
    }
}

impl ZigzagConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(ms) = parse_var::<u64, _>(&lookup, "ZIGZAG_INTERVAL_MS")? {
            cfg.interval = Duration::from_millis(ms);
        }
        cfg.frames = parse_var::<u64, _>(&lookup, "ZIGZAG_FRAMES")?;
        Ok(cfg)
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
