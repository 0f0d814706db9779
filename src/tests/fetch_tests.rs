// src/tests/fetch_tests.rs

use super::utils::{card, page, response, ScriptedTransport, PAGE_URL};
use crate::domain::ThresholdFilter;
use crate::errors::FetchError;
use crate::scraper::{RealEstateScraper, RetryPolicy};
use std::time::Duration;

fn no_wait(max_attempts: u32) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        base_delay: Duration::ZERO,
    }
}

fn scraper_with(
    responses: Vec<Result<crate::scraper::RawResponse, FetchError>>,
) -> RealEstateScraper<ScriptedTransport> {
    RealEstateScraper::with_transport(
        ScriptedTransport::new(responses),
        no_wait(5),
        ThresholdFilter::default(),
    )
}

fn sample_page() -> String {
    page(&[
        card(
            "$450,000",
            r#"<span class="bedrooms">3</span>"#,
            r#"<span class="bathrooms">3</span>"#,
            true,
            "/homes/keep",
        ),
        card(
            "$450,000",
            r#"<span class="bedrooms">2</span>"#,
            r#"<span class="bathrooms">3</span>"#,
            false,
            "/homes/skip",
        ),
    ])
}

#[test]
fn five_rate_limits_give_empty_result() {
    let scraper = scraper_with(ScriptedTransport::status(429, 5));

    let listings = scraper.scrape(PAGE_URL);

    assert!(listings.is_empty());
    assert_eq!(scraper.transport().calls(), 5);
}

#[test]
fn rate_limit_error_reports_attempts() {
    let scraper = scraper_with(ScriptedTransport::status(429, 5));

    match scraper.fetch_html(PAGE_URL) {
        Err(FetchError::RateLimited { attempts }) => assert_eq!(attempts, 5),
        other => panic!("expected RateLimited, got {other:?}"),
    }
}

#[test]
fn recovers_after_rate_limit() {
    let mut responses = ScriptedTransport::status(429, 2);
    responses.push(Ok(response(200, &sample_page())));
    let scraper = scraper_with(responses);

    let listings = scraper.scrape(PAGE_URL);

    assert_eq!(scraper.transport().calls(), 3);
    assert_eq!(listings.len(), 1);
    assert_eq!(
        listings[0].url,
        "https://www.realtor.com/homes/keep"
    );
    assert!(listings[0].garage);
}

#[test]
fn other_status_aborts_without_retry() {
    let scraper = scraper_with(ScriptedTransport::status(503, 1));

    assert!(scraper.scrape(PAGE_URL).is_empty());
    assert_eq!(scraper.transport().calls(), 1);
}

#[test]
fn transport_error_aborts_without_retry() {
    let scraper = scraper_with(vec![Err(FetchError::Transport(
        "connection refused".to_string(),
    ))]);

    assert!(matches!(
        scraper.fetch_html(PAGE_URL),
        Err(FetchError::Transport(_))
    ));
    assert_eq!(scraper.transport().calls(), 1);
}

#[test]
fn backoff_doubles_per_attempt() {
    let policy = RetryPolicy::default();
    assert_eq!(policy.delay_for(1), Duration::from_secs(2));
    assert_eq!(policy.delay_for(2), Duration::from_secs(4));
    assert_eq!(policy.delay_for(4), Duration::from_secs(16));
}
