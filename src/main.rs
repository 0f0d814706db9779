use listing_scraper::config::ScrapeConfig;
use listing_scraper::logging;
use listing_scraper::scraper::RealEstateScraper;
use listing_scraper::spreadsheets::save_listings;
use tracing::{error, info};

fn main() {
    logging::init();

    let cfg = match ScrapeConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let scraper = match RealEstateScraper::new(&cfg) {
        Ok(s) => s,
        Err(e) => {
            error!("❌ Scraper init failed: {e}");
            std::process::exit(1);
        }
    };

    let listings = scraper.scrape(&cfg.url);
    info!("📦 {} listings passed the filter", listings.len());

    if let Err(e) = save_listings(&listings, &cfg.output) {
        error!("❌ Saving listings failed: {e}");
        std::process::exit(1);
    }
}
