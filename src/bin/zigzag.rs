use listing_scraper::animation;
use listing_scraper::config::ZigzagConfig;
use listing_scraper::logging;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info};

fn main() {
    logging::init();

    let cfg = match ZigzagConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        error!("❌ Could not install Ctrl-C handler: {e}");
        std::process::exit(1);
    }

    let mut stdout = std::io::stdout().lock();
    match animation::run(&mut stdout, cfg.interval, cfg.frames, &stop) {
        Ok(frames) => info!("👋 Stopped after {frames} frames"),
        Err(e) => {
            error!("❌ Writing to stdout failed: {e}");
            std::process::exit(1);
        }
    }
}
