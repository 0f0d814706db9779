pub mod animation;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod scraper;
pub mod spreadsheets;

#[cfg(test)]
mod tests;
