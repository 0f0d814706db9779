// errors.rs
use thiserror::Error;

/// Why a page could not be fetched. The scrape entry point logs these and
/// falls back to an empty result.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("Rate limited on every attempt ({attempts} attempts)")]
    RateLimited { attempts: u32 },
}

/// Extraction failure for a single listing container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("invalid number for '{field}': {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to read spreadsheet {path}: {msg}")]
    Read { path: String, msg: String },
    #[error("Spreadsheet {0} has no worksheet")]
    NoWorksheet(String),
    #[error("Failed to write spreadsheet: {0}")]
    Write(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}
