pub mod filter;
pub mod listing;

pub use filter::ThresholdFilter;
pub use listing::Listing;
