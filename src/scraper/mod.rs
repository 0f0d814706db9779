mod parser;
mod scraper;
mod transport;

pub use parser::{parse_listings, parse_price};
pub use scraper::{collect_matches, RealEstateScraper, RetryPolicy};
pub use transport::{HttpTransport, RawResponse, Transport};
