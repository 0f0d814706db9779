// src/domain/listing.rs
use std::fmt;

/// One real-estate record pulled off a results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub price: i64,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub garage: bool,
    pub url: String,
}

impl Listing {
    pub fn garage_label(&self) -> &'static str {
        if self.garage {
            "Yes"
        } else {
            "No"
        }
    }
}

fn count(n: Option<i64>) -> String {
    n.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} bedrooms, {} bathrooms, garage: {}, url: {}",
            self.price,
            count(self.bedrooms),
            count(self.bathrooms),
            self.garage_label(),
            self.url
        )
    }
}
