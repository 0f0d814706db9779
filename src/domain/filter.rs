// src/domain/filter.rs

use crate::domain::listing::Listing;

/// Gate applied to every parsed listing before it is kept.
///
/// Bedroom and bathroom minimums are exclusive, the price cap is inclusive.
/// A listing that does not state a bedroom or bathroom count never passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdFilter {
    pub min_bedrooms: i64,
    pub min_bathrooms: i64,
    pub max_price: i64,
}

impl Default for ThresholdFilter {
    fn default() -> Self {
        Self {
            min_bedrooms: 2,
            min_bathrooms: 2,
            max_price: 500_000,
        }
    }
}

impl ThresholdFilter {
    pub fn admits(&self, listing: &Listing) -> bool {
        let beds_ok = listing.bedrooms.is_some_and(|b| b > self.min_bedrooms);
        let baths_ok = listing.bathrooms.is_some_and(|b| b > self.min_bathrooms);
        beds_ok && baths_ok && listing.price <= self.max_price
    }
}
