// spreadsheets/table.rs
use crate::domain::Listing;

/// Column order for listing rows.
pub const LISTING_COLUMNS: [&str; 5] = ["price", "bedrooms", "bathrooms", "garage", "url"];

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    /// Excel serial date.
    DateTime(f64),
}

/// A worksheet as a header row plus data rows. Every data row is kept the
/// same width as `headers`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl SheetTable {
    pub fn for_listings() -> Self {
        Self {
            headers: LISTING_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends listings after the existing rows, the way a table concat
    /// would: listing columns the sheet lacks are added on the right and
    /// older rows get empty cells there.
    pub fn append_listings(&mut self, listings: &[Listing]) {
        for column in LISTING_COLUMNS {
            if !self.headers.iter().any(|h| h == column) {
                self.headers.push(column.to_string());
            }
        }

        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, Cell::Empty);
        }

        for listing in listings {
            let row = self
                .headers
                .iter()
                .map(|h| listing_cell(listing, h))
                .collect();
            self.rows.push(row);
        }
    }
}

fn listing_cell(listing: &Listing, column: &str) -> Cell {
    let count = |n: Option<i64>| n.map_or(Cell::Empty, |v| Cell::Number(v as f64));

    match column {
        "price" => Cell::Number(listing.price as f64),
        "bedrooms" => count(listing.bedrooms),
        "bathrooms" => count(listing.bathrooms),
        "garage" => Cell::Text(listing.garage_label().to_string()),
        "url" => Cell::Text(listing.url.clone()),
        _ => Cell::Empty,
    }
}
