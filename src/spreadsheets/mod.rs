pub mod listings_xlsx;
pub mod table;

pub use listings_xlsx::{read_table, save_listings, write_table};
pub use table::{Cell, SheetTable, LISTING_COLUMNS};
