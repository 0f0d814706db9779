// spreadsheets/listings_xlsx.rs
use crate::domain::Listing;
use crate::errors::PersistError;
use crate::spreadsheets::table::{Cell, SheetTable};
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;
use tracing::info;

// Dates come back from calamine as serial numbers; the format is what
// marks them as dates again.
const DATE_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Appends `listings` to the workbook at `path`, creating it if needed.
/// Existing rows stay first and untouched. Returns the data row count now
/// in the file.
pub fn save_listings(listings: &[Listing], path: impl AsRef<Path>) -> Result<usize, PersistError> {
    let path = path.as_ref();

    let mut table = if path.exists() {
        info!("📎 Appending data to existing file: {}", path.display());
        read_table(path)?
    } else {
        info!("🆕 Creating new file: {}", path.display());
        SheetTable::for_listings()
    };

    table.append_listings(listings);
    write_table(&table, path)?;

    info!("💾 Data saved to {} ({} rows)", path.display(), table.rows.len());
    Ok(table.rows.len())
}

/// Reads the first worksheet. The first row is taken as the header.
pub fn read_table(path: impl AsRef<Path>) -> Result<SheetTable, PersistError> {
    let path = path.as_ref();
    let read_err = |msg: String| PersistError::Read {
        path: path.display().to_string(),
        msg,
    };

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: XlsxError| read_err(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PersistError::NoWorksheet(path.display().to_string()))?
        .map_err(|e| read_err(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|c| c.to_string()).collect(),
        None => return Ok(SheetTable::default()),
    };

    let rows = rows
        .map(|row| row.iter().map(cell_from_data).collect())
        .collect();

    Ok(SheetTable { headers, rows })
}

pub fn write_table(table: &SheetTable, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format(DATE_FORMAT);
    let worksheet = workbook.add_worksheet();

    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header)
            .map_err(|e| {
                PersistError::Write(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, row) in table.rows.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, cell) in row.iter().enumerate() {
            let c = col as u16;
            let written = match cell {
                Cell::Empty => continue,
                Cell::Number(n) => worksheet.write_number(r, c, *n),
                Cell::Text(s) => worksheet.write_string(r, c, s),
                Cell::Bool(b) => worksheet.write_boolean(r, c, *b),
                Cell::DateTime(serial) => {
                    worksheet.write_number_with_format(r, c, *serial, &date_format)
                }
            };
            written.map_err(|e| {
                PersistError::Write(format!("Failed to write row {} column {}: {}", r, c, e))
            })?;
        }
    }

    workbook
        .save(path.as_ref())
        .map_err(|e| PersistError::Write(format!("Failed to save workbook: {}", e)))
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) => Cell::DateTime(dt.as_f64()),
        other => Cell::Text(other.to_string()),
    }
}
