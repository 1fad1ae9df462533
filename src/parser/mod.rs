//! SPS-Liste spreadsheet parser module.

mod rows;
mod sheet;

pub use rows::{extract_records, parse_list_number, Extraction};
pub use sheet::{load_rows, SheetRows};
