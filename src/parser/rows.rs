//! Row extractor: header skip, positional mapping and address filter.

use crate::config::{Field, COLUMN_SCHEMA, HEADER_ROWS};
use crate::model::{Cell, RawRow, SignalRecord};

/// Records retained from the sheet.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Records with a non-empty I/O address, in sheet order.
    pub records: Vec<SignalRecord>,
    /// Rows after the header block, before the address filter.
    pub rows_seen: usize,
}

impl Extraction {
    /// Number of records that will become tags.
    pub fn importable(&self) -> usize {
        self.records.len()
    }
}

/// Extract signal records from raw sheet rows.
pub fn extract_records(rows: &[RawRow]) -> Extraction {
    let mut extraction = Extraction::default();

    for (idx, row) in rows.iter().enumerate().skip(HEADER_ROWS) {
        extraction.rows_seen += 1;

        match map_row(row) {
            Some(record) => extraction.records.push(record),
            None => tracing::debug!(
                "Row {}: no {}, skipped",
                idx + 1,
                Field::IoAddress.label()
            ),
        }
    }

    extraction
}

/// Map one row onto a record; `None` if it has no I/O address.
fn map_row(row: &[Cell]) -> Option<SignalRecord> {
    let mut record = SignalRecord::default();

    for (field, col) in COLUMN_SCHEMA {
        let cell = row.get(col).unwrap_or(&Cell::Empty);
        match field {
            Field::ListNumber => record.list_number = parse_list_number(cell),
            Field::CpuName => record.cpu_name = cell.text(),
            Field::ModuleId => record.module_id = cell.text(),
            Field::Connector => record.connector = cell.text(),
            Field::IoAddress => {
                if cell.is_falsy() {
                    return None;
                }
                record.io_address = cell.text();
            }
            Field::DataType => record.data_type = cell.text(),
            Field::SignalClass => record.signal_class = cell.text(),
            Field::Settings => record.settings = cell.text(),
            Field::Direction => record.direction = cell.text(),
            Field::SymbolicAddress => record.symbolic_address = cell.text(),
            Field::FunctionText => record.function_text = cell.text(),
            Field::Text => record.text = cell.text(),
        }
    }

    Some(record)
}

/// Parse the list position: leading integer digits, 0 otherwise.
pub fn parse_list_number(cell: &Cell) -> i64 {
    match cell {
        Cell::Int(v) => *v,
        Cell::Float(v) if v.is_finite() => v.trunc() as i64,
        Cell::Text(s) => parse_int_prefix(s).unwrap_or(0),
        _ => 0,
    }
}

fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}
