//! Source loader: first worksheet of a workbook as untyped rows.

use crate::error::{ConvertError, Result};
use crate::model::{Cell, RawRow};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Rows of the first worksheet.
#[derive(Debug, Clone, Default)]
pub struct SheetRows {
    /// Worksheet name.
    pub sheet_name: String,
    /// Rows top to bottom, anchored at cell A1.
    pub rows: Vec<RawRow>,
}

/// Load the first worksheet of the workbook at `path`.
pub fn load_rows(path: &Path) -> Result<SheetRows> {
    if !path.exists() {
        return Err(ConvertError::SourceUnreadable {
            path: path.to_path_buf(),
            message: "file not found".to_string(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| ConvertError::SourceUnreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ConvertError::EmptyWorkbook {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ConvertError::SourceUnreadable {
            path: path.to_path_buf(),
            message: format!("sheet '{}': {}", sheet_name, e),
        })?;

    tracing::debug!("Sheet '{}' range size {:?}", sheet_name, range.get_size());

    Ok(SheetRows {
        sheet_name,
        rows: range_to_rows(&range),
    })
}

/// Convert a calamine range into rows anchored at A1.
///
/// calamine trims leading empty rows and columns from the used range; they
/// are padded back so header skipping and column indices stay absolute.
fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    let mut rows: Vec<RawRow> = (0..start_row).map(|_| Vec::new()).collect();

    for row in range.rows() {
        let mut cells = vec![Cell::Empty; start_col as usize];
        cells.extend(row.iter().map(to_cell));
        rows.push(cells);
    }

    rows
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(v) => Cell::Int(*v),
        Data::Float(v) => Cell::Float(*v),
        Data::Bool(v) => Cell::Bool(*v),
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Error(e.to_string()),
    }
}
