//! Cell - Untyped spreadsheet value as delivered by the source sheet.

use std::fmt;

/// One row of the source sheet, cells in column order.
pub type RawRow = Vec<Cell>;

/// A single spreadsheet cell value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Formula error such as `#N/A`.
    Error(String),
}

impl Cell {
    /// Check if the cell holds no value (absent or empty text).
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Check if the cell counts as no value: empty, zero or false.
    ///
    /// Whitespace-only text is a value.
    pub fn is_falsy(&self) -> bool {
        match self {
            Cell::Int(v) => *v == 0,
            Cell::Float(v) => *v == 0.0 || v.is_nan(),
            Cell::Bool(v) => !v,
            _ => self.is_empty(),
        }
    }

    /// Cell content rendered as it appears in the sheet.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Int(v) => write!(f, "{}", v),
            // f64 Display already drops a zero fraction (1.0 -> "1")
            Cell::Float(v) => write!(f, "{}", v),
            Cell::Bool(v) => write!(f, "{}", v),
            Cell::Error(code) => f.write_str(code),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}
