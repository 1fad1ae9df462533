//! Diagnostic checks over the extracted signal records.

mod duplicates;

pub use duplicates::{find_duplicates, DuplicateEntry};
