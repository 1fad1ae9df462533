//! Duplicate I/O address detection.

use crate::model::SignalRecord;
use std::fmt;

/// A record whose I/O address is shared with at least one other record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    /// Index of the record in the retained set.
    pub index: usize,
    pub list_number: i64,
    pub io_address: String,
    pub module_id: String,
}

impl fmt::Display for DuplicateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pos: {}; Adresse: {}; SPS-Karte: {}",
            self.list_number, self.io_address, self.module_id
        )
    }
}

/// Find every record that shares its I/O address with another record.
///
/// Every participant of a collision is reported, in record order. The input
/// is not modified; duplicates still become tags.
pub fn find_duplicates(records: &[SignalRecord]) -> Vec<DuplicateEntry> {
    let mut duplicates = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let collides = records
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && other.io_address == record.io_address);

        if collides {
            duplicates.push(DuplicateEntry {
                index: i,
                list_number: record.list_number,
                io_address: record.io_address.clone(),
                module_id: record.module_id.clone(),
            });
        }
    }

    duplicates
}
