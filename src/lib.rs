//! plc-tags - Convert an SPS-Liste spreadsheet into a PLC tag table.
//!
//! The SPS-Liste is the I/O signal export of the electrical design tool. Each
//! data row with an I/O address becomes one `<Tag>` of a tag table XML that
//! the automation configuration tool can import.
//!
//! # Example
//!
//! ```no_run
//! use plc_tags::{run, ConverterConfig};
//!
//! let config = ConverterConfig::new("SPS-Liste.xlsx", "PlcTags.xml");
//! let log = run(&config);
//! log.append_to(&config.log_path).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod runlog;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::ConverterConfig;
pub use error::{ConvertError, ErrorCode, Result};
pub use generator::generate_xml;
pub use model::{Cell, Direction, RawRow, SignalRecord, TagDescriptor, TagFlags};
pub use parser::{extract_records, load_rows, Extraction, SheetRows};
pub use runlog::RunLog;
pub use transform::{map_tag, map_tags};
pub use validation::{find_duplicates, DuplicateEntry};

use std::path::Path;
use tracing::{error, info, warn};

/// Result of converting sheet rows, before anything is written.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub extraction: Extraction,
    pub duplicates: Vec<DuplicateEntry>,
    pub tags: Vec<TagDescriptor>,
    /// Rendered tag table document.
    pub xml: String,
}

impl Conversion {
    /// Number of tags with an unrecognised direction.
    pub fn unmapped_count(&self) -> usize {
        self.tags.iter().filter(|t| t.is_unmapped()).count()
    }
}

/// Convert raw sheet rows into the tag table document.
///
/// This is the in-memory part of the pipeline:
/// 1. Skip the header rows and extract records with an I/O address
/// 2. Report duplicate addresses (duplicates are still converted)
/// 3. Map every record to a tag
/// 4. Render the XML
pub fn convert_rows(rows: &[RawRow], table_name: &str) -> Result<Conversion> {
    let extraction = extract_records(rows);
    let duplicates = find_duplicates(&extraction.records);
    let tags = map_tags(&extraction.records);
    let xml = generate_xml(&tags, table_name)?;

    Ok(Conversion {
        extraction,
        duplicates,
        tags,
        xml,
    })
}

/// Write the document to `path`, replacing any existing file.
pub fn write_output(path: &Path, xml: &str) -> Result<()> {
    std::fs::write(path, xml).map_err(|source| ConvertError::DestinationWriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the full conversion described by `config`.
///
/// Never fails: a terminal error is recorded in the returned log, which the
/// caller appends to the run log file and turns into the exit status.
pub fn run(config: &ConverterConfig) -> RunLog {
    let mut log = RunLog::new(&config.source_path, &config.dest_path);

    info!("Processing: {}", config.source_path.display());

    let sheet = match load_rows(&config.source_path) {
        Ok(sheet) => sheet,
        Err(err) => {
            error!("{}", err);
            log.fail(err);
            return log;
        }
    };

    info!("Sheet name: {}", sheet.sheet_name);

    let conversion = match convert_rows(&sheet.rows, &config.tag_table_name) {
        Ok(conversion) => conversion,
        Err(err) => {
            error!("{}", err);
            log.fail(err);
            return log;
        }
    };

    log.record_extraction(&conversion.extraction);
    log.record_duplicates(&conversion.duplicates);

    info!(
        "Rows: {}, importable: {}",
        conversion.extraction.rows_seen,
        conversion.extraction.importable()
    );

    if !conversion.duplicates.is_empty() {
        warn!("IO addresses with more than one definition:");
        for duplicate in &conversion.duplicates {
            warn!(
                "Adresse: {}; SPS-Karte: {}",
                duplicate.io_address, duplicate.module_id
            );
        }
    }

    let unmapped = conversion.unmapped_count();
    if unmapped > 0 {
        warn!("{} tag(s) with unknown direction, marked TODO", unmapped);
    }

    match write_output(&config.dest_path, &conversion.xml) {
        Ok(()) => info!("Generated: {}", config.dest_path.display()),
        Err(err) => {
            error!("{}", err);
            log.fail(err);
        }
    }

    log
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_row(list: i64, address: &str, direction: &str) -> RawRow {
        vec![
            Cell::Int(list),
            "CPU1".into(),
            "K1".into(),
            "X1".into(),
            address.into(),
            "Bool".into(),
            "DI".into(),
            "".into(),
            direction.into(),
            "".into(),
            "".into(),
            "Text".into(),
        ]
    }

    #[test]
    fn test_convert_rows_counts() {
        let rows = vec![
            Vec::new(),
            Vec::new(),
            Vec::new(),
            data_row(1, "E0.0", "Eingang"),
            data_row(2, "E0.0", "Eingang"),
            data_row(3, "", "Eingang"),
            data_row(4, "A0.0", "Ausgang"),
            data_row(5, "A0.1", "?"),
        ];

        let conversion = convert_rows(&rows, "T").unwrap();
        assert_eq!(conversion.extraction.rows_seen, 5);
        assert_eq!(conversion.extraction.importable(), 4);
        assert_eq!(conversion.tags.len(), 4);
        assert_eq!(conversion.duplicates.len(), 2);
        assert_eq!(conversion.unmapped_count(), 1);
        assert_eq!(conversion.xml.matches("<Tag ").count(), 4);
    }

    #[test]
    fn test_write_output_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.xml");

        let err = write_output(&path, "<x/>").unwrap_err();
        assert_eq!(err.code(), ErrorCode::DestinationWriteFailed);
    }
}
