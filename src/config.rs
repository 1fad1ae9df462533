//! Configuration constants and settings for the converter.

use std::path::PathBuf;

/// Number of leading sheet rows holding headers/labels.
pub const HEADER_ROWS: usize = 3;

/// Name attribute of the generated tag table.
pub const TAG_TABLE_NAME: &str = "Imported SPS-Liste";

/// Root element of the generated document.
pub const ROOT_ELEMENT: &str = "Tagtable";

/// Element emitted per tag.
pub const TAG_ELEMENT: &str = "Tag";

/// Default spreadsheet input.
pub const DEFAULT_SOURCE_PATH: &str = "SPS-Liste.xlsx";

/// Default XML output.
pub const DEFAULT_DEST_PATH: &str = "PlcTags.xml";

/// Append-only run log, relative to the working directory.
pub const LOG_FILE_NAME: &str = "make-plc-tags.log";

/// Direction value for inputs in the source vocabulary.
pub const DIRECTION_INPUT: &str = "Eingang";

/// Direction value for outputs in the source vocabulary.
pub const DIRECTION_OUTPUT: &str = "Ausgang";

/// Signal class marker for fail-safe signals.
pub const SAFETY_MARKER: &str = "SAFETY";

/// Name prefix emitted when the direction is not recognised.
pub const UNMAPPED_DIRECTION: &str = "TODO";

/// Prefix required by the configuration tool's addressing syntax.
pub const ADDRESS_PREFIX: char = '%';

/// Signal record fields, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ListNumber,
    CpuName,
    ModuleId,
    Connector,
    IoAddress,
    DataType,
    SignalClass,
    Settings,
    Direction,
    SymbolicAddress,
    FunctionText,
    Text,
}

impl Field {
    /// Column header as used in the SPS-Liste export.
    pub fn label(&self) -> &'static str {
        match self {
            Field::ListNumber => "Listennummer",
            Field::CpuName => "CPU",
            Field::ModuleId => "SPS-Karte",
            Field::Connector => "Anschluss",
            Field::IoAddress => "SPSAdresse",
            Field::DataType => "Datentyp",
            Field::SignalClass => "Signaltyp",
            Field::Settings => "Einstellungen",
            Field::Direction => "Richtung",
            Field::SymbolicAddress => "Symbolische Adresse",
            Field::FunctionText => "Funktionstext",
            Field::Text => "Text",
        }
    }
}

/// Column layout of the source sheet (columns A..L).
pub const COLUMN_SCHEMA: [(Field, usize); 12] = [
    (Field::ListNumber, 0),
    (Field::CpuName, 1),
    (Field::ModuleId, 2),
    (Field::Connector, 3),
    (Field::IoAddress, 4),
    (Field::DataType, 5),
    (Field::SignalClass, 6),
    (Field::Settings, 7),
    (Field::Direction, 8),
    (Field::SymbolicAddress, 9),
    (Field::FunctionText, 10),
    (Field::Text, 11),
];

/// Converter run configuration.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Spreadsheet to read.
    pub source_path: PathBuf,
    /// XML file to write.
    pub dest_path: PathBuf,
    /// Run log to append to.
    pub log_path: PathBuf,
    /// Name attribute of the tag table.
    pub tag_table_name: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            dest_path: PathBuf::from(DEFAULT_DEST_PATH),
            log_path: PathBuf::from(LOG_FILE_NAME),
            tag_table_name: TAG_TABLE_NAME.to_string(),
        }
    }
}

impl ConverterConfig {
    /// Create a configuration for the given input and output paths.
    pub fn new(source_path: impl Into<PathBuf>, dest_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            dest_path: dest_path.into(),
            ..Default::default()
        }
    }

    /// Override the run log location.
    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_schema_is_sequential() {
        for (idx, (_, col)) in COLUMN_SCHEMA.iter().enumerate() {
            assert_eq!(idx, *col);
        }
        assert_eq!(COLUMN_SCHEMA[4], (Field::IoAddress, 4));
        assert_eq!(Field::IoAddress.label(), "SPSAdresse");
    }

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert_eq!(config.source_path, PathBuf::from("SPS-Liste.xlsx"));
        assert_eq!(config.dest_path, PathBuf::from("PlcTags.xml"));
        assert_eq!(config.log_path, PathBuf::from(LOG_FILE_NAME));
        assert_eq!(config.tag_table_name, TAG_TABLE_NAME);
    }
}
