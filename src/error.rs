//! Error types for the SPS-Liste to tag table conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes reported in the run log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Source spreadsheet missing or unreadable (1)
    SourceUnreadable = 1,
    /// Destination XML could not be written (2)
    DestinationWriteFailed = 2,
    /// XML rendering failed (3)
    SerializationFailed = 3,
    /// Run log could not be appended (4)
    LogWriteFailed = 4,
}

impl ErrorCode {
    /// Name written to the run log.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::SourceUnreadable => "SourceUnreadable",
            ErrorCode::DestinationWriteFailed => "DestinationWriteFailed",
            ErrorCode::SerializationFailed => "SerializationFailed",
            ErrorCode::LogWriteFailed => "LogWriteFailed",
        }
    }
}

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Cannot read spreadsheet {path}: {message}")]
    SourceUnreadable { path: PathBuf, message: String },

    #[error("Spreadsheet {path} contains no worksheet")]
    EmptyWorkbook { path: PathBuf },

    #[error("Cannot write {path}: {source}")]
    DestinationWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Cannot append run log {path}: {source}")]
    LogWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConvertError::SourceUnreadable { .. } => ErrorCode::SourceUnreadable,
            ConvertError::EmptyWorkbook { .. } => ErrorCode::SourceUnreadable,
            ConvertError::DestinationWriteFailed { .. } => ErrorCode::DestinationWriteFailed,
            ConvertError::Xml(_) => ErrorCode::SerializationFailed,
            ConvertError::LogWriteFailed { .. } => ErrorCode::LogWriteFailed,
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
