//! Run log: one summary block per invocation, appended to a text file.

use crate::error::{ConvertError, Result};
use crate::parser::Extraction;
use crate::validation::DuplicateEntry;
use chrono::{DateTime, Local};
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Timestamp format of the log header line.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Summary of one converter run.
#[derive(Debug)]
pub struct RunLog {
    pub started: DateTime<Local>,
    pub source_path: PathBuf,
    pub dest_path: PathBuf,
    /// Rows after the header block.
    pub rows_seen: usize,
    /// Records turned into tags.
    pub importable: usize,
    /// Duplicate address report lines, in record order.
    pub duplicates: Vec<String>,
    /// Terminal error, if the run failed.
    pub failure: Option<ConvertError>,
}

impl RunLog {
    /// Start an empty log for a run.
    pub fn new(source_path: impl Into<PathBuf>, dest_path: impl Into<PathBuf>) -> Self {
        Self {
            started: Local::now(),
            source_path: source_path.into(),
            dest_path: dest_path.into(),
            rows_seen: 0,
            importable: 0,
            duplicates: Vec::new(),
            failure: None,
        }
    }

    /// Merge the extraction counters.
    pub fn record_extraction(&mut self, extraction: &Extraction) {
        self.rows_seen = extraction.rows_seen;
        self.importable = extraction.importable();
    }

    /// Merge the duplicate report.
    pub fn record_duplicates(&mut self, duplicates: &[DuplicateEntry]) {
        self.duplicates = duplicates.iter().map(|d| d.to_string()).collect();
    }

    /// Mark the run as failed.
    pub fn fail(&mut self, error: ConvertError) {
        self.failure = Some(error);
    }

    /// Check if the run completed.
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    /// Process exit status for this run.
    pub fn exit_code(&self) -> ExitCode {
        if self.succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// Status line: "OK" or "<code>: <detail>".
    pub fn status(&self) -> String {
        match &self.failure {
            None => "OK".to_string(),
            Some(err) => format!("{}: {}", err.code().name(), error_chain(err)),
        }
    }

    /// Render the log block.
    pub fn render(&self) -> String {
        let mut out = String::new();

        writeln!(out, "==== {} ====", self.started.format(TIMESTAMP_FORMAT)).unwrap();
        writeln!(out, "Source: {}", self.source_path.display()).unwrap();
        writeln!(out, "Destination: {}", self.dest_path.display()).unwrap();
        writeln!(out, "Status: {}", self.status()).unwrap();
        writeln!(out, "Rows seen: {}", self.rows_seen).unwrap();
        writeln!(out, "Importable: {}", self.importable).unwrap();
        writeln!(out, "Duplicate addresses: {}", self.duplicates.len()).unwrap();
        for line in &self.duplicates {
            writeln!(out, "  {}", line).unwrap();
        }
        writeln!(out).unwrap();

        out
    }

    /// Append the log block to `path`, creating the file if needed.
    pub fn append_to(&self, path: &Path) -> Result<()> {
        let write = || -> std::io::Result<()> {
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(self.render().as_bytes())?;
            file.flush()
        };

        write().map_err(|source| ConvertError::LogWriteFailed {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Error message including its source chain.
fn error_chain(err: &ConvertError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SignalRecord;

    #[test]
    fn test_render_success() {
        let mut log = RunLog::new("SPS-Liste.xlsx", "PlcTags.xml");
        let extraction = Extraction {
            records: vec![SignalRecord::default(); 4],
            rows_seen: 5,
        };
        log.record_extraction(&extraction);
        log.record_duplicates(&[DuplicateEntry {
            index: 0,
            list_number: 1,
            io_address: "E0.0".into(),
            module_id: "K1".into(),
        }]);

        let text = log.render();
        assert!(text.starts_with("==== "));
        assert!(text.contains("Source: SPS-Liste.xlsx"));
        assert!(text.contains("Destination: PlcTags.xml"));
        assert!(text.contains("Status: OK"));
        assert!(text.contains("Rows seen: 5"));
        assert!(text.contains("Importable: 4"));
        assert!(text.contains("Duplicate addresses: 1"));
        assert!(text.contains("  Pos: 1; Adresse: E0.0; SPS-Karte: K1"));
        assert!(log.succeeded());
        assert_eq!(
            format!("{:?}", log.exit_code()),
            format!("{:?}", ExitCode::SUCCESS)
        );
    }

    #[test]
    fn test_render_failure() {
        let mut log = RunLog::new("missing.xlsx", "PlcTags.xml");
        log.fail(ConvertError::SourceUnreadable {
            path: PathBuf::from("missing.xlsx"),
            message: "file not found".into(),
        });

        assert!(!log.succeeded());
        assert_eq!(
            format!("{:?}", log.exit_code()),
            format!("{:?}", ExitCode::FAILURE)
        );
        assert!(log
            .render()
            .contains("Status: SourceUnreadable: Cannot read spreadsheet missing.xlsx: file not found"));
    }

    #[test]
    fn test_append_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("run.log");

        let err = RunLog::new("a.xlsx", "a.xml").append_to(&path).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::LogWriteFailed);
        assert!(err.to_string().contains("run.log"));
    }

    #[test]
    fn test_append_keeps_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");

        RunLog::new("a.xlsx", "a.xml").append_to(&path).unwrap();
        RunLog::new("b.xlsx", "b.xml").append_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("==== ").count(), 2);
        assert!(content.find("a.xlsx").unwrap() < content.find("b.xlsx").unwrap());
    }
}
