//! Error types for wordhistlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or writing a histogram
#[derive(Error, Debug)]
pub enum HistogramError {
    /// The input source could not be opened or read
    #[error("failed to read source '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The report destination could not be opened or written
    #[error("failed to write report to '{path}': {source}")]
    DestinationUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON rendering of the histogram failed
    #[error("failed to serialize histogram: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A tokenizer or format name that does not parse
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_source_error_message_names_path() {
        let err = HistogramError::SourceUnavailable {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_destination_error_message() {
        let err = HistogramError::DestinationUnwritable {
            path: PathBuf::from("/readonly/out.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("failed to write report"));
    }
}
