//! Reading the input text.
//!
//! The whole source is loaded into memory in one go; there is no partial or
//! chunked reading.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::HistogramError;
use crate::Result;

/// Label used in errors and logs for the standard input stream.
pub const STDIN_LABEL: &str = "<stdin>";

/// Where the text to analyze comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// A file on disk
    File(PathBuf),
    /// The process's standard input
    Stdin,
    /// Text already in memory
    Text(String),
}

impl Source {
    /// Source reading from a file path.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Source::File(path.as_ref().to_path_buf())
    }

    /// Source wrapping an in-memory string.
    pub fn text(text: impl Into<String>) -> Self {
        Source::Text(text.into())
    }

    /// Load the full content of this source.
    pub fn read(&self) -> Result<String> {
        match self {
            Source::File(path) => read_source(path),
            Source::Stdin => read_to_string(io::stdin().lock(), STDIN_LABEL),
            Source::Text(text) => Ok(text.clone()),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str(STDIN_LABEL),
            Source::Text(_) => f.write_str("<text>"),
        }
    }
}

/// Read an entire file into a string.
///
/// Fails with [`HistogramError::SourceUnavailable`] if the file is missing,
/// unreadable, or not valid UTF-8.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| HistogramError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Drain a reader into a string. `label` names the reader in errors.
pub fn read_to_string(mut reader: impl Read, label: &str) -> Result<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| HistogramError::SourceUnavailable {
            path: PathBuf::from(label),
            source,
        })?;
    Ok(text)
}
