//! Input options for building and rendering a histogram.
//!
//! This module contains the configuration types that control how text is
//! tokenized and how the report is laid out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::analyzer::TokenizerKind;
use crate::error::HistogramError;

/// Character repeated to draw each bar.
pub const DEFAULT_MARKER: char = '=';

/// Output format of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned bar chart, one line per word
    #[default]
    Text,
    /// The ranked histogram as pretty-printed JSON
    Json,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Text => f.write_str("text"),
            ReportFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = HistogramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "chart" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(HistogramError::InvalidOption(format!(
                "unknown report format: {}",
                s
            ))),
        }
    }
}

/// Options for a histogram run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramOptions {
    /// Tokenization strategy
    pub tokenizer: TokenizerKind,
    /// Bar character
    pub marker: char,
    /// Keep only the first N ranked entries (None = all)
    pub limit: Option<usize>,
    /// Report format
    pub format: ReportFormat,
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::default(),
            marker: DEFAULT_MARKER,
            limit: None,
            format: ReportFormat::default(),
        }
    }
}

impl HistogramOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the tokenizer
    pub fn tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Builder: set the bar character
    pub fn marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Builder: keep only the top `limit` words
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Builder: set the report format
    pub fn format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default() {
        let options = HistogramOptions::default();
        assert_eq!(options.tokenizer, TokenizerKind::Strip);
        assert_eq!(options.marker, '=');
        assert_eq!(options.limit, None);
        assert_eq!(options.format, ReportFormat::Text);
    }

    #[test]
    fn test_options_builder() {
        let options = HistogramOptions::new()
            .tokenizer(TokenizerKind::Word)
            .marker('#')
            .limit(5)
            .format(ReportFormat::Json);
        assert_eq!(options.tokenizer, TokenizerKind::Word);
        assert_eq!(options.marker, '#');
        assert_eq!(options.limit, Some(5));
        assert_eq!(options.format, ReportFormat::Json);
    }

    #[test]
    fn test_report_format_from_str() {
        assert_eq!(ReportFormat::from_str("text").unwrap(), ReportFormat::Text);
        assert_eq!(ReportFormat::from_str("JSON").unwrap(), ReportFormat::Json);
        assert!(ReportFormat::from_str("csv").is_err());
    }
}
