//! # wordhistlib
//!
//! A word-frequency histogram library: read text, count its words, and render
//! the counts as an aligned bar chart.
//!
//! ## Overview
//!
//! The pipeline is a single straight pass:
//!
//! 1. **Source**: load the whole text (file, stdin, or a string)
//! 2. **Analyzer**: lowercase it and split it into word tokens
//! 3. **Data**: count occurrences into a [`FrequencyTable`]
//! 4. **Query**: rank words by count, ties broken alphabetically
//! 5. **Output**: render each word as `word | ==== (4)` and write the report
//!
//! ## Tokenization
//!
//! The default [`StripTokenizer`] splits on whitespace and trims
//! non-alphabetic characters from each end of a fragment, keeping interior
//! apostrophes and hyphens. [`WordTokenizer`] instead takes every run of word
//! characters. Pick one with [`TokenizerKind`] in [`HistogramOptions`].
//!
//! ## Example
//!
//! ```rust
//! use wordhistlib::{render_report, HistogramOptions};
//!
//! let text = "Hickory, dickory, dock.\nThe mouse ran up the clock.\n";
//! let report = render_report(text, &HistogramOptions::new()).unwrap();
//!
//! assert_eq!(report.lines().next(), Some("    the | == (2)"));
//! assert_eq!(report.lines().count(), 8);
//! ```

pub mod analyzer;
pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod source;

pub use analyzer::{normalize, StripTokenizer, Tokenizer, TokenizerKind, WordTokenizer};
pub use data::FrequencyTable;
pub use error::HistogramError;
pub use options::{HistogramOptions, ReportFormat, DEFAULT_MARKER};
pub use output::{render, render_line, render_text, write_report, Destination};
pub use pipeline::{count_words, generate, histogram_from_text, render_report};
pub use query::{rank, Histogram, RankedEntry};
pub use source::{read_source, Source};

/// Result type for wordhistlib operations
pub type Result<T> = std::result::Result<T, HistogramError>;
