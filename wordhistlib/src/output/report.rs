//! Rendering and writing the histogram report.
//!
//! Text lines have the shape
//!
//! ```text
//!     the | ==== (4)
//! dickory | == (2)
//! ```
//!
//! with the word right-aligned in a field as wide as the longest word in the
//! vocabulary.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::info;

use crate::error::HistogramError;
use crate::options::ReportFormat;
use crate::query::{Histogram, RankedEntry};
use crate::Result;

/// Label used in errors and logs for the standard output stream.
pub const STDOUT_LABEL: &str = "<stdout>";

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A file, created or truncated
    File(PathBuf),
    /// The process's standard output
    Stdout,
}

impl Destination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        Destination::File(path.as_ref().to_path_buf())
    }

    fn label(&self) -> PathBuf {
        match self {
            Destination::File(path) => path.clone(),
            Destination::Stdout => PathBuf::from(STDOUT_LABEL),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().display())
    }
}

/// Render one bar-chart line, including the trailing newline.
pub fn render_line(entry: &RankedEntry, width: usize, marker: char) -> String {
    let bar = marker.to_string().repeat(entry.count as usize);
    format!(
        "{:>width$} | {} ({})\n",
        entry.word,
        bar,
        entry.count,
        width = width
    )
}

/// Render the whole histogram as a bar chart. An empty histogram renders
/// as an empty string.
pub fn render_text(histogram: &Histogram, marker: char) -> String {
    histogram
        .entries
        .iter()
        .map(|entry| render_line(entry, histogram.width, marker))
        .collect()
}

/// Render the histogram in the requested format.
pub fn render(histogram: &Histogram, format: ReportFormat, marker: char) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(histogram, marker)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(histogram)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write an already rendered report to `destination`.
pub fn write_report(report: &str, destination: &Destination) -> Result<()> {
    let written = match destination {
        Destination::File(path) => fs::write(path, report),
        Destination::Stdout => write_to(io::stdout().lock(), report),
    };
    written.map_err(|source| HistogramError::DestinationUnwritable {
        path: destination.label(),
        source,
    })?;
    info!("wrote {} bytes to {}", report.len(), destination);
    Ok(())
}

fn write_to(mut writer: impl Write, report: &str) -> io::Result<()> {
    writer.write_all(report.as_bytes())?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn histogram(entries: &[(&str, u64)]) -> Histogram {
        Histogram {
            width: entries
                .iter()
                .map(|(w, _)| w.chars().count())
                .max()
                .unwrap_or(0),
            total_tokens: entries.iter().map(|(_, c)| c).sum(),
            distinct_words: entries.len(),
            entries: entries
                .iter()
                .map(|(w, c)| RankedEntry::new(*w, *c))
                .collect(),
        }
    }

    #[test]
    fn test_render_line_right_aligns_word() {
        let line = render_line(&RankedEntry::new("the", 4), 7, '=');
        assert_eq!(line, "    the | ==== (4)\n");
    }

    #[test]
    fn test_render_line_full_width_word() {
        let line = render_line(&RankedEntry::new("dickory", 2), 7, '=');
        assert_eq!(line, "dickory | == (2)\n");
    }

    #[test]
    fn test_render_line_custom_marker() {
        let line = render_line(&RankedEntry::new("up", 3), 2, '#');
        assert_eq!(line, "up | ### (3)\n");
    }

    #[test]
    fn test_render_line_pads_by_chars() {
        let line = render_line(&RankedEntry::new("été", 1), 5, '=');
        assert_eq!(line, "  été | = (1)\n");
    }

    #[test]
    fn test_render_text_every_field_same_width() {
        let h = histogram(&[("the", 4), ("hickory", 2), ("up", 1)]);
        let text = render_text(&h, '=');
        for line in text.lines() {
            let field = line.split(" | ").next().unwrap();
            assert_eq!(field.chars().count(), 7);
        }
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&Histogram::default(), '='), "");
    }

    #[test]
    fn test_render_json() {
        let h = histogram(&[("the", 2), ("up", 1)]);
        let json = render(&h, ReportFormat::Json, '=').unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["width"], 3);
        assert_eq!(value["total_tokens"], 3);
        assert_eq!(value["entries"][0]["word"], "the");
        assert_eq!(value["entries"][1]["count"], 1);
    }

    #[test]
    fn test_write_report_to_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("output.txt");

        write_report("up | = (1)\n", &Destination::file(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "up | = (1)\n");
    }

    #[test]
    fn test_write_report_unwritable_destination() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing-dir").join("output.txt");

        let err = write_report("x", &Destination::file(&path)).unwrap_err();
        match err {
            HistogramError::DestinationUnwritable { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_write_to_buffer() {
        let mut buf = Vec::new();
        write_to(&mut buf, "abc").unwrap();
        assert_eq!(buf, b"abc");
    }
}
