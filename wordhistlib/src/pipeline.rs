//! High-level histogram API.
//!
//! These functions run the whole pipeline in a single synchronous pass:
//! read, normalize, tokenize, count, rank, render, write. Either the report
//! is written in full or an error is returned.

use log::debug;

use crate::analyzer::{normalize, Tokenizer};
use crate::data::FrequencyTable;
use crate::options::HistogramOptions;
use crate::output::{render, write_report, Destination};
use crate::query::Histogram;
use crate::source::Source;
use crate::Result;

/// Normalize `text` and count its tokens.
pub fn count_words(text: &str, tokenizer: &impl Tokenizer) -> FrequencyTable {
    let normalized = normalize(text);
    let table = FrequencyTable::from_tokens(tokenizer.tokens(&normalized));
    debug!(
        "counted {} tokens, {} distinct words",
        table.total_tokens(),
        table.len()
    );
    table
}

/// Build the ranked histogram for `text`.
pub fn histogram_from_text(text: &str, options: &HistogramOptions) -> Histogram {
    let table = count_words(text, &options.tokenizer);
    let histogram = Histogram::from_table(&table, options.limit);
    debug!(
        "ranked {} entries with word width {}",
        histogram.entries.len(),
        histogram.width
    );
    histogram
}

/// Build and render the report for `text` without touching the filesystem.
///
/// # Example
///
/// ```rust
/// use wordhistlib::{render_report, HistogramOptions};
///
/// let report = render_report("Up, up, and away!", &HistogramOptions::new()).unwrap();
/// assert_eq!(report, "  up | == (2)\n and | = (1)\naway | = (1)\n");
/// ```
pub fn render_report(text: &str, options: &HistogramOptions) -> Result<String> {
    let histogram = histogram_from_text(text, options);
    render(&histogram, options.format, options.marker)
}

/// Read `source`, build its histogram, and write the report to `destination`.
///
/// Returns the histogram that was written.
///
/// # Example
///
/// ```rust,ignore
/// use wordhistlib::{generate, Destination, HistogramOptions, Source};
///
/// let histogram = generate(
///     &Source::file("input.txt"),
///     &Destination::file("output.txt"),
///     &HistogramOptions::new(),
/// )?;
/// println!("{} words", histogram.total_tokens);
/// ```
pub fn generate(
    source: &Source,
    destination: &Destination,
    options: &HistogramOptions,
) -> Result<Histogram> {
    let text = source.read()?;
    debug!("read {} bytes from {}", text.len(), source);

    let histogram = histogram_from_text(&text, options);
    let report = render(&histogram, options.format, options.marker)?;
    write_report(&report, destination)?;
    Ok(histogram)
}
