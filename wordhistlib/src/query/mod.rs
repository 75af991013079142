//! Query processing: order the frequency table for presentation.
//!
//! - **RankedEntry**: one `(word, count)` pair
//! - **Histogram**: ranked entries plus the layout facts the formatter needs
//!
//! ## Example
//!
//! ```rust
//! use wordhistlib::data::FrequencyTable;
//! use wordhistlib::query::Histogram;
//!
//! let table = FrequencyTable::from_tokens(["b", "a", "b"]);
//! let histogram = Histogram::from_table(&table, None);
//! assert_eq!(histogram.entries[0].word, "b");
//! ```

pub mod ranking;

pub use ranking::{rank, Histogram, RankedEntry};
