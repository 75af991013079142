//! Output: turn a ranked histogram into a report and write it out.

pub mod report;

pub use report::{render, render_line, render_text, write_report, Destination};
