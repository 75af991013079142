//! Data collection: accumulate token counts.
//!
//! The [`FrequencyTable`] is built once per run from the tokenizer's output
//! and is not modified after the counting pass.

pub mod frequency;

pub use frequency::FrequencyTable;
