//! Text analysis: normalization and tokenization.
//!
//! This is the first half of the pipeline. Raw text is lowercased by the
//! [`normalizer`], then split into word tokens by one of the [`tokenizer`]
//! implementations.
//!
//! ## Example
//!
//! ```rust
//! use wordhistlib::analyzer::{normalize, StripTokenizer, Tokenizer};
//!
//! let text = normalize("The mouse ran up the clock.");
//! let tokens: Vec<&str> = StripTokenizer.tokens(&text).collect();
//! assert_eq!(tokens, ["the", "mouse", "ran", "up", "the", "clock"]);
//! ```

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::normalize;
pub use tokenizer::{
    is_letter, strip_fragment, StripTokenizer, Tokenizer, TokenizerKind, WordTokenizer,
};
