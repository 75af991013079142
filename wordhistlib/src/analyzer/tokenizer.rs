//! Splitting normalized text into word tokens.
//!
//! Two strategies are available behind the [`Tokenizer`] trait:
//!
//! - [`StripTokenizer`] splits on whitespace and trims non-letter
//!   characters off both ends of each fragment. A letter is any character
//!   in a Unicode letter category (Lu, Ll, Lt, Lm, Lo); combining marks and
//!   letter-numbers such as `ⅻ` are not letters. Interior characters such as
//!   apostrophes and hyphens survive, so `don't` and `well-known` stay whole.
//! - [`WordTokenizer`] emits every maximal run of word characters
//!   (letters, numbers and `_`), so `don't` becomes `don` and `t`.
//!   Combining marks end a run.
//!
//! [`TokenizerKind`] names the strategy so it can be picked from
//! configuration instead of code.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::HistogramError;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").expect("valid word regex"));

/// Turns normalized text into a lazy sequence of tokens.
///
/// Tokens borrow from the input; calling `tokens` again on the same text
/// yields the same sequence.
pub trait Tokenizer {
    /// Iterate the tokens of `text`.
    fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;
}

/// Whitespace split followed by stripping of non-letter boundary characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripTokenizer;

impl Tokenizer for StripTokenizer {
    fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(text.split_whitespace().filter_map(strip_fragment))
    }
}

/// Maximal runs of letters, numbers and `_`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(WORD_RE.find_iter(text).map(|m| m.as_str()))
    }
}

/// Whether `c` belongs to one of the Unicode letter categories.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Trim non-letter characters from both ends of a fragment.
///
/// Returns `None` when no letter is left.
pub fn strip_fragment(fragment: &str) -> Option<&str> {
    let word = fragment.trim_matches(|c: char| !is_letter(c));
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}

/// Which tokenizer the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    /// [`StripTokenizer`]
    #[default]
    Strip,
    /// [`WordTokenizer`]
    Word,
}

impl TokenizerKind {
    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            TokenizerKind::Strip => "strip",
            TokenizerKind::Word => "word",
        }
    }
}

impl Tokenizer for TokenizerKind {
    fn tokens<'a>(&self, text: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        match self {
            TokenizerKind::Strip => StripTokenizer.tokens(text),
            TokenizerKind::Word => WordTokenizer.tokens(text),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenizerKind {
    type Err = HistogramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strip" | "split" => Ok(TokenizerKind::Strip),
            "word" | "regex" => Ok(TokenizerKind::Word),
            _ => Err(HistogramError::InvalidOption(format!(
                "unknown tokenizer: {}",
                s
            ))),
        }
    }
}
