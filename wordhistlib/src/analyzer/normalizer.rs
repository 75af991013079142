//! Case folding of raw text before tokenization.

/// Lowercase every character of `text`.
///
/// Uses Unicode simple lowercase mapping. Punctuation and whitespace are left
/// untouched so the tokenizer still sees fragment boundaries.
pub fn normalize(text: &str) -> String {
    if text.is_ascii() {
        return text.to_ascii_lowercase();
    }
    text.to_lowercase()
}
