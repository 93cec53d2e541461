//! Sentence segmentation.
//!
//! Boundaries follow the Unicode sentence rules (UAX #29), which break after
//! `.`, `!` and `?` followed by whitespace and an upper-case start. Each
//! sentence is returned as a trimmed slice of the input, so its text is
//! always a verbatim substring of the document.
//!
//! The rules know nothing about abbreviations or casing mistakes:
//! - `"Dr. Smith arrived."` splits into `"Dr."` and `"Smith arrived."`
//! - a period followed by a lower-case word does not end the sentence, so
//!   `"Hello there. the cat sat."` stays whole
//! - a line break ends a sentence even without punctuation

use unicode_segmentation::UnicodeSegmentation;

/// Split a document into sentences, in document order
///
/// Whitespace-only fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split_sentence_bounds()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}
