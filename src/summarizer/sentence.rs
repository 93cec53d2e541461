use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analyzer::segmenter::split_sentences;

/// Identity of a sentence: its zero-based position in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceKey(pub usize);

impl SentenceKey {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SentenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A sentence of the input document, verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub key: SentenceKey,
    pub text: String,
}

/// Segment a document into keyed sentences, in document order
pub fn segment(text: &str) -> Vec<Sentence> {
    split_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(idx, text)| Sentence {
            key: SentenceKey(idx),
            text: text.to_string(),
        })
        .collect()
}
