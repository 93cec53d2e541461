use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::summarizer::matrix::FrequencyMatrix;

/// Number of sentences each term occurs in, over the whole document.
///
/// Built once from the frequency matrix before any IDF value is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFrequency {
    /// sentences counted, including ones without terms
    sentence_num: u64,
    #[serde(with = "indexmap::map::serde_seq")]
    term_counts: IndexMap<Box<str>, u64>,
}

impl DocumentFrequency {
    pub fn new() -> Self {
        Self {
            sentence_num: 0,
            term_counts: IndexMap::new(),
        }
    }

    /// Count one sentence's distinct terms
    pub fn add_set<'a, I>(&mut self, terms: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.sentence_num += 1;
        for term in terms {
            *self.term_counts.entry(Box::from(term)).or_insert(0) += 1;
        }
    }

    /// Sentences containing `term` at least once
    #[inline]
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Sentences seen, N in the IDF formula
    #[inline]
    pub fn get_sentence_num(&self) -> u64 {
        self.sentence_num
    }

    /// Number of distinct terms in the document
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }
}

/// Document-Frequency Counter
/// One increment per (sentence, term) pair of the frequency matrix.
pub fn document_frequency(freq_matrix: &FrequencyMatrix) -> DocumentFrequency {
    let mut doc_freq = DocumentFrequency::new();
    for table in freq_matrix.values() {
        doc_freq.add_set(table.term_set_iter());
    }
    log::debug!(
        "document frequency: {} sentences, {} distinct terms",
        doc_freq.get_sentence_num(),
        doc_freq.vocab_size()
    );
    doc_freq
}
