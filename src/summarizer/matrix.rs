//! Frequency, TF, IDF and TF-IDF matrices.
//!
//! Every matrix maps a [`SentenceKey`] to a per-term row. Rows keep the
//! first-seen term order of the sentence's [`FrequencyTable`]. Sentences
//! whose table is empty stay in the frequency matrix (they still count
//! towards N) but get no TF, IDF or TF-IDF row, so nothing divides by a
//! zero distinct-term count.

use indexmap::IndexMap;
use num::{Float, NumCast};

use crate::{
    analyzer::LexicalNormalizer,
    summarizer::{
        document_frequency::DocumentFrequency,
        sentence::{Sentence, SentenceKey},
        term::FrequencyTable,
    },
};

/// Sentence -> raw term counts
pub type FrequencyMatrix = IndexMap<SentenceKey, FrequencyTable>;
/// Term -> value, for one sentence
pub type TermRow<N> = IndexMap<Box<str>, N>;
/// Sentence -> term row, shared shape of the TF, IDF and TF-IDF matrices
pub type TermMatrix<N> = IndexMap<SentenceKey, TermRow<N>>;

/// Numeric conversion that cannot fail for the counts used here
#[inline]
pub(crate) fn to_float<N, T>(value: T) -> N
where
    N: Float,
    T: NumCast,
{
    num::cast(value).unwrap_or_else(N::nan)
}

/// TF of one term
///
/// # Arguments
/// * `count` - occurrences of the term in the sentence
/// * `distinct_terms` - distinct terms in the sentence, never 0
#[inline]
pub fn tf_calc<N: Float>(count: u64, distinct_terms: usize) -> N {
    to_float::<N, _>(count) / to_float::<N, _>(distinct_terms)
}

/// IDF of one term
///
/// # Arguments
/// * `sentence_num` - N, sentences in the document
/// * `doc_freq` - sentences containing the term, never 0 for counted terms
/// * `log_base` - logarithm base
#[inline]
pub fn idf_calc<N: Float>(sentence_num: u64, doc_freq: u64, log_base: N) -> N {
    if doc_freq == 0 {
        return N::zero();
    }
    let ratio = to_float::<N, _>(sentence_num) / to_float::<N, _>(doc_freq);
    if log_base == to_float::<N, _>(10u8) {
        ratio.log10()
    } else {
        ratio.log(log_base)
    }
}

/// Frequency Matrix Builder
/// One frequency table per sentence, keyed by sentence position.
pub fn frequency_matrix(sentences: &[Sentence], normalizer: &LexicalNormalizer) -> FrequencyMatrix {
    let matrix: FrequencyMatrix = sentences
        .iter()
        .map(|sentence| (sentence.key, normalizer.frequency_table(&sentence.text)))
        .collect();
    log::debug!("frequency matrix: {} sentences", matrix.len());
    matrix
}

/// TF Matrix Builder
/// count / distinct terms of the sentence.
pub fn tf_matrix<N: Float>(freq_matrix: &FrequencyMatrix) -> TermMatrix<N> {
    let mut tf = TermMatrix::with_capacity(freq_matrix.len());
    for (key, table) in freq_matrix {
        if table.is_empty() {
            log::trace!("sentence {key} has no countable terms, no TF row");
            continue;
        }
        let distinct_terms = table.term_num();
        let row: TermRow<N> = table
            .iter()
            .map(|(term, count)| (Box::<str>::from(term), tf_calc(count, distinct_terms)))
            .collect();
        tf.insert(*key, row);
    }
    log::debug!("tf matrix: {} rows", tf.len());
    tf
}

/// IDF Matrix Builder
/// log(N / document frequency) per (sentence, term).
pub fn idf_matrix<N: Float>(
    freq_matrix: &FrequencyMatrix,
    doc_freq: &DocumentFrequency,
    log_base: N,
) -> TermMatrix<N> {
    let sentence_num = doc_freq.get_sentence_num();
    let mut idf = TermMatrix::with_capacity(freq_matrix.len());
    for (key, table) in freq_matrix {
        if table.is_empty() {
            continue;
        }
        let row: TermRow<N> = table
            .term_set_iter()
            .map(|term| {
                let value = idf_calc(sentence_num, doc_freq.get_term_count(term), log_base);
                (Box::<str>::from(term), value)
            })
            .collect();
        idf.insert(*key, row);
    }
    log::debug!("idf matrix: {} rows over N = {}", idf.len(), sentence_num);
    idf
}

/// TF-IDF Combiner
/// Pairs TF and IDF values by term key, never by position.
pub fn tf_idf_matrix<N: Float>(tf: &TermMatrix<N>, idf: &TermMatrix<N>) -> TermMatrix<N> {
    let mut tf_idf = TermMatrix::with_capacity(tf.len());
    for (key, tf_row) in tf {
        let Some(idf_row) = idf.get(key) else {
            log::trace!("sentence {key} has no IDF row");
            continue;
        };
        let row: TermRow<N> = tf_row
            .iter()
            .filter_map(|(term, &tf_value)| {
                idf_row
                    .get(term)
                    .map(|&idf_value| (term.clone(), tf_value * idf_value))
            })
            .collect();
        tf_idf.insert(*key, row);
    }
    log::debug!("tf-idf matrix: {} rows", tf_idf.len());
    tf_idf
}
