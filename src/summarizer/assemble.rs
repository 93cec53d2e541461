use num::Float;

use crate::summarizer::{
    scoring::SentenceScores,
    sentence::{Sentence, SentenceKey},
};

/// A sentence is kept when it has a score and that score is at least the threshold
#[inline]
pub fn is_selected<N: Float>(key: &SentenceKey, scores: &SentenceScores<N>, threshold: N) -> bool {
    scores.get(key).is_some_and(|&score| score >= threshold)
}

/// Keys of the kept sentences, in document order
pub fn select_sentences<N: Float>(
    sentences: &[Sentence],
    scores: &SentenceScores<N>,
    threshold: Option<N>,
) -> Vec<SentenceKey> {
    let Some(threshold) = threshold else {
        return Vec::new();
    };
    sentences
        .iter()
        .filter(|sentence| is_selected(&sentence.key, scores, threshold))
        .map(|sentence| sentence.key)
        .collect()
}

/// Summary Assembler
/// Kept sentences in document order, verbatim, joined by one space.
/// Empty when nothing reaches the threshold.
pub fn generate_summary<N: Float>(
    sentences: &[Sentence],
    scores: &SentenceScores<N>,
    threshold: N,
) -> String {
    let kept: Vec<&str> = sentences
        .iter()
        .filter(|sentence| is_selected(&sentence.key, scores, threshold))
        .map(|sentence| sentence.text.as_str())
        .collect();
    log::debug!("summary keeps {} of {} sentences", kept.len(), sentences.len());
    kept.join(" ")
}
