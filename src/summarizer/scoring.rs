use indexmap::IndexMap;
use num::Float;

use crate::summarizer::{
    matrix::{to_float, TermMatrix},
    sentence::SentenceKey,
};

/// Sentence -> mean TF-IDF weight of its terms
pub type SentenceScores<N> = IndexMap<SentenceKey, N>;

/// Sentence Scorer
/// Sum of a sentence's TF-IDF values over its distinct-term count.
/// Rows without terms get no score.
pub fn score_sentences<N: Float>(tf_idf: &TermMatrix<N>) -> SentenceScores<N> {
    let mut scores = SentenceScores::with_capacity(tf_idf.len());
    for (key, row) in tf_idf {
        if row.is_empty() {
            continue;
        }
        let total = row.values().fold(N::zero(), |acc, &value| acc + value);
        let score = total / to_float(row.len());
        log::trace!("sentence {key}: score {:?}", score.to_f64());
        scores.insert(*key, score);
    }
    scores
}

/// Arithmetic mean of all scores, `None` when there are none
pub fn average_score<N: Float>(scores: &SentenceScores<N>) -> Option<N> {
    if scores.is_empty() {
        return None;
    }
    let total = scores.values().fold(N::zero(), |acc, &score| acc + score);
    Some(total / to_float(scores.len()))
}

/// Threshold Selector
/// mean score * multiplier, `None` when no sentence was scored.
pub fn find_threshold<N: Float>(scores: &SentenceScores<N>, multiplier: N) -> Option<N> {
    let threshold = average_score(scores).map(|average| average * multiplier);
    log::debug!(
        "threshold {:?} over {} scored sentences",
        threshold.and_then(|t| t.to_f64()),
        scores.len()
    );
    threshold
}

#[inline]
fn sort_key<N: Float>(score: N) -> f64 {
    score.to_f64().unwrap_or(f64::NAN)
}

/// Scored sentences ranked by score
#[derive(Debug, Clone)]
pub struct Ranking<N> {
    /// (sentence, score)
    pub list: Vec<(SentenceKey, N)>,
}

impl<N: Float> Ranking<N> {
    pub fn new(scores: &SentenceScores<N>) -> Self {
        Self {
            list: scores.iter().map(|(&key, &score)| (key, score)).collect(),
        }
    }

    /// Sort by descending score; ties keep document order
    pub fn sort_by_score(&mut self) -> &mut Self {
        self.list.retain(|(_, score)| !score.is_nan());
        self.list
            .sort_by(|a, b| sort_key(b.1).total_cmp(&sort_key(a.1)));
        self
    }

    pub fn top(&self, n: usize) -> &[(SentenceKey, N)] {
        &self.list[..n.min(self.list.len())]
    }
}
