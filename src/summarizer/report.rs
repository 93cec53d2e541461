use num::Float;
use serde::{Deserialize, Serialize};

use crate::{error::Result, summarizer::Summary};

/// Per-sentence line of a [`SummaryReport`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceReport {
    /// position in the document
    pub index: usize,
    pub text: String,
    /// distinct terms after normalization
    pub term_count: usize,
    /// `None` for sentences without countable terms
    pub score: Option<f64>,
    pub selected: bool,
}

/// Serializable snapshot of a [`Summary`].
/// Unlike `Summary` it holds no matrices, only what a consumer needs to
/// display or audit the selection. Exported as JSON or CBOR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub sentences: Vec<SentenceReport>,
    pub threshold: Option<f64>,
    pub threshold_multiplier: f64,
    pub summary: String,
}

impl SummaryReport {
    pub fn selected_count(&self) -> usize {
        self.sentences.iter().filter(|s| s.selected).count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_cbor(&self) -> Result<Vec<u8>> {
        Ok(serde_cbor::to_vec(self)?)
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self> {
        Ok(serde_cbor::from_slice(bytes)?)
    }
}

impl<N: Float> From<&Summary<N>> for SummaryReport {
    fn from(summary: &Summary<N>) -> Self {
        let sentences = summary
            .sentences
            .iter()
            .map(|sentence| SentenceReport {
                index: sentence.key.index(),
                text: sentence.text.clone(),
                term_count: summary
                    .frequency_matrix
                    .get(&sentence.key)
                    .map_or(0, |table| table.term_num()),
                score: summary.score(&sentence.key).and_then(|score| score.to_f64()),
                selected: summary.is_selected(&sentence.key),
            })
            .collect();
        Self {
            sentences,
            threshold: summary.threshold.and_then(|t| t.to_f64()),
            threshold_multiplier: summary.threshold_multiplier,
            summary: summary.text(),
        }
    }
}
