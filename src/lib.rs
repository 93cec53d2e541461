//! This crate is an extractive text summarizer built on TF-IDF sentence scoring.
pub mod analyzer;
pub mod config;
pub mod error;
pub mod summarizer;

/// TF-IDF Summarizer
/// The top-level struct of this crate.
/// It splits a document into sentences, weights every sentence's terms by
/// TF-IDF (each sentence plays the role of a document), and keeps the
/// sentences whose mean weight reaches `mean score * multiplier`.
///
/// Pipeline, each stage a public function under `summarizer`:
/// - Frequency matrix: raw term counts per sentence
/// - TF matrix: count / distinct terms in the sentence
/// - Document frequency: sentences containing each term
/// - IDF matrix: log(N / document frequency)
/// - TF-IDF matrix: TF * IDF, joined by term
/// - Sentence scores: mean TF-IDF weight per sentence
/// - Threshold: mean score * multiplier (1.3 by default)
/// - Summary: kept sentences in document order
///
/// `TfIdfSummarizer<N>` is generic over the float type `N` (`f64` by default).
///
/// # Examples
/// ```
/// use tfidf_summarizer::TfIdfSummarizer;
/// let summarizer = TfIdfSummarizer::<f64>::default();
/// let summary = summarizer.summarize("A lone sentence about volcanoes.");
/// assert_eq!(summary, "A lone sentence about volcanoes.");
/// ```
pub use summarizer::TfIdfSummarizer;

/// Summary with all intermediate matrices, scores and the threshold.
/// Call `text()` for the summary string or `report()` for a serializable view.
pub use summarizer::Summary;

/// Serializable summary report (JSON or CBOR)
pub use summarizer::report::{SentenceReport, SummaryReport};

/// Sentence and its positional identity key
pub use summarizer::sentence::{Sentence, SentenceKey};

/// Per-sentence term counts
pub use summarizer::term::FrequencyTable;

/// Sentences-per-term counts across one document
pub use summarizer::document_frequency::DocumentFrequency;

/// Lexical Normalizer
/// Case folding, stopword removal and stemming of one sentence's words.
pub use analyzer::LexicalNormalizer;

/// Supported document languages
pub use analyzer::language::Language;

/// Stopword set
pub use analyzer::stopwords::StopwordFilter;

/// Summarizer tunables
pub use config::SummarizerConfig;

pub use error::{Error, Result};

/// Summarize `text` with the default configuration
pub fn summarize(text: &str) -> String {
    TfIdfSummarizer::<f64>::default().summarize(text)
}
