pub mod assemble;
pub mod document_frequency;
pub mod matrix;
pub mod report;
pub mod scoring;
pub mod sentence;
pub mod term;

use std::marker::PhantomData;

use num::Float;
use rayon::prelude::*;

use crate::{
    analyzer::LexicalNormalizer,
    config::SummarizerConfig,
    error::{Error, Result},
    summarizer::{
        assemble::{generate_summary, is_selected, select_sentences},
        document_frequency::{document_frequency, DocumentFrequency},
        matrix::{frequency_matrix, idf_matrix, tf_idf_matrix, tf_matrix, to_float, FrequencyMatrix, TermMatrix},
        report::SummaryReport,
        scoring::{find_threshold, score_sentences, Ranking, SentenceScores},
        sentence::{segment, Sentence, SentenceKey},
    },
};

/// Extractive summarizer driven by TF-IDF sentence scores.
///
/// `TfIdfSummarizer<N>` is generic over the float type `N` used by the
/// matrices and scores (`f64` by default, `f32` also works).
///
/// Each call builds its own matrices from scratch, so one summarizer can
/// be shared across threads; [`summarize_batch`](Self::summarize_batch)
/// does exactly that for independent documents.
#[derive(Debug, Clone)]
pub struct TfIdfSummarizer<N = f64> {
    config: SummarizerConfig,
    normalizer: LexicalNormalizer,
    _marker: PhantomData<N>,
}

impl Default for TfIdfSummarizer<f64> {
    fn default() -> Self {
        let config = SummarizerConfig::default();
        Self {
            normalizer: LexicalNormalizer::from_config(&config),
            config,
            _marker: PhantomData,
        }
    }
}

impl<N: Float> TfIdfSummarizer<N> {
    /// Validate `config` and build the normalizer it describes
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        let normalizer = LexicalNormalizer::from_config(&config);
        Self::with_normalizer(config, normalizer)
    }

    /// Use a caller-built normalizer; `config.language`, `stem` and
    /// `extra_stopwords` are then ignored
    pub fn with_normalizer(config: SummarizerConfig, normalizer: LexicalNormalizer) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            normalizer,
            _marker: PhantomData,
        })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn normalizer(&self) -> &LexicalNormalizer {
        &self.normalizer
    }

    /// Run the whole pipeline and keep every intermediate result
    pub fn analyze(&self, text: &str) -> Summary<N> {
        let sentences = segment(text);
        let freq_matrix = frequency_matrix(&sentences, &self.normalizer);
        let tf = tf_matrix::<N>(&freq_matrix);
        let doc_freq = document_frequency(&freq_matrix);
        let idf = idf_matrix(&freq_matrix, &doc_freq, to_float(self.config.log_base));
        let tf_idf = tf_idf_matrix(&tf, &idf);
        let scores = score_sentences(&tf_idf);
        let threshold = find_threshold(&scores, to_float(self.config.threshold_multiplier));
        let selected = select_sentences(&sentences, &scores, threshold);

        Summary {
            sentences,
            frequency_matrix: freq_matrix,
            tf_matrix: tf,
            document_frequency: doc_freq,
            idf_matrix: idf,
            tf_idf_matrix: tf_idf,
            scores,
            threshold,
            threshold_multiplier: self.config.threshold_multiplier,
            selected,
        }
    }

    /// Summary text: kept sentences in document order, space separated
    pub fn summarize(&self, text: &str) -> String {
        self.analyze(text).text()
    }

    /// Like [`summarize`](Self::summarize) for raw bytes, which must be UTF-8
    pub fn summarize_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("input is not UTF-8 text: {e}")))?;
        Ok(self.summarize(text))
    }
}

impl<N> TfIdfSummarizer<N>
where
    N: Float + Send + Sync,
{
    /// Summarize independent documents in parallel, results in input order
    pub fn summarize_batch<S>(&self, texts: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.summarize(text.as_ref()))
            .collect()
    }
}

/// Result of one summarization with all intermediate artifacts
#[derive(Debug, Clone)]
pub struct Summary<N = f64> {
    /// every sentence of the document, in order
    pub sentences: Vec<Sentence>,
    pub frequency_matrix: FrequencyMatrix,
    pub tf_matrix: TermMatrix<N>,
    pub document_frequency: DocumentFrequency,
    pub idf_matrix: TermMatrix<N>,
    pub tf_idf_matrix: TermMatrix<N>,
    pub scores: SentenceScores<N>,
    /// `None` when no sentence had a countable term
    pub threshold: Option<N>,
    pub threshold_multiplier: f64,
    /// kept sentences, in document order
    pub selected: Vec<SentenceKey>,
}

impl<N: Float> Summary<N> {
    /// Summary text; empty when nothing was kept
    pub fn text(&self) -> String {
        self.threshold
            .map(|threshold| generate_summary(&self.sentences, &self.scores, threshold))
            .unwrap_or_default()
    }

    pub fn sentence(&self, key: &SentenceKey) -> Option<&Sentence> {
        self.sentences.get(key.index())
    }

    pub fn score(&self, key: &SentenceKey) -> Option<N> {
        self.scores.get(key).copied()
    }

    pub fn is_selected(&self, key: &SentenceKey) -> bool {
        self.threshold
            .is_some_and(|threshold| is_selected(key, &self.scores, threshold))
    }

    pub fn selected_sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.selected.iter().filter_map(|key| self.sentence(key))
    }

    /// Scored sentences, best first
    pub fn ranking(&self) -> Ranking<N> {
        let mut ranking = Ranking::new(&self.scores);
        ranking.sort_by_score();
        ranking
    }

    /// The `n` best-scoring sentences with their scores
    pub fn top_sentences(&self, n: usize) -> Vec<(&Sentence, N)> {
        self.ranking()
            .top(n)
            .iter()
            .filter_map(|(key, score)| self.sentence(key).map(|sentence| (sentence, *score)))
            .collect()
    }

    pub fn report(&self) -> SummaryReport {
        SummaryReport::from(self)
    }
}
