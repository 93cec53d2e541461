//! Lexical preprocessing: sentence segmentation and term normalization.

pub mod language;
pub mod segmenter;
pub mod stemmer;
pub mod stopwords;

use unicode_segmentation::UnicodeSegmentation;

use crate::{
    analyzer::{language::Language, stemmer::TermStemmer, stopwords::StopwordFilter},
    config::SummarizerConfig,
    summarizer::term::FrequencyTable,
};

/// Lexical Normalizer
/// Turns one sentence into the bag of terms that gets counted.
///
/// Steps per word token:
/// - split on Unicode word boundaries (punctuation never becomes a term)
/// - lower-case
/// - drop if the word is a stopword
/// - stem
/// - drop if the stem is a stopword
///
/// Built once per summarizer and passed down explicitly; it holds no
/// mutable state, so one instance can serve many documents at once.
///
/// # Examples
/// ```
/// use tfidf_summarizer::{LexicalNormalizer, Language};
/// let normalizer = LexicalNormalizer::new(Language::English);
/// assert_eq!(normalizer.terms("The cats are sleeping."), vec!["cat", "sleep"]);
/// ```
#[derive(Debug, Clone)]
pub struct LexicalNormalizer {
    stopwords: StopwordFilter,
    stemmer: Option<TermStemmer>,
}

impl LexicalNormalizer {
    /// Stopwords and stemmer for `language`
    pub fn new(language: Language) -> Self {
        Self {
            stopwords: StopwordFilter::new(language),
            stemmer: Some(TermStemmer::new(language)),
        }
    }

    /// Normalizer with an explicit stopword set and optional stemmer
    pub fn with_parts(stopwords: StopwordFilter, stemmer: Option<TermStemmer>) -> Self {
        Self { stopwords, stemmer }
    }

    pub fn from_config(config: &SummarizerConfig) -> Self {
        let mut stopwords = StopwordFilter::new(config.language);
        stopwords.add_stopwords(&config.extra_stopwords);
        let stemmer = config.stem.then(|| TermStemmer::new(config.language));
        Self::with_parts(stopwords, stemmer)
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Normalize one word token, `None` when it must not be counted
    pub fn normalize_word(&self, word: &str) -> Option<String> {
        let lowered = word.to_lowercase();
        if lowered.is_empty() || self.stopwords.is_stopword(&lowered) {
            return None;
        }
        let term = match &self.stemmer {
            Some(stemmer) => stemmer.stem(&lowered).into_owned(),
            None => lowered,
        };
        if term.is_empty() || self.stopwords.is_stopword(&term) {
            return None;
        }
        Some(term)
    }

    /// Normalized terms of a sentence, in token order
    pub fn terms(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .filter_map(|word| self.normalize_word(word))
            .collect()
    }

    /// Tally a sentence's terms into a frequency table
    pub fn frequency_table(&self, sentence: &str) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for word in sentence.unicode_words() {
            if let Some(term) = self.normalize_word(word) {
                table.add_term(&term);
            }
        }
        table
    }
}

impl Default for LexicalNormalizer {
    fn default() -> Self {
        Self::new(Language::English)
    }
}
