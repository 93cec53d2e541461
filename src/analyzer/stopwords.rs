//! Stopword set for one document language.
//!
//! Lists are the NLTK lists shipped by the `stop-words` crate (`nltk`
//! feature): short function-word lists that leave content words such as
//! "great" or "need" countable. They can be extended or trimmed per
//! summarizer. Lookups are exact matches against lower-cased words.

use std::collections::HashSet;

use stop_words::get;

use crate::analyzer::language::Language;

/// Set of words excluded from scoring
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// lower-cased stopwords
    stopwords: HashSet<String>,
}

impl StopwordFilter {
    /// Stopword list shipped for `language`
    pub fn new(language: Language) -> Self {
        let stopwords = get(language.stopword_list())
            .iter()
            .map(|word| word.to_lowercase())
            .collect();
        Self { stopwords }
    }

    /// Filter that keeps every word
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Filter from a custom word list
    pub fn from_list<T>(words: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    pub fn add_stopwords<T>(&mut self, words: &[T])
    where
        T: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn remove_stopwords<T>(&mut self, words: &[T])
    where
        T: AsRef<str>,
    {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Exact match; callers pass already lower-cased words
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
