use std::{borrow::Cow, fmt};

use rust_stemmers::Stemmer;

use crate::analyzer::language::Language;

/// Snowball stemmer bound to a language
pub struct TermStemmer {
    language: Language,
    inner: Stemmer,
}

impl TermStemmer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            inner: Stemmer::create(language.stemmer_algorithm()),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Reduce a lower-cased word to its root form
    #[inline]
    pub fn stem<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.inner.stem(word)
    }
}

// `Stemmer` is neither Clone nor Debug
impl Clone for TermStemmer {
    fn clone(&self) -> Self {
        Self::new(self.language)
    }
}

impl fmt::Debug for TermStemmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TermStemmer")
            .field("language", &self.language)
            .finish()
    }
}
