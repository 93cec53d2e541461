//! Summarizer configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    analyzer::language::Language,
    error::{Error, Result},
};

/// Default factor applied to the mean sentence score
pub const DEFAULT_THRESHOLD_MULTIPLIER: f64 = 1.3;
/// Default logarithm base for IDF
pub const DEFAULT_LOG_BASE: f64 = 10.0;

/// Tunables of the TF-IDF summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// A sentence is kept when its score is at least
    /// `mean score * threshold_multiplier`.
    pub threshold_multiplier: f64,

    /// Base of the IDF logarithm.
    pub log_base: f64,

    /// Stopword list and stemmer language.
    pub language: Language,

    /// Stem terms before counting.
    pub stem: bool,

    /// Stopwords added on top of the language list.
    pub extra_stopwords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SummarizerConfig {
    pub fn new() -> Self {
        Self {
            threshold_multiplier: DEFAULT_THRESHOLD_MULTIPLIER,
            log_base: DEFAULT_LOG_BASE,
            language: Language::English,
            stem: true,
            extra_stopwords: Vec::new(),
        }
    }

    pub fn with_threshold_multiplier(mut self, multiplier: f64) -> Self {
        self.threshold_multiplier = multiplier;
        self
    }

    pub fn with_log_base(mut self, base: f64) -> Self {
        self.log_base = base;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_stem(mut self, stem: bool) -> Self {
        self.stem = stem;
        self
    }

    pub fn with_extra_stopwords(mut self, words: Vec<String>) -> Self {
        self.extra_stopwords = words;
        self
    }

    /// Check numeric tunables.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_multiplier.is_finite() || self.threshold_multiplier < 0.0 {
            return Err(Error::InvalidConfig {
                field: "threshold_multiplier",
                reason: format!("must be finite and >= 0, got {}", self.threshold_multiplier),
            });
        }
        if !self.log_base.is_finite() || self.log_base <= 0.0 || self.log_base == 1.0 {
            return Err(Error::InvalidConfig {
                field: "log_base",
                reason: format!("must be finite, > 0 and != 1, got {}", self.log_base),
            });
        }
        Ok(())
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = SummarizerConfig::default();
        assert_eq!(config.threshold_multiplier, 1.3);
        assert_eq!(config.log_base, 10.0);
        assert_eq!(config.language, Language::English);
        assert!(config.stem);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_multiplier() {
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            let err = SummarizerConfig::default()
                .with_threshold_multiplier(bad)
                .validate()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidConfig { field: "threshold_multiplier", .. }));
        }
    }

    #[test]
    fn rejects_bad_log_base() {
        for bad in [0.0, 1.0, -2.0, f64::NAN] {
            let err = SummarizerConfig::default().with_log_base(bad).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidConfig { field: "log_base", .. }));
        }
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config =
            SummarizerConfig::from_json_str(r#"{"threshold_multiplier": 2.0, "language": "german"}"#)
                .unwrap();
        assert_eq!(config.threshold_multiplier, 2.0);
        assert_eq!(config.language, Language::German);
        assert_eq!(config.log_base, 10.0);
        assert!(config.stem);
    }

    #[test]
    fn invalid_json_values_are_rejected() {
        assert!(matches!(
            SummarizerConfig::from_json_str(r#"{"log_base": 1.0}"#),
            Err(Error::InvalidConfig { .. })
        ));
        assert!(matches!(
            SummarizerConfig::from_json_str("{not json"),
            Err(Error::Json(_))
        ));
    }
}
