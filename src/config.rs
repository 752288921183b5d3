//! Configuration for the German analysis pipeline.
//!
//! Every field has a default, so a configuration file only needs to name what
//! differs:
//!
//! ```json
//! {
//!   "resources": {
//!     "word_list_path": "dict/german-words.txt",
//!     "hyphenation_path": "dict/de_DR.pat",
//!     "strict": true
//!   },
//!   "decompound": { "min_word_size": 6 },
//!   "index_primary_word": true
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DecompoundError, Result};

/// File locations of the linguistic resources and the failure policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Dictionary words, one per line.
    pub word_list_path: Option<PathBuf>,

    /// TeX hyphenation patterns.
    pub hyphenation_path: Option<PathBuf>,

    /// `word<TAB>stem` exception table.
    pub stem_exceptions_path: Option<PathBuf>,

    /// JSON array of synonym groups.
    pub synonyms_path: Option<PathBuf>,

    /// Fail analyzer construction when a configured resource cannot be loaded.
    ///
    /// When false (the default) the failure is logged and the dependent stage
    /// is left out of the pipeline.
    pub strict: bool,
}

/// Compound splitting options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecompoundConfig {
    /// Tokens shorter than this (in chars) are never split.
    pub min_word_size: usize,

    /// Minimum length (in chars) of each side of a split.
    pub min_subword_size: usize,

    /// Surface the head constituent as an extra token at the same position.
    pub emit_primary: bool,
}

impl Default for DecompoundConfig {
    fn default() -> Self {
        DecompoundConfig {
            min_word_size: 5,
            min_subword_size: 3,
            emit_primary: true,
        }
    }
}

/// Stemming options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmingConfig {
    pub enabled: bool,
}

impl Default for StemmingConfig {
    fn default() -> Self {
        StemmingConfig { enabled: true }
    }
}

/// Top-level analysis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub resources: ResourceConfig,
    pub decompound: DecompoundConfig,
    pub stemming: StemmingConfig,

    /// Lowercase terms before stemming.
    pub lowercase: bool,

    /// Add a late stage that surfaces any primary word not emitted yet.
    pub index_primary_word: bool,

    /// Longer tokens (in chars) are dropped by the tokenizer.
    pub max_token_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            resources: ResourceConfig::default(),
            decompound: DecompoundConfig::default(),
            stemming: StemmingConfig::default(),
            lowercase: true,
            index_primary_word: false,
            max_token_length: 255,
        }
    }
}

impl AnalysisConfig {
    /// Parse a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Reject values that would make the pipeline meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.max_token_length == 0 {
            return Err(DecompoundError::invalid_config(
                "max_token_length must be greater than 0",
            ));
        }
        if self.decompound.min_subword_size == 0 {
            return Err(DecompoundError::invalid_config(
                "decompound.min_subword_size must be greater than 0",
            ));
        }
        if self.decompound.min_word_size <= self.decompound.min_subword_size {
            return Err(DecompoundError::invalid_config(format!(
                "decompound.min_word_size ({}) must exceed min_subword_size ({})",
                self.decompound.min_word_size, self.decompound.min_subword_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert!(config.lowercase);
        assert!(config.stemming.enabled);
        assert!(config.decompound.emit_primary);
        assert!(!config.resources.strict);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config = AnalysisConfig::from_json_str(
            r#"{
                "resources": { "word_list_path": "words.txt", "strict": true },
                "decompound": { "min_word_size": 8 },
                "index_primary_word": true
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.resources.word_list_path,
            Some(PathBuf::from("words.txt"))
        );
        assert!(config.resources.strict);
        assert_eq!(config.decompound.min_word_size, 8);
        assert_eq!(config.decompound.min_subword_size, 3);
        assert!(config.index_primary_word);
        assert_eq!(config.max_token_length, 255);
    }

    #[test]
    fn test_invalid_values() {
        let err = AnalysisConfig::from_json_str(r#"{ "max_token_length": 0 }"#).unwrap_err();
        assert!(matches!(err, DecompoundError::Config(_)));

        let err = AnalysisConfig::from_json_str(
            r#"{ "decompound": { "min_word_size": 3, "min_subword_size": 3 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, DecompoundError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = AnalysisConfig::from_json_str("{").unwrap_err();
        assert!(matches!(err, DecompoundError::Json(_)));
    }
}
