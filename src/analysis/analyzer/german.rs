//! German analyzer assembled from configuration and shared resources.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::resource::ResourceService;
use crate::analysis::token::Token;
use crate::analysis::token_filter::{
    CompoundSplitFilter, LowercaseFilter, PrimaryWordFilter, StemFilter, SynonymFilter,
};
use crate::analysis::token_stream::TokenStream;
use crate::analysis::tokenizer::WordTokenizer;
use crate::config::AnalysisConfig;
use crate::error::Result;

/// Analyzer for German text.
///
/// Stages whose resource is missing are left out: without a word list there
/// is no compound splitting, without synonyms no expansion. In strict mode a
/// configured but unloadable resource fails construction instead.
pub struct GermanAnalyzer {
    inner: PipelineAnalyzer,
}

impl GermanAnalyzer {
    pub fn new(config: &AnalysisConfig, resources: &ResourceService) -> Result<Self> {
        config.validate()?;
        resources.check_strict()?;

        let tokenizer =
            Arc::new(WordTokenizer::new().with_max_token_length(config.max_token_length));
        let mut analyzer = PipelineAnalyzer::new(tokenizer).with_name("german");

        match resources.word_list().get() {
            Some(word_list) => {
                let hyphenation = resources.hyphenation().get().cloned();
                analyzer = analyzer.add_filter(Arc::new(CompoundSplitFilter::from_config(
                    &config.decompound,
                    Arc::clone(word_list),
                    hyphenation,
                )));
            }
            None => debug!("no word list available; compound splitting disabled"),
        }

        if config.index_primary_word {
            analyzer = analyzer.add_filter(Arc::new(PrimaryWordFilter::new()));
        }

        if config.lowercase {
            analyzer = analyzer.add_filter(Arc::new(LowercaseFilter::new()));
        }

        if config.stemming.enabled {
            let mut stem = StemFilter::new();
            if let Some(exceptions) = resources.stem_exceptions().get() {
                stem = stem.with_exceptions(Arc::clone(exceptions));
            }
            analyzer = analyzer.add_filter(Arc::new(stem));
        }

        match resources.synonyms().get() {
            Some(synonyms) => {
                analyzer = analyzer.add_filter(Arc::new(SynonymFilter::new(Arc::clone(synonyms))));
            }
            None => debug!("no synonyms available; synonym expansion disabled"),
        }

        debug!("assembled german analyzer: {:?}", analyzer.stage_names());
        Ok(GermanAnalyzer { inner: analyzer })
    }

    /// Build the resources from `config` and assemble the analyzer.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self> {
        let resources = ResourceService::new(&config.resources);
        Self::new(config, &resources)
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }

    /// Analyze many texts in parallel.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Vec<Token>>> {
        self.inner.analyze_batch(texts)
    }
}

impl Analyzer for GermanAnalyzer {
    fn token_stream<'a>(&'a self, text: &'a str) -> Box<dyn TokenStream + 'a> {
        self.inner.token_stream(text)
    }

    fn name(&self) -> &'static str {
        "german"
    }
}

impl Debug for GermanAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GermanAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::resource::{StemExceptions, SynonymTable, WordList};
    use crate::analysis::token::TokenType;
    use crate::config::ResourceConfig;
    use crate::error::DecompoundError;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn resources() -> ResourceService {
        ResourceService::empty()
            .with_word_list(WordList::from_words(["bahn", "schiff", "haus"]))
            .with_synonyms(SynonymTable::from_synonym_groups([["bahn", "zug"]]))
            .with_stem_exceptions(StemExceptions::from_pairs([("mütter", "mutter")]))
    }

    #[test]
    fn test_german_analyzer() {
        let analyzer = GermanAnalyzer::new(&AnalysisConfig::default(), &resources()).unwrap();

        let tokens = analyzer.analyze("Die Mütter fahren mit der Bundesbahn").unwrap();

        assert_eq!(
            texts(&tokens),
            vec!["die", "mutter", "fahr", "mit", "der", "bundesbahn", "bahn", "zug"]
        );
        assert_eq!(tokens[6].token_type, TokenType::PrimaryWord);
        assert_eq!(tokens[7].token_type, TokenType::Synonym);
        assert_eq!(tokens[5].position, 5);
        assert_eq!(tokens[6].position, 5);
        assert_eq!(tokens[7].position, 5);
    }

    #[test]
    fn test_stage_assembly() {
        let analyzer = GermanAnalyzer::new(&AnalysisConfig::default(), &resources()).unwrap();
        assert_eq!(
            analyzer.inner().stage_names(),
            vec!["word", "decompound", "lowercase", "stem", "synonym"]
        );

        let config = AnalysisConfig {
            lowercase: false,
            index_primary_word: true,
            ..AnalysisConfig::default()
        };
        let analyzer = GermanAnalyzer::new(&config, &ResourceService::empty()).unwrap();
        assert_eq!(analyzer.inner().stage_names(), vec!["word", "primary_word", "stem"]);
    }

    #[test]
    fn test_late_primary_word_stage() {
        let mut config = AnalysisConfig::default();
        config.decompound.emit_primary = false;
        config.index_primary_word = true;
        let analyzer = GermanAnalyzer::new(&config, &resources()).unwrap();

        let tokens = analyzer.analyze("Dampfschiff").unwrap();

        assert_eq!(texts(&tokens), vec!["dampfschiff", "schiff"]);
        assert_eq!(tokens[1].position, 0);
        assert_eq!(tokens[1].primary_word.as_deref(), Some("Schiff"));
    }

    #[test]
    fn test_no_double_emission() {
        let config = AnalysisConfig {
            index_primary_word: true,
            ..AnalysisConfig::default()
        };
        let analyzer = GermanAnalyzer::new(&config, &resources()).unwrap();

        let tokens = analyzer.analyze("Dampfschiff").unwrap();

        assert_eq!(texts(&tokens), vec!["dampfschiff", "schiff"]);
    }

    #[test]
    fn test_strict_mode_rejects_missing_resource() {
        let config = AnalysisConfig {
            resources: ResourceConfig {
                word_list_path: Some("/nonexistent/words.txt".into()),
                strict: true,
                ..ResourceConfig::default()
            },
            ..AnalysisConfig::default()
        };

        let err = GermanAnalyzer::from_config(&config).unwrap_err();
        assert!(matches!(err, DecompoundError::Resource(_)));
    }

    #[test]
    fn test_lenient_mode_disables_stage() {
        let config = AnalysisConfig {
            resources: ResourceConfig {
                word_list_path: Some("/nonexistent/words.txt".into()),
                ..ResourceConfig::default()
            },
            ..AnalysisConfig::default()
        };

        let analyzer = GermanAnalyzer::from_config(&config).unwrap();
        assert_eq!(analyzer.inner().stage_names(), vec!["word", "lowercase", "stem"]);

        let tokens = analyzer.analyze("Bundesbahn").unwrap();
        assert_eq!(texts(&tokens), vec!["bundesbahn"]);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnalysisConfig {
            max_token_length: 0,
            ..AnalysisConfig::default()
        };
        let err = GermanAnalyzer::new(&config, &ResourceService::empty()).unwrap_err();
        assert!(matches!(err, DecompoundError::Config(_)));
    }
}
