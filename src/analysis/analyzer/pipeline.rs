//! Pipeline analyzer that combines tokenizers and filters.
//!
//! This is the main building block for custom analyzers. Filters wrap the
//! tokenizer's stream in the order they were added, so the first filter added
//! sees tokens first.
//!
//! # Examples
//!
//! ```
//! use decompound::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use decompound::analysis::token_filter::{CompoundSplitFilter, LowercaseFilter};
//! use decompound::analysis::resource::WordList;
//! use decompound::analysis::tokenizer::WordTokenizer;
//! use std::sync::Arc;
//!
//! let words = Arc::new(WordList::from_words(["bahn"]));
//! let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
//!     .add_filter(Arc::new(CompoundSplitFilter::new(words)))
//!     .add_filter(Arc::new(LowercaseFilter::new()))
//!     .with_name("my_custom_analyzer");
//!
//! let tokens = analyzer.analyze("Die Bundesbahn").unwrap();
//!
//! let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["die", "bundesbahn", "bahn"]);
//! assert_eq!(tokens[2].position, 1);
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::analyzer::{Analyzer, collect_tokens};
use crate::analysis::token::{ScratchToken, Token};
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_stream::TokenStream;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
///
/// Tokenizer and filters are shared, immutable configuration; every call to
/// [`token_stream`](Analyzer::token_stream) builds fresh per-stream state, so
/// one analyzer serves any number of threads.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn TokenFilter>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn TokenFilter>] {
        &self.filters
    }

    /// Names of the stages in stream order, tokenizer first.
    pub fn stage_names(&self) -> Vec<&'static str> {
        std::iter::once(self.tokenizer.name())
            .chain(self.filters.iter().map(|f| f.name()))
            .collect()
    }

    /// The configured name (see [`with_name`](Self::with_name)).
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Analyze `text` reusing the caller's scratch token.
    pub fn analyze_with(&self, text: &str, token: &mut ScratchToken) -> Result<Vec<Token>> {
        let mut stream = self.token_stream(text);
        collect_tokens(stream.as_mut(), token)
    }

    /// Analyze many texts in parallel.
    ///
    /// Each worker thread gets its own streams; results keep the input order.
    pub fn analyze_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Vec<Token>>> {
        texts
            .par_iter()
            .map_init(ScratchToken::new, |token, text| {
                self.analyze_with(text.as_ref(), token)
            })
            .collect()
    }
}

impl Analyzer for PipelineAnalyzer {
    fn token_stream<'a>(&'a self, text: &'a str) -> Box<dyn TokenStream + 'a> {
        let stream = self.tokenizer.token_stream(text);
        self.filters
            .iter()
            .fold(stream, |stream, filter| filter.wrap(stream))
    }

    fn name(&self) -> &'static str {
        // The configured name is not 'static; see `pipeline_name`.
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
