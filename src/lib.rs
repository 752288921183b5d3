//! # Decompound
//!
//! German compound splitting, stemming and synonym expansion for search
//! indexing.
//!
//! ## Features
//!
//! - Allocation-free streaming: stages share one reusable scratch token
//! - Compound heads recorded as primary words and emitted exactly once
//! - Hyphenation-guided splitting against a dictionary word list
//! - Light German stemming with an exception table
//! - Lazily loaded, process-wide linguistic resources
//!
//! ## Example
//!
//! ```
//! use decompound::analysis::analyzer::{Analyzer, GermanAnalyzer};
//! use decompound::analysis::resource::{ResourceService, WordList};
//! use decompound::config::AnalysisConfig;
//!
//! let resources = ResourceService::empty().with_word_list(WordList::from_words(["bahn"]));
//! let analyzer = GermanAnalyzer::new(&AnalysisConfig::default(), &resources).unwrap();
//!
//! let tokens = analyzer.analyze("Bundesbahn").unwrap();
//! assert_eq!(tokens[0].text, "bundesbahn");
//! assert_eq!(tokens[1].text, "bahn");
//! assert_eq!(tokens[1].position, 0);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod util;

pub mod prelude {
    pub use crate::analysis::analyzer::{Analyzer, GermanAnalyzer, PipelineAnalyzer};
    pub use crate::analysis::attribute::PrimaryWordAttribute;
    pub use crate::analysis::resource::ResourceService;
    pub use crate::analysis::token::{ScratchToken, Token, TokenType};
    pub use crate::analysis::token_stream::TokenStream;
    pub use crate::config::AnalysisConfig;
    pub use crate::error::{DecompoundError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
