//! Analyzers that combine a tokenizer with a chain of filters.
//!
//! ```text
//! Raw Text → Analyzer → Tokens
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`GermanAnalyzer`] - Compound splitting, stemming and synonyms for German

use crate::analysis::token::{ScratchToken, Token};
use crate::analysis::token_stream::TokenStream;
use crate::error::Result;

pub mod german;
pub mod pipeline;

pub use german::GermanAnalyzer;
pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Build the full stream over `text`. Call `reset` before advancing it.
    fn token_stream<'a>(&'a self, text: &'a str) -> Box<dyn TokenStream + 'a>;

    /// Run a complete stream cycle over `text` and collect owned tokens.
    fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let mut stream = self.token_stream(text);
        let mut token = ScratchToken::new();
        collect_tokens(stream.as_mut(), &mut token)
    }

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Drive `stream` through reset, advance, end and close, snapshotting every
/// token. `token` is the scratch carrier and may be reused across calls.
///
/// Positions are absolute: the first token sits at
/// `position_increment - 1`, each later one adds its increment. The stream is
/// closed even when an earlier call fails; the first error is returned.
pub fn collect_tokens(stream: &mut dyn TokenStream, token: &mut ScratchToken) -> Result<Vec<Token>> {
    let drained = drain(stream, token);
    let closed = stream.close();
    let tokens = drained?;
    closed?;
    Ok(tokens)
}

fn drain(stream: &mut dyn TokenStream, token: &mut ScratchToken) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut next_position = 0usize;

    stream.reset()?;
    while stream.advance(token)? {
        let position = (next_position + token.position_increment).saturating_sub(1);
        next_position = position + 1;
        tokens.push(token.snapshot(position));
    }
    stream.end(token)?;
    Ok(tokens)
}
