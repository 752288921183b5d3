//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the pipeline. Each call to
//! [`Tokenizer::token_stream`] returns a fresh stream over one text; the stream
//! clears the caller's [`ScratchToken`](crate::analysis::token::ScratchToken)
//! at every new token and records the surface form as the token's original
//! word, so later stages can always get back to it.
//!
//! # Available Tokenizers
//!
//! - [`word::WordTokenizer`] - Unicode word boundaries (UAX #29)

use crate::analysis::token_stream::TokenStream;

/// Trait for tokenizers that convert text into token streams.
///
/// The trait requires `Send + Sync` so that one tokenizer can serve
/// concurrent streams, each with its own state.
pub trait Tokenizer: Send + Sync {
    /// Create a stream over `text`. Call `reset` before advancing it.
    fn token_stream<'a>(&'a self, text: &'a str) -> Box<dyn TokenStream + 'a>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod word;

pub use word::WordTokenizer;
