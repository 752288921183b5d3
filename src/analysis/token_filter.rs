//! Token filter implementations for token transformation.
//!
//! Filters wrap the token stream produced by a tokenizer (or by an earlier
//! filter) and rewrite the shared [`ScratchToken`](crate::analysis::token::ScratchToken)
//! in place as it passes through. Filters that add tokens do so by replaying
//! an already resolved value at the current position through a
//! [`ReplayEmitter`](crate::analysis::replay::ReplayEmitter).
//!
//! # Available Filters
//!
//! - [`decompound::CompoundSplitFilter`] - Records the head of a compound as primary word
//! - [`primary_word::PrimaryWordFilter`] - Surfaces a primary word not emitted yet
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`stem::StemFilter`] - Reduces words to their stem, honoring exceptions
//! - [`synonym::SynonymFilter`] - Expands synonyms at the same position
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Decompound → Primary Word → Lowercase → Stemmer → Synonyms
//! ```

use crate::analysis::token_stream::TokenStream;

/// Trait for filters that transform token streams.
///
/// A filter is configuration plus shared resources; [`wrap`](TokenFilter::wrap)
/// creates the per-stream state. The trait requires `Send + Sync` so that one
/// filter serves concurrent streams.
///
/// # Examples
///
/// Implementing a custom filter:
///
/// ```
/// use decompound::analysis::token::ScratchToken;
/// use decompound::analysis::token_filter::TokenFilter;
/// use decompound::analysis::token_stream::TokenStream;
/// use decompound::error::Result;
///
/// struct ReverseFilter;
///
/// struct ReverseStream<'a> {
///     input: Box<dyn TokenStream + 'a>,
///     scratch: Vec<char>,
/// }
///
/// impl TokenStream for ReverseStream<'_> {
///     fn reset(&mut self) -> Result<()> {
///         self.input.reset()
///     }
///
///     fn advance(&mut self, token: &mut ScratchToken) -> Result<bool> {
///         if !self.input.advance(token)? {
///             return Ok(false);
///         }
///         self.scratch.clear();
///         self.scratch.extend(token.term().iter().rev());
///         token.set_term(&self.scratch);
///         Ok(true)
///     }
///
///     fn end(&mut self, token: &mut ScratchToken) -> Result<()> {
///         self.input.end(token)
///     }
///
///     fn close(&mut self) -> Result<()> {
///         self.input.close()
///     }
/// }
///
/// impl TokenFilter for ReverseFilter {
///     fn wrap<'a>(&'a self, input: Box<dyn TokenStream + 'a>) -> Box<dyn TokenStream + 'a> {
///         Box::new(ReverseStream { input, scratch: Vec::new() })
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait TokenFilter: Send + Sync {
    /// Wrap `input` in this filter's per-stream state.
    fn wrap<'a>(&'a self, input: Box<dyn TokenStream + 'a>) -> Box<dyn TokenStream + 'a>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod decompound;
pub mod lowercase;
pub mod primary_word;
pub mod stem;
pub mod synonym;

// Re-export all filters for convenient access
pub use decompound::CompoundSplitFilter;
pub use lowercase::LowercaseFilter;
pub use primary_word::PrimaryWordFilter;
pub use stem::{GermanLightStemmer, IdentityStemmer, StemFilter, Stemmer};
pub use synonym::SynonymFilter;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::analysis::token::{ScratchToken, Token};
    use crate::analysis::token_filter::TokenFilter;
    use crate::analysis::token_stream::TokenStream;
    use crate::error::{DecompoundError, Result};

    /// Drive a stream through a full cycle and snapshot every token.
    pub fn collect(mut stream: Box<dyn TokenStream + '_>) -> Vec<Token> {
        let mut token = ScratchToken::new();
        let mut tokens = Vec::new();
        let mut position: Option<usize> = None;

        stream.reset().unwrap();
        while stream.advance(&mut token).unwrap() {
            let next = match position {
                None => 0,
                Some(p) => p + token.position_increment,
            };
            position = Some(next);
            tokens.push(token.snapshot(next));
        }
        stream.end(&mut token).unwrap();
        stream.close().unwrap();
        tokens
    }

    pub fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    /// Source that yields the same term forever and accepts any call order.
    pub struct Endless(pub &'static str);

    impl TokenStream for Endless {
        fn reset(&mut self) -> Result<()> {
            Ok(())
        }

        fn advance(&mut self, token: &mut ScratchToken) -> Result<bool> {
            token.clear();
            token.set_term_str(self.0);
            token.record_original();
            Ok(true)
        }

        fn end(&mut self, _token: &mut ScratchToken) -> Result<()> {
            Ok(())
        }

        fn close(&mut self) -> Result<()> {
            Ok(())
        }
    }

    /// Check that `filter` rejects out-of-order calls on its own, even when
    /// its input does not.
    pub fn assert_rejects_misuse(filter: &dyn TokenFilter) {
        let mut token = ScratchToken::new();

        let mut stream = filter.wrap(Box::new(Endless("Haus")));
        let err = stream.advance(&mut token).unwrap_err();
        assert!(matches!(err, DecompoundError::StreamProtocol(_)));

        let mut stream = filter.wrap(Box::new(Endless("Haus")));
        stream.reset().unwrap();
        assert!(stream.advance(&mut token).unwrap());
        stream.close().unwrap();
        let err = stream.advance(&mut token).unwrap_err();
        assert!(matches!(err, DecompoundError::StreamProtocol(_)));
        let err = stream.end(&mut token).unwrap_err();
        assert!(matches!(err, DecompoundError::StreamProtocol(_)));
        assert!(stream.reset().is_err());
    }
}
