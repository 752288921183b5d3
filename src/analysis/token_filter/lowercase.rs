//! Lowercase filter implementation.
//!
//! Converts token text to lowercase for case-insensitive matching. Lowercasing
//! is full Unicode: one char may expand to several.
//!
//! # Examples
//!
//! ```
//! use decompound::analysis::token::ScratchToken;
//! use decompound::analysis::token_filter::{LowercaseFilter, TokenFilter};
//! use decompound::analysis::token_stream::TokenStream;
//! use decompound::analysis::tokenizer::{Tokenizer, WordTokenizer};
//!
//! let tokenizer = WordTokenizer::new();
//! let filter = LowercaseFilter::new();
//! let mut stream = filter.wrap(tokenizer.token_stream("Die BAHN"));
//! let mut token = ScratchToken::new();
//!
//! stream.reset().unwrap();
//! stream.advance(&mut token).unwrap();
//! assert_eq!(token.term_text(), "die");
//! stream.advance(&mut token).unwrap();
//! assert_eq!(token.term_text(), "bahn");
//! ```

use crate::analysis::token::ScratchToken;
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_stream::{StreamLifecycle, TokenStream};
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Offsets, positions and the primary word attribute are preserved; only the
/// term changes.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn wrap<'a>(&'a self, input: Box<dyn TokenStream + 'a>) -> Box<dyn TokenStream + 'a> {
        Box::new(LowercaseTokenStream {
            input,
            lifecycle: StreamLifecycle::new(),
            scratch: Vec::new(),
        })
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

struct LowercaseTokenStream<'a> {
    input: Box<dyn TokenStream + 'a>,
    lifecycle: StreamLifecycle,
    scratch: Vec<char>,
}

impl TokenStream for LowercaseTokenStream<'_> {
    fn reset(&mut self) -> Result<()> {
        self.lifecycle.reset()?;
        self.input.reset()
    }

    fn advance(&mut self, token: &mut ScratchToken) -> Result<bool> {
        if !self.lifecycle.can_advance()? {
            return Ok(false);
        }
        if !self.input.advance(token)? {
            self.lifecycle.exhaust();
            return Ok(false);
        }
        if !token.term().iter().any(|c| c.is_uppercase()) {
            return Ok(true);
        }

        self.scratch.clear();
        self.scratch
            .extend(token.term().iter().flat_map(|c| c.to_lowercase()));
        token.set_term(&self.scratch);
        Ok(true)
    }

    fn end(&mut self, token: &mut ScratchToken) -> Result<()> {
        self.lifecycle.end()?;
        self.input.end(token)
    }

    fn close(&mut self) -> Result<()> {
        self.lifecycle.close();
        self.input.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::test_support::{assert_rejects_misuse, collect, texts};
    use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};

    #[test]
    fn test_lowercase_filter() {
        let tokenizer = WordTokenizer::new();
        let filter = LowercaseFilter::new();
        let tokens = collect(filter.wrap(tokenizer.token_stream("Die GROSSE Straße")));

        assert_eq!(texts(&tokens), vec!["die", "grosse", "straße"]);
    }

    #[test]
    fn test_preserves_original_and_offsets() {
        let tokenizer = WordTokenizer::new();
        let filter = LowercaseFilter::new();
        let tokens = collect(filter.wrap(tokenizer.token_stream("Über Maß")));

        assert_eq!(tokens[0].text, "über");
        assert_eq!(tokens[0].original_text.as_deref(), Some("Über"));
        assert_eq!(tokens[1].start_offset, "Über ".len());
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_expanding_lowercase() {
        let tokenizer = WordTokenizer::new();
        let filter = LowercaseFilter::new();
        let tokens = collect(filter.wrap(tokenizer.token_stream("İstanbul")));

        assert_eq!(tokens[0].text, "i\u{307}stanbul");
    }

    #[test]
    fn test_protocol_misuse_is_rejected() {
        assert_rejects_misuse(&LowercaseFilter::new());
    }
}
