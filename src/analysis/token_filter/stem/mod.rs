//! Stemming token filter and stemmer implementations.

use std::sync::Arc;

use crate::analysis::resource::StemExceptions;
use crate::analysis::token::{ScratchToken, TokenType};
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_stream::{StreamLifecycle, TokenStream};
use crate::error::Result;
use crate::util::char_buffer::is_non_alphabetic;

/// Trait for stemming algorithms.
///
/// Stemmers rewrite the first `len` chars of `buffer` in place and return the
/// new length, which never exceeds `len`.
pub trait Stemmer: Send + Sync {
    /// Stem the word held in `buffer[..len]`.
    fn stem(&self, buffer: &mut [char], len: usize) -> usize;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

// Stemmer implementations
pub mod german;
pub mod identity;

// Re-export stemmers
pub use german::GermanLightStemmer;
pub use identity::IdentityStemmer;

/// Filter that applies stemming to tokens.
///
/// Exceptions are consulted first, by the lowercase term. Numbers, terms
/// without letters and replayed primary words pass through unchanged.
pub struct StemFilter {
    /// The stemmer to use.
    stemmer: Box<dyn Stemmer>,
    exceptions: Option<Arc<StemExceptions>>,
}

impl std::fmt::Debug for StemFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemFilter")
            .field("stemmer", &self.stemmer.name())
            .field("exceptions", &self.exceptions.is_some())
            .finish()
    }
}

impl StemFilter {
    /// Create a new stem filter with the light German stemmer.
    pub fn new() -> Self {
        StemFilter {
            stemmer: Box::new(GermanLightStemmer::new()),
            exceptions: None,
        }
    }

    /// Create a stem filter with a custom stemmer.
    pub fn with_stemmer(stemmer: Box<dyn Stemmer>) -> Self {
        StemFilter {
            stemmer,
            exceptions: None,
        }
    }

    pub fn with_exceptions(mut self, exceptions: Arc<StemExceptions>) -> Self {
        self.exceptions = Some(exceptions);
        self
    }

    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }
}

impl Default for StemFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StemFilter {
    fn wrap<'a>(&'a self, input: Box<dyn TokenStream + 'a>) -> Box<dyn TokenStream + 'a> {
        Box::new(StemTokenStream {
            filter: self,
            input,
            lifecycle: StreamLifecycle::new(),
            key: String::new(),
        })
    }

    fn name(&self) -> &'static str {
        "stem"
    }
}

struct StemTokenStream<'a> {
    filter: &'a StemFilter,
    input: Box<dyn TokenStream + 'a>,
    lifecycle: StreamLifecycle,
    key: String,
}

impl TokenStream for StemTokenStream<'_> {
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
        if matches!(token.token_type, TokenType::Num | TokenType::PrimaryWord)
            || is_non_alphabetic(token.term(), token.term_len())
        {
            return Ok(true);
        }

        if let Some(exceptions) = &self.filter.exceptions {
            self.key.clear();
            self.key
                .extend(token.term().iter().flat_map(|c| c.to_lowercase()));
            if let Some(stem) = exceptions.get(&self.key) {
                token.set_term(stem);
                return Ok(true);
            }
        }

        let len = token.term_len();
        let stemmed = self.filter.stemmer.stem(token.term_buffer_mut(len), len);
        token.set_term_len(stemmed);
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
