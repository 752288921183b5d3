//! Primary word filter implementation.
//!
//! Surfaces the primary word recorded by an earlier stage as an extra token at
//! the same position, unless some stage already did. The decision is made on
//! the token the primary belongs to: the filter marks it emitted before
//! forwarding it, so stages further down see the flag and stay quiet.

use crate::analysis::replay::ReplayEmitter;
use crate::analysis::token::{ScratchToken, TokenType};
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_stream::{StreamLifecycle, TokenStream};
use crate::error::Result;

/// Arm `replay` with the primary word of `token` and mark it emitted.
///
/// Returns false, leaving everything untouched, when there is nothing to
/// surface: no primary word, already emitted, a synonym, or a primary word
/// identical to the term.
pub(crate) fn arm_primary_replay(token: &mut ScratchToken, replay: &mut ReplayEmitter) -> bool {
    if token.token_type == TokenType::Synonym {
        return false;
    }
    let attribute = token.attribute();
    if !attribute.has_primary()
        || attribute.is_emitted()
        || attribute.primary_equals(token.term())
    {
        return false;
    }

    replay.rearm(attribute.primary(), attribute.primary_len());
    token.attribute_mut().set_emitted(true);
    true
}

/// Write an armed primary word replay into `token` as a stacked token.
///
/// Offsets and the attribute are left as the forwarded original set them.
pub(crate) fn poll_primary_replay(
    token: &mut ScratchToken,
    replay: &mut ReplayEmitter,
) -> Result<bool> {
    if !replay.is_armed() {
        return Ok(false);
    }
    replay.reset()?;
    if !replay.advance(token)? {
        return Ok(false);
    }
    token.position_increment = 0;
    token.token_type = TokenType::PrimaryWord;
    Ok(true)
}

/// A filter that emits the primary word of a position once.
///
/// # Examples
///
/// ```
/// use decompound::analysis::token::ScratchToken;
/// use decompound::analysis::token_filter::{PrimaryWordFilter, TokenFilter};
/// use decompound::analysis::token_stream::TokenStream;
/// use decompound::analysis::tokenizer::{Tokenizer, WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let filter = PrimaryWordFilter::new();
/// let mut stream = filter.wrap(tokenizer.token_stream("Bundesbahn"));
/// let mut token = ScratchToken::new();
///
/// stream.reset().unwrap();
/// assert!(stream.advance(&mut token).unwrap());
/// // Nothing recorded a primary word, so nothing is added.
/// assert!(!stream.advance(&mut token).unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct PrimaryWordFilter;

impl PrimaryWordFilter {
    /// Create a new primary word filter.
    pub fn new() -> Self {
        PrimaryWordFilter
    }
}

impl TokenFilter for PrimaryWordFilter {
    fn wrap<'a>(&'a self, input: Box<dyn TokenStream + 'a>) -> Box<dyn TokenStream + 'a> {
        Box::new(PrimaryWordTokenStream {
            input,
            replay: ReplayEmitter::default(),
            lifecycle: StreamLifecycle::new(),
        })
    }

    fn name(&self) -> &'static str {
        "primary_word"
    }
}

struct PrimaryWordTokenStream<'a> {
    input: Box<dyn TokenStream + 'a>,
    replay: ReplayEmitter,
    lifecycle: StreamLifecycle,
}

impl TokenStream for PrimaryWordTokenStream<'_> {
    fn reset(&mut self) -> Result<()> {
        self.lifecycle.reset()?;
        self.replay.disarm();
        self.input.reset()
    }

    fn advance(&mut self, token: &mut ScratchToken) -> Result<bool> {
        if !self.lifecycle.can_advance()? {
            return Ok(false);
        }
        if poll_primary_replay(token, &mut self.replay)? {
            return Ok(true);
        }
        if !self.input.advance(token)? {
            self.lifecycle.exhaust();
            return Ok(false);
        }

        arm_primary_replay(token, &mut self.replay);
        Ok(true)
    }

    fn end(&mut self, token: &mut ScratchToken) -> Result<()> {
        self.lifecycle.end()?;
        self.input.end(token)
    }

    fn close(&mut self) -> Result<()> {
        self.lifecycle.close();
        self.replay.close()?;
        self.input.close()
    }
}
