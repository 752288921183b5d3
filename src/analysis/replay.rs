//! Single-shot replay of an already resolved token.
//!
//! A [`ReplayEmitter`] wraps one finalized token value and writes it into the
//! active [`ScratchToken`] exactly once. Filters use it to surface an alternate
//! representation (a primary word, a synonym) at the current position without
//! re-running tokenization: they arm it, poll it as their token source, then
//! resume their input stream once it reports exhaustion.

use crate::analysis::token::ScratchToken;
use crate::analysis::token_stream::TokenStream;
use crate::error::{DecompoundError, Result};
use crate::util::char_buffer::copy_into_buffer;

/// Replay state. `Armed` and `Ready` hold the length of the wrapped token.
///
/// ```text
/// rearm ──▶ Armed ──reset──▶ Ready ──advance──▶ Spent ──close──▶ Closed
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplayState {
    /// Wrapping a token, waiting for `reset`.
    Armed(usize),
    /// Reset; the next `advance` writes the token.
    Ready(usize),
    Spent,
    Closed,
}

/// Emits one wrapped token, then reports exhaustion.
///
/// The wrapped chars live in a buffer owned by the emitter and reused across
/// [`rearm`](ReplayEmitter::rearm) calls.
///
/// # Examples
///
/// ```
/// use decompound::analysis::replay::ReplayEmitter;
/// use decompound::analysis::token::ScratchToken;
/// use decompound::analysis::token_stream::TokenStream;
///
/// let haus: Vec<char> = "Haus".chars().collect();
/// let mut emitter = ReplayEmitter::new(&haus, haus.len());
/// let mut token = ScratchToken::new();
///
/// emitter.reset().unwrap();
/// assert!(emitter.advance(&mut token).unwrap());
/// assert_eq!(token.term_text(), "Haus");
/// assert!(!emitter.advance(&mut token).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct ReplayEmitter {
    buffer: Box<[char]>,
    state: ReplayState,
}

impl Default for ReplayEmitter {
    /// A spent emitter with no storage; arm it with [`rearm`](ReplayEmitter::rearm).
    fn default() -> Self {
        ReplayEmitter {
            buffer: Box::default(),
            state: ReplayState::Spent,
        }
    }
}

impl ReplayEmitter {
    /// Wrap the first `len` chars of `data`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds `data`.
    pub fn new(data: &[char], len: usize) -> Self {
        let mut emitter = Self::default();
        emitter.rearm(data, len);
        emitter
    }

    /// Wrap a new token, discarding whatever was wrapped before.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds `data`.
    pub fn rearm(&mut self, data: &[char], len: usize) {
        self.buffer = copy_into_buffer(std::mem::take(&mut self.buffer), data, len);
        self.state = ReplayState::Armed(len);
    }

    /// Drop the wrapped token without emitting it. Storage is kept for the
    /// next [`rearm`](ReplayEmitter::rearm).
    pub fn disarm(&mut self) {
        self.state = ReplayState::Spent;
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, ReplayState::Armed(_) | ReplayState::Ready(_))
    }
}

impl TokenStream for ReplayEmitter {
    fn reset(&mut self) -> Result<()> {
        match self.state {
            ReplayState::Armed(len) | ReplayState::Ready(len) => {
                self.state = ReplayState::Ready(len);
                Ok(())
            }
            ReplayState::Spent => Err(DecompoundError::stream_protocol(
                "replay emitter already spent; rearm it before reset()",
            )),
            ReplayState::Closed => Err(DecompoundError::stream_protocol(
                "reset() called on a closed replay emitter",
            )),
        }
    }

    fn advance(&mut self, token: &mut ScratchToken) -> Result<bool> {
        match self.state {
            ReplayState::Ready(len) => {
                token.set_term(&self.buffer[..len]);
                self.state = ReplayState::Spent;
                Ok(true)
            }
            ReplayState::Armed(_) => Err(DecompoundError::stream_protocol(
                "advance() called on a replay emitter before reset()",
            )),
            ReplayState::Spent => Ok(false),
            ReplayState::Closed => Err(DecompoundError::stream_protocol(
                "advance() called on a closed replay emitter",
            )),
        }
    }

    fn end(&mut self, _token: &mut ScratchToken) -> Result<()> {
        if self.state == ReplayState::Closed {
            return Err(DecompoundError::stream_protocol(
                "end() called on a closed replay emitter",
            ));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.state = ReplayState::Closed;
        Ok(())
    }
}
