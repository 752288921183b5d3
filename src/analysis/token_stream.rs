//! Pull-based token stream protocol.
//!
//! Every tokenizer, filter and replay emitter implements [`TokenStream`]:
//!
//! ```text
//! reset() → advance()* → end() → close()
//! ```
//!
//! `advance` writes the next token into the caller's [`ScratchToken`] and
//! returns `true`, or returns `false` once the stream is exhausted. After the
//! first `false` it keeps returning `false` until the next `reset`.
//!
//! [`StreamLifecycle`] tracks the protocol phase so that each stream reports
//! misuse (advancing before `reset`, anything but `close` after `close`) as
//! [`DecompoundError::StreamProtocol`] instead of silently producing tokens.

use crate::analysis::token::ScratchToken;
use crate::error::{DecompoundError, Result};

/// A resettable, pull-based source of tokens.
pub trait TokenStream {
    /// Restart iteration.
    fn reset(&mut self) -> Result<()>;

    /// Write the next token into `token`.
    ///
    /// Returns `Ok(false)` when the stream is exhausted.
    fn advance(&mut self, token: &mut ScratchToken) -> Result<bool>;

    /// Finalize end-of-stream bookkeeping (final offsets).
    fn end(&mut self, token: &mut ScratchToken) -> Result<()>;

    /// Release resources. Idempotent.
    fn close(&mut self) -> Result<()>;
}

impl<S: TokenStream + ?Sized> TokenStream for Box<S> {
    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }

    fn advance(&mut self, token: &mut ScratchToken) -> Result<bool> {
        (**self).advance(token)
    }

    fn end(&mut self, token: &mut ScratchToken) -> Result<()> {
        (**self).end(token)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Protocol phase of a stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StreamPhase {
    /// Constructed, `reset` not called yet.
    #[default]
    Created,
    /// Reset and producing tokens.
    Active,
    /// `advance` has returned `false` in this cycle.
    Exhausted,
    /// `end` has been called.
    Ended,
    /// `close` has been called.
    Closed,
}

/// Lifecycle guard embedded in every stream implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamLifecycle {
    phase: StreamPhase,
}

impl StreamLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    /// Enter a new iteration cycle.
    pub fn reset(&mut self) -> Result<()> {
        if self.phase == StreamPhase::Closed {
            return Err(DecompoundError::stream_protocol(
                "reset() called after close()",
            ));
        }
        self.phase = StreamPhase::Active;
        Ok(())
    }

    /// Check whether `advance` may produce a token.
    ///
    /// Returns `Ok(false)` once exhausted or ended, and an error before the
    /// first `reset` or after `close`.
    pub fn can_advance(&self) -> Result<bool> {
        match self.phase {
            StreamPhase::Active => Ok(true),
            StreamPhase::Exhausted | StreamPhase::Ended => Ok(false),
            StreamPhase::Created => Err(DecompoundError::stream_protocol(
                "advance() called before reset()",
            )),
            StreamPhase::Closed => Err(DecompoundError::stream_protocol(
                "advance() called after close()",
            )),
        }
    }

    /// Record that `advance` returned `false`.
    pub fn exhaust(&mut self) {
        if self.phase == StreamPhase::Active {
            self.phase = StreamPhase::Exhausted;
        }
    }

    pub fn end(&mut self) -> Result<()> {
        match self.phase {
            StreamPhase::Created => Err(DecompoundError::stream_protocol(
                "end() called before reset()",
            )),
            StreamPhase::Closed => Err(DecompoundError::stream_protocol(
                "end() called after close()",
            )),
            _ => {
                self.phase = StreamPhase::Ended;
                Ok(())
            }
        }
    }

    pub fn close(&mut self) {
        self.phase = StreamPhase::Closed;
    }
}
