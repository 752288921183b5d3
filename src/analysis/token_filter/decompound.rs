//! Compound splitting filter implementation.
//!
//! German compounds carry their meaning in the last constituent, the head:
//! a *Bundesbahn* is a *Bahn*. This filter finds the longest head that is a
//! dictionary word and records it as the token's primary word. With
//! `emit_primary` set it also surfaces the head as a stacked token:
//!
//! ```text
//! Input:  "Bundesbahn"
//! Output: "Bundesbahn" (pos 0), "Bahn" (pos 0, PrimaryWord)
//! ```
//!
//! Split candidates come from hyphenation patterns when available, otherwise
//! every position is tried.

use std::sync::Arc;

use crate::analysis::replay::ReplayEmitter;
use crate::analysis::resource::{HyphenationScratch, HyphenationTree, WordList};
use crate::analysis::token::{ScratchToken, TokenType};
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_filter::primary_word::{arm_primary_replay, poll_primary_replay};
use crate::analysis::token_stream::{StreamLifecycle, TokenStream};
use crate::config::DecompoundConfig;
use crate::error::Result;
use crate::util::char_buffer::is_non_alphabetic;

/// Default minimum token length (in chars) considered for splitting.
pub const DEFAULT_MIN_WORD_SIZE: usize = 5;
/// Default minimum length (in chars) of each side of a split.
pub const DEFAULT_MIN_SUBWORD_SIZE: usize = 3;

/// A filter that records the head constituent of compounds.
#[derive(Clone, Debug)]
pub struct CompoundSplitFilter {
    word_list: Arc<WordList>,
    hyphenation: Option<Arc<HyphenationTree>>,
    min_word_size: usize,
    min_subword_size: usize,
    emit_primary: bool,
}

impl CompoundSplitFilter {
    /// Create a filter over `word_list` with default sizes and emission on.
    pub fn new(word_list: Arc<WordList>) -> Self {
        CompoundSplitFilter {
            word_list,
            hyphenation: None,
            min_word_size: DEFAULT_MIN_WORD_SIZE,
            min_subword_size: DEFAULT_MIN_SUBWORD_SIZE,
            emit_primary: true,
        }
    }

    pub fn from_config(
        config: &DecompoundConfig,
        word_list: Arc<WordList>,
        hyphenation: Option<Arc<HyphenationTree>>,
    ) -> Self {
        CompoundSplitFilter {
            word_list,
            hyphenation,
            min_word_size: config.min_word_size,
            min_subword_size: config.min_subword_size,
            emit_primary: config.emit_primary,
        }
    }

    /// Restrict split candidates to hyphenation break points.
    pub fn with_hyphenation(mut self, hyphenation: Arc<HyphenationTree>) -> Self {
        self.hyphenation = Some(hyphenation);
        self
    }

    pub fn with_min_word_size(mut self, min_word_size: usize) -> Self {
        self.min_word_size = min_word_size;
        self
    }

    pub fn with_min_subword_size(mut self, min_subword_size: usize) -> Self {
        self.min_subword_size = min_subword_size;
        self
    }

    /// Whether to surface the head as a stacked token.
    pub fn with_emit_primary(mut self, emit_primary: bool) -> Self {
        self.emit_primary = emit_primary;
        self
    }

    /// Find where the head of `word` starts.
    ///
    /// The leftmost candidate whose lowercase suffix is a dictionary word wins,
    /// which yields the longest head.
    fn find_head(&self, word: &[char], scratch: &mut SplitScratch) -> Option<usize> {
        let n = word.len();
        let min_sub = self.min_subword_size.max(1);
        if n < self.min_word_size || n < min_sub.saturating_mul(2) {
            return None;
        }

        scratch.lower.clear();
        scratch
            .lower
            .extend(word.iter().map(|c| c.to_lowercase().next().unwrap_or(*c)));

        // Heads longer than any dictionary word cannot match.
        let shortest_start = n.saturating_sub(self.word_list.max_word_chars()).max(min_sub);
        let last_start = n - min_sub;

        scratch.candidates.clear();
        match &self.hyphenation {
            Some(tree) => {
                tree.break_points(word, &mut scratch.hyphenation, &mut scratch.breaks);
                scratch.candidates.extend(
                    scratch
                        .breaks
                        .iter()
                        .copied()
                        .filter(|&p| p >= shortest_start && p <= last_start),
                );
            }
            None if shortest_start <= last_start => {
                scratch.candidates.extend(shortest_start..=last_start);
            }
            None => {}
        }

        for &p in &scratch.candidates {
            scratch.key.clear();
            scratch.key.extend(&scratch.lower[p..]);
            if self.word_list.contains(&scratch.key) {
                return Some(p);
            }
        }
        None
    }
}

impl TokenFilter for CompoundSplitFilter {
    fn wrap<'a>(&'a self, input: Box<dyn TokenStream + 'a>) -> Box<dyn TokenStream + 'a> {
        Box::new(CompoundSplitTokenStream {
            filter: self,
            input,
            replay: ReplayEmitter::default(),
            lifecycle: StreamLifecycle::new(),
            scratch: SplitScratch::default(),
        })
    }

    fn name(&self) -> &'static str {
        "decompound"
    }
}

#[derive(Debug, Default)]
struct SplitScratch {
    lower: Vec<char>,
    head: Vec<char>,
    key: String,
    breaks: Vec<usize>,
    candidates: Vec<usize>,
    hyphenation: HyphenationScratch,
}

struct CompoundSplitTokenStream<'a> {
    filter: &'a CompoundSplitFilter,
    input: Box<dyn TokenStream + 'a>,
    replay: ReplayEmitter,
    lifecycle: StreamLifecycle,
    scratch: SplitScratch,
}

impl CompoundSplitTokenStream<'_> {
    fn record_head(&mut self, token: &mut ScratchToken) {
        if token.token_type != TokenType::Alphanum || token.attribute().has_primary() {
            return;
        }

        let attribute = token.attribute();
        let original = if attribute.original_len() > 0 {
            attribute.original_chars()
        } else {
            token.term()
        };
        if is_non_alphabetic(original, original.len()) {
            return;
        }
        let Some(start) = self.filter.find_head(original, &mut self.scratch) else {
            return;
        };

        let head = &mut self.scratch.head;
        head.clear();
        head.extend_from_slice(&original[start..]);
        if original[0].is_uppercase() {
            head[0] = head[0].to_uppercase().next().unwrap_or(head[0]);
        }

        let len = head.len();
        token.attribute_mut().set_primary(head, len);
    }
}

impl TokenStream for CompoundSplitTokenStream<'_> {
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

        self.record_head(token);
        if self.filter.emit_primary {
            arm_primary_replay(token, &mut self.replay);
        }
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
