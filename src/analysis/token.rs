//! Token types for text analysis.
//!
//! Two representations exist:
//!
//! - [`ScratchToken`] - the reusable carrier every stage of one stream reads and
//!   writes in place. It owns the term buffer, offsets, position increment and
//!   the [`PrimaryWordAttribute`]. Its buffers only grow, so a stream stops
//!   allocating once it has seen its longest token.
//! - [`Token`] - an owned snapshot handed to consumers once a position has
//!   passed through the whole pipeline.
//!
//! # Token Graphs
//!
//! Derived forms share the position of the token they were derived from:
//!
//! ```text
//! Input: "Bundesbahn"
//!
//!   Position 0: "Bundesbahn" (pos_inc=1)
//!   Position 0: "Bahn"       (pos_inc=0)  ← replayed primary word
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::attribute::PrimaryWordAttribute;
use crate::util::char_buffer::{copy_into_buffer, ensure_capacity};

/// Token type classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenType {
    /// Alphanumeric text
    Alphanum,
    /// Numeric values
    Num,
    /// Primary word replayed at the position of its compound
    PrimaryWord,
    /// Synonym token (generated by SynonymFilter)
    Synonym,
}

/// An owned, analyzed token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token (0 for stacked forms)
    pub position_increment: usize,

    /// Token type classification
    pub token_type: TokenType,

    /// The surface form as read by the tokenizer
    pub original_text: Option<String>,

    /// The primary word recorded for this position, if any
    pub primary_word: Option<String>,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// The reusable per-stream token carrier.
///
/// Stages receive it as `&mut ScratchToken` on every `advance`; nothing may be
/// retained past the next [`clear`](ScratchToken::clear). Only the first
/// [`term_len`](ScratchToken::term_len) chars of the term buffer are valid.
#[derive(Clone, Debug)]
pub struct ScratchToken {
    term: Box<[char]>,
    term_len: usize,

    /// Byte offset of the token start in the analyzed text
    pub start_offset: usize,

    /// Byte offset of the token end in the analyzed text
    pub end_offset: usize,

    /// Position increment from the previous token
    pub position_increment: usize,

    /// Token type classification
    pub token_type: TokenType,

    attribute: PrimaryWordAttribute,
}

impl Default for ScratchToken {
    fn default() -> Self {
        Self::new()
    }
}

impl ScratchToken {
    /// Create an empty scratch token without allocating.
    pub fn new() -> Self {
        ScratchToken {
            term: Box::default(),
            term_len: 0,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            token_type: TokenType::Alphanum,
            attribute: PrimaryWordAttribute::new(),
        }
    }

    /// Start a new token position. Buffers keep their capacity.
    pub fn clear(&mut self) {
        self.term_len = 0;
        self.start_offset = 0;
        self.end_offset = 0;
        self.position_increment = 1;
        self.token_type = TokenType::Alphanum;
        self.attribute.clear();
    }

    /// The valid term chars.
    pub fn term(&self) -> &[char] {
        &self.term[..self.term_len]
    }

    pub fn term_len(&self) -> usize {
        self.term_len
    }

    pub fn term_capacity(&self) -> usize {
        self.term.len()
    }

    /// The term as an owned string.
    pub fn term_text(&self) -> String {
        self.term().iter().collect()
    }

    /// Replace the term with `chars`.
    pub fn set_term(&mut self, chars: &[char]) {
        self.term = copy_into_buffer(std::mem::take(&mut self.term), chars, chars.len());
        self.term_len = chars.len();
    }

    /// Replace the term with the chars of `text`.
    pub fn set_term_str(&mut self, text: &str) {
        let len = text.chars().count();
        self.term = ensure_capacity(std::mem::take(&mut self.term), len);
        for (slot, c) in self.term.iter_mut().zip(text.chars()) {
            *slot = c;
        }
        self.term_len = len;
    }

    /// Grow the term buffer to at least `min_len` chars and expose all of it
    /// for in-place rewriting. Finish with [`set_term_len`](Self::set_term_len).
    pub fn term_buffer_mut(&mut self, min_len: usize) -> &mut [char] {
        self.term = ensure_capacity(std::mem::take(&mut self.term), min_len);
        &mut self.term
    }

    /// Set the logical term length after an in-place rewrite.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the term buffer.
    pub fn set_term_len(&mut self, len: usize) {
        assert!(
            len <= self.term.len(),
            "term length {len} exceeds buffer capacity {}",
            self.term.len()
        );
        self.term_len = len;
    }

    /// Record the current term as the token's original surface form.
    pub fn record_original(&mut self) {
        self.attribute
            .set_original(&self.term[..self.term_len], self.term_len);
    }

    pub fn attribute(&self) -> &PrimaryWordAttribute {
        &self.attribute
    }

    pub fn attribute_mut(&mut self) -> &mut PrimaryWordAttribute {
        &mut self.attribute
    }

    /// Copy the whole observable state into `other`, reusing its buffers when
    /// they are large enough.
    pub fn copy_into(&self, other: &mut ScratchToken) {
        other.term = ensure_capacity(std::mem::take(&mut other.term), self.term_len);
        other.term[..self.term_len].copy_from_slice(self.term());
        other.term_len = self.term_len;
        other.start_offset = self.start_offset;
        other.end_offset = self.end_offset;
        other.position_increment = self.position_increment;
        other.token_type = self.token_type;
        self.attribute.copy_into(&mut other.attribute);
    }

    /// Owned snapshot of the current position.
    pub fn snapshot(&self, position: usize) -> Token {
        let original_text = (self.attribute.original_len() > 0)
            .then(|| self.attribute.original_chars().iter().collect());
        let primary_word = self
            .attribute
            .has_primary()
            .then(|| self.attribute.primary_chars().iter().collect());

        Token {
            text: self.term_text(),
            position,
            start_offset: self.start_offset,
            end_offset: self.end_offset,
            position_increment: self.position_increment,
            token_type: self.token_type,
            original_text,
            primary_word,
        }
    }
}
