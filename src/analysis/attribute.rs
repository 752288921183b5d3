//! Original/primary word attribute carried by every token position.
//!
//! A [`PrimaryWordAttribute`] tracks two representations of the current token:
//! the verbatim surface form read by the tokenizer (`original`) and the
//! normalized or decomposed form filled in by a later stage (`primary`, e.g.
//! the head of a German compound). The `emitted` flag records that the primary
//! form has already been surfaced for this position, so that several stages
//! that may each emit it never do so twice.
//!
//! One instance is reused for every token of a stream. [`clear`] resets the
//! logical lengths but keeps the buffers, which therefore settle at the longest
//! token seen so far and stop allocating after warm-up.
//!
//! ```text
//!   Empty ──set_original/set_primary──▶ Populated ──set_emitted(true)──▶ Emitted
//!     ▲                                                                  │
//!     └────────────────────────────── clear() ──────────────────────────┘
//! ```
//!
//! [`clear`]: PrimaryWordAttribute::clear

use crate::util::char_buffer::{buffers_equal, copy_into_buffer, ensure_capacity};

/// Phase of the attribute state machine for the current token position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributePhase {
    /// Freshly created or cleared.
    Empty,
    /// At least one of the two forms has been set.
    Populated,
    /// The primary form has been surfaced for this position.
    Emitted,
}

/// Dual-buffer token state: original surface form, primary word, emission flag.
///
/// # Examples
///
/// ```
/// use decompound::analysis::attribute::{AttributePhase, PrimaryWordAttribute};
///
/// let original: Vec<char> = "Bundesbahn".chars().collect();
/// let primary: Vec<char> = "Bahn".chars().collect();
///
/// let mut attr = PrimaryWordAttribute::new();
/// attr.set_original(&original, original.len());
/// attr.set_primary(&primary, primary.len());
/// attr.set_emitted(true);
/// assert_eq!(attr.phase(), AttributePhase::Emitted);
///
/// attr.clear();
/// assert_eq!(attr.phase(), AttributePhase::Empty);
/// assert!(attr.original_capacity() >= 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PrimaryWordAttribute {
    original: Box<[char]>,
    original_len: usize,
    primary: Box<[char]>,
    primary_len: usize,
    emitted: bool,
}

impl PrimaryWordAttribute {
    /// Create an empty attribute without allocating.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the surface form: the first `len` chars of `data`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds `data`.
    pub fn set_original(&mut self, data: &[char], len: usize) {
        self.original = copy_into_buffer(std::mem::take(&mut self.original), data, len);
        self.original_len = len;
    }

    /// Record the primary word: the first `len` chars of `data`.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds `data`.
    pub fn set_primary(&mut self, data: &[char], len: usize) {
        self.primary = copy_into_buffer(std::mem::take(&mut self.primary), data, len);
        self.primary_len = len;
    }

    /// The whole original buffer. Only the first [`original_len`] chars are valid.
    ///
    /// [`original_len`]: Self::original_len
    pub fn original(&self) -> &[char] {
        &self.original
    }

    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// The valid prefix of the original buffer.
    pub fn original_chars(&self) -> &[char] {
        &self.original[..self.original_len]
    }

    /// The whole primary buffer. Only the first [`primary_len`] chars are valid.
    ///
    /// [`primary_len`]: Self::primary_len
    pub fn primary(&self) -> &[char] {
        &self.primary
    }

    pub fn primary_len(&self) -> usize {
        self.primary_len
    }

    /// The valid prefix of the primary buffer.
    pub fn primary_chars(&self) -> &[char] {
        &self.primary[..self.primary_len]
    }

    pub fn has_primary(&self) -> bool {
        self.primary_len > 0
    }

    /// Whether the primary word has been surfaced for the current position.
    pub fn is_emitted(&self) -> bool {
        self.emitted
    }

    /// Set the emission flag.
    ///
    /// Marking an emitted attribute again is a no-op, as is clearing a flag that
    /// was never set.
    ///
    /// The flag only says something about a primary word while one is set;
    /// consumers check [`has_primary`](Self::has_primary) before acting on it.
    ///
    /// # Panics
    ///
    /// Panics when un-emitting: a stage that needs another derived form must
    /// emit it as a new position.
    pub fn set_emitted(&mut self, emitted: bool) {
        if !emitted {
            assert!(
                !self.emitted,
                "an emitted primary word cannot be un-emitted before clear()"
            );
        }
        self.emitted = emitted;
    }

    /// Reset to the empty phase for the next token position.
    ///
    /// Buffers keep their capacity.
    pub fn clear(&mut self) {
        self.original_len = 0;
        self.primary_len = 0;
        self.emitted = false;
    }

    /// Copy the observable state into `other`.
    ///
    /// `other`'s buffers are reallocated only when undersized; otherwise their
    /// storage is overwritten in place. Afterwards both instances report the
    /// same lengths, logical content and emission flag.
    pub fn copy_into(&self, other: &mut PrimaryWordAttribute) {
        other.original = ensure_capacity(std::mem::take(&mut other.original), self.original_len);
        other.original[..self.original_len].copy_from_slice(self.original_chars());
        other.original_len = self.original_len;

        other.primary = ensure_capacity(std::mem::take(&mut other.primary), self.primary_len);
        other.primary[..self.primary_len].copy_from_slice(self.primary_chars());
        other.primary_len = self.primary_len;

        other.emitted = self.emitted;
    }

    /// Current phase of the per-position state machine.
    pub fn phase(&self) -> AttributePhase {
        if self.emitted {
            AttributePhase::Emitted
        } else if self.original_len > 0 || self.primary_len > 0 {
            AttributePhase::Populated
        } else {
            AttributePhase::Empty
        }
    }

    pub fn original_capacity(&self) -> usize {
        self.original.len()
    }

    pub fn primary_capacity(&self) -> usize {
        self.primary.len()
    }

    /// Whether the primary word equals `chars`.
    pub fn primary_equals(&self, chars: &[char]) -> bool {
        self.primary_len == chars.len()
            && buffers_equal(Some(&self.primary[..]), Some(chars), self.primary_len)
    }
}

impl PartialEq for PrimaryWordAttribute {
    /// Attributes are equal when their observable state is, whatever their capacity.
    fn eq(&self, other: &Self) -> bool {
        self.original_len == other.original_len
            && self.primary_len == other.primary_len
            && self.emitted == other.emitted
            && buffers_equal(
                Some(&self.original[..]),
                Some(&other.original[..]),
                self.original_len,
            )
            && buffers_equal(
                Some(&self.primary[..]),
                Some(&other.primary[..]),
                self.primary_len,
            )
    }
}

impl Eq for PrimaryWordAttribute {}
