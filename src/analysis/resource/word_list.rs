//! Dictionary word list used for compound splitting.

use std::path::Path;

use ahash::AHashSet;

use crate::analysis::resource::{LoadResource, ResourceKind, content_lines, read_resource};
use crate::error::Result;

/// A set of lowercase dictionary words.
///
/// File format: one word per line, `#` starts a comment line.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: AHashSet<String>,
    max_word_chars: usize,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a word list from in-memory words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = WordList::new();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Parse the word list file format.
    pub fn parse(content: &str) -> Self {
        let mut list = WordList::new();
        for (_, line) in content_lines(content, '#') {
            list.insert(line);
        }
        list
    }

    pub fn insert(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        self.max_word_chars = self.max_word_chars.max(word.chars().count());
        self.words.insert(word);
    }

    /// Exact lookup of an already lowercased word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Length in chars of the longest word.
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }
}

impl LoadResource for WordList {
    const KIND: ResourceKind = ResourceKind::WordList;

    fn load(path: &Path) -> Result<Self> {
        let content = read_resource(Self::KIND, path)?;
        Ok(Self::parse(&content))
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
