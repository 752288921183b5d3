//! Stem exception table: words whose stem is fixed rather than computed.

use std::path::Path;

use ahash::AHashMap;

use crate::analysis::resource::{LoadResource, ResourceKind, content_lines, read_resource};
use crate::error::{DecompoundError, Result};

/// Maps lowercase words to their fixed stems.
///
/// File format, one entry per line, `#` starts a comment line:
///
/// ```text
/// häuser<TAB>haus
/// mütter => mutter
/// ```
#[derive(Debug, Clone, Default)]
pub struct StemExceptions {
    entries: AHashMap<String, Box<[char]>>,
}

impl StemExceptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(word, stem)` pairs. Words are lowercased.
    pub fn from_pairs<I, W, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (W, S)>,
        W: AsRef<str>,
        S: AsRef<str>,
    {
        let mut table = StemExceptions::new();
        for (word, stem) in pairs {
            table.insert(word.as_ref(), stem.as_ref());
        }
        table
    }

    /// Parse the exception file format.
    pub fn parse(content: &str) -> Result<Self> {
        let mut table = StemExceptions::new();
        for (line_no, line) in content_lines(content, '#') {
            let (word, stem) = line
                .split_once('\t')
                .or_else(|| line.split_once("=>"))
                .ok_or_else(|| {
                    DecompoundError::parse(format!(
                        "line {line_no}: expected 'word<TAB>stem' or 'word => stem', got '{line}'"
                    ))
                })?;
            let (word, stem) = (word.trim(), stem.trim());
            if word.is_empty() || stem.is_empty() {
                return Err(DecompoundError::parse(format!(
                    "line {line_no}: empty word or stem"
                )));
            }
            table.insert(word, stem);
        }
        Ok(table)
    }

    pub fn insert(&mut self, word: &str, stem: &str) {
        self.entries
            .insert(word.to_lowercase(), stem.chars().collect());
    }

    /// The fixed stem of an already lowercased word.
    pub fn get(&self, word: &str) -> Option<&[char]> {
        self.entries.get(word).map(|stem| &stem[..])
    }
}

impl LoadResource for StemExceptions {
    const KIND: ResourceKind = ResourceKind::StemExceptions;

    fn load(path: &Path) -> Result<Self> {
        let content = read_resource(Self::KIND, path)?;
        Self::parse(&content)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
