//! Hyphenation patterns (Liang's algorithm) proposing compound split points.
//!
//! Patterns use the TeX notation: letters interleaved with digits, `.` marks a
//! word boundary. `s1b` allows a break between `s` and `b`, `2bb` forbids one
//! before `bb`. For each position the highest digit of all matching patterns
//! wins and odd values allow a break.

use std::path::Path;

use ahash::AHashMap;

use crate::analysis::resource::{LoadResource, ResourceKind, content_lines, read_resource};
use crate::error::{DecompoundError, Result};

/// Minimum chars before the first break.
pub const DEFAULT_LEFT_MIN: usize = 2;
/// Minimum chars after the last break.
pub const DEFAULT_RIGHT_MIN: usize = 2;

/// Reusable buffers for [`HyphenationTree::break_points`].
#[derive(Debug, Default)]
pub struct HyphenationScratch {
    key: String,
    word: Vec<char>,
    points: Vec<u8>,
}

/// Compiled hyphenation patterns.
#[derive(Debug, Clone)]
pub struct HyphenationTree {
    patterns: AHashMap<String, Box<[u8]>>,
    max_pattern_chars: usize,
    left_min: usize,
    right_min: usize,
}

impl Default for HyphenationTree {
    fn default() -> Self {
        HyphenationTree {
            patterns: AHashMap::new(),
            max_pattern_chars: 0,
            left_min: DEFAULT_LEFT_MIN,
            right_min: DEFAULT_RIGHT_MIN,
        }
    }
}

impl HyphenationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from individual patterns.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tree = HyphenationTree::new();
        for pattern in patterns {
            tree.add_pattern(pattern.as_ref())?;
        }
        Ok(tree)
    }

    /// Parse a pattern file: whitespace-separated patterns, `%` comment lines.
    ///
    /// TeX wrapper lines such as `\patterns{` and `}` are skipped.
    pub fn parse(content: &str) -> Result<Self> {
        let mut tree = HyphenationTree::new();
        for (line_no, line) in content_lines(content, '%') {
            for pattern in line.split_whitespace() {
                if pattern.contains(['\\', '{', '}']) {
                    continue;
                }
                tree.add_pattern(pattern)
                    .map_err(|e| DecompoundError::parse(format!("line {line_no}: {e}")))?;
            }
        }
        Ok(tree)
    }

    pub fn with_min(mut self, left_min: usize, right_min: usize) -> Self {
        self.left_min = left_min;
        self.right_min = right_min;
        self
    }

    /// Add one pattern such as `.ab1c` or `n1d`.
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let mut letters = String::new();
        let mut values = vec![0u8];

        for c in pattern.chars() {
            if let Some(digit) = c.to_digit(10) {
                let last = values.len() - 1;
                values[last] = digit as u8;
            } else {
                letters.push(c.to_lowercase().next().unwrap_or(c));
                values.push(0);
            }
        }

        if letters.is_empty() {
            return Err(DecompoundError::parse(format!(
                "hyphenation pattern '{pattern}' has no letters"
            )));
        }

        self.max_pattern_chars = self.max_pattern_chars.max(values.len() - 1);
        self.patterns.insert(letters, values.into_boxed_slice());
        Ok(())
    }

    /// Collect the break points of `word` into `out`, in ascending order.
    ///
    /// A break point `p` allows splitting before `word[p]`. Matching is case
    /// insensitive.
    pub fn break_points(&self, word: &[char], scratch: &mut HyphenationScratch, out: &mut Vec<usize>) {
        out.clear();
        let n = word.len();
        if self.patterns.is_empty() || n < self.left_min + self.right_min {
            return;
        }

        scratch.word.clear();
        scratch.word.push('.');
        scratch
            .word
            .extend(word.iter().map(|c| c.to_lowercase().next().unwrap_or(*c)));
        scratch.word.push('.');

        let w = &scratch.word;
        scratch.points.clear();
        scratch.points.resize(w.len() + 1, 0);

        for i in 0..w.len() {
            scratch.key.clear();
            for j in i..w.len().min(i + self.max_pattern_chars) {
                scratch.key.push(w[j]);
                if let Some(values) = self.patterns.get(scratch.key.as_str()) {
                    for (k, &value) in values.iter().enumerate() {
                        let point = &mut scratch.points[i + k];
                        *point = (*point).max(value);
                    }
                }
            }
        }

        let first = self.left_min.max(1);
        let last = n.saturating_sub(self.right_min);
        for p in first..=last {
            if scratch.points[p + 1] % 2 == 1 {
                out.push(p);
            }
        }
    }

    /// Convenience wrapper around [`break_points`](Self::break_points).
    pub fn hyphenate(&self, word: &str) -> Vec<usize> {
        let chars: Vec<char> = word.chars().collect();
        let mut out = Vec::new();
        self.break_points(&chars, &mut HyphenationScratch::default(), &mut out);
        out
    }
}

impl LoadResource for HyphenationTree {
    const KIND: ResourceKind = ResourceKind::Hyphenation;

    fn load(path: &Path) -> Result<Self> {
        let content = read_resource(Self::KIND, path)?;
        Self::parse(&content)
    }

    fn len(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_patterns() {
        let tree = HyphenationTree::from_patterns(["n1d", "s1b"]).unwrap();

        assert_eq!(tree.hyphenate("bundesbahn"), vec![3, 6]);
        assert_eq!(tree.hyphenate("Bundesbahn"), vec![3, 6]);
    }

    #[test]
    fn test_higher_even_value_suppresses_break() {
        let tree = HyphenationTree::from_patterns(["s1b", "s2ba"]).unwrap();
        assert!(tree.hyphenate("bundesbahn").is_empty());
    }

    #[test]
    fn test_word_boundary_patterns() {
        let tree = HyphenationTree::from_patterns([".bun1"]).unwrap();
        assert_eq!(tree.hyphenate("bundesbahn"), vec![3]);
        // Not at the start of the word, so no match.
        assert!(tree.hyphenate("abundes").is_empty());
    }

    #[test]
    fn test_left_and_right_min() {
        let tree = HyphenationTree::from_patterns(["a1b", "y1z"]).unwrap();
        // Breaks after the first char or before the last one are never reported.
        assert!(tree.hyphenate("abxyz").is_empty());

        let tree = tree.with_min(1, 1);
        assert_eq!(tree.hyphenate("abxyz"), vec![1, 4]);
    }

    #[test]
    fn test_pattern_with_expanding_lowercase() {
        // 'İ' lowercases to two chars; only the first one takes part in matching.
        let tree = HyphenationTree::from_patterns(["İ1s"]).unwrap();

        assert_eq!(tree.hyphenate("kiste"), vec![2]);
        assert_eq!(tree.hyphenate("KİSTE"), vec![2]);
    }

    #[test]
    fn test_parse() {
        let content = "% German sample\n\\patterns{\nn1d s1b\n}\n";
        let tree = HyphenationTree::parse(content).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.hyphenate("bundesbahn"), vec![3, 6]);
    }

    #[test]
    fn test_pattern_without_letters_is_rejected() {
        assert!(HyphenationTree::from_patterns(["12"]).is_err());
        assert!(HyphenationTree::parse("1\n").is_err());
    }

    #[test]
    fn test_scratch_is_reusable() {
        let tree = HyphenationTree::from_patterns(["n1d", "s1b"]).unwrap();
        let mut scratch = HyphenationScratch::default();
        let mut out = Vec::new();

        let word: Vec<char> = "bundesbahn".chars().collect();
        tree.break_points(&word, &mut scratch, &mut out);
        assert_eq!(out, vec![3, 6]);

        let word: Vec<char> = "haus".chars().collect();
        tree.break_points(&word, &mut scratch, &mut out);
        assert!(out.is_empty());
    }
}
