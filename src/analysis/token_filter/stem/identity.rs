//! Identity stemmer implementation.

use crate::analysis::token_filter::stem::Stemmer;

/// Identity stemmer that leaves words unchanged.
#[derive(Debug, Clone, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, _buffer: &mut [char], len: usize) -> usize {
        len
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_stemmer() {
        let stemmer = IdentityStemmer::new();
        let mut word: Vec<char> = "häuser".chars().collect();

        assert_eq!(stemmer.stem(&mut word, 6), 6);
        assert_eq!(word.iter().collect::<String>(), "häuser");
    }
}
