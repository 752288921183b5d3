//! Light stemmer for German.
//!
//! Folds umlauts and accented vowels, then strips inflectional suffixes in two
//! passes. It never looks anything up, so irregular forms (*Mütter*, *ging*)
//! belong in a [`StemExceptions`](crate::analysis::resource::StemExceptions)
//! table.

use crate::analysis::token_filter::stem::Stemmer;

/// Light German stemmer working in place on lowercase text.
#[derive(Debug, Clone, Default)]
pub struct GermanLightStemmer;

impl GermanLightStemmer {
    pub fn new() -> Self {
        GermanLightStemmer
    }

    fn fold(c: char) -> char {
        match c {
            'ä' | 'à' | 'á' | 'â' => 'a',
            'ö' | 'ò' | 'ó' | 'ô' => 'o',
            'ï' | 'ì' | 'í' | 'î' => 'i',
            'ü' | 'ù' | 'ú' | 'û' => 'u',
            _ => c,
        }
    }

    /// Consonants that may precede an inflectional `s` or `st`.
    fn st_ending(c: char) -> bool {
        matches!(c, 'b' | 'd' | 'f' | 'g' | 'h' | 'k' | 'l' | 'm' | 'n' | 't')
    }

    fn step1(s: &[char], len: usize) -> usize {
        if len > 5 && s[len - 3] == 'e' && s[len - 2] == 'r' && s[len - 1] == 'n' {
            return len - 3;
        }
        if len > 4 && s[len - 2] == 'e' && matches!(s[len - 1], 'm' | 'n' | 'r' | 's') {
            return len - 2;
        }
        if len > 3 && s[len - 1] == 'e' {
            return len - 1;
        }
        if len > 3 && s[len - 1] == 's' && Self::st_ending(s[len - 2]) {
            return len - 1;
        }
        len
    }

    fn step2(s: &[char], len: usize) -> usize {
        if len > 5 && s[len - 3] == 'e' && s[len - 2] == 's' && s[len - 1] == 't' {
            return len - 3;
        }
        if len > 4 && s[len - 2] == 'e' && matches!(s[len - 1], 'r' | 'n') {
            return len - 2;
        }
        if len > 4 && s[len - 2] == 's' && s[len - 1] == 't' && Self::st_ending(s[len - 3]) {
            return len - 2;
        }
        len
    }
}

impl Stemmer for GermanLightStemmer {
    fn stem(&self, buffer: &mut [char], len: usize) -> usize {
        let word = &mut buffer[..len];
        for c in word.iter_mut() {
            *c = Self::fold(*c);
        }
        let len = Self::step1(word, len);
        Self::step2(word, len)
    }

    fn name(&self) -> &'static str {
        "german_light"
    }
}
