//! Unicode word tokenizer implementation.
//!
//! Splits text on Unicode word boundaries (UAX #29) and keeps the segments
//! containing at least one alphanumeric char, so punctuation and whitespace
//! never become tokens.

use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

use crate::analysis::token::{ScratchToken, TokenType};
use crate::analysis::token_stream::{StreamLifecycle, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Default limit on token length in chars.
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug)]
pub struct WordTokenizer {
    max_token_length: usize,
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer {
            max_token_length: DEFAULT_MAX_TOKEN_LENGTH,
        }
    }

    /// Drop tokens longer than `max_token_length` chars.
    pub fn with_max_token_length(mut self, max_token_length: usize) -> Self {
        self.max_token_length = max_token_length;
        self
    }

    fn detect_token_type(word: &str) -> TokenType {
        if word.chars().all(|c| c.is_numeric()) {
            TokenType::Num
        } else {
            TokenType::Alphanum
        }
    }
}

impl Tokenizer for WordTokenizer {
    fn token_stream<'a>(&'a self, text: &'a str) -> Box<dyn TokenStream + 'a> {
        Box::new(WordTokenStream {
            text,
            segments: None,
            max_token_length: self.max_token_length,
            lifecycle: StreamLifecycle::new(),
        })
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

/// Stream produced by [`WordTokenizer`].
pub struct WordTokenStream<'a> {
    text: &'a str,
    segments: Option<UWordBoundIndices<'a>>,
    max_token_length: usize,
    lifecycle: StreamLifecycle,
}

impl TokenStream for WordTokenStream<'_> {
    fn reset(&mut self) -> Result<()> {
        self.lifecycle.reset()?;
        self.segments = Some(self.text.split_word_bound_indices());
        Ok(())
    }

    fn advance(&mut self, token: &mut ScratchToken) -> Result<bool> {
        if !self.lifecycle.can_advance()? {
            return Ok(false);
        }

        let Some(segments) = self.segments.as_mut() else {
            self.lifecycle.exhaust();
            return Ok(false);
        };

        for (offset, segment) in segments.by_ref() {
            if !segment.chars().any(|c| c.is_alphanumeric()) {
                continue;
            }
            if segment.chars().count() > self.max_token_length {
                continue;
            }

            token.clear();
            token.set_term_str(segment);
            token.start_offset = offset;
            token.end_offset = offset + segment.len();
            token.token_type = WordTokenizer::detect_token_type(segment);
            token.record_original();
            return Ok(true);
        }

        self.lifecycle.exhaust();
        Ok(false)
    }

    fn end(&mut self, token: &mut ScratchToken) -> Result<()> {
        self.lifecycle.end()?;
        token.clear();
        token.start_offset = self.text.len();
        token.end_offset = self.text.len();
        token.position_increment = 0;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.lifecycle.close();
        self.segments = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;
    use crate::error::DecompoundError;

    fn collect(tokenizer: &WordTokenizer, text: &str) -> Vec<Token> {
        let mut stream = tokenizer.token_stream(text);
        let mut token = ScratchToken::new();
        let mut tokens = Vec::new();

        stream.reset().unwrap();
        let mut position = 0;
        while stream.advance(&mut token).unwrap() {
            tokens.push(token.snapshot(position));
            position += 1;
        }
        stream.end(&mut token).unwrap();
        stream.close().unwrap();
        tokens
    }

    #[test]
    fn test_word_tokenizer() {
        let tokens = collect(&WordTokenizer::new(), "Die Bundesbahn, 1994 gegründet!");

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Die", "Bundesbahn", "1994", "gegründet"]);

        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 14);
        assert_eq!(tokens[1].original_text.as_deref(), Some("Bundesbahn"));
        assert_eq!(tokens[1].token_type, TokenType::Alphanum);
        assert_eq!(tokens[2].token_type, TokenType::Num);
    }

    #[test]
    fn test_byte_offsets_with_umlauts() {
        let tokens = collect(&WordTokenizer::new(), "Größe Maß");

        assert_eq!(tokens[0].text, "Größe");
        assert_eq!(tokens[0].end_offset, "Größe".len());
        assert_eq!(tokens[1].start_offset, "Größe ".len());
    }

    #[test]
    fn test_max_token_length() {
        let tokenizer = WordTokenizer::new().with_max_token_length(4);
        let tokens = collect(&tokenizer, "Haus Bundesbahn Zug");

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Haus", "Zug"]);
    }

    #[test]
    fn test_exhausted_stays_exhausted() {
        let tokenizer = WordTokenizer::new();
        let mut stream = tokenizer.token_stream("Haus");
        let mut token = ScratchToken::new();

        stream.reset().unwrap();
        assert!(stream.advance(&mut token).unwrap());
        assert!(!stream.advance(&mut token).unwrap());
        assert!(!stream.advance(&mut token).unwrap());

        // A new cycle starts over.
        stream.reset().unwrap();
        assert!(stream.advance(&mut token).unwrap());
        assert_eq!(token.term_text(), "Haus");
    }

    #[test]
    fn test_end_sets_final_offset() {
        let tokenizer = WordTokenizer::new();
        let mut stream = tokenizer.token_stream("Haus ");
        let mut token = ScratchToken::new();

        stream.reset().unwrap();
        while stream.advance(&mut token).unwrap() {}
        stream.end(&mut token).unwrap();

        assert_eq!(token.end_offset, 5);
        assert_eq!(token.position_increment, 0);
    }

    #[test]
    fn test_protocol_misuse() {
        let tokenizer = WordTokenizer::new();
        let mut stream = tokenizer.token_stream("Haus");
        let mut token = ScratchToken::new();

        let err = stream.advance(&mut token).unwrap_err();
        assert!(matches!(err, DecompoundError::StreamProtocol(_)));

        stream.reset().unwrap();
        stream.close().unwrap();
        assert!(stream.advance(&mut token).is_err());
    }

    #[test]
    fn test_buffers_stabilize() {
        let tokenizer = WordTokenizer::new();
        let mut stream = tokenizer.token_stream("Donaudampfschiff Haus Zug");
        let mut token = ScratchToken::new();

        stream.reset().unwrap();
        assert!(stream.advance(&mut token).unwrap());
        let capacity = token.term_capacity();
        while stream.advance(&mut token).unwrap() {
            assert_eq!(token.term_capacity(), capacity);
            assert_eq!(token.attribute().original_capacity(), capacity);
        }
    }
}
