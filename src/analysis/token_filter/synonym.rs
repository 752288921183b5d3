//! Synonym expansion filter.
//!
//! Every token with an entry in the [`SynonymTable`] is forwarded unchanged and
//! followed by its synonyms, stacked at the same position:
//!
//! ```text
//! Input:  "Bahn fährt"
//! Output: "Bahn" (pos 0), "eisenbahn" (pos 0, Synonym), "fährt" (pos 1)
//! ```
//!
//! Synonyms carry the offsets and primary word attribute of the token they
//! were derived from.

use std::sync::Arc;

use crate::analysis::replay::ReplayEmitter;
use crate::analysis::resource::SynonymTable;
use crate::analysis::token::{ScratchToken, TokenType};
use crate::analysis::token_filter::TokenFilter;
use crate::analysis::token_stream::{StreamLifecycle, TokenStream};
use crate::error::Result;

/// A filter that stacks synonyms on matching tokens.
#[derive(Clone, Debug)]
pub struct SynonymFilter {
    synonyms: Arc<SynonymTable>,
}

impl SynonymFilter {
    pub fn new(synonyms: Arc<SynonymTable>) -> Self {
        SynonymFilter { synonyms }
    }
}

impl TokenFilter for SynonymFilter {
    fn wrap<'a>(&'a self, input: Box<dyn TokenStream + 'a>) -> Box<dyn TokenStream + 'a> {
        Box::new(SynonymTokenStream {
            synonyms: &self.synonyms,
            input,
            lifecycle: StreamLifecycle::new(),
            key: String::new(),
            saved: ScratchToken::new(),
            pending: None,
            next: 0,
            replay: ReplayEmitter::default(),
        })
    }

    fn name(&self) -> &'static str {
        "synonym"
    }
}

struct SynonymTokenStream<'a> {
    synonyms: &'a SynonymTable,
    input: Box<dyn TokenStream + 'a>,
    lifecycle: StreamLifecycle,
    key: String,
    /// State of the token the pending synonyms belong to.
    saved: ScratchToken,
    pending: Option<&'a [Box<[char]>]>,
    next: usize,
    replay: ReplayEmitter,
}

impl SynonymTokenStream<'_> {
    fn emit_pending(&mut self, token: &mut ScratchToken) -> Result<bool> {
        let Some(pending) = self.pending else {
            return Ok(false);
        };
        let Some(synonym) = pending.get(self.next) else {
            self.pending = None;
            return Ok(false);
        };
        self.next += 1;

        self.saved.copy_into(token);
        self.replay.rearm(synonym, synonym.len());
        self.replay.reset()?;
        if !self.replay.advance(token)? {
            return Ok(false);
        }
        token.position_increment = 0;
        token.token_type = TokenType::Synonym;
        Ok(true)
    }
}

impl TokenStream for SynonymTokenStream<'_> {
    fn reset(&mut self) -> Result<()> {
        self.lifecycle.reset()?;
        self.pending = None;
        self.next = 0;
        self.replay.disarm();
        self.input.reset()
    }

    fn advance(&mut self, token: &mut ScratchToken) -> Result<bool> {
        if !self.lifecycle.can_advance()? {
            return Ok(false);
        }
        if self.emit_pending(token)? {
            return Ok(true);
        }
        if !self.input.advance(token)? {
            self.lifecycle.exhaust();
            return Ok(false);
        }
        if token.token_type == TokenType::Num {
            return Ok(true);
        }

        self.key.clear();
        self.key
            .extend(token.term().iter().flat_map(|c| c.to_lowercase()));
        if let Some(synonyms) = self.synonyms.get_synonyms(&self.key) {
            token.copy_into(&mut self.saved);
            self.pending = Some(synonyms);
            self.next = 0;
        }
        Ok(true)
    }

    fn end(&mut self, token: &mut ScratchToken) -> Result<()> {
        self.lifecycle.end()?;
        self.input.end(token)
    }

    fn close(&mut self) -> Result<()> {
        self.lifecycle.close();
        self.pending = None;
        self.replay.close()?;
        self.input.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::test_support::{assert_rejects_misuse, collect, texts};
    use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};

    fn table() -> Arc<SynonymTable> {
        Arc::new(SynonymTable::from_synonym_groups([
            vec!["bahn", "eisenbahn"],
            vec!["auto", "wagen", "pkw"],
        ]))
    }

    #[test]
    fn test_synonyms_stack_at_same_position() {
        let tokenizer = WordTokenizer::new();
        let filter = SynonymFilter::new(table());
        let tokens = collect(filter.wrap(tokenizer.token_stream("Auto fährt")));

        assert_eq!(texts(&tokens), vec!["Auto", "wagen", "pkw", "fährt"]);
        for synonym in &tokens[1..3] {
            assert_eq!(synonym.position, 0);
            assert_eq!(synonym.position_increment, 0);
            assert_eq!(synonym.token_type, TokenType::Synonym);
            assert_eq!(synonym.start_offset, 0);
            assert_eq!(synonym.end_offset, 4);
            assert_eq!(synonym.original_text.as_deref(), Some("Auto"));
        }
        assert_eq!(tokens[3].position, 1);
    }

    #[test]
    fn test_no_synonyms() {
        let tokenizer = WordTokenizer::new();
        let filter = SynonymFilter::new(table());
        let tokens = collect(filter.wrap(tokenizer.token_stream("Haus 42")));

        assert_eq!(texts(&tokens), vec!["Haus", "42"]);
    }

    #[test]
    fn test_consecutive_matches() {
        let tokenizer = WordTokenizer::new();
        let filter = SynonymFilter::new(table());
        let tokens = collect(filter.wrap(tokenizer.token_stream("bahn bahn")));

        assert_eq!(texts(&tokens), vec!["bahn", "eisenbahn", "bahn", "eisenbahn"]);
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 0, 1, 1]);
    }

    #[test]
    fn test_reset_drops_pending_synonyms() {
        let tokenizer = WordTokenizer::new();
        let filter = SynonymFilter::new(table());
        let mut stream = filter.wrap(tokenizer.token_stream("Auto"));
        let mut token = ScratchToken::new();

        stream.reset().unwrap();
        assert!(stream.advance(&mut token).unwrap());
        stream.reset().unwrap();
        assert!(stream.advance(&mut token).unwrap());
        assert_eq!(token.term_text(), "Auto");
        assert_eq!(token.position_increment, 1);
    }

    #[test]
    fn test_protocol_misuse_is_rejected() {
        assert_rejects_misuse(&SynonymFilter::new(table()));
    }
}
