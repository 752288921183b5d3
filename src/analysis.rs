//! Text analysis module.
//!
//! Tokenization, the primary word attribute, token filters and analysis
//! pipelines, plus the read-only resources the filters consult.

pub mod analyzer;
pub mod attribute;
pub mod replay;
pub mod resource;
pub mod token;
pub mod token_filter;
pub mod token_stream;
pub mod tokenizer;
