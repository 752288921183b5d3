//! Integration tests for primary word emission through full pipelines.

use std::sync::Arc;

use decompound::analysis::analyzer::{Analyzer, GermanAnalyzer, PipelineAnalyzer};
use decompound::analysis::attribute::AttributePhase;
use decompound::analysis::resource::{ResourceService, WordList};
use decompound::analysis::token::{ScratchToken, TokenType};
use decompound::analysis::token_filter::{
    CompoundSplitFilter, LowercaseFilter, PrimaryWordFilter, StemFilter,
};
use decompound::analysis::token_stream::TokenStream;
use decompound::analysis::tokenizer::WordTokenizer;
use decompound::config::AnalysisConfig;
use decompound::error::Result;

fn word_list() -> Arc<WordList> {
    Arc::new(WordList::from_words(["bahn", "schiff", "fahrt"]))
}

#[test]
fn test_bundesbahn_stacks_primary_word() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
        .add_filter(Arc::new(CompoundSplitFilter::new(word_list())));

    let tokens = analyzer.analyze("Bundesbahn")?;

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "Bundesbahn");
    assert_eq!(tokens[1].text, "Bahn");
    assert_eq!(tokens[0].position, tokens[1].position);
    assert_eq!(tokens[1].position_increment, 0);
    assert_eq!(tokens[1].token_type, TokenType::PrimaryWord);
    assert_eq!(tokens[1].start_offset, 0);
    assert_eq!(tokens[1].end_offset, 10);

    Ok(())
}

#[test]
fn test_emitted_until_next_position() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
        .add_filter(Arc::new(CompoundSplitFilter::new(word_list())))
        .add_filter(Arc::new(PrimaryWordFilter::new()));
    let mut stream = analyzer.token_stream("Bundesbahn fährt");
    let mut token = ScratchToken::new();

    stream.reset()?;

    assert!(stream.advance(&mut token)?);
    assert_eq!(token.term_text(), "Bundesbahn");
    assert_eq!(token.attribute().phase(), AttributePhase::Emitted);

    assert!(stream.advance(&mut token)?);
    assert_eq!(token.term_text(), "Bahn");
    assert!(token.attribute().is_emitted());

    assert!(stream.advance(&mut token)?);
    assert_eq!(token.term_text(), "fährt");
    assert_eq!(token.attribute().phase(), AttributePhase::Populated);
    assert!(!token.attribute().is_emitted());

    assert!(!stream.advance(&mut token)?);
    stream.end(&mut token)?;
    stream.close()?;

    Ok(())
}

#[test]
fn test_no_double_emission_across_stages() -> Result<()> {
    // Both the splitter and two later stages may emit; only one copy appears.
    let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
        .add_filter(Arc::new(CompoundSplitFilter::new(word_list())))
        .add_filter(Arc::new(PrimaryWordFilter::new()))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(PrimaryWordFilter::new()));

    let tokens = analyzer.analyze("Dampfschiff Bundesbahn")?;
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();

    assert_eq!(texts, vec!["dampfschiff", "schiff", "bundesbahn", "bahn"]);
    let primaries = tokens
        .iter()
        .filter(|t| t.token_type == TokenType::PrimaryWord)
        .count();
    assert_eq!(primaries, 2);

    Ok(())
}

#[test]
fn test_late_stage_emits_when_splitter_only_records() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WordTokenizer::new()))
        .add_filter(Arc::new(
            CompoundSplitFilter::new(word_list()).with_emit_primary(false),
        ))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(StemFilter::new()))
        .add_filter(Arc::new(PrimaryWordFilter::new()));

    let tokens = analyzer.analyze("Schifffahrt")?;

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].text, "Fahrt");
    assert_eq!(tokens[1].position, 0);

    Ok(())
}

#[test]
fn test_stream_reuse_across_texts() -> Result<()> {
    let resources = ResourceService::empty().with_word_list(WordList::from_words(["bahn"]));
    let analyzer = GermanAnalyzer::new(&AnalysisConfig::default(), &resources)?;
    let mut token = ScratchToken::new();

    let first = analyzer.inner().analyze_with("Bundesbahn", &mut token)?;
    let capacity = token.term_capacity();
    let second = analyzer.inner().analyze_with("S-Bahn Bundesbahn", &mut token)?;

    assert_eq!(first.len(), 2);
    assert_eq!(second.last().map(|t| t.text.as_str()), Some("bahn"));
    assert_eq!(token.term_capacity(), capacity);

    Ok(())
}
