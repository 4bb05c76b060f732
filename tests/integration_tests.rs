//! Integration tests for the front end.
//!
//! These tests run the golden `.min` program through the lexer and the
//! driver and compare against the expected `.lex` dump.

use std::fs;

use minicompiler::{
    driver::driver::{render_tokens, run, Options},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const GOLDEN_SOURCE: &str = include_str!("fixtures/lexer_test.min");
const GOLDEN_TOKENS: &str = include_str!("fixtures/lexer_test.lex");

#[test]
fn test_golden_program_dump() {
    let tokens = tokenize(GOLDEN_SOURCE.to_string(), Some("lexer_test".to_string())).unwrap();

    assert_eq!(render_tokens(&tokens), GOLDEN_TOKENS);
}

#[test]
fn test_golden_program_shape() {
    let tokens = tokenize(GOLDEN_SOURCE.to_string(), None).unwrap();

    assert_eq!(tokens.len(), 31);
    assert_eq!(tokens[14].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[14].value, "you are eligible to vote at ");
    assert_eq!(tokens[26].value, "you can't vote currently sorry!");
    assert_eq!(tokens[30].kind, TokenKind::EndOfInput);
}

#[test]
fn test_streaming_matches_eager() {
    let eager = tokenize(GOLDEN_SOURCE.to_string(), None).unwrap();
    let mut lexer = Lexer::new(GOLDEN_SOURCE.to_string(), None).unwrap();

    let mut streamed = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        let done = token.is_eof();
        streamed.push(token);
        if done {
            break;
        }
    }

    assert_eq!(streamed, eager);
}

#[test]
fn test_tokenize_twice_is_identical() {
    let first = tokenize(GOLDEN_SOURCE.to_string(), None).unwrap();
    let second = tokenize(GOLDEN_SOURCE.to_string(), None).unwrap();

    assert_eq!(render_tokens(&first), render_tokens(&second));
    assert_eq!(first, second);
}

#[test]
fn test_run_golden_file() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("lexer_test.min");
    fs::write(&source, GOLDEN_SOURCE).unwrap();

    let mut out = Vec::new();
    run(&Options::new(source.to_string_lossy()), &mut out).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("lexer_test.lex")).unwrap(),
        GOLDEN_TOKENS
    );
}
