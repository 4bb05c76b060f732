//! Lexical analysis for `.min` sources.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Keyword / identifier disambiguation against a fixed keyword set
//! - Unsigned integer literals and verbatim string literals
//! - One- and two-character operators; `!` is accepted only as part of `!=`
//! - Line comments, whitespace and line / column tracking for diagnostics

pub mod lexer;
pub mod tokens;
