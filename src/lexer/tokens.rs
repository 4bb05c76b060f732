use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};
use strum::AsRefStr;

use crate::Span;

lazy_static! {
    pub static ref KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("int");
        set.insert("bool");
        set.insert("string");
        set.insert("struct");
        set.insert("if");
        set.insert("else");
        set.insert("while");
        set.insert("true");
        set.insert("false");
        set
    };
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word)
}

/// Lexical category of a token.
///
/// The `AsRefStr` names are the ones written to `.lex` token dumps.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    #[strum(serialize = "STRING_LIT")]
    StringLiteral,
    Identifier,
    Number,

    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,

    Equal,        // =
    EqualEqual,   // ==
    LessEqual,    // <=
    GreaterEqual, // >=
    NotEqual,     // !=
    LessThan,
    GreaterThan,

    LogicalAnd,
    LogicalOr,

    Semicolon,
    Comma,

    Add,
    Sub,
    Mul,
    Div,

    #[strum(serialize = "EOF")]
    EndOfInput,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme.
///
/// `value` is the matched text, the contents of a string literal without its
/// quotes, or `"$"` for `EndOfInput`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: i32,
    pub span: Span,
}

/// Renders the token as one `.lex` dump line: `line start:end KIND value`.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}:{} {} {}",
            self.line,
            self.span.start,
            self.span.end,
            self.kind.as_ref(),
            self.value
        )
    }
}

impl Token {
    pub fn end_of_input() -> Self {
        Token {
            kind: TokenKind::EndOfInput,
            value: String::from("$"),
            line: -1,
            span: Span::none(),
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
