use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{is_keyword, Token, TokenKind};

/// Single-pass scanner over one source file.
///
/// The cursor, line counter and string state are the only mutable state.
/// Tokens are produced one at a time by [`Lexer::next_token`], or lazily
/// through the `Iterator` impl.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    file: Rc<String>,
    pos: usize,
    // 0-based, bumped on every consumed '\n'
    line: usize,
    line_start: usize,
    // set while a string literal is open
    in_string: bool,
    finished: bool,
    failure: Option<Error>,
}

impl Lexer {
    /// Creates a lexer for `source`. `file` is the file name without its
    /// `.min` extension and is only used in diagnostics.
    pub fn new(source: String, file: Option<String>) -> Result<Lexer, Error> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        if source.is_empty() {
            return Err(Error::new(
                ErrorImpl::EmptySource,
                Position::new(-1, -1, file_name),
            ));
        }

        Ok(Lexer {
            source: source.chars().collect(),
            file: file_name,
            pos: 0,
            line: 0,
            line_start: 0,
            in_string: false,
            finished: false,
            failure: None,
        })
    }

    pub fn current(&self) -> Option<char> {
        self.source.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// 1-based line of the cursor.
    pub fn line_number(&self) -> i32 {
        self.line as i32 + 1
    }

    /// 1-based column of the character at `index` on the current line.
    fn column_of(&self, index: usize) -> i32 {
        (index - self.line_start) as i32 + 1
    }

    /// Closed column span from `start` up to the character before the cursor.
    pub fn span_from(&self, start: usize) -> Span {
        Span {
            start: self.column_of(start),
            end: (self.pos - self.line_start) as i32,
        }
    }

    fn location(&self, index: usize) -> Position {
        Position::new(self.line_number(), self.column_of(index), Rc::clone(&self.file))
    }

    /// The raw source behind a `DEBUG:` header.
    pub fn source_dump(&self) -> String {
        let mut dump = String::from("DEBUG:\n");
        dump.extend(self.source.iter());
        dump
    }

    fn skip_whitespace(&mut self) {
        if self.in_string {
            return;
        }

        while let Some(' ' | '\t' | '\r') = self.current() {
            self.pos += 1;
        }
    }

    fn newline(&mut self) {
        self.pos += 1;
        self.line += 1;
        self.line_start = self.pos;
    }

    /// Scans and returns the next token.
    ///
    /// After `EndOfInput` has been returned every further call returns
    /// `EndOfInput` again. After an error every further call returns the
    /// same error.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }

        let next = self.scan_token();
        if let Err(e) = &next {
            self.failure = Some(e.clone());
        }

        next
    }

    fn scan_token(&mut self) -> Result<Token, Error> {
        loop {
            self.skip_whitespace();

            let Some(ch) = self.current() else {
                self.finished = true;
                return Ok(Token::end_of_input());
            };

            let token = match ch {
                '\n' => {
                    self.newline();
                    continue;
                }
                c if c.is_ascii_alphabetic() || c == '_' => self.symbol(),
                c if c.is_ascii_digit() => self.number(),
                '"' => self.string()?,
                '/' => {
                    if self.peek() == Some('/') {
                        self.skip_comment();
                        continue;
                    }
                    MK_DEFAULT_HANDLER!(self, TokenKind::Div, "/")
                }
                '+' => MK_DEFAULT_HANDLER!(self, TokenKind::Add, "+"),
                '-' => MK_DEFAULT_HANDLER!(self, TokenKind::Sub, "-"),
                '*' => MK_DEFAULT_HANDLER!(self, TokenKind::Mul, "*"),
                '(' => MK_DEFAULT_HANDLER!(self, TokenKind::LeftParen, "("),
                ')' => MK_DEFAULT_HANDLER!(self, TokenKind::RightParen, ")"),
                '{' => MK_DEFAULT_HANDLER!(self, TokenKind::LeftBrace, "{"),
                '}' => MK_DEFAULT_HANDLER!(self, TokenKind::RightBrace, "}"),
                ';' => MK_DEFAULT_HANDLER!(self, TokenKind::Semicolon, ";"),
                ',' => MK_DEFAULT_HANDLER!(self, TokenKind::Comma, ","),
                '>' => match self.peek() {
                    Some('=') => MK_DEFAULT_HANDLER!(self, TokenKind::GreaterEqual, ">="),
                    _ => MK_DEFAULT_HANDLER!(self, TokenKind::GreaterThan, ">"),
                },
                '<' => match self.peek() {
                    Some('=') => MK_DEFAULT_HANDLER!(self, TokenKind::LessEqual, "<="),
                    _ => MK_DEFAULT_HANDLER!(self, TokenKind::LessThan, "<"),
                },
                '=' => match self.peek() {
                    Some('=') => MK_DEFAULT_HANDLER!(self, TokenKind::EqualEqual, "=="),
                    _ => MK_DEFAULT_HANDLER!(self, TokenKind::Equal, "="),
                },
                '!' => match self.peek() {
                    Some('=') => MK_DEFAULT_HANDLER!(self, TokenKind::NotEqual, "!="),
                    _ => return Err(self.invalid_character(ch)),
                },
                '&' => match self.peek() {
                    Some('&') => MK_DEFAULT_HANDLER!(self, TokenKind::LogicalAnd, "&&"),
                    _ => return Err(self.invalid_token(ch)),
                },
                '|' => match self.peek() {
                    Some('|') => MK_DEFAULT_HANDLER!(self, TokenKind::LogicalOr, "||"),
                    _ => return Err(self.invalid_token(ch)),
                },
                _ => return Err(self.invalid_character(ch)),
            };

            trace!(kind = %token.kind, value = %token.value, line = token.line, "token");
            return Ok(token);
        }
    }

    fn invalid_character(&self, ch: char) -> Error {
        Error::new(ErrorImpl::InvalidCharacter { ch }, self.location(self.pos))
    }

    fn invalid_token(&self, token: char) -> Error {
        Error::new(ErrorImpl::InvalidToken { token }, self.location(self.pos))
    }

    fn consume_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.current().is_some_and(&accept) {
            self.pos += 1;
        }
        self.source[start..self.pos].iter().collect()
    }

    fn symbol(&mut self) -> Token {
        let start = self.pos;
        let line = self.line_number();
        let value = self.consume_while(|c| c.is_ascii_alphanumeric() || c == '_');

        let kind = if is_keyword(&value) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        MK_TOKEN!(kind, value, line, self.span_from(start))
    }

    fn number(&mut self) -> Token {
        let start = self.pos;
        let line = self.line_number();
        let value = self.consume_while(|c| c.is_ascii_digit());

        MK_TOKEN!(TokenKind::Number, value, line, self.span_from(start))
    }

    fn skip_comment(&mut self) {
        while self.current().is_some_and(|c| c != '\n') {
            self.pos += 1;
        }
    }

    /// Scans a string literal. No escape processing: the contents between
    /// the quotes are taken verbatim and may not contain a newline.
    fn string(&mut self) -> Result<Token, Error> {
        let opening = self.location(self.pos);
        let line = self.line_number();

        self.in_string = true;
        self.pos += 1;
        let start = self.pos;

        loop {
            match self.current() {
                Some('"') => break,
                Some('\n') | None => {
                    self.in_string = false;
                    return Err(Error::new(ErrorImpl::UnterminatedString, opening));
                }
                Some(_) => self.pos += 1,
            }
        }

        let value: String = self.source[start..self.pos].iter().collect();
        let span = self.span_from(start);
        self.in_string = false;
        self.pos += 1;

        Ok(MK_TOKEN!(TokenKind::StringLiteral, value, line, span))
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let next = self.next_token();
        if next.is_err() {
            self.finished = true;
        }

        Some(next)
    }
}

impl std::iter::FusedIterator for Lexer {}

#[tracing::instrument(level = "debug", skip(source))]
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let lex = Lexer::new(source, file)?;
    let tokens = lex.collect::<Result<Vec<Token>, Error>>()?;

    debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}
