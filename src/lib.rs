#![allow(clippy::module_inception)]

use std::rc::Rc;

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;

/// A located point in a source file, used for diagnostics.
///
/// `line` and `column` are 1-based. `-1` marks a position that has no
/// location in the source (driver errors, end of input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: i32,
    pub column: i32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: i32, column: i32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position {
            line: -1,
            column: -1,
            file: Rc::new(String::from("<null>")),
        }
    }
}

/// Closed column range `[start, end]` of a lexeme on its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: i32,
    pub end: i32,
}

impl Span {
    pub fn none() -> Self {
        Span { start: -1, end: -1 }
    }
}
