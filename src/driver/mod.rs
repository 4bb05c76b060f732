//! Loading `.min` files and writing `.lex` token dumps.
//!
//! The driver sits between the command line and the lexer: it validates the
//! file extension, reads the whole file before scanning, and optionally
//! writes one dump line per token.

pub mod driver;
