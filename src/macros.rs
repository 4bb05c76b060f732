//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Emits a fixed-text operator token at the cursor
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$line` - The 1-based line the token starts on
/// * `$span` - The column span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1, Span { start: 1, end: 2 });
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
            span: $span,
        }
    };
}

/// Emits a token whose text is a fixed operator literal starting at the
/// cursor, then advances the lexer past it.
///
/// Evaluates to the created `Token`.
///
/// # Example
///
/// ```ignore
/// '+' => Ok(MK_DEFAULT_HANDLER!(self, TokenKind::Add, "+")),
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($lexer:expr, $kind:expr, $value:literal) => {{
        let start = $lexer.pos;
        let line = $lexer.line_number();
        $lexer.advance_n($value.len());
        $crate::MK_TOKEN!($kind, String::from($value), line, $lexer.span_from(start))
    }};
}
