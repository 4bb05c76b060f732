use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A located diagnostic.
///
/// Scanning stops at the first `Error`; the caller decides whether to
/// terminate the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EmptySource => "EmptySource",
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::InvalidToken { .. } => "InvalidToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::MissingExtension { .. } => "MissingExtension",
            ErrorImpl::SourceUnreadable { .. } => "SourceUnreadable",
            ErrorImpl::OutputUnwritable { .. } => "OutputUnwritable",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EmptySource => ErrorTip::None,
            ErrorImpl::InvalidCharacter { .. } => ErrorTip::None,
            ErrorImpl::InvalidToken { token } => ErrorTip::Suggestion(format!(
                "`{}` is only valid when doubled, did you mean `{}{}`?",
                token, token, token
            )),
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literals cannot span lines, add the closing `\"`",
            )),
            ErrorImpl::MissingExtension { .. } => {
                ErrorTip::Suggestion(String::from("Source files must end in `.min`"))
            }
            ErrorImpl::SourceUnreadable { .. } => ErrorTip::None,
            ErrorImpl::OutputUnwritable { .. } => ErrorTip::None,
        }
    }
}

/// Renders the user-facing message, located with file, line and column.
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Position { line, column, file } = &self.position;

        match &self.internal_error {
            ErrorImpl::EmptySource => write!(f, "Source file {}.min is empty", file),
            ErrorImpl::InvalidCharacter { ch } => write!(
                f,
                "Invalid character: '{}' in {}.min ({}:{})",
                ch, file, line, column
            ),
            ErrorImpl::InvalidToken { token } => write!(
                f,
                "Invalid token: '{}' in {}.min ({}:{})",
                token, file, line, column
            ),
            ErrorImpl::UnterminatedString => write!(
                f,
                "In file: {}.min string literal started at ({}:{}) but didn't finish",
                file, line, column
            ),
            other => write!(f, "{}", other),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("source file is empty")]
    EmptySource,
    #[error("invalid character: {ch:?}")]
    InvalidCharacter { ch: char },
    #[error("invalid token: {token:?}")]
    InvalidToken { token: char },
    #[error("string literal didn't finish")]
    UnterminatedString,
    #[error(".min file extension required, got {path:?}")]
    MissingExtension { path: String },
    #[error("could not read {path:?}: {reason}")]
    SourceUnreadable { path: String, reason: String },
    #[error("could not write {path:?}: {reason}")]
    OutputUnwritable { path: String, reason: String },
}
