use std::{fs, io::Write, path::PathBuf};

use tracing::{debug, info};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Lexer, tokens::Token},
    Position,
};

pub const SOURCE_EXTENSION: &str = ".min";
pub const TOKENS_EXTENSION: &str = ".lex";

/// What a single run of the front end does besides scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Path of the source file, including its `.min` extension.
    pub path: String,
    /// Write the token dump next to the source as `<stem>.lex`.
    pub write_lex_file: bool,
    /// Also print the token dump to the output stream.
    pub print_tokens: bool,
    /// Print the raw source before scanning.
    pub debug_source: bool,
}

impl Options {
    pub fn new(path: impl Into<String>) -> Self {
        Options {
            path: path.into(),
            write_lex_file: true,
            print_tokens: false,
            debug_source: false,
        }
    }
}

pub fn verify_file_extension(path: &str) -> Result<(), Error> {
    if path.ends_with(SOURCE_EXTENSION) {
        Ok(())
    } else {
        Err(Error::new(
            ErrorImpl::MissingExtension {
                path: path.to_string(),
            },
            Position::null(),
        ))
    }
}

/// Strips the `.min` extension. `path` must already have been verified.
pub fn extract_file_name(path: &str) -> String {
    path.strip_suffix(SOURCE_EXTENSION).unwrap_or(path).to_string()
}

/// Reads `<stem>.min` into memory.
pub fn load_source(stem: &str) -> Result<String, Error> {
    let path = format!("{}{}", stem, SOURCE_EXTENSION);

    fs::read_to_string(&path).map_err(|e| {
        Error::new(
            ErrorImpl::SourceUnreadable {
                path,
                reason: e.to_string(),
            },
            Position::null(),
        )
    })
}

/// One `line start:end KIND value` line per token, newline terminated.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut rendered = String::new();

    for token in tokens {
        rendered.push_str(&token.to_string());
        rendered.push('\n');
    }

    rendered
}

pub fn write_tokens(stem: &str, tokens: &[Token]) -> Result<PathBuf, Error> {
    let path = PathBuf::from(format!("{}{}", stem, TOKENS_EXTENSION));

    fs::write(&path, render_tokens(tokens)).map_err(|e| {
        Error::new(
            ErrorImpl::OutputUnwritable {
                path: path.to_string_lossy().into_owned(),
                reason: e.to_string(),
            },
            Position::null(),
        )
    })?;

    Ok(path)
}

fn emit(out: &mut impl Write, text: &str) -> Result<(), Error> {
    out.write_all(text.as_bytes()).map_err(|e| {
        Error::new(
            ErrorImpl::OutputUnwritable {
                path: String::from("<stdout>"),
                reason: e.to_string(),
            },
            Position::null(),
        )
    })
}

/// Loads, scans and dumps one source file.
///
/// Stops at the first error; nothing is written for a file that fails to
/// scan.
pub fn run(options: &Options, out: &mut impl Write) -> Result<Vec<Token>, Error> {
    let path = options.path.trim();
    verify_file_extension(path)?;

    let stem = extract_file_name(path);
    let source = load_source(&stem)?;
    debug!(file = %stem, chars = source.chars().count(), "loaded source");

    let lexer = Lexer::new(source, Some(stem.clone()))?;

    if options.debug_source {
        emit(out, &lexer.source_dump())?;
        emit(out, "\n")?;
    }

    let tokens = lexer.collect::<Result<Vec<Token>, Error>>()?;
    info!(file = %stem, count = tokens.len(), "tokenized");

    if options.print_tokens {
        emit(out, &render_tokens(&tokens))?;
    }

    if options.write_lex_file {
        let written = write_tokens(&stem, &tokens)?;
        debug!(path = %written.display(), "wrote token dump");
    }

    Ok(tokens)
}
