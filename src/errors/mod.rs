//! Error types and error handling for the compiler front end.
//!
//! This module defines the diagnostics produced while loading and scanning
//! a source file. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the loader and the tokenizer
//! - User-facing message formatting and suggestions

pub mod errors;
