//! Error types and error handling for the lexer.
//!
//! This module defines the error raised when the scanner reaches the end of
//! the input while holding a candidate that no lexical rule accepts. The
//! error carries the offending value, its span and the file it came from so
//! the caller decides whether to abort or report.

pub mod errors;

#[cfg(test)]
mod tests;
