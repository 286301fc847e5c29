//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a sequence of classified tokens for parsing. It handles:
//!
//! - The lexical rule table (keywords, breakers, operators, comment pairs,
//!   literal bounds)
//! - Classification of candidate substrings into token kinds
//! - Maximal-munch scanning with one character of lookahead
//! - Token position tracking for error reporting

pub mod classifier;
pub mod lexer;
pub mod tokens;
