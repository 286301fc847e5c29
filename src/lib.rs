#![allow(clippy::module_inception)]

use std::fmt::Display;

pub mod display;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Inclusive, character-indexed range into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Number of characters covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}...{}]", self.start, self.end)
    }
}
