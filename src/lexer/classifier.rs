use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{RuleTable, TokenKind, RULES};

lazy_static! {
    static ref INTEGER: Regex = Regex::new("^[0-9_]+$").unwrap();
    static ref FLOAT: Regex = Regex::new("^[0-9_.E+]+$").unwrap();
    static ref BINARY: Regex = Regex::new("^0b[01_]*$").unwrap();
    static ref OCTAL: Regex = Regex::new("^0o[0-7_]*$").unwrap();
    static ref HEXADECIMAL: Regex = Regex::new("^0x[0-9a-fA-F_]*$").unwrap();
}

/// Decides which lexical category a candidate substring belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'r> {
    rules: &'r RuleTable,
}

impl<'r> Classifier<'r> {
    pub fn new(rules: &'r RuleTable) -> Self {
        Classifier { rules }
    }

    pub fn rules(&self) -> &'r RuleTable {
        self.rules
    }

    /// Returns the kind of `candidate`, or `None` when no rule accepts it.
    ///
    /// Rules are tried in priority order: literals, keywords, identifiers,
    /// operators, breakers, newlines and finally comments.
    pub fn classify(&self, candidate: &str) -> Option<TokenKind> {
        if self.is_literal(candidate) {
            Some(TokenKind::Literal)
        } else if self.rules.is_keyword(candidate) {
            Some(TokenKind::Keyword)
        } else if is_identifier(candidate) {
            Some(TokenKind::Identifier)
        } else if self.rules.is_operator(candidate) {
            Some(TokenKind::Operator)
        } else if self.rules.is_breaker(candidate) {
            Some(TokenKind::Breaker)
        } else if candidate == "\n" {
            Some(TokenKind::Newline)
        } else if self.rules.is_comment(candidate) {
            Some(TokenKind::Comment)
        } else {
            None
        }
    }

    fn is_literal(&self, candidate: &str) -> bool {
        has_literal_bound(candidate, self.rules.string_bound)
            || has_literal_bound(candidate, self.rules.rune_bound)
            || self.rules.is_bool(candidate)
            || is_number(candidate)
    }
}

/// Classifies `candidate` against the standard rule table.
pub fn get_kind(candidate: &str) -> Option<TokenKind> {
    Classifier::new(&RULES).classify(candidate)
}

// Only the character right before the closing bound is checked for an
// escape, so `'\\'` is treated as unterminated.
fn has_literal_bound(candidate: &str, bound: char) -> bool {
    let mut chars = candidate.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return false;
    };

    first == bound && last == bound && chars.next_back().map_or(true, |c| c != '\\')
}

fn is_number(candidate: &str) -> bool {
    INTEGER.is_match(candidate)
        || (FLOAT.is_match(candidate) && candidate.matches('.').count() == 1)
        || BINARY.is_match(candidate)
        || OCTAL.is_match(candidate)
        || HEXADECIMAL.is_match(candidate)
}

fn is_identifier(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c == '_' || c.is_ascii_alphanumeric())
}
