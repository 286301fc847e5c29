use lazy_static::lazy_static;
use std::fmt::Display;

use crate::Span;

lazy_static! {
    /// The lexical rules of the language, built once and only ever borrowed.
    pub static ref RULES: RuleTable = RuleTable::standard();
}

/// Kinds that may turn into one another while a candidate keeps growing: a
/// keyword is lexically an identifier that happens to be reserved.
pub const IDENTIFIER_BRANCHES: [TokenKind; 2] = [TokenKind::Identifier, TokenKind::Keyword];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Breaker,
    Operator,
    Literal,
    Identifier,
    Newline,
    Comment,
}

impl TokenKind {
    /// Label used by the token dump.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Breaker => "BREAKER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Literal => "LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Comment => "COMMENT",
        }
    }

    pub fn is_identifier_branch(&self) -> bool {
        IDENTIFIER_BRANCHES.contains(self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:?}", self.kind, self.span, self.value)
    }
}

/// An (opening, closing) delimiter pair bounding a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPair {
    pub open: &'static str,
    pub close: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    pub keywords: Vec<&'static str>,
    /// Delimiters carrying no operator semantics.
    pub breakers: Vec<&'static str>,
    pub operators: Vec<&'static str>,
    pub comment_pairs: Vec<CommentPair>,
    pub bool_values: (&'static str, &'static str),
    pub string_bound: char,
    /// Runes extend chars to a whole grapheme; only the bound is lexical.
    pub rune_bound: char,
}

impl RuleTable {
    pub fn standard() -> Self {
        RuleTable {
            keywords: vec!["pub", "const", "struct", "enum", "use"],
            breakers: vec!["(", ")", "{", "}", ","],
            operators: vec![":=", "=", "+", "-", "*", "/"],
            comment_pairs: vec![
                CommentPair {
                    open: "//",
                    close: "\n",
                },
                CommentPair {
                    open: "/*",
                    close: "*/",
                },
            ],
            bool_values: ("true", "false"),
            string_bound: '\'',
            rune_bound: '`',
        }
    }

    pub fn is_keyword(&self, candidate: &str) -> bool {
        self.keywords.contains(&candidate)
    }

    pub fn is_operator(&self, candidate: &str) -> bool {
        self.operators.contains(&candidate)
    }

    pub fn is_breaker(&self, candidate: &str) -> bool {
        self.breakers.contains(&candidate)
    }

    pub fn is_bool(&self, candidate: &str) -> bool {
        candidate == self.bool_values.0 || candidate == self.bool_values.1
    }

    pub fn is_comment_opener(&self, candidate: &str) -> bool {
        self.comment_pairs.iter().any(|pair| pair.open == candidate)
    }

    pub fn is_comment(&self, candidate: &str) -> bool {
        self.comment_pairs
            .iter()
            .any(|pair| candidate.starts_with(pair.open) && candidate.ends_with(pair.close))
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::standard()
    }
}
