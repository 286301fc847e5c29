use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_SPAN, MK_TOKEN,
};

use super::{
    classifier::Classifier,
    tokens::{RuleTable, Token, TokenKind, RULES},
};

/// Single pass, maximal-munch scanner.
///
/// `token_start` marks where the candidate in progress begins and `cursor`
/// the last character it covers. Every step classifies the candidate and
/// the candidate one character longer, and dispatches once growing it would
/// change its kind. Tokens are produced lazily through `Iterator`; use
/// [`tokenize`] to collect the whole buffer.
#[derive(Clone)]
pub struct Lexer<'r> {
    classifier: Classifier<'r>,
    source: Vec<char>,
    token_start: usize,
    cursor: usize,
    file: Rc<String>,
    failed: bool,
}

impl Lexer<'static> {
    pub fn new(source: &str, file: Option<String>) -> Lexer<'static> {
        Lexer::with_rules(source, file, &RULES)
    }
}

impl<'r> Lexer<'r> {
    pub fn with_rules(source: &str, file: Option<String>, rules: &'r RuleTable) -> Lexer<'r> {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            classifier: Classifier::new(rules),
            source: source.chars().collect(),
            token_start: 0,
            cursor: 0,
            file: file_name,
            failed: false,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn at_eof(&self) -> bool {
        self.cursor >= self.source.len()
    }

    fn at(&self) -> char {
        self.source[self.cursor]
    }

    fn has_next(&self) -> bool {
        self.cursor + 1 < self.source.len()
    }

    /// The candidate from `token_start` through `end`, inclusive.
    fn window(&self, end: usize) -> String {
        self.source[self.token_start..=end].iter().collect()
    }

    fn in_progress(&self) -> bool {
        self.token_start != self.cursor
    }

    fn should_extend(&self, current_kind: TokenKind) -> bool {
        let next = self.window(self.cursor + 1);

        // Comment openers are two characters wide, so neither half can be
        // allowed to dispatch on its own.
        if self.classifier.rules().is_comment_opener(&next) {
            return true;
        }

        match self.classifier.classify(&next) {
            Some(next_kind) => {
                next_kind == current_kind
                    || (current_kind.is_identifier_branch() && next_kind.is_identifier_branch())
            }
            None => false,
        }
    }

    fn dispatch(&mut self, value: String, kind: TokenKind) -> Token {
        let token = MK_TOKEN!(kind, value, MK_SPAN!(self.token_start, self.cursor));
        trace!(kind = %token.kind, span = %token.span, value = ?token.value, "dispatched token");

        self.cursor += 1;
        self.token_start = self.cursor;
        token
    }

    fn scan(&mut self) -> Option<Result<Token, Error>> {
        while !self.at_eof() {
            let c = self.at();

            // Whitespace is only insignificant between tokens; inside a
            // candidate (a string literal, a comment) it belongs to it.
            if c != '\n' && is_space(c) && !self.in_progress() {
                self.cursor += 1;
                self.token_start = self.cursor;
                continue;
            }

            let current = self.window(self.cursor);

            let Some(kind) = self.classifier.classify(&current) else {
                if !self.has_next() {
                    return Some(Err(Error::new(
                        ErrorImpl::UnclassifiableToken { token: current },
                        MK_SPAN!(self.token_start, self.cursor),
                        self.file(),
                    )));
                }

                self.cursor += 1;
                continue;
            };

            if self.has_next() && self.should_extend(kind) {
                self.cursor += 1;
                continue;
            }

            return Some(Ok(self.dispatch(current, kind)));
        }

        None
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.scan();
        if let Some(Err(_)) = item {
            self.failed = true;
        }

        item
    }
}

/// Matches C `isspace`: space, `\t`, `\n`, `\v`, `\f` and `\r`.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    tokenize_with(source, file, &RULES)
}

pub fn tokenize_with(
    source: String,
    file: Option<String>,
    rules: &RuleTable,
) -> Result<Vec<Token>, Error> {
    let lex = Lexer::with_rules(&source, file, rules);
    debug!(file = %lex.file(), chars = lex.source.len(), "tokenizing");

    let tokens = lex.collect::<Result<Vec<Token>, Error>>()?;

    debug!(count = tokens.len(), "tokenized");
    Ok(tokens)
}
