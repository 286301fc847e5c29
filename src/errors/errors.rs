use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::Span;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
    file: Rc<String>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span, file: Rc<String>) -> Self {
        Error {
            internal_error: error_impl,
            span,
            file,
        }
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn get_file(&self) -> &str {
        &self.file
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The offending source text.
    pub fn get_token(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnclassifiableToken { token } => token,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnclassifiableToken { .. } => "UnclassifiableToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnclassifiableToken { token } if token.chars().count() == 1 => {
                ErrorTip::None
            }
            ErrorImpl::UnclassifiableToken { token } => ErrorTip::Suggestion(format!(
                "no lexical rule matches `{}`, is a literal or comment left unclosed?",
                token.escape_debug()
            )),
        }
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
    #[error("undefined token: '{token}'")]
    UnclassifiableToken { token: String },
}
