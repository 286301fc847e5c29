//! Human-readable rendering of tokens and lexical errors.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::tokens::Token,
};

lazy_static! {
    static ref NEWLINE: Regex = Regex::new("\n").unwrap();
}

/// One line of the token dump: kind, inclusive span and the value with
/// newlines escaped.
pub fn format_token(token: &Token) -> String {
    format!(
        "TYPE: {:<10}  POS: {:<14}  VALUE: \"{}\"",
        token.kind.name(),
        token.span.to_string(),
        NEWLINE.replace_all(&token.value, "\\n")
    )
}

/// Finds the line holding the character at `position`.
///
/// Returns the 1-based line number, the line's text (with its newline) and
/// the character column of `position` inside it, or `None` when `position`
/// is past the end of `content`.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

/// Renders `error` against the source it was raised for.
///
/// ```text
/// Error: UnclassifiableToken
/// -> main.su
///   |
/// 2 | x := @
///   | -----^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let mut out = match error.get_tip() {
        ErrorTip::None => format!("Error: {}\n", error.get_error_name()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };
    out.push_str(&format!("-> {}\n", error.get_file()));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_span().start)
    else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{format_token, get_line_at_position, render_error};
    use crate::{
        errors::errors::{Error, ErrorImpl},
        lexer::tokens::{Token, TokenKind},
        Span,
    };

    #[test]
    fn test_format_token_escapes_newlines() {
        let token = Token {
            kind: TokenKind::Comment,
            value: "// a\n".to_string(),
            span: Span::new(0, 4),
        };

        let line = format_token(&token);
        assert!(line.starts_with("TYPE: COMMENT"));
        assert!(line.contains("POS: [0...4]"));
        assert!(line.ends_with("VALUE: \"// a\\n\""));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_format_token_layout() {
        let token = Token {
            kind: TokenKind::Operator,
            value: ":=".to_string(),
            span: Span::new(2, 3),
        };

        assert_eq!(
            format_token(&token),
            "TYPE: OPERATOR    POS: [2...3]         VALUE: \":=\""
        );
    }

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(content, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(get_line_at_position(content, 100).is_none());
    }

    #[test]
    fn test_render_error() {
        let source = "y := 2\n  x := @";
        let error = Error::new(
            ErrorImpl::UnclassifiableToken {
                token: "@".to_string(),
            },
            Span::new(14, 14),
            Rc::new("main.su".to_string()),
        );

        let rendered = render_error(&error, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnclassifiableToken");
        assert_eq!(lines[1], "-> main.su");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | x := @");
        assert_eq!(lines[4], "  | -----^");
    }
}
