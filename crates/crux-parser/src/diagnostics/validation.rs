//! Raw-text checks that run independently of the syntax tree.

use super::scanner::{self, Token};
use crate::location::LineIndex;
use crate::types::ParseError;

pub(super) fn validate(source: &str) -> Vec<ParseError> {
    if source.trim().is_empty() {
        return vec![ParseError::warning("Source is empty", None)];
    }

    let index = LineIndex::new(source);
    let scan = scanner::scan(source);
    let mut findings = Vec::new();

    if let Some(start) = scan.unterminated_block_comment {
        findings.push(ParseError::error(
            "Unterminated block comment",
            Some(index.location(start, source.len())),
        ));
    }
    check_delimiters(&scan.tokens, &index, &mut findings);
    check_foreign_keywords(source, &scan.tokens, &index, &mut findings);
    findings
}

fn check_delimiters(tokens: &[Token], index: &LineIndex<'_>, findings: &mut Vec<ParseError>) {
    let mut open: Vec<(u8, usize)> = Vec::new();
    for token in tokens {
        match *token {
            Token::Open(delim, offset) => open.push((delim, offset)),
            Token::Close(delim, offset) => {
                let opener = opener_of(delim);
                match open.iter().rposition(|(d, _)| *d == opener) {
                    Some(pos) if pos + 1 == open.len() => {
                        open.pop();
                    }
                    Some(pos) => {
                        let expected = open.last().map_or(delim, |(d, _)| closer_of(*d));
                        findings.push(ParseError::error(
                            format!(
                                "Mismatched closing delimiter `{}`, expected `{}`",
                                char::from(delim),
                                char::from(expected)
                            ),
                            Some(index.location(offset, offset + 1)),
                        ));
                        open.truncate(pos);
                    }
                    None => findings.push(ParseError::error(
                        format!("Unmatched closing delimiter `{}`", char::from(delim)),
                        Some(index.location(offset, offset + 1)),
                    )),
                }
            }
            Token::Word(..) | Token::Punct(..) => {}
        }
    }
    for (delim, offset) in open {
        findings.push(ParseError::error(
            format!("Unclosed delimiter `{}`", char::from(delim)),
            Some(index.location(offset, offset + 1)),
        ));
    }
}

/// `function name(` and `var name =` written where `fn` and `let` belong.
fn check_foreign_keywords(
    source: &str,
    tokens: &[Token],
    index: &LineIndex<'_>,
    findings: &mut Vec<ParseError>,
) {
    let word = |token: &Token| match *token {
        Token::Word(start, end) => source.get(start..end),
        _ => None,
    };
    let is_ident = |token: &Token| {
        word(token).is_some_and(|w| !w.starts_with(|c: char| c.is_ascii_digit()))
    };

    for window in tokens.windows(3) {
        let [keyword, name, next] = window else {
            continue;
        };
        let Token::Word(start, end) = *keyword else {
            continue;
        };
        if !is_ident(name) {
            continue;
        }
        let hint = match (word(keyword), *next) {
            (Some("function"), Token::Open(b'(', _)) => {
                "`function` is not a Rust keyword; use `fn`"
            }
            (Some("var"), Token::Punct(b'=' | b':' | b';', _)) => {
                "`var` is not a Rust keyword; use `let`"
            }
            _ => continue,
        };
        findings.push(ParseError::warning(hint, Some(index.location(start, end))));
    }
}

const fn opener_of(close: u8) -> u8 {
    match close {
        b')' => b'(',
        b']' => b'[',
        _ => b'{',
    }
}

const fn closer_of(open: u8) -> u8 {
    match open {
        b'(' => b')',
        b'[' => b']',
        _ => b'}',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn messages(source: &str) -> Vec<String> {
        validate(source).into_iter().map(|f| f.message).collect()
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t\n")]
    fn blank_source_is_a_single_warning(#[case] source: &str) {
        let findings = validate(source);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(findings[0].message, "Source is empty");
    }

    #[rstest]
    #[case::string_with_brace(r#"fn main() { let s = "}"; }"#)]
    #[case::char_with_paren("fn main() { let c = ')'; }")]
    #[case::lifetimes("struct S<'a> { r: &'a [u8] }")]
    #[case::raw_string(r###"const Q: &str = r##"{"a": [1"##;"###)]
    #[case::comments("fn f() { /* { */ } // (")]
    fn balanced_sources_have_no_findings(#[case] source: &str) {
        assert_eq!(validate(source), Vec::new());
    }

    #[test]
    fn unclosed_openers_each_reported() {
        let findings = validate("fn broken_function( { let x = 5");
        let messages: Vec<&str> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Unclosed delimiter `(`", "Unclosed delimiter `{`"]
        );
        let first = findings[0].location.expect("location");
        assert_eq!((first.start_line, first.start_column), (1, 19));
    }

    #[test]
    fn stray_closer_reported() {
        assert_eq!(messages("fn f() {} }"), vec!["Unmatched closing delimiter `}`"]);
    }

    #[test]
    fn mismatched_closer_reported_once() {
        assert_eq!(
            messages("fn f() { let v = [1, 2 }"),
            vec!["Mismatched closing delimiter `}`, expected `]`"]
        );
    }

    #[test]
    fn unterminated_comment_is_an_error() {
        let findings = validate("fn f() {}\n/* never closed");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].is_error());
        assert_eq!(findings[0].message, "Unterminated block comment");
        assert_eq!(findings[0].location.map(|l| l.start_line), Some(2));
    }

    #[test]
    fn foreign_keywords_are_warnings() {
        let findings = validate("function add(a, b) {}\nfn main() { var x = 1; }");
        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.severity == Severity::Warning));
        assert_eq!(findings[0].location.map(|l| l.start_line), Some(1));
        assert_eq!(findings[1].location.map(|l| l.start_line), Some(2));
    }

    #[test]
    fn keywords_inside_literals_are_ignored() {
        assert_eq!(
            validate(r#"fn main() { let s = "function f() {}"; /* var x = 1; */ }"#),
            Vec::new()
        );
    }
}
