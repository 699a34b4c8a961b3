//! A lexical pass over raw source that is just precise enough for
//! delimiter matching: it knows where strings, raw strings, character
//! literals, lifetimes and comments begin and end, and nothing else.

/// A significant token and the byte offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Token {
    Open(u8, usize),
    Close(u8, usize),
    /// Identifier, keyword or number, as a byte range.
    Word(usize, usize),
    Punct(u8, usize),
}

#[derive(Debug, Default)]
pub(super) struct Scan {
    pub tokens: Vec<Token>,
    /// Start offset of a `/*` that never closes.
    pub unterminated_block_comment: Option<usize>,
}

pub(super) fn scan(source: &str) -> Scan {
    Scanner {
        bytes: source.as_bytes(),
        pos: 0,
        out: Scan::default(),
    }
    .run()
}

struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
    out: Scan,
}

impl Scanner<'_> {
    fn run(mut self) -> Scan {
        while let Some(b) = self.peek(0) {
            match b {
                b'/' if self.peek(1) == Some(b'/') => self.line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.block_comment(),
                b'"' => self.string(self.pos + 1),
                b'\'' => self.quote(),
                b'(' | b'[' | b'{' => {
                    self.out.tokens.push(Token::Open(b, self.pos));
                    self.pos += 1;
                }
                b')' | b']' | b'}' => {
                    self.out.tokens.push(Token::Close(b, self.pos));
                    self.pos += 1;
                }
                _ if is_word_byte(b) => self.word(),
                _ if b.is_ascii_whitespace() => self.pos += 1,
                _ => {
                    self.out.tokens.push(Token::Punct(b, self.pos));
                    self.pos += 1;
                }
            }
        }
        self.out
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn line_comment(&mut self) {
        while let Some(b) = self.peek(0) {
            if b == b'\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn block_comment(&mut self) {
        let start = self.pos;
        let mut depth = 0usize;
        while self.pos < self.bytes.len() {
            if self.peek(0) == Some(b'/') && self.peek(1) == Some(b'*') {
                depth += 1;
                self.pos += 2;
            } else if self.peek(0) == Some(b'*') && self.peek(1) == Some(b'/') {
                depth -= 1;
                self.pos += 2;
                if depth == 0 {
                    return;
                }
            } else {
                self.pos += 1;
            }
        }
        self.out.unterminated_block_comment = Some(start);
    }

    /// Escaped string body starting at `body`; stops after the closing quote.
    fn string(&mut self, body: usize) {
        self.pos = body;
        while let Some(b) = self.peek(0) {
            self.pos += 1;
            match b {
                b'\\' => self.pos += 1,
                b'"' => return,
                _ => {}
            }
        }
        self.pos = self.pos.min(self.bytes.len());
    }

    /// `r"..."`, `r#"..."#` and friends; `hashes` starts at the first `#` or `"`.
    fn raw_string(&mut self, hashes: usize) {
        let mut count = 0;
        self.pos = hashes;
        while self.peek(0) == Some(b'#') {
            count += 1;
            self.pos += 1;
        }
        self.pos += 1;
        while let Some(b) = self.peek(0) {
            self.pos += 1;
            if b == b'"' && (0..count).all(|i| self.peek(i) == Some(b'#')) {
                self.pos += count;
                return;
            }
        }
    }

    /// A character literal, or the quote of a lifetime or loop label.
    fn quote(&mut self) {
        let start = self.pos;
        match self.peek(1) {
            Some(b'\\') => {
                // Skip the quote, the backslash and the escaped character.
                self.pos += 3;
                while let Some(b) = self.peek(0) {
                    self.pos += 1;
                    if b == b'\'' || b == b'\n' {
                        return;
                    }
                }
                self.pos = self.pos.min(self.bytes.len());
            }
            Some(lead) => {
                let close = start + 1 + utf8_len(lead);
                if self.bytes.get(close) == Some(&b'\'') {
                    self.pos = close + 1;
                } else {
                    // Lifetime: the name that follows is scanned as a word.
                    self.pos += 1;
                }
            }
            None => self.pos += 1,
        }
    }

    fn word(&mut self) {
        let start = self.pos;
        while self.peek(0).is_some_and(is_word_byte) {
            self.pos += 1;
        }
        let bytes = self.bytes;
        let word = &bytes[start..self.pos];
        let prefixed = matches!(word, b"b" | b"c" | b"br" | b"cr" | b"r");
        match self.peek(0) {
            Some(b'"') if prefixed => {
                if word.contains(&b'r') {
                    self.raw_string(self.pos);
                } else {
                    self.string(self.pos + 1);
                }
            }
            Some(b'#') if prefixed && word.contains(&b'r') => {
                let mut probe = self.pos;
                while self.bytes.get(probe) == Some(&b'#') {
                    probe += 1;
                }
                if self.bytes.get(probe) == Some(&b'"') {
                    self.raw_string(self.pos);
                } else {
                    // Raw identifier `r#name`.
                    self.pos += 1;
                    let ident = self.pos;
                    while self.peek(0).is_some_and(is_word_byte) {
                        self.pos += 1;
                    }
                    self.out.tokens.push(Token::Word(ident, self.pos));
                }
            }
            Some(b'\'') if word == b"b" => self.quote(),
            _ => self.out.tokens.push(Token::Word(start, self.pos)),
        }
    }
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

const fn utf8_len(lead: u8) -> usize {
    match lead {
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn delimiters(source: &str) -> String {
        scan(source)
            .tokens
            .iter()
            .filter_map(|t| match t {
                Token::Open(b, _) | Token::Close(b, _) => Some(char::from(*b)),
                _ => None,
            })
            .collect()
    }

    #[rstest]
    #[case::string(r#"f("}")"#, "()")]
    #[case::escaped_quote(r#"f("\"}")"#, "()")]
    #[case::raw_string(r##"f(r#"")}"#)"##, "()")]
    #[case::byte_string(r#"f(b"[")"#, "()")]
    #[case::char_literal("f('{')", "()")]
    #[case::escaped_char(r"f('\'', ']')", "()")]
    #[case::unicode_char("f('é', '}')", "()")]
    #[case::byte_char("f(b'(')", "()")]
    #[case::lifetime("fn f<'a>(x: &'a str) {}", "(){}")]
    #[case::line_comment("f() // )\n", "()")]
    #[case::nested_block_comment("f(/* /* ) */ } */)", "()")]
    fn literals_and_comments_hide_delimiters(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(delimiters(source), expected);
        assert_eq!(scan(source).unterminated_block_comment, None);
    }

    #[test]
    fn raw_identifier_is_a_word() {
        let source = "let r#type = 1;";
        let words: Vec<&str> = scan(source)
            .tokens
            .iter()
            .filter_map(|t| match t {
                Token::Word(s, e) => Some(&source[*s..*e]),
                _ => None,
            })
            .collect();
        assert_eq!(words, vec!["let", "type", "1"]);
    }

    #[test]
    fn unterminated_block_comment_reports_its_start() {
        let scan = scan("fn a() {}\n/* open /* nested */ still open");
        assert_eq!(scan.unterminated_block_comment, Some(10));
    }
}
