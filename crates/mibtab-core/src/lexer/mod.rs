//! MIB lexer.
//!
//! Turns raw MIB source bytes into a stream of ASN.1-style tokens:
//! identifiers, non-negative decimal numbers, double-quoted strings,
//! punctuation, and the `::=` assignment operator. `--` line comments and
//! whitespace are folded away before token recognition. One token of
//! lookahead is available via [`Lexer::peek`].

mod token;

pub use token::{Token, TokenKind};

/// Streaming tokenizer over a single MIB module.
///
/// Input bytes are decoded as UTF-8 up front (invalid sequences become the
/// replacement character, which is then dropped like any other
/// unrecognized character). Line and column counters are 1-based; every
/// character advances the column and a newline starts the next line.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u32,
    col: u32,
    peeked: Option<Token>,
}

impl Lexer {
    /// Create a lexer over the given source bytes.
    #[must_use]
    pub fn new(source: &[u8]) -> Self {
        Self {
            chars: String::from_utf8_lossy(source).chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
            peeked: None,
        }
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> &Token {
        if self.peeked.is_none() {
            let tok = self.scan();
            self.peeked = Some(tok);
        }
        self.peeked.as_ref().expect("just buffered")
    }

    /// Consume and return the next token.
    pub fn next_token(&mut self) -> Token {
        match self.peeked.take() {
            Some(tok) => tok,
            None => self.scan(),
        }
    }

    fn scan(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();
            let Some(c) = self.cur() else {
                return Token::new(TokenKind::Eof, String::new(), self.line, self.col);
            };
            if c.is_alphabetic() {
                return self.scan_ident();
            }
            if c.is_ascii_digit() {
                return self.scan_number();
            }
            match c {
                '"' => return self.scan_string(),
                '{' => return self.punct(TokenKind::LBrace, "{"),
                '}' => return self.punct(TokenKind::RBrace, "}"),
                '(' => return self.punct(TokenKind::LParen, "("),
                ')' => return self.punct(TokenKind::RParen, ")"),
                ',' => return self.punct(TokenKind::Comma, ","),
                '.' => return self.punct(TokenKind::Dot, "."),
                ';' => return self.punct(TokenKind::Semicolon, ";"),
                ':' => return self.scan_colon_assign(),
                '=' => return self.punct(TokenKind::AssignEq, "="),
                _ => {
                    // Anything else is dropped and lexing resumes.
                    self.advance();
                }
            }
        }
    }

    /// `::=`, or a truncated `:` / `::` reported as [`TokenKind::AssignEq`].
    fn scan_colon_assign(&mut self) -> Token {
        let (line, col) = (self.line, self.col);
        self.advance();
        if self.cur() != Some(':') {
            return Token::new(TokenKind::AssignEq, ":".into(), line, col);
        }
        self.advance();
        if self.cur() != Some('=') {
            return Token::new(TokenKind::AssignEq, "::".into(), line, col);
        }
        self.advance();
        Token::new(TokenKind::ColonColonEq, "::=".into(), line, col)
    }

    fn scan_ident(&mut self) -> Token {
        let (line, col) = (self.line, self.col);
        let mut text = String::new();
        while let Some(c) = self.cur() {
            if c.is_alphanumeric() || c == '-' {
                text.push(c);
                self.advance();
            } else {
                break;
            }
        }
        Token::new(TokenKind::Ident, text, line, col)
    }

    fn scan_number(&mut self) -> Token {
        let (line, col) = (self.line, self.col);
        let mut text = String::new();
        let mut value: u32 = 0;
        while let Some(c) = self.cur() {
            if let Some(d) = c.to_digit(10) {
                text.push(c);
                value = value.wrapping_mul(10).wrapping_add(d);
                self.advance();
            } else {
                break;
            }
        }
        let mut tok = Token::new(TokenKind::Number, text, line, col);
        tok.value = value;
        tok
    }

    /// Double-quoted string. Backslash takes the next character verbatim;
    /// an unterminated string ends at EOF with what was collected.
    fn scan_string(&mut self) -> Token {
        let (line, col) = (self.line, self.col);
        self.advance(); // opening quote
        let mut text = String::new();
        while let Some(c) = self.cur() {
            match c {
                '"' => {
                    self.advance();
                    break;
                }
                '\\' => {
                    self.advance();
                    if let Some(escaped) = self.cur() {
                        text.push(escaped);
                        self.advance();
                    }
                }
                _ => {
                    text.push(c);
                    self.advance();
                }
            }
        }
        Token::new(TokenKind::QuotedString, text, line, col)
    }

    fn punct(&mut self, kind: TokenKind, text: &str) -> Token {
        let (line, col) = (self.line, self.col);
        self.advance();
        Token::new(kind, text.into(), line, col)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.cur() {
            if c == ' ' || c == '\t' || c == '\r' || c == '\n' {
                self.advance();
                continue;
            }
            // `--` starts a comment running to end of line.
            if c == '-' && self.peek_char() == Some('-') {
                self.advance();
                self.advance();
                while let Some(c) = self.cur() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
                continue;
            }
            break;
        }
    }

    fn cur(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn advance(&mut self) {
        let Some(c) = self.cur() else { return };
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let tok = self.next_token();
        if tok.kind == TokenKind::Eof {
            None
        } else {
            Some(tok)
        }
    }
}
