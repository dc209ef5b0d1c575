use crate::error::{Error, ErrorCode};
use crate::syntax::token::{Token, TokenKind, command_type, param_key};

/// Scanner over the text of a single command (one `;`-separated segment).
pub struct Lexer<'a> {
    text: &'a str,
    source: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, source: text.as_bytes(), pos: 0 }
    }

    /// Optional type letter followed by parameter tokens. Fails on the first
    /// byte that fits neither.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();

        self.skip_whitespace();
        if let Some(tok) = self.command_letter() {
            tokens.push(tok);
        }

        loop {
            self.skip_whitespace();
            if self.is_at_end() { break; }
            tokens.push(self.param()?);
        }

        Ok(tokens)
    }

    /// `a` and `l` double as parameter letters: `l5` is a length with the type
    /// omitted, `l x5` is a line.
    fn command_letter(&mut self) -> Option<Token> {
        if self.is_at_end() { return None; }
        let ch = self.peek();
        let ty = command_type(ch)?;
        if param_key(ch).is_some() && starts_number(self.peek_next()) {
            return None;
        }
        let offset = self.pos;
        self.advance();
        Some(Token::new(TokenKind::Type(ty), offset))
    }

    fn param(&mut self) -> Result<Token, Error> {
        let offset = self.pos;
        let ch = self.advance();
        let Some((key, frame)) = param_key(ch) else {
            let shown = self.text[offset..].chars().next().unwrap_or(ch as char);
            return Err(self.err(ErrorCode::C001,
                format!("unexpected character `{shown}` at {offset}")));
        };
        self.skip_whitespace();
        let value = self.read_number()?;
        Ok(Token::new(TokenKind::Param { key, frame, value }, offset))
    }

    // ─── Primitives ──────────────────────────────────────────────────────────

    fn advance(&mut self) -> u8 {
        let ch = self.source[self.pos];
        self.pos += 1;
        ch
    }

    fn peek(&self) -> u8 {
        if self.is_at_end() { 0 } else { self.source[self.pos] }
    }

    fn peek_next(&self) -> u8 {
        if self.pos + 1 >= self.source.len() { 0 } else { self.source[self.pos + 1] }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_ascii_whitespace() {
            self.advance();
        }
    }

    fn err(&self, code: ErrorCode, msg: impl Into<String>) -> Error {
        Error::new(code, self.text, msg)
    }

    // ─── Readers ─────────────────────────────────────────────────────────────

    /// `[+-]? digits? ('.' digits?)?` with at least one digit. `Ok(None)` when
    /// no number starts here.
    fn read_number(&mut self) -> Result<Option<f64>, Error> {
        if !starts_number(self.peek()) { return Ok(None); }

        let start = self.pos;
        if matches!(self.peek(), b'-' | b'+') { self.advance(); }
        let mut digits = self.skip_digits();
        if self.peek() == b'.' {
            self.advance();
            digits += self.skip_digits();
        }

        let s = &self.text[start..self.pos];
        if digits == 0 {
            return Err(self.err(ErrorCode::C002, format!("expected digits in number `{s}`")));
        }
        s.parse()
            .map(Some)
            .map_err(|_| self.err(ErrorCode::C002, format!("invalid number `{s}`")))
    }

    fn skip_digits(&mut self) -> usize {
        let mut n = 0;
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
            n += 1;
        }
        n
    }
}

fn starts_number(ch: u8) -> bool {
    matches!(ch, b'0'..=b'9' | b'-' | b'+' | b'.')
}

// ─── Tests ───────────────────────────────────────────────────────────────────
