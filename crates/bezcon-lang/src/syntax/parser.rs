use std::f64::consts::PI;

use crate::error::Error;
use crate::syntax::ast::{Command, Param};
use crate::syntax::lexer::Lexer;
use crate::syntax::token::{ParamKey, Token, TokenKind};

/// Splits a command string on `;`, dropping blank segments.
pub fn split(source: &str) -> impl Iterator<Item = &str> {
    source.split(';').filter(|s| !s.trim().is_empty())
}

/// Builds a `Command` from the tokens of one segment.
pub struct Parser<'a> {
    text: &'a str,
    units: f64,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str, units: f64) -> Self {
        Self { text, units }
    }

    pub fn parse(self) -> Result<Command, Error> {
        let tokens = Lexer::new(self.text).tokenize()?;
        Ok(self.build(tokens))
    }

    fn build(&self, tokens: Vec<Token>) -> Command {
        let mut ty = None;
        let mut params = Vec::with_capacity(tokens.len());

        for tok in tokens {
            match tok.kind {
                TokenKind::Type(t) => ty = Some(t),
                TokenKind::Param { key, frame, value } => {
                    params.push(Param { key, frame, value: self.convert(key, value.unwrap_or(0.0)) });
                }
            }
        }

        Command { text: self.text.to_string(), ty, params }
    }

    fn convert(&self, key: ParamKey, raw: f64) -> f64 {
        match key {
            ParamKey::Angle => -(raw / 180.0) * PI,
            _ => raw * self.units,
        }
    }
}

/// Parses every command up front. Used by tooling; the interpreter parses
/// lazily so that commands before a malformed one still apply.
pub fn parse_all(source: &str, units: f64) -> Result<Vec<Command>, Error> {
    split(source).map(|text| Parser::new(text, units).parse()).collect()
}
