// SPDX-License-Identifier: Unlicense
use crate::token::{Token, TokenKind};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token. `position` is a byte offset into the source.
    IllegalCharacter { character: char, position: usize },
    /// A digit run too large for an `i64`.
    IntegerOverflow { literal: String, position: usize },
}

impl LexError {
    pub fn position(&self) -> usize {
        match self {
            LexError::IllegalCharacter { position, .. }
            | LexError::IntegerOverflow { position, .. } => *position,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::IllegalCharacter {
                character,
                position,
            } => write!(f, "Illegal character {:?} at {}", character, position),
            LexError::IntegerOverflow { literal, position } => {
                write!(f, "Integer literal {} at {} is out of range", literal, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// What the parser wanted to see when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Token(TokenKind),
    /// An integer, an identifier or `(`.
    Factor,
    /// The literal `=` operator.
    AssignOperator,
    EndOfInput,
    /// A `(` past the nesting limit.
    ShallowerNesting,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "token type {}", kind),
            Expected::Factor => f.write_str("integer, identifier, or parenthesis"),
            Expected::AssignOperator => f.write_str("'='"),
            Expected::EndOfInput => f.write_str("end of input"),
            Expected::ShallowerNesting => write!(
                f,
                "at most {} nested parentheses",
                crate::parser::MAX_NESTING
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub expected: Expected,
    /// `None` when the input ran out.
    pub found: Option<Token>,
    /// Index of the offending token.
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            Some(token) => write!(
                f,
                "Expected {}, got {} at {}",
                self.expected, token, self.position
            ),
            None => write!(
                f,
                "Expected {}, got end of input at {}",
                self.expected, self.position
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(e) => fmt::Display::fmt(e, f),
            Error::Parse(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}
