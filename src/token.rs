// SPDX-License-Identifier: Unlicense
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Operator,
    Identifier,
    LParen,
    RParen,
    Semicolon,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
        };
        f.write_str(name)
    }
}

/// A classified lexical unit. Operators are single characters out of `+ - * / =`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Integer(i64),
    Operator(char),
    Identifier(String),
    LParen,
    RParen,
    Semicolon,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Integer(_) => TokenKind::Integer,
            Token::Operator(_) => TokenKind::Operator,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::LParen => TokenKind::LParen,
            Token::RParen => TokenKind::RParen,
            Token::Semicolon => TokenKind::Semicolon,
        }
    }

    /// The token's value as text: the decimal integer, or the matched source text.
    pub fn value(&self) -> String {
        match self {
            Token::Integer(n) => n.to_string(),
            Token::Operator(c) => c.to_string(),
            Token::Identifier(name) => name.clone(),
            Token::LParen => "(".into(),
            Token::RParen => ")".into(),
            Token::Semicolon => ";".into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "({}, {})", self.kind(), n),
            _ => write!(f, "({}, '{}')", self.kind(), self.value()),
        }
    }
}
