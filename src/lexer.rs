// SPDX-License-Identifier: Unlicense
use crate::error::LexError;
use crate::options::SyntaxOptions;
use crate::token::Token;

#[derive(Debug)]
enum Lexeme<'a> {
    // Digits are converted after the scan so an oversized literal keeps its own error.
    Digits(usize, &'a str),
    Token(Token),
}

peg::parser! {
    grammar token_parser(skip_newlines: bool) for str {
        rule blank() = [c if c == ' ' || c == '\t' || (skip_newlines && (c == '\n' || c == '\r'))]+

        rule integer() -> Lexeme<'input> = p:position!() n:$(['0'..='9']+) {
            Lexeme::Digits(p, n)
        }

        rule operator() -> Lexeme<'input> = c:['+' | '-' | '*' | '/' | '='] {
            Lexeme::Token(Token::Operator(c))
        }

        rule identifier() -> Lexeme<'input> =
            s:$(['a'..='z' | 'A'..='Z' | '_'] [c if c.is_alphanumeric() || c == '_']*) {
                Lexeme::Token(Token::Identifier(s.to_string()))
            }

        rule lparen() -> Lexeme<'input> = "(" { Lexeme::Token(Token::LParen) }
        rule rparen() -> Lexeme<'input> = ")" { Lexeme::Token(Token::RParen) }
        rule semicolon() -> Lexeme<'input> = ";" { Lexeme::Token(Token::Semicolon) }

        rule lexeme() -> Lexeme<'input> =
            integer() / operator() / identifier() / lparen() / rparen() / semicolon()

        pub rule lexemes() -> Vec<Lexeme<'input>> =
            blank()? ls:(l:lexeme() blank()? { l })* ![_] { ls }
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, &SyntaxOptions::default())
}

/// Scans the whole source left to right and stops at the first character
/// that starts no token.
pub fn tokenize_with(source: &str, options: &SyntaxOptions) -> Result<Vec<Token>, LexError> {
    let lexemes = token_parser::lexemes(source, options.skip_newlines).map_err(|e| {
        let position = e.location.offset;
        let character = source[position..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        LexError::IllegalCharacter {
            character,
            position,
        }
    })?;

    lexemes
        .into_iter()
        .map(|lexeme| match lexeme {
            Lexeme::Digits(position, digits) => digits
                .parse()
                .map(Token::Integer)
                .map_err(|_| LexError::IntegerOverflow {
                    literal: digits.to_string(),
                    position,
                }),
            Lexeme::Token(token) => Ok(token),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn lexer_should_split_assignment() -> Result<()> {
        let tokens = tokenize("x = 2 * (y_1 - 30);")?;
        assert_eq!(
            tokens,
            vec![
                Token::Identifier("x".into()),
                Token::Operator('='),
                Token::Integer(2),
                Token::Operator('*'),
                Token::LParen,
                Token::Identifier("y_1".into()),
                Token::Operator('-'),
                Token::Integer(30),
                Token::RParen,
                Token::Semicolon,
            ]
        );
        Ok(())
    }

    #[test]
    fn lexer_should_read_any_integer_as_one_token() -> Result<()> {
        for n in [0i64, 7, 42, 1000, 987654321, i64::MAX] {
            assert_eq!(tokenize(&n.to_string())?, vec![Token::Integer(n)]);
        }
        Ok(())
    }

    #[test]
    fn lexer_should_read_identifiers_greedily() -> Result<()> {
        for name in ["x", "_", "_tmp", "Total", "a1b2", "snake_case_9"] {
            assert_eq!(tokenize(name)?, vec![Token::Identifier(name.into())]);
        }
        Ok(())
    }

    #[test]
    fn lexer_should_not_start_identifier_with_digit() -> Result<()> {
        assert_eq!(
            tokenize("12ab")?,
            vec![Token::Integer(12), Token::Identifier("ab".into())]
        );
        Ok(())
    }

    #[test]
    fn lexer_should_emit_one_token_per_operator_character() -> Result<()> {
        let tokens = tokenize("+-*/==")?;
        let ops: Vec<_> = "+-*/==".chars().map(Token::Operator).collect();
        assert_eq!(tokens, ops);
        Ok(())
    }

    #[test]
    fn lexer_should_skip_spaces_and_tabs() -> Result<()> {
        assert_eq!(tokenize(" \t 5\t ")?, vec![Token::Integer(5)]);
        assert!(tokenize("   ")?.is_empty());
        assert!(tokenize("")?.is_empty());
        Ok(())
    }

    #[test]
    fn lexer_should_reject_illegal_character() {
        let err = tokenize("x = 4 @ 2").unwrap_err();
        assert_eq!(
            err,
            LexError::IllegalCharacter {
                character: '@',
                position: 6
            }
        );
        assert_eq!(err.position(), 6);
    }

    #[test]
    fn lexer_should_reject_newline_by_default() {
        let err = tokenize("x = 1\n").unwrap_err();
        assert_eq!(
            err,
            LexError::IllegalCharacter {
                character: '\n',
                position: 5
            }
        );
    }

    #[test]
    fn lexer_should_skip_newline_when_asked() -> Result<()> {
        let options = SyntaxOptions {
            skip_newlines: true,
            ..Default::default()
        };
        let tokens = tokenize_with("x =\r\n  1;\n", &options)?;
        assert_eq!(tokens.len(), 4);
        Ok(())
    }

    #[test]
    fn lexer_should_report_integer_overflow() {
        let err = tokenize("x = 99999999999999999999").unwrap_err();
        assert_eq!(
            err,
            LexError::IntegerOverflow {
                literal: "99999999999999999999".into(),
                position: 4
            }
        );
    }
}
