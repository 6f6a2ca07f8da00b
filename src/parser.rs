// SPDX-License-Identifier: Unlicense
use crate::ast::{self, BiOpKind, NodeKind, SyntaxTree};
use crate::error::{Expected, ParseError};
use crate::options::SyntaxOptions;
use crate::token::{Token, TokenKind};

/// Deepest parenthesis nesting accepted; each level costs several stack frames.
pub const MAX_NESTING: usize = 256;

// factor     = INTEGER | IDENTIFIER | "(" expression ")"
// term       = factor { ("*"|"/") factor }
// expression = term { ("+"|"-") term }
// assignment = IDENTIFIER "=" expression
// program    = assignment [ ";" ]
struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
    arena: ast::Arena,
    options: SyntaxOptions,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], options: SyntaxOptions) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            arena: ast::Arena::new(),
            options,
        }
    }

    fn new_node(&mut self, kind: NodeKind) -> ast::Id {
        self.arena.alloc(ast::Node { kind })
    }

    fn lookahead(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn error(&self, expected: Expected) -> ParseError {
        ParseError {
            expected,
            found: self.lookahead().cloned(),
            position: self.position,
        }
    }

    fn consume(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        match self.lookahead() {
            Some(token) if token.kind() == expected => {
                self.position += 1;
                Ok(())
            }
            _ => Err(self.error(Expected::Token(expected))),
        }
    }

    /// Operator of the given precedence level under the cursor, if any.
    fn binary_operator(&self, level: &[BiOpKind]) -> Option<BiOpKind> {
        match self.lookahead() {
            Some(Token::Operator(c)) => BiOpKind::from_symbol(*c).filter(|op| level.contains(op)),
            _ => None,
        }
    }

    fn factor(&mut self) -> Result<ast::Id, ParseError> {
        match self.lookahead() {
            Some(Token::Integer(n)) => {
                self.position += 1;
                Ok(self.new_node(NodeKind::Integer(*n)))
            }
            Some(Token::Identifier(name)) => {
                self.position += 1;
                Ok(self.new_node(NodeKind::Identifier(name.clone())))
            }
            Some(Token::LParen) => {
                if self.depth >= MAX_NESTING {
                    return Err(self.error(Expected::ShallowerNesting));
                }
                self.position += 1;
                self.depth += 1;
                let node = self.expression()?;
                self.depth -= 1;
                self.consume(TokenKind::RParen)?;
                Ok(node)
            }
            _ => Err(self.error(Expected::Factor)),
        }
    }

    fn term(&mut self) -> Result<ast::Id, ParseError> {
        let mut node = self.factor()?;
        while let Some(op) = self.binary_operator(&[BiOpKind::Mul, BiOpKind::Div]) {
            self.position += 1;
            let rhs = self.factor()?;
            node = self.new_node(NodeKind::BinaryOp(op, node, rhs));
        }
        Ok(node)
    }

    fn expression(&mut self) -> Result<ast::Id, ParseError> {
        let mut node = self.term()?;
        while let Some(op) = self.binary_operator(&[BiOpKind::Add, BiOpKind::Sub]) {
            self.position += 1;
            let rhs = self.term()?;
            node = self.new_node(NodeKind::BinaryOp(op, node, rhs));
        }
        Ok(node)
    }

    fn assignment(&mut self) -> Result<ast::Id, ParseError> {
        let target = match self.lookahead() {
            Some(Token::Identifier(name)) => {
                self.position += 1;
                name.clone()
            }
            _ => return Err(self.error(Expected::Token(TokenKind::Identifier))),
        };
        if self.options.strict_assignment && self.lookahead() != Some(&Token::Operator('=')) {
            return Err(self.error(Expected::AssignOperator));
        }
        // Without strict_assignment any operator stands in for `=`.
        self.consume(TokenKind::Operator)?;
        let expr = self.expression()?;
        Ok(self.new_node(NodeKind::Assignment(target, expr)))
    }

    fn program(mut self) -> Result<SyntaxTree, ParseError> {
        let root = self.assignment()?;
        if let Some(Token::Semicolon) = self.lookahead() {
            self.position += 1;
        }
        if self.options.require_end_of_input && self.lookahead().is_some() {
            return Err(self.error(Expected::EndOfInput));
        }
        Ok(SyntaxTree::new(self.arena, root))
    }
}

pub fn parse(tokens: &[Token]) -> Result<SyntaxTree, ParseError> {
    parse_with(tokens, &SyntaxOptions::default())
}

pub fn parse_with(tokens: &[Token], options: &SyntaxOptions) -> Result<SyntaxTree, ParseError> {
    Parser::new(tokens, *options).program()
}
