//! Parser implementation
//!
//! Recursive descent over the token slice:
//!
//! ```text
//! program      := declaration*
//! declaration  := 'int' IDENTIFIER '=' expression ';'
//! expression   := term
//! term         := factor ( ('*'|'/'|'+'|'-') factor )*
//! factor       := NUMBER | IDENTIFIER
//! ```
//!
//! All four operators fold left to right at the same level, so `a + b * c`
//! is `(a + b) * c`.

use log::{debug, trace};

use super::ast::*;
use crate::error::{SourceLocation, SproutError, SproutResult};
use crate::lexer::{Token, TokenType};

/// What the parser does after a malformed declaration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Recovery {
    /// Skip past the next `;` and keep parsing declarations
    #[default]
    Synchronize,
    /// Stop and return the declarations parsed so far
    Halt,
}

/// Parser for Sprout tokens
pub struct Parser<'a> {
    tokens: &'a [Token],
    current: usize,
    recovery: Recovery,
    diagnostics: Vec<SproutError>,
    eof: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser from tokens
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_recovery(tokens, Recovery::default())
    }

    pub fn with_recovery(tokens: &'a [Token], recovery: Recovery) -> Self {
        let eof_location = tokens
            .last()
            .map(|t| t.location.clone())
            .unwrap_or_default();
        Self {
            tokens,
            current: 0,
            recovery,
            diagnostics: Vec::new(),
            eof: Token::end(eof_location),
        }
    }

    /// Parse every leading `int` declaration.
    ///
    /// Never fails: errors are recorded in [`Parser::diagnostics`] and the
    /// malformed declaration is left out of the result.
    pub fn parse(&mut self) -> Vec<Declaration> {
        let mut declarations = Vec::new();

        while !self.is_at_end() {
            match self.declaration() {
                Ok(Some(declaration)) => declarations.push(declaration),
                Ok(None) => {
                    trace!("no declaration starts at {}", self.peek().location);
                    break;
                }
                Err(error) => {
                    debug!("malformed declaration: {}", error);
                    self.diagnostics.push(error);
                    match self.recovery {
                        Recovery::Synchronize => self.synchronize(),
                        Recovery::Halt => break,
                    }
                }
            }
        }

        debug!(
            "parsed {} declarations ({} diagnostics)",
            declarations.len(),
            self.diagnostics.len()
        );
        declarations
    }

    /// Errors recorded by the last call to [`Parser::parse`]
    pub fn diagnostics(&self) -> &[SproutError] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<SproutError> {
        self.diagnostics
    }

    // ===== Declarations =====

    fn declaration(&mut self) -> SproutResult<Option<Declaration>> {
        if !self.match_token(TokenType::Int) {
            return Ok(None);
        }

        let keyword = self.previous();
        let type_name = keyword.lexeme.clone();
        let location = keyword.location.clone();

        let assignment = self.assignment()?;
        self.consume(TokenType::Semicolon, "Expect ';' after expression")?;

        Ok(Some(Declaration {
            type_name,
            assignment,
            location,
        }))
    }

    fn assignment(&mut self) -> SproutResult<Assignment> {
        let name = self.consume(TokenType::Identifier, "Expect identifier")?;
        let target = Identifier {
            name: name.lexeme.clone(),
            location: name.location.clone(),
        };
        self.consume(TokenType::Assign, "Expect '=' after variable name")?;
        let value = self.expression()?;

        Ok(Assignment {
            location: target.location.clone(),
            target,
            value,
        })
    }

    /// Skip tokens through the next `;` so parsing can resume after a bad
    /// declaration.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            if self.advance().token_type == TokenType::Semicolon {
                return;
            }
        }
    }

    // ===== Expressions =====

    fn expression(&mut self) -> SproutResult<Expr> {
        self.term()
    }

    fn term(&mut self) -> SproutResult<Expr> {
        let mut expr = self.factor()?;

        while self.match_tokens(&[
            TokenType::Multiply,
            TokenType::Divide,
            TokenType::Plus,
            TokenType::Minus,
        ]) {
            let location = self.previous().location.clone();
            let operator = match self.previous().token_type {
                TokenType::Multiply => BinaryOp::Multiply,
                TokenType::Divide => BinaryOp::Divide,
                TokenType::Plus => BinaryOp::Add,
                TokenType::Minus => BinaryOp::Subtract,
                _ => unreachable!(),
            };
            let right = Box::new(self.factor()?);
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right,
                location,
            };
        }

        Ok(expr)
    }

    fn factor(&mut self) -> SproutResult<Expr> {
        if self.match_token(TokenType::Number) {
            let token = self.previous();
            return Ok(Expr::Number {
                value: token.lexeme.clone(),
                location: token.location.clone(),
            });
        }

        if self.match_token(TokenType::Identifier) {
            let token = self.previous();
            return Ok(Expr::Identifier(Identifier {
                name: token.lexeme.clone(),
                location: token.location.clone(),
            }));
        }

        let token = self.peek();
        let found = if token.token_type == TokenType::End {
            "end of input".to_string()
        } else {
            token.lexeme.clone()
        };
        Err(SproutError::unexpected_token(found, token.location.clone()))
    }

    // ===== Helper Methods =====

    fn match_token(&mut self, token_type: TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_tokens(&mut self, types: &[TokenType]) -> bool {
        types.iter().any(|&t| self.match_token(t))
    }

    fn check(&self, token_type: TokenType) -> bool {
        if self.is_at_end() {
            false
        } else {
            self.peek().token_type == token_type
        }
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::End
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.current).unwrap_or(&self.eof)
    }

    /// The token just consumed
    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    fn consume(&mut self, token_type: TokenType, message: &str) -> SproutResult<&Token> {
        if self.check(token_type) {
            Ok(self.advance())
        } else {
            Err(SproutError::expected_token(
                token_type,
                message,
                self.location(),
            ))
        }
    }

    fn location(&self) -> SourceLocation {
        self.peek().location.clone()
    }
}
