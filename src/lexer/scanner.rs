//! Lexer/Scanner implementation for the Sprout language
//!
//! A single left-to-right pass over the source. Unknown characters are
//! recorded as diagnostics and skipped, so tokenizing never fails.

use log::{debug, trace};

use super::token::{Token, TokenType};
use crate::error::{SourceLocation, SproutError};

/// Lexer for Sprout source code
pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    diagnostics: Vec<SproutError>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    start_location: SourceLocation,
    filename: Option<String>,
}

impl Lexer {
    /// Create a new lexer
    pub fn new(source: &str, filename: Option<&str>) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_location: SourceLocation::default(),
            filename: filename.map(|s| s.to_string()),
        }
    }

    /// Tokenize the source code.
    ///
    /// The returned sequence always ends with exactly one [`TokenType::End`].
    /// Each call rescans the source from the start and replaces the
    /// previously recorded diagnostics.
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.reset();

        while !self.is_at_end() {
            self.start = self.current;
            self.start_location = self.current_location();
            self.scan_token();
        }

        self.tokens.push(Token::end(self.current_location()));

        debug!(
            "tokenized {} characters into {} tokens ({} diagnostics)",
            self.source.len(),
            self.tokens.len(),
            self.diagnostics.len()
        );
        std::mem::take(&mut self.tokens)
    }

    /// Errors recorded by the last call to [`Lexer::tokenize`]
    pub fn diagnostics(&self) -> &[SproutError] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<SproutError> {
        self.diagnostics
    }

    fn reset(&mut self) {
        self.tokens.clear();
        self.diagnostics.clear();
        self.start = 0;
        self.current = 0;
        self.line = 1;
        self.column = 1;
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        // C `isspace`: ASCII whitespace plus vertical tab
        if c.is_ascii_whitespace() || c == '\x0b' {
            return;
        }

        if let Some(token_type) = TokenType::from_symbol(c) {
            self.add_token(token_type);
        } else if c.is_ascii_digit() {
            self.scan_number();
        } else if c.is_ascii_alphabetic() {
            self.scan_identifier();
        } else {
            trace!("skipping unknown character {:?} at {}", c, self.start_location);
            self.diagnostics
                .push(SproutError::unknown_character(c, self.start_location.clone()));
        }
    }

    /// Scan a run of decimal digits
    fn scan_number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.add_token(TokenType::Number);
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let lexeme = self.lexeme();
        let token_type = TokenType::keyword(&lexeme).unwrap_or(TokenType::Identifier);
        self.tokens
            .push(Token::new(token_type, lexeme, self.start_location.clone()));
    }

    fn add_token(&mut self, token_type: TokenType) {
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(token_type, lexeme, self.start_location.clone()));
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    /// Advance to the next character
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Get the current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.filename.clone())
    }
}
