//! Token definitions for the Sprout language

use crate::error::SourceLocation;
use std::fmt;

/// A token in the Sprout language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token
    pub fn new(token_type: TokenType, lexeme: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            token_type,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// The end-of-input sentinel
    pub fn end(location: SourceLocation) -> Self {
        Self::new(TokenType::End, String::new(), location)
    }
}

/// Token types in the Sprout language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    // Keywords
    Int,

    Identifier,
    Number,

    // Operators
    Assign,   // =
    Multiply, // *
    Divide,   // /
    Plus,     // +
    Minus,    // -

    Semicolon,

    End,
}

impl TokenType {
    /// Get keyword token type from an identifier lexeme
    pub fn keyword(lexeme: &str) -> Option<Self> {
        match lexeme {
            "int" => Some(Self::Int),
            _ => None,
        }
    }

    /// Get the single-character token type for an operator or punctuation mark
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '=' => Some(Self::Assign),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }

    /// Upper-case kind name used in token dumps
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Identifier => "IDENTIFIER",
            Self::Number => "NUMBER",
            Self::Assign => "ASSIGN",
            Self::Multiply => "MULTIPLY",
            Self::Divide => "DIVIDE",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Semicolon => "SEMICOLON",
            Self::End => "END",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(TokenType::keyword("int"), Some(TokenType::Int));
        assert_eq!(TokenType::keyword("Int"), None);
        assert_eq!(TokenType::keyword("integer"), None);
        assert_eq!(TokenType::keyword("float"), None);
    }

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(TokenType::from_symbol('+'), Some(TokenType::Plus));
        assert_eq!(TokenType::from_symbol('/'), Some(TokenType::Divide));
        assert_eq!(TokenType::from_symbol(';'), Some(TokenType::Semicolon));
        assert_eq!(TokenType::from_symbol('%'), None);
    }

    #[test]
    fn test_end_token() {
        let token = Token::end(SourceLocation::at(1, 4));
        assert_eq!(token.token_type, TokenType::End);
        assert!(token.lexeme.is_empty());
        assert_eq!(token.token_type.to_string(), "END");
    }
}
