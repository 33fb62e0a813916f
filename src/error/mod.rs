//! Error handling and diagnostics for the Sprout language
//!
//! Every failure in the front end is recoverable. The lexer and parser record
//! these errors and keep going; callers decide how to present them.

use std::fmt;

use thiserror::Error;

use crate::lexer::TokenType;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for Sprout operations
pub type SproutResult<T> = Result<T, SproutError>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::at(1, 1)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Errors produced while lexing or parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SproutError {
    /// A character no token can start with
    #[error("Lexer Error: Unknown character: {character} at {location}")]
    UnknownCharacter {
        character: char,
        location: SourceLocation,
    },
    /// A token that cannot begin an expression
    #[error("Parse Error: Unexpected token: {found} at {location}")]
    UnexpectedToken {
        found: String,
        location: SourceLocation,
    },
    /// A required token was missing
    #[error("Parse Error: {message} at {location}")]
    ExpectedToken {
        expected: TokenType,
        message: String,
        location: SourceLocation,
    },
}

impl SproutError {
    pub fn unknown_character(character: char, location: SourceLocation) -> Self {
        Self::UnknownCharacter {
            character,
            location,
        }
    }

    pub fn unexpected_token(found: impl Into<String>, location: SourceLocation) -> Self {
        Self::UnexpectedToken {
            found: found.into(),
            location,
        }
    }

    pub fn expected_token(
        expected: TokenType,
        message: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self::ExpectedToken {
            expected,
            message: message.into(),
            location,
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::UnknownCharacter { .. } => "Lexer Error",
            Self::UnexpectedToken { .. } | Self::ExpectedToken { .. } => "Parse Error",
        }
    }

    /// Get the error message without kind or location
    pub fn message(&self) -> String {
        match self {
            Self::UnknownCharacter { character, .. } => format!("Unknown character: {}", character),
            Self::UnexpectedToken { found, .. } => format!("Unexpected token: {}", found),
            Self::ExpectedToken { message, .. } => message.clone(),
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::UnknownCharacter { location, .. }
            | Self::UnexpectedToken { location, .. }
            | Self::ExpectedToken { location, .. } => location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::at(10, 5);
        assert_eq!(loc.to_string(), "10:5");

        let loc_with_file = SourceLocation::new(10, 5, Some("test.spr".to_string()));
        assert_eq!(loc_with_file.to_string(), "test.spr:10:5");
    }

    #[test]
    fn test_error_creation() {
        let loc = SourceLocation::at(1, 1);
        let err = SproutError::unknown_character('@', loc.clone());

        assert_eq!(err.kind(), "Lexer Error");
        assert_eq!(err.message(), "Unknown character: @");
        assert_eq!(err.location(), &loc);
    }

    #[test]
    fn test_error_display() {
        let err = SproutError::expected_token(
            TokenType::Semicolon,
            "Expect ';' after expression",
            SourceLocation::at(5, 10),
        );
        assert_eq!(err.kind(), "Parse Error");
        assert_eq!(err.to_string(), "Parse Error: Expect ';' after expression at 5:10");

        let err = SproutError::unexpected_token(";", SourceLocation::at(1, 9));
        assert_eq!(err.to_string(), "Parse Error: Unexpected token: ; at 1:9");
    }
}
