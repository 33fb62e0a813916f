//! Diagnostic formatting for better error messages
//!
//! Renders a [`SproutError`] with the surrounding source lines and a caret
//! under the offending column.

use super::{SourceLocation, SproutError};
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a SproutError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a SproutError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: &'a SproutError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: {}\n", kind, self.error.message()));

        let location = self.error.location();
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

        if let Some(source) = self.source {
            output.push_str(&self.format_source_context(source, location));
        }

        output
    }

    fn format_source_context(&self, source: &str, location: &SourceLocation) -> String {
        let mut output = String::new();
        let lines: Vec<&str> = source.lines().collect();

        if location.line == 0 || location.line > lines.len() {
            return output;
        }

        let line_idx = location.line - 1;
        let line_num_width = location.line.to_string().len();

        if line_idx > 0 {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{:width$}", line_idx, width = line_num_width).blue(),
                lines[line_idx - 1]
            ));
        }

        output.push_str(&format!(
            "  {} {}\n",
            format!("{:width$}", location.line, width = line_num_width)
                .blue()
                .bold(),
            lines[line_idx]
        ));

        let indicator_padding = " ".repeat(line_num_width + 2 + location.column.saturating_sub(1) + 1);
        output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_without_source() {
        let err = SproutError::unknown_character('@', SourceLocation::at(1, 1));
        let formatted = Diagnostic::new(&err).format();

        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("Unknown character: @"));
        assert!(formatted.contains("1:1"));
    }

    #[test]
    fn test_diagnostic_with_source() {
        let source = "int x = 42;\nint y = @;\nint z = 10;";
        let err = SproutError::unknown_character('@', SourceLocation::at(2, 9));
        let formatted = Diagnostic::with_source(&err, source).format();

        assert!(formatted.contains("Lexer Error"));
        assert!(formatted.contains("int x = 42;"));
        assert!(formatted.contains("int y = @;"));
        assert!(!formatted.contains("int z = 10;"));
    }

    #[test]
    fn test_diagnostic_location_past_source() {
        let err = SproutError::unexpected_token("end of input", SourceLocation::at(7, 1));
        let formatted = Diagnostic::with_source(&err, "int x =").format();

        assert!(formatted.contains("Unexpected token: end of input"));
        assert!(!formatted.contains("int x ="));
    }
}
