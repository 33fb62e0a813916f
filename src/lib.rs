//! # Sprout
//!
//! Front end for Sprout, a tiny imperative language made of integer
//! declarations such as `int total = sum + 10;`.
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code
//! - `parser`: Parsing tokens into declaration trees
//! - `printer`: Text dumps of tokens and trees
//! - `error`: Error types and diagnostics
//!
//! Neither stage ever aborts. Problems are collected as [`SproutError`]s
//! while the stage keeps going.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;

// Re-export commonly used types
pub use error::{Diagnostic, SourceLocation, SproutError, SproutResult};
pub use lexer::{Lexer, Token, TokenType};
pub use parser::{Declaration, Parser, Recovery};

/// Version of the Sprout front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize `source`, writing any diagnostics to stderr.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source, None);
    let tokens = lexer.tokenize();
    for error in lexer.diagnostics() {
        eprint!("{}", Diagnostic::with_source(error, source));
    }
    tokens
}

/// Parse `tokens` into declarations, writing any diagnostics to stderr.
pub fn parse(tokens: &[Token]) -> Vec<Declaration> {
    let mut parser = Parser::new(tokens);
    let declarations = parser.parse();
    for error in parser.diagnostics() {
        eprint!("{}", Diagnostic::new(error));
    }
    declarations
}

/// Everything the front end produced for one source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontend {
    pub tokens: Vec<Token>,
    pub declarations: Vec<Declaration>,
    /// Lexer diagnostics first, then parser diagnostics
    pub diagnostics: Vec<SproutError>,
}

/// Run the lexer and the parser over `source`.
///
/// # Arguments
///
/// * `source` - The source code to process
/// * `filename` - Optional filename for error reporting
/// * `recovery` - What the parser does after a malformed declaration
pub fn run(source: &str, filename: Option<&str>, recovery: Recovery) -> Frontend {
    let mut lexer = Lexer::new(source, filename);
    let tokens = lexer.tokenize();
    let mut diagnostics = lexer.into_diagnostics();

    let mut parser = Parser::with_recovery(&tokens, recovery);
    let declarations = parser.parse();
    diagnostics.extend(parser.into_diagnostics());

    Frontend {
        tokens,
        declarations,
        diagnostics,
    }
}
