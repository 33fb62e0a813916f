//! Lexical analysis module
//!
//! This module handles tokenization of Sprout source code.

pub mod token;
pub mod scanner;

pub use token::{Token, TokenType};
pub use scanner::Lexer;
