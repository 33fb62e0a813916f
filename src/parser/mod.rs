//! Parser module
//!
//! This module handles parsing tokens into an Abstract Syntax Tree (AST).

pub mod ast;
pub mod parser;

pub use ast::{Assignment, BinaryOp, Declaration, Expr, Identifier, Node};
pub use parser::{Parser, Recovery};
