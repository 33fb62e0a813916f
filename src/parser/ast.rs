//! Abstract Syntax Tree definitions
//!
//! This module defines the AST node types for the Sprout language. Every
//! parent owns its children outright; there is no sharing between trees.

use std::fmt;

use crate::error::SourceLocation;

/// Variable declaration: `int x = 1 + y;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared type name; only `int` is recognized today
    pub type_name: String,
    pub assignment: Assignment,
    pub location: SourceLocation,
}

/// The `name = value` part of a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: Identifier,
    pub value: Expr,
    pub location: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
    pub location: SourceLocation,
}

/// Expression node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Numeric literal, kept as its source text
    Number {
        value: String,
        location: SourceLocation,
    },

    /// Variable reference
    Identifier(Identifier),

    /// Binary operation
    Binary {
        left: Box<Expr>,
        operator: BinaryOp,
        right: Box<Expr>,
        location: SourceLocation,
    },
}

impl Expr {
    pub fn location(&self) -> &SourceLocation {
        match self {
            Expr::Number { location, .. } | Expr::Binary { location, .. } => location,
            Expr::Identifier(identifier) => &identifier.location,
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Borrowed view over any syntax node.
///
/// Code that treats the tree uniformly (dumps, walks) matches on this
/// instead of on the individual node types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Number(&'a str),
    Identifier(&'a Identifier),
    BinaryOperation {
        operator: BinaryOp,
        left: &'a Expr,
        right: &'a Expr,
    },
    Assignment(&'a Assignment),
    Declaration(&'a Declaration),
}

impl<'a> Node<'a> {
    /// Node type name with its payload, e.g. `NumberNode(42)`
    pub fn label(&self) -> String {
        match self {
            Node::Number(value) => format!("NumberNode({})", value),
            Node::Identifier(identifier) => format!("IdentifierNode({})", identifier.name),
            Node::BinaryOperation { operator, .. } => format!("BinaryOperationNode({})", operator),
            Node::Assignment(_) => "AssignmentNode".to_string(),
            Node::Declaration(declaration) => format!("DeclarationNode({})", declaration.type_name),
        }
    }

    /// Direct children in source order
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Number(_) | Node::Identifier(_) => Vec::new(),
            Node::BinaryOperation { left, right, .. } => vec![left.into(), right.into()],
            Node::Assignment(assignment) => vec![
                Node::Identifier(&assignment.target),
                (&assignment.value).into(),
            ],
            Node::Declaration(declaration) => vec![Node::Assignment(&declaration.assignment)],
        }
    }
}

impl<'a> From<&'a Expr> for Node<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Number { value, .. } => Node::Number(value),
            Expr::Identifier(identifier) => Node::Identifier(identifier),
            Expr::Binary {
                left,
                operator,
                right,
                ..
            } => Node::BinaryOperation {
                operator: *operator,
                left,
                right,
            },
        }
    }
}

impl<'a> From<&'a Declaration> for Node<'a> {
    fn from(declaration: &'a Declaration) -> Self {
        Node::Declaration(declaration)
    }
}
