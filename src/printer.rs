//! Plain-text dumps of token streams and syntax trees

use crate::lexer::Token;
use crate::parser::{Declaration, Node};

const INDENT: usize = 2;

/// One `Token(KIND, text)` line per token
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        output.push_str(&format!("Token({}, {})\n", token.token_type, token.lexeme));
    }
    output
}

/// Indented dump of every declaration, children two spaces deeper than
/// their parent
pub fn format_tree(declarations: &[Declaration]) -> String {
    let mut output = String::new();
    for declaration in declarations {
        write_node(&mut output, Node::from(declaration), 0);
    }
    output
}

fn write_node(output: &mut String, node: Node<'_>, depth: usize) {
    output.push_str(&format!(
        "{:indent$}{}\n",
        "",
        node.label(),
        indent = depth * INDENT
    ));
    for child in node.children() {
        write_node(output, child, depth + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_tokens() {
        let tokens = Lexer::new("int x = 1;", None).tokenize();
        assert_eq!(
            format_tokens(&tokens),
            "Token(INT, int)\n\
             Token(IDENTIFIER, x)\n\
             Token(ASSIGN, =)\n\
             Token(NUMBER, 1)\n\
             Token(SEMICOLON, ;)\n\
             Token(END, )\n"
        );
    }

    #[test]
    fn test_format_tree() {
        let tokens = Lexer::new("int sum = a * b; int total = sum + 10;", None).tokenize();
        let declarations = Parser::new(&tokens).parse();
        assert_eq!(
            format_tree(&declarations),
            "DeclarationNode(int)\n\
             \x20 AssignmentNode\n\
             \x20   IdentifierNode(sum)\n\
             \x20   BinaryOperationNode(*)\n\
             \x20     IdentifierNode(a)\n\
             \x20     IdentifierNode(b)\n\
             DeclarationNode(int)\n\
             \x20 AssignmentNode\n\
             \x20   IdentifierNode(total)\n\
             \x20   BinaryOperationNode(+)\n\
             \x20     IdentifierNode(sum)\n\
             \x20     NumberNode(10)\n"
        );
    }

    #[test]
    fn test_format_empty_tree() {
        assert_eq!(format_tree(&[]), "");
    }
}
