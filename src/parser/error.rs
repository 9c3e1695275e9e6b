use tree_sitter::Node;

use crate::error::RuntimeError;

/// The first `ERROR` or missing node of a tree, depth-first.
pub fn find_syntax_error(node: Node) -> Option<RuntimeError> {
    if node.is_missing() {
        return Some(
            RuntimeError::error(&format!("Missing `{}`", node.kind()))
                .in_range(node.byte_range())
        );
    }
    if node.is_error() {
        return Some(RuntimeError::error("Syntax error").in_range(node.byte_range()));
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children = node.children(&mut cursor).collect::<Vec<_>>();
    children.into_iter().find_map(find_syntax_error)
}

pub fn unsupported_syntax(node: Node) -> RuntimeError {
    RuntimeError::error(&format!("Unsupported syntax: `{}`", node.kind()))
        .in_range(node.byte_range())
}

pub fn missing_node(node: Node, part: &str) -> RuntimeError {
    RuntimeError::error(&format!("`{}` is missing its {}", node.kind(), part))
        .in_range(node.byte_range())
}
