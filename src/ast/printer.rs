//! AST trace printer.
//!
//! Renders a tree as an indented, line-oriented debug trace for human
//! inspection. The printer is pure: it returns the lines and the caller
//! picks the sink. Traversal is strict pre-order over an explicit worklist,
//! so depth is bounded by the heap rather than the native call stack, and
//! repeated renders of an unmodified tree are byte-identical.
//!
//! Rendering is total. An absent node produces nothing, an [`Node::Unknown`]
//! node produces a fixed fallback line, and no input shape is an error.

use super::Node;

/// Renders the tree rooted at `node` starting at the given indent level.
///
/// Returns one string per emitted line, each prefixed with exactly its
/// indent in spaces. An absent node yields an empty vector at any depth.
///
/// # Examples
///
/// ```rust
/// use vsharp::ast::{printer, Node};
/// let expr = Node::binary("+", Node::identifier("x"), Node::literal(2i64));
/// let lines = printer::render(Some(&expr), 0);
/// assert_eq!(lines, ["BinaryExpr(+)", "  Identifier(x)", "  Literal(2)"]);
/// ```
pub fn render(node: Option<&Node>, indent: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut stack = Vec::new();
    if let Some(node) = node {
        stack.push((node, indent));
    }
    while let Some((node, indent)) = stack.pop() {
        emit(node, indent, &mut lines, &mut stack);
    }
    lines
}

/// Renders the tree to a single newline-terminated string.
///
/// An absent node yields the empty string.
pub fn render_to_string(node: Option<&Node>, indent: usize) -> String {
    let lines = render(node, indent);
    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Emits the lines for one node and schedules its children.
///
/// Children are pushed in reverse so the stack pops them left-to-right,
/// preserving pre-order.
fn emit<'a>(
    node: &'a Node,
    indent: usize,
    lines: &mut Vec<String>,
    stack: &mut Vec<(&'a Node, usize)>,
) {
    let pad = " ".repeat(indent);
    match node {
        Node::Block(children) => {
            lines.push(format!("{}Block", pad));
            for child in children.iter().rev() {
                stack.push((child, indent + 2));
            }
        }
        Node::Literal(value) => {
            lines.push(format!("{}Literal({})", pad, value));
        }
        Node::Identifier(name) => {
            lines.push(format!("{}Identifier({})", pad, name));
        }
        Node::BinaryExpr { op, left, right } => {
            lines.push(format!("{}BinaryExpr({})", pad, op));
            stack.push((&**right, indent + 2));
            stack.push((&**left, indent + 2));
        }
        Node::FunctionDecl(decl) => {
            lines.push(format!(
                "{}FunctionDecl({} {}) -> {}",
                pad,
                decl.access,
                decl.name,
                decl.return_type.name()
            ));
            lines.push(format!("{}  Params:", pad));
            for param in &decl.params {
                lines.push(format!("{}    {} {}", pad, param.ty.name(), param.name));
            }
            lines.push(format!("{}  Body:", pad));
            stack.push((&*decl.body, indent + 4));
        }
        Node::ReturnExpr { value } => {
            lines.push(format!("{}ReturnExpr", pad));
            if let Some(value) = value {
                stack.push((&**value, indent + 2));
            }
        }
        Node::Unknown => {
            lines.push(format!("{}Unknown AST Node", pad));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::LiteralValue;

    #[test]
    fn absent_node_renders_nothing() {
        assert!(render(None, 0).is_empty());
        assert!(render(None, 6).is_empty());
        assert_eq!(render_to_string(None, 2), "");
    }

    #[test]
    fn preorder_holds_across_sibling_subtrees() {
        let tree = Node::Block(vec![
            Node::binary("*", Node::literal(1i64), Node::literal(2i64)),
            Node::identifier("after"),
        ]);
        let lines = render(Some(&tree), 0);
        assert_eq!(
            lines,
            [
                "Block",
                "  BinaryExpr(*)",
                "    Literal(1)",
                "    Literal(2)",
                "  Identifier(after)",
            ]
        );
    }

    #[test]
    fn deep_nesting_renders_iteratively() {
        let mut node = Node::Literal(LiteralValue::Int(0));
        for _ in 0..2_000 {
            node = Node::ReturnExpr {
                value: Some(Box::new(node)),
            };
        }
        let block = Node::Block(vec![node]);
        let lines = render(Some(&block), 0);
        assert_eq!(lines.len(), 2_002);
        assert_eq!(lines[0], "Block");
        assert_eq!(lines[1], "  ReturnExpr");
        assert_eq!(lines.last().unwrap().trim(), "Literal(0)");
    }
}
