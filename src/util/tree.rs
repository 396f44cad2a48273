use std::io::{self, Write};

use crate::ast::SyntaxNode;

const LAST_CHILD_MARKER: &str = "└──";
const CHILD_MARKER: &str = "├──";
const LAST_CHILD_INDENT: &str = "    ";
const CHILD_INDENT: &str = "│   ";

/// Renders `node` and everything below it as a tree.
///
/// Each line holds the node's kind, followed by the value for number tokens.
///
/// # Example
/// ```
/// use ezc::{
///     ast::{SyntaxNode, SyntaxTree},
///     util::tree::render,
/// };
///
/// let tree = SyntaxTree::parse("7");
/// assert_eq!(render(SyntaxNode::from(tree.root())),
///            "└──NumberExpression\n    └──NumberToken 7\n");
/// ```
#[must_use]
pub fn render(node: SyntaxNode<'_>) -> String {
    let mut out = String::new();
    render_node(node, "", true, &mut out);
    out
}

/// Writes the rendering of `node` to `out`.
///
/// # Errors
/// Returns any error raised by the writer.
pub fn pretty_print<W: Write>(node: SyntaxNode<'_>, out: &mut W) -> io::Result<()> {
    out.write_all(render(node).as_bytes())
}

fn render_node(node: SyntaxNode<'_>, indent: &str, is_last: bool, out: &mut String) {
    out.push_str(indent);
    out.push_str(if is_last { LAST_CHILD_MARKER } else { CHILD_MARKER });
    out.push_str(&node.kind().to_string());

    if let SyntaxNode::Token(token) = node
       && let Some(value) = token.value
    {
        out.push(' ');
        out.push_str(&value.to_string());
    }
    out.push('\n');

    let indent = format!("{indent}{}", if is_last { LAST_CHILD_INDENT } else { CHILD_INDENT });

    let children = node.children();
    let last = children.len().saturating_sub(1);
    for (index, child) in children.into_iter().enumerate() {
        render_node(child, &indent, index == last, out);
    }
}
