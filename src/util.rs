/// Syntax tree rendering.
///
/// This module draws any syntax node as an indented tree, one node per line.
/// It only relies on the generic node interface: the kind tag, the ordered
/// children and, for tokens, the literal value.
pub mod tree;
