//! # ezc
//!
//! ezc is a minimal arithmetic expression compiler written in Rust.
//! It turns a line such as `1 + 2 * (3 - 4)` into a syntax tree and computes
//! its integer value. The pipeline has three stages, a lexer, a parser and an
//! evaluator, with diagnostics collected along the way instead of aborting at
//! the first problem.

#![warn(missing_docs,
        clippy::pedantic,
        clippy::nursery,
        clippy::cargo,
        clippy::unwrap_used,
        clippy::expect_used)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use crate::{
    error::Error,
    interpreter::{evaluator::core::Evaluator, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the node kinds of the syntax tree, the borrowed
/// `SyntaxNode` view used for uniform traversal, and the `SyntaxTree` that
/// bundles a root expression with its diagnostics.
///
/// # Responsibilities
/// - Defines expression nodes for number literals, binary operations and
///   parenthesized groups.
/// - Exposes the kind tag and ordered children of every node.
/// - Keeps every token, so the tree mirrors the source text.
pub mod ast;
/// Provides error and diagnostic types for every phase.
///
/// Diagnostics describe bad input and are accumulated by the lexer and parser.
/// Evaluation errors are returned by the evaluator. Both carry the byte
/// position they refer to.
///
/// # Responsibilities
/// - Defines the diagnostic messages shown to users.
/// - Defines the errors evaluation can fail with.
/// - Combines both into a single error for the library entry point.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Tokenizes source text.
/// - Builds syntax trees with error recovery.
/// - Evaluates diagnostic-free trees.
pub mod interpreter;
/// General utilities built on top of the syntax tree.
///
/// # Responsibilities
/// - Render syntax trees for display.
pub mod util;

/// Parses and evaluates one line of source text.
///
/// The line is only evaluated if parsing produced no diagnostics, so a result
/// is never computed from a broken tree.
///
/// # Errors
/// Returns `Error::Diagnostics` with every lexical and syntactic diagnostic if
/// the line is malformed, or `Error::Eval` if evaluation fails.
///
/// # Examples
/// ```
/// use ezc::{error::Error, evaluate};
///
/// assert_eq!(evaluate("1 + 2 * 3"), Ok(7));
/// assert_eq!(evaluate("10 - 2 - 3"), Ok(5));
///
/// // A missing operand is a diagnostic, not a value.
/// let Err(Error::Diagnostics(diagnostics)) = evaluate("1 +") else {
///     panic!("expected diagnostics");
/// };
/// assert_eq!(diagnostics[0].to_string(),
///            "ERROR: Unexpected token<EndOfFile>, expected <Number>");
/// ```
pub fn evaluate(source: &str) -> Result<i32, Error> {
    let tree = Parser::new(source).parse();

    if !tree.diagnostics().is_empty() {
        return Err(Error::Diagnostics(tree.diagnostics().to_vec()));
    }

    Ok(Evaluator::new(tree.root()).evaluate()?)
}
