/// Lexical and syntactic diagnostics.
///
/// Diagnostics describe problems in the input text. They are collected by the
/// lexer and the parser instead of being raised, so a single run reports every
/// problem it finds.
pub mod diagnostic;
/// Evaluation errors.
///
/// Contains the errors the evaluator can return while reducing a tree to an
/// integer: division by zero, arithmetic overflow, and number literals that
/// carry no value.
pub mod eval_error;

pub use diagnostic::Diagnostic;
pub use eval_error::EvalError;

/// Everything that can stop a source line from producing a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input produced diagnostics, so it was never evaluated.
    #[error("{}", diagnostic::display_lines(.0))]
    Diagnostics(Vec<Diagnostic>),
    /// Evaluation of a diagnostic-free tree failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
