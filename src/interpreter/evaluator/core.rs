use crate::{ast::ExpressionSyntax, error::EvalError};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces an expression tree to a single integer.
///
/// The evaluator holds nothing but the root it was created with. It reports no
/// diagnostics: only evaluate trees whose diagnostics are empty.
///
/// # Example
/// ```
/// use ezc::{ast::SyntaxTree, interpreter::evaluator::core::Evaluator};
///
/// let tree = SyntaxTree::parse("(1 + 2) * 3");
/// assert!(tree.diagnostics().is_empty());
/// assert_eq!(Evaluator::new(tree.root()).evaluate(), Ok(9));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    root: &'a ExpressionSyntax,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator for the tree below `root`.
    #[must_use]
    pub const fn new(root: &'a ExpressionSyntax) -> Self {
        Self { root }
    }

    /// Evaluates the root expression.
    ///
    /// # Errors
    /// - `DivisionByZero` if a right operand of `/` evaluates to zero.
    /// - `Overflow` if an intermediate result does not fit into an `i32`.
    /// - `MissingValue` if a number token carries no value, which only happens
    ///   in trees that have diagnostics.
    ///
    /// # Panics
    /// Panics if a binary node holds an operator token other than `+`, `-`,
    /// `*` or `/`. The parser never builds such a node.
    pub fn evaluate(&self) -> EvalResult<i32> {
        Self::eval_expression(self.root)
    }

    /// Dispatches on the expression variant.
    fn eval_expression(expression: &ExpressionSyntax) -> EvalResult<i32> {
        match expression {
            ExpressionSyntax::Number { number_token } => {
                number_token.value
                            .ok_or(EvalError::MissingValue { position: number_token.position })
            },
            ExpressionSyntax::Binary { left,
                                       operator_token,
                                       right, } => {
                let left = Self::eval_expression(left)?;
                let right = Self::eval_expression(right)?;
                Self::eval_binary(operator_token, left, right)
            },
            ExpressionSyntax::Parenthesized { expression, .. } => Self::eval_expression(expression),
        }
    }
}
