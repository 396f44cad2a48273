use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::{SyntaxToken, TokenKind},
    },
};

impl Evaluator<'_> {
    /// Applies a binary operator to two evaluated operands.
    ///
    /// All arithmetic is checked. Division truncates toward zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `operator` is `/` and `right` is zero.
    /// - `Overflow` if the result does not fit into an `i32`, including
    ///   `i32::MIN / -1`.
    ///
    /// # Panics
    /// Panics if `operator` is not `+`, `-`, `*` or `/`.
    ///
    /// # Example
    /// ```
    /// use ezc::{
    ///     error::EvalError,
    ///     interpreter::{
    ///         evaluator::core::Evaluator,
    ///         lexer::{SyntaxToken, TokenKind},
    ///     },
    /// };
    ///
    /// let slash = SyntaxToken::new(TokenKind::Slash, 2, "/");
    /// assert_eq!(Evaluator::eval_binary(&slash, -7, 2), Ok(-3));
    /// assert_eq!(Evaluator::eval_binary(&slash, 1, 0),
    ///            Err(EvalError::DivisionByZero { position: 2 }));
    /// ```
    pub fn eval_binary(operator: &SyntaxToken, left: i32, right: i32) -> EvalResult<i32> {
        let position = operator.position;
        let overflow = EvalError::Overflow { position };

        match operator.kind {
            TokenKind::Plus => left.checked_add(right).ok_or(overflow),
            TokenKind::Minus => left.checked_sub(right).ok_or(overflow),
            TokenKind::Star => left.checked_mul(right).ok_or(overflow),
            TokenKind::Slash => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left.checked_div(right).ok_or(overflow)
            },
            kind => unreachable!("Unexpected binary operator {kind}."),
        }
    }
}
