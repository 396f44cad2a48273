/// Represents all errors that can occur while evaluating a syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Attempted division by zero.
    #[error("Error at position {position}: Division by zero.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// The result of an operation does not fit into an `i32`.
    #[error("Error at position {position}: Integer overflow while trying to compute result.")]
    Overflow {
        /// Byte offset of the operator.
        position: usize,
    },
    /// A number literal carries no value, either because it overflowed while
    /// lexing or because the parser synthesized it.
    #[error("Error at position {position}: Number has no value.")]
    MissingValue {
        /// Byte offset of the number token.
        position: usize,
    },
}

impl EvalError {
    /// Byte offset in the source this error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::MissingValue { position } => *position,
        }
    }
}
