use crate::interpreter::lexer::TokenKind;

/// A problem found in the input while lexing or parsing.
///
/// The `Display` output of each variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// A character that starts no token.
    #[error("ERROR: Invalid character in input: '{character}'")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        position:  usize,
    },
    /// A number literal that does not fit into an `i32`.
    ///
    /// The message quotes the whole source line, not only the literal.
    #[error("The number {text} is not a valid Int32.")]
    InvalidNumber {
        /// The complete source text being lexed.
        text:     String,
        /// Byte offset of the literal.
        position: usize,
    },
    /// The parser expected one token kind and found another.
    #[error("ERROR: Unexpected token<{actual}>, expected <{expected}>")]
    UnexpectedToken {
        /// The kind that was found.
        actual:   TokenKind,
        /// The kind the grammar required.
        expected: TokenKind,
        /// Byte offset of the token that was found.
        position: usize,
    },
    /// Parentheses or operator chains nest deeper than the parser allows.
    ///
    /// Reported once per parse, at the first token past the limit.
    #[error("ERROR: Expression is nested too deeply, the limit is {limit} levels")]
    NestingTooDeep {
        /// The deepest nesting the parser builds.
        limit:    usize,
        /// Byte offset of the `(` or operator that crossed the limit.
        position: usize,
    },
}

impl Diagnostic {
    /// Byte offset in the source this diagnostic points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }

    /// Returns `true` for diagnostics raised by the lexer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::InvalidCharacter { .. } | Self::InvalidNumber { .. })
    }
}

/// Joins diagnostic messages, one per line.
pub(crate) fn display_lines(diagnostics: &[Diagnostic]) -> String {
    diagnostics.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join("\n")
}
