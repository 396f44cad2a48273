/// Parser state and entry point.
///
/// Owns the filtered token buffer, the token cursor with its lookahead and
/// error-recovery matching, and the top-level `parse` routine.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence levels of the grammar, additive terms and
/// multiplicative factors, both left-associative.
pub mod binary;

/// Primary expression parsing.
///
/// Handles number literals and parenthesized groups.
pub mod primary;
