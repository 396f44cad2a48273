/// Core evaluation logic.
///
/// Contains the `Evaluator`, its result type and the recursive walk over the
/// expression variants.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two integers with overflow and
/// division-by-zero checks.
pub mod binary;
