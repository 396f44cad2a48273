/// The evaluator module reduces syntax trees to integers.
///
/// The evaluator walks a finished expression tree and computes its value with
/// checked 32-bit integer arithmetic. It is the last stage of the pipeline.
///
/// # Responsibilities
/// - Evaluates number, binary and parenthesized expressions.
/// - Reports division by zero, overflow and value-less literals as errors.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads raw text and produces tokens for numbers, operators,
/// parentheses and whitespace. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input characters into tokens with kind, position and text.
/// - Parses number literals into `i32` values.
/// - Records diagnostics for invalid characters and oversized literals.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser drives the lexer to completion and builds an expression tree by
/// recursive descent with two precedence levels.
///
/// # Responsibilities
/// - Converts tokens into expression nodes.
/// - Recovers from missing tokens by synthesizing placeholders so that every
///   problem in a line is reported.
pub mod parser;
