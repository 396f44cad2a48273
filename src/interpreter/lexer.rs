use std::fmt;

use logos::Logos;

use crate::error::Diagnostic;

/// Classifies every token the lexer can produce.
///
/// `Invalid` and `EndOfFile` are never matched by a pattern: the lexer
/// synthesizes them for unrecognized characters and for exhausted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of decimal digits, such as `42`.
    Number,
    /// A run of whitespace characters.
    Whitespace,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A single character that starts no other token.
    Invalid,
    /// End of input.
    EndOfFile,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Whitespace => "Whitespace",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Star",
            Self::Slash => "Slash",
            Self::OpenParen => "OpenParen",
            Self::CloseParen => "CloseParen",
            Self::Invalid => "Invalid",
            Self::EndOfFile => "EndOfFile",
        };
        f.write_str(name)
    }
}

/// Text carried by every end-of-file token produced by the lexer.
pub const END_OF_FILE_TEXT: &str = "\0";

/// A lexical token.
///
/// Tokens are the leaves of the syntax tree. `position` is the byte offset of
/// the first character the token covers. `value` is only present on number
/// tokens whose literal fits into an `i32`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// Byte offset into the source text.
    pub position: usize,
    /// The exact source text matched. Empty on tokens synthesized by the
    /// parser during error recovery.
    pub text:     String,
    /// The parsed literal value of a number token.
    pub value:    Option<i32>,
}

impl SyntaxToken {
    /// Creates a token without a value.
    #[must_use]
    pub fn new(kind: TokenKind, position: usize, text: impl Into<String>) -> Self {
        Self { kind,
               position,
               text: text.into(),
               value: None }
    }

    /// Creates a number token. `value` is `None` when the literal does not fit
    /// into an `i32`.
    #[must_use]
    pub fn number(position: usize, text: impl Into<String>, value: Option<i32>) -> Self {
        Self { kind: TokenKind::Number,
               position,
               text: text.into(),
               value }
    }

    /// Creates the end-of-file sentinel at `position`.
    #[must_use]
    pub fn end_of_file(position: usize) -> Self {
        Self::new(TokenKind::EndOfFile, position, END_OF_FILE_TEXT)
    }

    /// Creates an error-recovery token: the expected kind, no text and no
    /// value.
    #[must_use]
    pub const fn missing(kind: TokenKind, position: usize) -> Self {
        Self { kind,
               position,
               text: String::new(),
               value: None }
    }

    /// Returns `true` if this token was synthesized rather than read from the
    /// source.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        self.text.is_empty()
    }
}

/// Raw lexemes recognized by the generated scanner.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"[0-9]+")]
    Number,
    #[regex(r"\s+")]
    Whitespace,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
}

impl From<Lexeme> for TokenKind {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number => Self::Number,
            Lexeme::Whitespace => Self::Whitespace,
            Lexeme::Plus => Self::Plus,
            Lexeme::Minus => Self::Minus,
            Lexeme::Star => Self::Star,
            Lexeme::Slash => Self::Slash,
            Lexeme::OpenParen => Self::OpenParen,
            Lexeme::CloseParen => Self::CloseParen,
        }
    }
}

/// Converts source text into [`SyntaxToken`]s.
///
/// The lexer never fails. Characters it does not recognize become
/// [`TokenKind::Invalid`] tokens, and number literals that overflow an `i32`
/// become value-less number tokens; both cases are recorded as diagnostics.
///
/// # Example
/// ```
/// use ezc::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("12+");
///
/// let number = lexer.next_token();
/// assert_eq!(number.kind, TokenKind::Number);
/// assert_eq!(number.value, Some(12));
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Plus);
/// assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
/// assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
/// assert!(lexer.diagnostics().is_empty());
/// ```
pub struct Lexer<'source> {
    source:      &'source str,
    scanner:     logos::Lexer<'source, Lexeme>,
    diagnostics: Vec<Diagnostic>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self { source,
               scanner: Lexeme::lexer(source),
               diagnostics: Vec::new() }
    }

    /// Diagnostics recorded so far, in the order they were found.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the lexer and returns its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Returns the next token and advances past it.
    ///
    /// Once the input is exhausted every call returns an end-of-file token
    /// positioned at the end of the source.
    pub fn next_token(&mut self) -> SyntaxToken {
        let Some(lexeme) = self.scanner.next() else {
            return SyntaxToken::end_of_file(self.source.len());
        };

        let position = self.scanner.span().start;
        let text = self.scanner.slice();

        match lexeme {
            Ok(Lexeme::Number) => {
                let value = text.parse::<i32>().ok();
                if value.is_none() {
                    self.diagnostics.push(Diagnostic::InvalidNumber { text: self.source
                                                                                .to_string(),
                                                                      position });
                }
                SyntaxToken::number(position, text, value)
            },
            Ok(lexeme) => SyntaxToken::new(lexeme.into(), position, text),
            Err(()) => {
                let character = text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                self.diagnostics.push(Diagnostic::InvalidCharacter { character, position });
                SyntaxToken::new(TokenKind::Invalid, position, character.to_string())
            },
        }
    }
}
