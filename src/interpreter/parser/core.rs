use crate::{
    ast::{ExpressionSyntax, SyntaxTree},
    error::Diagnostic,
    interpreter::lexer::{Lexer, SyntaxToken, TokenKind},
};

/// Deepest nesting the parser builds.
///
/// Applies to parentheses nested inside each other and to the height of a
/// chain of binary operators. Input past the limit is skipped and reported as
/// a [`Diagnostic::NestingTooDeep`], which keeps every recursive walk over the
/// tree shallow.
pub const MAX_NESTING_DEPTH: usize = 256;

/// An expression together with its height: `1` for a number, one more than
/// the tallest child otherwise.
pub(in crate::interpreter::parser) type Parsed = (ExpressionSyntax, usize);

/// Builds a [`SyntaxTree`] from one line of source text.
///
/// The source is tokenized completely when the parser is created. Whitespace
/// and invalid tokens are dropped, and the lexer's diagnostics become the
/// first entries of every tree this parser produces.
///
/// # Example
/// ```
/// use ezc::{ast::ExpressionSyntax, interpreter::parser::core::Parser};
///
/// let tree = Parser::new("1 + 2 * 3").parse();
/// assert!(tree.diagnostics().is_empty());
/// assert!(matches!(tree.root(), ExpressionSyntax::Binary { .. }));
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    tokens:      Vec<SyntaxToken>,
    end_of_file: SyntaxToken,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Tokenizes `text` and prepares it for parsing.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut lexer = Lexer::new(text);
        let mut tokens = Vec::new();

        let end_of_file = loop {
            let token = lexer.next_token();
            match token.kind {
                TokenKind::EndOfFile => break token,
                TokenKind::Whitespace | TokenKind::Invalid => {},
                _ => tokens.push(token),
            }
        };

        Self { tokens,
               end_of_file,
               diagnostics: lexer.into_diagnostics() }
    }

    /// The tokens the grammar runs over, without the end-of-file token.
    #[must_use]
    pub fn tokens(&self) -> &[SyntaxToken] {
        &self.tokens
    }

    /// Diagnostics reported by the lexer.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Parses the token buffer into a syntax tree.
    ///
    /// Grammar: `line := term EndOfFile`
    ///
    /// Parsing never stops early. Every call starts over from the first token,
    /// so calling this twice yields equal trees.
    #[must_use]
    pub fn parse(&self) -> SyntaxTree {
        let mut cursor = TokenCursor::new(&self.tokens, &self.end_of_file, self.diagnostics.clone());

        let (root, _) = cursor.parse_term();
        let end_of_file_token = cursor.match_token(TokenKind::EndOfFile);

        SyntaxTree::new(cursor.diagnostics, root, end_of_file_token)
    }
}

/// Reading position over the token buffer of one `parse` call.
pub(in crate::interpreter::parser) struct TokenCursor<'a> {
    tokens:      &'a [SyntaxToken],
    end_of_file: &'a SyntaxToken,
    position:    usize,
    depth:       usize,
    too_deep:    bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> TokenCursor<'a> {
    const fn new(tokens: &'a [SyntaxToken],
                 end_of_file: &'a SyntaxToken,
                 diagnostics: Vec<Diagnostic>)
                 -> Self {
        Self { tokens,
               end_of_file,
               position: 0,
               depth: 0,
               too_deep: false,
               diagnostics }
    }

    /// Looks `offset` tokens ahead. Reads past the buffer yield the
    /// end-of-file token.
    pub(in crate::interpreter::parser) fn peek(&self, offset: usize) -> &'a SyntaxToken {
        self.tokens
            .get(self.position + offset)
            .unwrap_or(self.end_of_file)
    }

    pub(in crate::interpreter::parser) fn current(&self) -> &'a SyntaxToken {
        self.peek(0)
    }

    /// Returns the current token and advances.
    pub(in crate::interpreter::parser) fn next_token(&mut self) -> SyntaxToken {
        let current = self.current().clone();
        self.position += 1;
        current
    }

    /// Consumes the current token if it has kind `kind`.
    ///
    /// Otherwise records a diagnostic and returns a placeholder token of the
    /// expected kind without advancing.
    pub(in crate::interpreter::parser) fn match_token(&mut self, kind: TokenKind) -> SyntaxToken {
        let current = self.current();
        if current.kind == kind {
            return self.next_token();
        }

        self.diagnostics.push(Diagnostic::UnexpectedToken { actual: current.kind,
                                                            expected: kind,
                                                            position: current.position });
        SyntaxToken::missing(kind, current.position)
    }

    /// Grammar: `expression := term`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> Parsed {
        self.parse_term()
    }

    /// Whether another parenthesized group would exceed the nesting limit.
    pub(in crate::interpreter::parser) const fn at_depth_limit(&self) -> bool {
        self.depth >= MAX_NESTING_DEPTH
    }

    pub(in crate::interpreter::parser) const fn enter_group(&mut self) {
        self.depth += 1;
    }

    pub(in crate::interpreter::parser) const fn leave_group(&mut self) {
        self.depth -= 1;
    }

    /// Records the nesting diagnostic, once per parse.
    pub(in crate::interpreter::parser) fn report_too_deep(&mut self, position: usize) {
        if self.too_deep {
            return;
        }
        self.too_deep = true;
        self.diagnostics.push(Diagnostic::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                           position });
    }

    /// Skips the parenthesized group starting at the current `(`, up to and
    /// including its matching `)` or the end of input.
    pub(in crate::interpreter::parser) fn skip_group(&mut self) {
        let mut open = 0_usize;
        loop {
            match self.current().kind {
                TokenKind::EndOfFile => return,
                TokenKind::OpenParen => open += 1,
                TokenKind::CloseParen => open = open.saturating_sub(1),
                _ => {},
            }
            self.position += 1;
            if open == 0 {
                return;
            }
        }
    }
}
