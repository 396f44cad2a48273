use std::fmt;

use crate::{
    error::Diagnostic,
    interpreter::{
        lexer::{SyntaxToken, TokenKind},
        parser::core::Parser,
    },
};

/// Tag identifying the kind of any syntax node.
///
/// Tokens carry their [`TokenKind`]; expression nodes have a tag of their
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// A token leaf.
    Token(TokenKind),
    /// A number literal expression.
    NumberExpression,
    /// A binary operation.
    BinaryExpression,
    /// An expression wrapped in parentheses.
    ParenthesizedExpression,
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}Token"),
            Self::NumberExpression => f.write_str("NumberExpression"),
            Self::BinaryExpression => f.write_str("BinaryExpression"),
            Self::ParenthesizedExpression => f.write_str("ParenthesizedExpression"),
        }
    }
}

impl From<TokenKind> for SyntaxKind {
    fn from(kind: TokenKind) -> Self {
        Self::Token(kind)
    }
}

/// An expression node in the syntax tree.
///
/// Every node owns its children exclusively, so a tree never shares nodes and
/// never contains cycles. All tokens are retained, including parentheses, so
/// the tree reproduces the structure of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionSyntax {
    /// A number literal, such as `42`.
    Number {
        /// The literal's token.
        number_token: SyntaxToken,
    },
    /// A binary operation, such as `1 + 2`.
    Binary {
        /// Left operand.
        left:           Box<Self>,
        /// The operator token: `+`, `-`, `*` or `/`.
        operator_token: SyntaxToken,
        /// Right operand.
        right:          Box<Self>,
    },
    /// A parenthesized expression, such as `(1 + 2)`.
    Parenthesized {
        /// The `(` token.
        open_paren_token:  SyntaxToken,
        /// The inner expression.
        expression:        Box<Self>,
        /// The `)` token.
        close_paren_token: SyntaxToken,
    },
}

impl ExpressionSyntax {
    /// The kind tag of this node.
    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        match self {
            Self::Number { .. } => SyntaxKind::NumberExpression,
            Self::Binary { .. } => SyntaxKind::BinaryExpression,
            Self::Parenthesized { .. } => SyntaxKind::ParenthesizedExpression,
        }
    }

    /// The structural parts of this node, left to right.
    #[must_use]
    pub fn children(&self) -> Vec<SyntaxNode<'_>> {
        match self {
            Self::Number { number_token } => vec![SyntaxNode::Token(number_token)],
            Self::Binary { left,
                           operator_token,
                           right, } => vec![SyntaxNode::Expression(left),
                                            SyntaxNode::Token(operator_token),
                                            SyntaxNode::Expression(right)],
            Self::Parenthesized { open_paren_token,
                                  expression,
                                  close_paren_token, } => {
                vec![SyntaxNode::Token(open_paren_token),
                     SyntaxNode::Expression(expression),
                     SyntaxNode::Token(close_paren_token)]
            },
        }
    }
}

/// A borrowed view of any node in a syntax tree: a token or an expression.
///
/// This is the uniform traversal interface. Consumers such as the tree printer
/// only need [`SyntaxNode::kind`], [`SyntaxNode::children`] and, for tokens,
/// the token's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxNode<'a> {
    /// A token leaf.
    Token(&'a SyntaxToken),
    /// An expression node.
    Expression(&'a ExpressionSyntax),
}

impl<'a> SyntaxNode<'a> {
    /// The kind tag of this node.
    #[must_use]
    pub const fn kind(&self) -> SyntaxKind {
        match *self {
            Self::Token(token) => SyntaxKind::Token(token.kind),
            Self::Expression(expression) => expression.kind(),
        }
    }

    /// The children of this node, left to right. Tokens have none.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        match *self {
            Self::Token(_) => Vec::new(),
            Self::Expression(expression) => expression.children(),
        }
    }

    /// Every token below this node, in source order.
    ///
    /// # Example
    /// ```
    /// use ezc::ast::{SyntaxNode, SyntaxTree};
    ///
    /// let tree = SyntaxTree::parse("(1+2)*3");
    /// let text: String = SyntaxNode::from(tree.root()).tokens()
    ///                                                 .iter()
    ///                                                 .map(|token| token.text.as_str())
    ///                                                 .collect();
    /// assert_eq!(text, "(1+2)*3");
    /// ```
    #[must_use]
    pub fn tokens(&self) -> Vec<&'a SyntaxToken> {
        let mut tokens = Vec::new();
        self.collect_tokens(&mut tokens);
        tokens
    }

    fn collect_tokens(self, tokens: &mut Vec<&'a SyntaxToken>) {
        match self {
            Self::Token(token) => tokens.push(token),
            Self::Expression(expression) => {
                for child in expression.children() {
                    child.collect_tokens(tokens);
                }
            },
        }
    }
}

impl<'a> From<&'a SyntaxToken> for SyntaxNode<'a> {
    fn from(token: &'a SyntaxToken) -> Self {
        Self::Token(token)
    }
}

impl<'a> From<&'a ExpressionSyntax> for SyntaxNode<'a> {
    fn from(expression: &'a ExpressionSyntax) -> Self {
        Self::Expression(expression)
    }
}

/// The result of parsing one line of source text.
///
/// A tree is always complete, even for malformed input: missing tokens are
/// replaced by synthesized placeholders. Check [`SyntaxTree::diagnostics`]
/// before evaluating [`SyntaxTree::root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    diagnostics:       Vec<Diagnostic>,
    root:              ExpressionSyntax,
    end_of_file_token: SyntaxToken,
}

impl SyntaxTree {
    pub(crate) const fn new(diagnostics: Vec<Diagnostic>,
                            root: ExpressionSyntax,
                            end_of_file_token: SyntaxToken)
                            -> Self {
        Self { diagnostics,
               root,
               end_of_file_token }
    }

    /// Tokenizes and parses `text` in one step.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Parser::new(text).parse()
    }

    /// Lexical diagnostics followed by syntactic ones, in the order they were
    /// found. An empty slice means the tree is safe to evaluate.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The top-level expression.
    #[must_use]
    pub const fn root(&self) -> &ExpressionSyntax {
        &self.root
    }

    /// The token that terminated the expression.
    #[must_use]
    pub const fn end_of_file_token(&self) -> &SyntaxToken {
        &self.end_of_file_token
    }
}
