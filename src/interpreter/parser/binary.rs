use crate::{
    ast::ExpressionSyntax,
    interpreter::{
        lexer::{SyntaxToken, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, Parsed, TokenCursor},
    },
};

impl TokenCursor<'_> {
    /// Parses addition and subtraction.
    ///
    /// The rule is: `term := factor (("+" | "-") factor)*`
    ///
    /// Operators of equal precedence fold to the left, so `a - b - c` becomes
    /// `(a - b) - c`.
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> Parsed {
        let mut left = self.parse_factor();
        while matches!(self.current().kind, TokenKind::Plus | TokenKind::Minus) {
            let operator_token = self.next_token();
            let right = self.parse_factor();
            left = self.fold(left, operator_token, right);
        }
        left
    }

    /// Parses multiplication and division.
    ///
    /// The rule is: `factor := primary (("*" | "/") primary)*`
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> Parsed {
        let mut left = self.parse_primary();
        while matches!(self.current().kind, TokenKind::Star | TokenKind::Slash) {
            let operator_token = self.next_token();
            let right = self.parse_primary();
            left = self.fold(left, operator_token, right);
        }
        left
    }

    /// Joins two operands into a binary expression.
    ///
    /// If the result would be taller than [`MAX_NESTING_DEPTH`], the operator
    /// and right operand are dropped and `left` is returned unchanged.
    fn fold(&mut self, left: Parsed, operator_token: SyntaxToken, right: Parsed) -> Parsed {
        let (left, left_height) = left;
        let (right, right_height) = right;

        let height = left_height.max(right_height) + 1;
        if height > MAX_NESTING_DEPTH {
            self.report_too_deep(operator_token.position);
            return (left, left_height);
        }

        (ExpressionSyntax::Binary { left: Box::new(left),
                                    operator_token,
                                    right: Box::new(right) },
         height)
    }
}
