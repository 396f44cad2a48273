use crate::{
    ast::ExpressionSyntax,
    interpreter::{
        lexer::{SyntaxToken, TokenKind},
        parser::core::{Parsed, TokenCursor},
    },
};

impl TokenCursor<'_> {
    /// Parses a number literal or a parenthesized expression.
    ///
    /// The rule is: `primary := Number | "(" expression ")"`
    ///
    /// Anything else is reported as a missing number, and a placeholder number
    /// token without a value takes its place. A group nested past the depth
    /// limit is skipped whole and replaced by the same placeholder.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> Parsed {
        if self.current().kind == TokenKind::OpenParen {
            if self.at_depth_limit() {
                let position = self.current().position;
                self.report_too_deep(position);
                self.skip_group();
                let number_token = SyntaxToken::missing(TokenKind::Number, position);
                return (ExpressionSyntax::Number { number_token }, 1);
            }

            let open_paren_token = self.next_token();
            self.enter_group();
            let (expression, height) = self.parse_expression();
            self.leave_group();
            let close_paren_token = self.match_token(TokenKind::CloseParen);
            return (ExpressionSyntax::Parenthesized { open_paren_token,
                                                      expression: Box::new(expression),
                                                      close_paren_token },
                    height + 1);
        }

        let number_token = self.match_token(TokenKind::Number);
        (ExpressionSyntax::Number { number_token }, 1)
    }
}
