use ezc::{
    ast::{ExpressionSyntax, SyntaxKind, SyntaxNode, SyntaxTree},
    error::{Diagnostic, EvalError},
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{END_OF_FILE_TEXT, Lexer, SyntaxToken, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, Parser},
    },
    util::tree::{pretty_print, render},
};

fn lex_all(src: &str) -> (Vec<SyntaxToken>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new(src);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EndOfFile;
        tokens.push(token);
        if done {
            break;
        }
    }
    (tokens, lexer.into_diagnostics())
}

fn kinds(tokens: &[SyntaxToken]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn messages(tree: &SyntaxTree) -> Vec<String> {
    tree.diagnostics().iter().map(ToString::to_string).collect()
}

#[test]
fn digit_runs_lex_to_a_single_number() {
    for src in ["0", "7", "42", "000123", "99999", "123456789", "2147483647"] {
        let (tokens, diagnostics) = lex_all(src);
        assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::EndOfFile]);
        assert_eq!(tokens[0].value, Some(src.parse().unwrap()));
        assert_eq!(tokens[0].text, src);
        assert_eq!(tokens[0].position, 0);
        assert!(diagnostics.is_empty(), "{src:?} produced {diagnostics:?}");
    }
}

#[test]
fn lexer_classifies_every_token_kind() {
    let (tokens, diagnostics) = lex_all("(1 +\t2)*3-4/5");
    assert_eq!(kinds(&tokens),
               vec![TokenKind::OpenParen,
                    TokenKind::Number,
                    TokenKind::Whitespace,
                    TokenKind::Plus,
                    TokenKind::Whitespace,
                    TokenKind::Number,
                    TokenKind::CloseParen,
                    TokenKind::Star,
                    TokenKind::Number,
                    TokenKind::Minus,
                    TokenKind::Number,
                    TokenKind::Slash,
                    TokenKind::Number,
                    TokenKind::EndOfFile]);
    let positions: Vec<usize> = tokens.iter().map(|token| token.position).collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13]);
    assert_eq!(tokens[4].text, "\t");
    assert!(diagnostics.is_empty());
}

#[test]
fn end_of_file_repeats_after_exhaustion() {
    let mut lexer = Lexer::new("1");
    assert_eq!(lexer.next_token().kind, TokenKind::Number);
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token, SyntaxToken::end_of_file(1));
        assert_eq!(token.text, END_OF_FILE_TEXT);
        assert_eq!(token.value, None);
    }
}

#[test]
fn whitespace_only_input() {
    let (tokens, diagnostics) = lex_all(" \t ");
    assert_eq!(kinds(&tokens), vec![TokenKind::Whitespace, TokenKind::EndOfFile]);
    assert_eq!(tokens[0].text, " \t ");
    assert!(diagnostics.is_empty());

    let tree = SyntaxTree::parse(" \t ");
    assert_eq!(messages(&tree),
               vec!["ERROR: Unexpected token<EndOfFile>, expected <Number>"]);
    assert_eq!(Evaluator::new(tree.root()).evaluate(),
               Err(EvalError::MissingValue { position: 3 }));
}

#[test]
fn invalid_characters_become_invalid_tokens() {
    let (tokens, diagnostics) = lex_all("1 & 2");
    assert_eq!(kinds(&tokens),
               vec![TokenKind::Number,
                    TokenKind::Whitespace,
                    TokenKind::Invalid,
                    TokenKind::Whitespace,
                    TokenKind::Number,
                    TokenKind::EndOfFile]);
    assert_eq!(tokens[2].text, "&");
    assert_eq!(diagnostics,
               vec![Diagnostic::InvalidCharacter { character: '&',
                                                   position:  2, }]);
}

#[test]
fn invalid_multibyte_character_is_one_token() {
    let (tokens, diagnostics) = lex_all("1é");
    assert_eq!(kinds(&tokens),
               vec![TokenKind::Number, TokenKind::Invalid, TokenKind::EndOfFile]);
    assert_eq!(tokens[1].text, "é");
    assert_eq!(tokens[2].position, 3);
    assert_eq!(diagnostics[0].to_string(), "ERROR: Invalid character in input: 'é'");
}

#[test]
fn only_ascii_digits_form_numbers() {
    let (tokens, diagnostics) = lex_all("٣");
    assert_eq!(kinds(&tokens), vec![TokenKind::Invalid, TokenKind::EndOfFile]);
    assert_eq!(diagnostics,
               vec![Diagnostic::InvalidCharacter { character: '٣',
                                                   position:  0, }]);
}

#[test]
fn oversized_number_has_no_value() {
    let (tokens, diagnostics) = lex_all("99999999999");
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, None);
    assert_eq!(tokens[0].text, "99999999999");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].to_string(),
               "The number 99999999999 is not a valid Int32.");

    let tree = SyntaxTree::parse("99999999999");
    assert_eq!(tree.diagnostics(), diagnostics.as_slice());
    assert_eq!(Evaluator::new(tree.root()).evaluate(),
               Err(EvalError::MissingValue { position: 0 }));
}

#[test]
fn parser_drops_whitespace_and_invalid_tokens() {
    let parser = Parser::new(" 1 # + 2 ");
    assert_eq!(kinds(parser.tokens()),
               vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number]);
    assert_eq!(parser.diagnostics().len(), 1);
}

#[test]
fn precedence_shapes_the_tree() {
    let tree = SyntaxTree::parse("1 + 2 * 3");
    assert!(tree.diagnostics().is_empty());

    let ExpressionSyntax::Binary { left,
                                   operator_token,
                                   right, } = tree.root()
    else {
        panic!("root should be a binary expression");
    };
    assert_eq!(operator_token.kind, TokenKind::Plus);
    assert_eq!(left.kind(), SyntaxKind::NumberExpression);
    assert!(matches!(&**right,
                     ExpressionSyntax::Binary { operator_token, .. }
                     if operator_token.kind == TokenKind::Star));
    assert_eq!(Evaluator::new(tree.root()).evaluate(), Ok(7));

    let tree = SyntaxTree::parse("(1 + 2) * 3");
    assert_eq!(Evaluator::new(tree.root()).evaluate(), Ok(9));
}

#[test]
fn binary_operators_fold_to_the_left() {
    let tree = SyntaxTree::parse("10 - 2 - 3");
    let ExpressionSyntax::Binary { left, right, .. } = tree.root() else {
        panic!("root should be a binary expression");
    };
    assert_eq!(left.kind(), SyntaxKind::BinaryExpression);
    assert_eq!(right.kind(), SyntaxKind::NumberExpression);
    assert_eq!(Evaluator::new(tree.root()).evaluate(), Ok(5));
}

#[test]
fn parentheses_are_kept_in_the_tree() {
    let tree = SyntaxTree::parse("((1))");
    let root = SyntaxNode::from(tree.root());
    assert_eq!(root.kind(), SyntaxKind::ParenthesizedExpression);

    let children = root.children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].kind(), SyntaxKind::Token(TokenKind::OpenParen));
    assert_eq!(children[1].kind(), SyntaxKind::ParenthesizedExpression);
    assert_eq!(children[2].kind(), SyntaxKind::Token(TokenKind::CloseParen));
}

#[test]
fn unbalanced_parenthesis_recovers() {
    let tree = SyntaxTree::parse("(1 + 2");
    assert_eq!(messages(&tree),
               vec!["ERROR: Unexpected token<EndOfFile>, expected <CloseParen>"]);

    let ExpressionSyntax::Parenthesized { close_paren_token, .. } = tree.root() else {
        panic!("root should be a parenthesized expression");
    };
    assert_eq!(*close_paren_token, SyntaxToken::missing(TokenKind::CloseParen, 6));
    assert!(close_paren_token.is_missing());

    let tokens = SyntaxNode::from(tree.root()).tokens();
    assert_eq!(tokens.len(), 5);
    assert_eq!(tree.end_of_file_token(), &SyntaxToken::end_of_file(6));
}

#[test]
fn trailing_tokens_are_reported() {
    let tree = SyntaxTree::parse("1 2");
    assert_eq!(messages(&tree),
               vec!["ERROR: Unexpected token<Number>, expected <EndOfFile>"]);
    assert_eq!(tree.end_of_file_token(),
               &SyntaxToken::missing(TokenKind::EndOfFile, 2));
    assert_eq!(tree.root().kind(), SyntaxKind::NumberExpression);
}

#[test]
fn mismatch_does_not_consume_input() {
    let tree = SyntaxTree::parse(")");
    assert_eq!(tree.diagnostics(),
               &[Diagnostic::UnexpectedToken { actual:   TokenKind::CloseParen,
                                               expected: TokenKind::Number,
                                               position: 0, },
                 Diagnostic::UnexpectedToken { actual:   TokenKind::CloseParen,
                                               expected: TokenKind::EndOfFile,
                                               position: 0, }]);
}

#[test]
fn lexical_diagnostics_come_first() {
    let tree = SyntaxTree::parse("(1 $ 2");
    assert_eq!(messages(&tree),
               vec!["ERROR: Invalid character in input: '$'",
                    "ERROR: Unexpected token<Number>, expected <CloseParen>",
                    "ERROR: Unexpected token<Number>, expected <EndOfFile>"]);
}

#[test]
fn parsing_twice_gives_equal_trees() {
    for src in ["1 + 2 * 3", "(1 + 2", "1 & 2", "", "99999999999 / (3"] {
        let parser = Parser::new(src);
        let first = parser.parse();
        let second = parser.parse();
        assert_eq!(first, second, "{src:?} parsed differently");
    }
}

#[test]
fn tokens_reconstruct_the_source_skeleton() {
    for src in ["1", "1 + 2 * (3 - 4)", " ( 10/ 2 ) -3 ", "((7))*(8)", "12 * 34 + 56 / 78"] {
        let tree = SyntaxTree::parse(src);
        assert!(tree.diagnostics().is_empty(), "{src:?} should parse");

        let tokens = SyntaxNode::from(tree.root()).tokens();
        let positions: Vec<usize> = tokens.iter().map(|token| token.position).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]),
                "tokens of {src:?} are out of order: {positions:?}");

        let text: String = tokens.iter().map(|token| token.text.as_str()).collect();
        let skeleton: String = src.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(text, skeleton);
    }
}

#[test]
fn tokens_have_no_children() {
    let token = SyntaxToken::new(TokenKind::Plus, 0, "+");
    let node = SyntaxNode::from(&token);
    assert_eq!(node.kind(), SyntaxKind::Token(TokenKind::Plus));
    assert!(node.children().is_empty());
}

#[test]
#[should_panic(expected = "Unexpected binary operator OpenParen")]
fn evaluator_rejects_impossible_operators() {
    let number = |value: i32| {
        Box::new(ExpressionSyntax::Number { number_token: SyntaxToken::number(0,
                                                                              value.to_string(),
                                                                              Some(value)) })
    };
    let expression = ExpressionSyntax::Binary { left:           number(1),
                                                operator_token: SyntaxToken::new(TokenKind::OpenParen,
                                                                                 1,
                                                                                 "("),
                                                right:          number(2) };
    let _ = Evaluator::new(&expression).evaluate();
}

#[test]
fn tree_rendering() {
    let tree = SyntaxTree::parse("1 + (2)");
    let expected = "\
└──BinaryExpression
    ├──NumberExpression
    │   └──NumberToken 1
    ├──PlusToken
    └──ParenthesizedExpression
        ├──OpenParenToken
        ├──NumberExpression
        │   └──NumberToken 2
        └──CloseParenToken
";
    assert_eq!(render(SyntaxNode::from(tree.root())), expected);

    let mut out = Vec::new();
    pretty_print(SyntaxNode::from(tree.root()), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn rendering_a_broken_tree_shows_placeholders() {
    let tree = SyntaxTree::parse("1 +");
    assert_eq!(render(SyntaxNode::from(tree.root())),
               "└──BinaryExpression\n    ├──NumberExpression\n    │   └──NumberToken 1\n    \
                ├──PlusToken\n    └──NumberExpression\n        └──NumberToken\n");
}

fn nested(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_up_to_the_limit_parses() {
    let tree = SyntaxTree::parse(&nested(MAX_NESTING_DEPTH));
    assert!(tree.diagnostics().is_empty());
    assert_eq!(Evaluator::new(tree.root()).evaluate(), Ok(1));
}

#[test]
fn deep_parentheses_are_reported_not_followed() {
    let src = nested(1000);
    let tree = SyntaxTree::parse(&src);
    assert_eq!(tree.diagnostics(),
               &[Diagnostic::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                              position: MAX_NESTING_DEPTH, }]);
    assert_eq!(tree.end_of_file_token(), &SyntaxToken::end_of_file(src.len()));

    let tokens = SyntaxNode::from(tree.root()).tokens();
    assert_eq!(tokens.len(), 2 * MAX_NESTING_DEPTH + 1);
    assert_eq!(*tokens[MAX_NESTING_DEPTH],
               SyntaxToken::missing(TokenKind::Number, MAX_NESTING_DEPTH));
}

#[test]
fn unclosed_deep_parentheses_are_reported_once() {
    let tree = SyntaxTree::parse(&"(".repeat(5000));
    let nesting = tree.diagnostics()
                      .iter()
                      .filter(|d| matches!(d, Diagnostic::NestingTooDeep { .. }))
                      .count();
    assert_eq!(nesting, 1);
    assert_eq!(tree.diagnostics().len(), MAX_NESTING_DEPTH + 1);
}

#[test]
fn long_operator_chains_are_capped() {
    let src = format!("1{}", "+1".repeat(1000));
    let tree = SyntaxTree::parse(&src);
    assert_eq!(tree.diagnostics(),
               &[Diagnostic::NestingTooDeep { limit:    MAX_NESTING_DEPTH,
                                              position: 2 * MAX_NESTING_DEPTH - 1, }]);
    assert_eq!(tree.end_of_file_token(), &SyntaxToken::end_of_file(src.len()));

    let short = format!("1{}", "+1".repeat(MAX_NESTING_DEPTH - 1));
    let tree = SyntaxTree::parse(&short);
    assert!(tree.diagnostics().is_empty());
    assert_eq!(Evaluator::new(tree.root()).evaluate(),
               Ok(i32::try_from(MAX_NESTING_DEPTH).unwrap()));
}
