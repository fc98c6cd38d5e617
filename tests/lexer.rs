use fnscript::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind, tokenize},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn simple_sum() {
    let tokens = tokenize("3 + 4").unwrap();

    assert_eq!(tokens,
               vec![Token::new(TokenKind::Number, Some("3"), 1),
                    Token::new(TokenKind::InfixOperator, Some("+"), 1),
                    Token::new(TokenKind::Number, Some("4"), 1),]);
}

#[test]
fn whitespace_and_comments_are_not_emitted() {
    assert_eq!(kinds("  x   # a comment ( { \"\n  y\t"),
               [TokenKind::Identifier, TokenKind::Identifier]);
    assert!(tokenize("# only a comment").unwrap().is_empty());
    assert!(tokenize("").unwrap().is_empty());
}

#[test]
fn keywords_win_over_identifiers_only_on_exact_words() {
    assert_eq!(kinds("if iffy unless else elsewhere use user import"),
               [TokenKind::If,
                TokenKind::Identifier,
                TokenKind::Unless,
                TokenKind::Else,
                TokenKind::Identifier,
                TokenKind::Use,
                TokenKind::Identifier,
                TokenKind::Import]);
}

#[test]
fn word_operators() {
    let tokens = tokenize("a eq b and c or order").unwrap();
    let texts: Vec<&str> = tokens.iter().map(Token::text).collect();

    assert_eq!(texts, ["a", "eq", "b", "and", "c", "or", "order"]);
    assert_eq!(tokens[1].kind, TokenKind::InfixOperator);
    assert_eq!(tokens[6].kind, TokenKind::Identifier);
}

#[test]
fn symbolic_operators_and_punctuation() {
    assert_eq!(kinds("a.b = (c |> d) * e / f - g;{},"),
               [TokenKind::Identifier,
                TokenKind::InfixOperator,
                TokenKind::Identifier,
                TokenKind::InfixOperator,
                TokenKind::BracketOpen,
                TokenKind::Identifier,
                TokenKind::InfixOperator,
                TokenKind::Identifier,
                TokenKind::BracketClose,
                TokenKind::InfixOperator,
                TokenKind::Identifier,
                TokenKind::InfixOperator,
                TokenKind::Identifier,
                TokenKind::InfixOperator,
                TokenKind::Identifier,
                TokenKind::EndStatement,
                TokenKind::BlockOpen,
                TokenKind::BlockClose,
                TokenKind::Comma]);
}

#[test]
fn literals_keep_their_text() {
    let tokens = tokenize(r#"42 "hello world" true false"#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text(), "42");
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].text(), "hello world");
    assert_eq!(tokens[2].kind, TokenKind::Boolean);
    assert_eq!(tokens[3].text(), "false");
}

#[test]
fn punctuation_and_keywords_carry_no_text() {
    let tokens = tokenize("( if").unwrap();

    assert_eq!(tokens[0].text, None);
    assert_eq!(tokens[1].text, None);
}

#[test]
fn identifiers_may_contain_symbols_and_digits() {
    let tokens = tokenize("start! HTTPServer x2 empty?").unwrap();
    let texts: Vec<&str> = tokens.iter().map(Token::text).collect();

    assert_eq!(texts, ["start!", "HTTPServer", "x2", "empty?"]);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn number_followed_by_letters_splits() {
    assert_eq!(kinds("2x"), [TokenKind::Number, TokenKind::Identifier]);
}

#[test]
fn lines_are_tracked() {
    let tokens = tokenize("a\nb\n\n# note\nc").unwrap();
    let lines: Vec<usize> = tokens.iter().map(|t| t.line).collect();

    assert_eq!(lines, [1, 2, 5]);
}

#[test]
fn multi_line_strings_report_their_starting_line() {
    let tokens = tokenize("a\ns = \"one\ntwo\nthree\"\nb").unwrap();
    let lines: Vec<(TokenKind, usize)> = tokens.iter().map(|t| (t.kind, t.line)).collect();

    assert_eq!(lines,
               [(TokenKind::Identifier, 1),
                (TokenKind::Identifier, 2),
                (TokenKind::InfixOperator, 2),
                (TokenKind::String, 2),
                (TokenKind::Identifier, 5)]);
}

#[test]
fn unrecognized_input_reports_remainder_and_line() {
    assert_eq!(tokenize("x = 1\ny = [2]"),
               Err(LexError::UnrecognizedInput { remainder: "[2]".to_string(),
                                                 line:      2, }));
    assert!(tokenize("a | b").is_err());
}

#[test]
fn token_display() {
    let tokens = tokenize("x = 3;").unwrap();
    let shown: Vec<String> = tokens.iter().map(ToString::to_string).collect();

    assert_eq!(shown,
               ["identifier(x)", "infix_operator(=)", "number(3)", "end_statement"]);
}
