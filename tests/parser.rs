use fnscript::{
    Error,
    ast::{Block, Identifier, Node},
    error::ParseError,
    parse,
};

/// Parses `src` and renders each top-level node back to source form.
fn shape(src: &str) -> Vec<String> {
    parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
              .iter()
              .map(ToString::to_string)
              .collect()
}

fn parse_error(src: &str) -> ParseError {
    match parse(src) {
        Err(Error::Parse(e)) => e,
        other => panic!("Expected a parse error for {src:?}, got {other:?}"),
    }
}

fn number(text: &str) -> Node {
    Node::NumberLiteral(text.to_string())
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(shape("2 + 3 * 4"), ["(2 + (3 * 4))"]);
    assert_eq!(shape("2 * 3 + 4"), ["((2 * 3) + 4)"]);
    assert_eq!(shape("1 + 2 * 3 - 4"), ["((1 + (2 * 3)) - 4)"]);
}

#[test]
fn equal_powers_group_left_to_right() {
    assert_eq!(shape("8 - 2 - 1"), ["((8 - 2) - 1)"]);
    assert_eq!(shape("8 / 4 * 2"), ["((8 / 4) * 2)"]);
    assert_eq!(shape("5 - 2 + 1"), ["((5 - 2) + 1)"]);
    assert_eq!(shape("a.b.c"), ["((a . b) . c)"]);
}

#[test]
fn infix_operators_become_calls() {
    let nodes = parse("2 + 3").unwrap();

    assert_eq!(nodes, vec![Node::infix("+", number("2"), number("3"))]);
}

#[test]
fn assignment_binds_tighter_than_arithmetic() {
    assert_eq!(shape("x = 2 + 3"), ["((x = 2) + 3)"]);
    assert_eq!(shape("x = (2 + 3)"), ["(x = (2 + 3))"]);
}

#[test]
fn member_access_binds_tightest() {
    assert_eq!(shape("point.x + 1"), ["((point . x) + 1)"]);
    assert_eq!(shape("server.get(1)"), ["(server . get(1))"]);
}

#[test]
fn word_operators_are_weakest() {
    assert_eq!(shape("a + 1 eq b and c or d"), ["((((a + 1) eq b) and c) or d)"]);
    assert_eq!(shape("x |> f * 2"), ["((x |> f) * 2)"]);
}

#[test]
fn calls_and_identifiers() {
    let nodes = parse("f(1, g(2)); f; h()").unwrap();

    assert_eq!(nodes[0],
               Node::Call { callee: Identifier::new("f"),
                            args:   vec![number("1"),
                                         Node::Call { callee: Identifier::new("g"),
                                                      args:   vec![number("2")], }], });
    assert_eq!(nodes[1], Node::Identifier(Identifier::new("f")));
    assert_eq!(nodes[2],
               Node::Call { callee: Identifier::new("h"),
                            args:   vec![], });
}

#[test]
fn literals() {
    let nodes = parse(r#"42 "text" true"#).unwrap();

    assert_eq!(nodes,
               vec![number("42"),
                    Node::StringLiteral("text".to_string()),
                    Node::BooleanLiteral("true".to_string())]);
}

#[test]
fn function_literal_versus_grouping() {
    let nodes = parse("(a, b) { a + b }; (a + b)").unwrap();

    match &nodes[0] {
        Node::FunctionLiteral { params, body } => {
            assert_eq!(params, &[Identifier::new("a"), Identifier::new("b")]);
            assert_eq!(body.len(), 1);
        },
        other => panic!("Expected a function literal, got {other:?}"),
    }
    assert!(matches!(&nodes[1], Node::Call { callee, .. } if callee.name == "+"));
}

#[test]
fn function_literal_without_parameters() {
    assert_eq!(shape("() { 1 }"), ["() { 1 }"]);
    assert_eq!(shape("() {}"), ["() {}"]);
}

#[test]
fn grouping_lookahead_respects_nesting() {
    assert_eq!(shape("((1 + 2)) * 3"), ["((1 + 2) * 3)"]);
    assert_eq!(shape("x = (if (true) { 1 } else { 2 })"),
               ["(x = if true { 1 } else { 2 })"]);
    assert_eq!(shape("f = (a) { (a + 1) * 2 }"), ["(f = (a) { ((a + 1) * 2) })"]);
}

#[test]
fn blocks_hold_statements() {
    let nodes = parse("{ x = 1; y = 2 }").unwrap();

    match &nodes[0] {
        Node::Block(Block { body }) => assert_eq!(body.len(), 2),
        other => panic!("Expected a block, got {other:?}"),
    }
    assert_eq!(shape("{}"), ["{}"]);
}

#[test]
fn semicolons_are_optional() {
    assert_eq!(parse("a = 1 b = 2").unwrap().len(), 2);
    assert_eq!(parse("a = 1;\nb = 2;").unwrap().len(), 2);
}

#[test]
fn if_else() {
    let nodes = parse("if true { 1 } else { 2 }").unwrap();

    match &nodes[0] {
        Node::Conditional { branches, else_body } => {
            assert_eq!(branches.len(), 1);
            assert_eq!(branches[0].condition, Node::BooleanLiteral("true".to_string()));
            assert_eq!(branches[0].body.body, vec![number("1")]);
            assert_eq!(else_body.as_ref().map(|b| b.body.clone()), Some(vec![number("2")]));
        },
        other => panic!("Expected a conditional, got {other:?}"),
    }
}

#[test]
fn if_without_else() {
    assert_eq!(shape("if x eq 1 { y }"), ["if (x eq 1) { y }"]);
}

#[test]
fn unless_swaps_bodies() {
    assert_eq!(shape("unless c { 1 } else { 2 }"), ["if c { 2 } else { 1 }"]);
    assert_eq!(shape("unless c { 1 }"), ["if c {} else { 1 }"]);
}

#[test]
fn else_if_chains_flatten() {
    let nodes = parse("if a { 1 } else if b { 2 } else { 3 }").unwrap();

    match &nodes[0] {
        Node::Conditional { branches, else_body } => {
            assert_eq!(branches.len(), 2);
            assert!(else_body.is_some());
        },
        other => panic!("Expected a conditional, got {other:?}"),
    }
    assert_eq!(shape("if a { 1 } else unless b { 2 } else { 3 }"),
               ["if a { 1 } else if b { 3 } else { 2 }"]);
}

#[test]
fn conditionals_are_values() {
    assert_eq!(shape("y = if c { 1 } else { 2 }"), ["(y = if c { 1 } else { 2 })"]);
}

#[test]
fn use_and_import() {
    assert_eq!(parse("use http; import http").unwrap(),
               vec![Node::Use("http".to_string()), Node::Import("http".to_string())]);
}

#[test]
fn unterminated_block_reports_opening_line() {
    assert_eq!(parse_error("x = 1\ny = {\n  z = 2\n"),
               ParseError::UnterminatedBlock { line: 2 });
}

#[test]
fn unclosed_argument_list() {
    assert!(matches!(parse_error("add(1, 2"), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn missing_comma_is_rejected() {
    assert!(matches!(parse_error("add(1 2)"),
                     ParseError::UnexpectedToken { line: 1, .. }));
}

#[test]
fn trailing_comma_is_rejected() {
    assert_eq!(parse_error("f(1,)"),
               ParseError::UnexpectedToken { expected: "expression".to_string(),
                                             found:    "bracket_close".to_string(),
                                             line:     1, });
}

#[test]
fn parameters_must_be_identifiers() {
    assert_eq!(parse_error("(a, 1) { a }"),
               ParseError::InvalidParameter { found: "number(1)".to_string(),
                                              line:  1, });
}

#[test]
fn unexpected_leading_token_is_an_error() {
    assert!(matches!(parse_error(")"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("+ 1"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("else { 1 }"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn missing_right_operand() {
    assert!(matches!(parse_error("1 +"), ParseError::UnexpectedEndOfInput { .. }));
}

#[test]
fn module_name_must_be_an_identifier() {
    assert!(matches!(parse_error("use 5"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("import"), ParseError::UnexpectedEndOfInput { .. }));
}
