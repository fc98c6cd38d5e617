use std::iter::Peekable;

use crate::{
    ast::{Identifier, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{parse_block, parse_conditional},
            core::{ParseResult, parse_value},
            utils::{expect, opens_function_literal, parse_comma_separated, parse_parameter, unexpected},
        },
    },
};

/// Parses an atom: the operand of any infix operator.
///
/// Dispatches on the leading token:
/// - identifiers, possibly followed by a call argument list
/// - number, string and boolean literals
/// - `(`: a grouped sub-expression or a function literal
/// - `{`: a block
/// - `if` / `unless`: a conditional
///
/// Grammar (simplified):
/// ```text
///     atom := identifier_or_call
///           | literal
///           | grouped_or_function_literal
///           | block
///           | conditional
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of an atom.
///
/// # Returns
/// The parsed atom or a `ParseError` on failure.
///
/// # Errors
/// Any token that cannot start an expression is rejected with
/// `UnexpectedToken`; nothing is skipped.
pub(crate) fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token: &'a Token =
        *tokens.peek()
               .ok_or_else(|| ParseError::UnexpectedEndOfInput { expected: "expression".to_string() })?;

    match token.kind {
        TokenKind::Identifier => parse_identifier_or_call(tokens),
        TokenKind::Number => {
            tokens.next();
            Ok(Node::NumberLiteral(token.text().to_string()))
        },
        TokenKind::String => {
            tokens.next();
            Ok(Node::StringLiteral(token.text().to_string()))
        },
        TokenKind::Boolean => {
            tokens.next();
            Ok(Node::BooleanLiteral(token.text().to_string()))
        },
        TokenKind::BracketOpen => parse_grouped_or_function_literal(tokens),
        TokenKind::BlockOpen => Ok(Node::Block(parse_block(tokens)?)),
        TokenKind::If | TokenKind::Unless => parse_conditional(tokens),
        _ => Err(unexpected("expression", token)),
    }
}

/// Parses an identifier, or a call when the identifier is immediately
/// followed by `(`.
///
/// Grammar:
/// ```text
///     identifier_or_call := identifier ["(" (value ("," value)*)? ")"]
/// ```
fn parse_identifier_or_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = expect(tokens, TokenKind::Identifier, "identifier")?;
    let identifier = Identifier::new(name.text());

    match tokens.peek() {
        Some(Token { kind: TokenKind::BracketOpen, .. }) => {
            tokens.next();
            let args = parse_comma_separated(tokens, parse_value, TokenKind::BracketClose)?;
            Ok(Node::Call { callee: identifier,
                            args })
        },
        _ => Ok(Node::Identifier(identifier)),
    }
}

/// Parses `( ... )`, choosing between a grouped sub-expression and a function
/// literal.
///
/// The group is a function literal exactly when the bracket that closes it is
/// followed by `{`; see [`opens_function_literal`].
fn parse_grouped_or_function_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    if opens_function_literal(tokens) {
        parse_function_literal(tokens)
    } else {
        parse_grouped(tokens)
    }
}

/// Parses a parenthesised sub-expression and returns it without a wrapper
/// node.
///
/// Grammar: `grouped := "(" value ")"`
pub(crate) fn parse_grouped<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::BracketOpen, "'('")?;
    let inner = parse_value(tokens)?;
    expect(tokens, TokenKind::BracketClose, "')'")?;
    Ok(inner)
}

/// Parses a function literal.
///
/// Grammar:
/// ```text
///     function_literal := "(" (identifier ("," identifier)*)? ")" block
/// ```
/// # Errors
/// - `InvalidParameter` if a parameter is not a bare identifier.
/// - `UnterminatedBlock` if the body's `{` is never closed.
fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::BracketOpen, "'('")?;
    let params = parse_comma_separated(tokens, parse_parameter, TokenKind::BracketClose)?;
    let body = parse_block(tokens)?;

    Ok(Node::FunctionLiteral { params,
                               body: body.body.into() })
}
