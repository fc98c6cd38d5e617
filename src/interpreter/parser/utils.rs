use std::iter::Peekable;

use crate::{
    ast::Identifier,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds the error for a token that does not fit at this point.
pub(in crate::interpreter::parser) fn unexpected(expected: &str, found: &Token) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    found.to_string(),
                                  line:     found.line, }
}

/// Consumes the next token, which must be of `kind`.
///
/// # Errors
/// `UnexpectedToken` naming `expected` if another kind follows, or
/// `UnexpectedEndOfInput` if the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(expected, token)),
        None => Err(ParseError::UnexpectedEndOfInput { expected: expected.to_string() }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists and function parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. A comma
/// must be followed by another item, so trailing commas are rejected.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, if anything other than
/// `,` or the closing token follows an item, or if the stream ends first.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if let Some(tok) = tokens.peek()
       && tok.kind == closing
    {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(Token { kind: TokenKind::Comma, .. }) => {},
            Some(tok) if tok.kind == closing => break,
            Some(tok) => return Err(unexpected(&format!("',' or {closing}"), tok)),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: format!("',' or {closing}") });
            },
        }
    }
    Ok(items)
}

/// Parses one function parameter, which must be a bare identifier.
///
/// # Errors
/// `InvalidParameter` for any other token.
pub(in crate::interpreter::parser) fn parse_parameter<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<Identifier>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == TokenKind::Identifier => Ok(Identifier::new(token.text())),
        Some(token) => Err(ParseError::InvalidParameter { found: token.to_string(),
                                                          line:  token.line, }),
        None => Err(ParseError::UnexpectedEndOfInput { expected: "parameter name".to_string() }),
    }
}

/// Decides whether the `(` at the front of `tokens` opens a function literal.
///
/// Scans ahead on a copy of the iterator to the `)` that matches the opening
/// bracket, counting nested brackets on the way, and reports whether a `{`
/// follows it. Nothing is consumed.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// `true` if the bracketed group is immediately followed by a block.
pub(in crate::interpreter::parser) fn opens_function_literal<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut ahead = tokens.clone();
    let mut depth = 0usize;

    while let Some(token) = ahead.next() {
        match token.kind {
            TokenKind::BracketOpen => depth += 1,
            TokenKind::BracketClose => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return matches!(ahead.peek(), Some(next) if next.kind == TokenKind::BlockOpen);
                }
            },
            _ => {},
        }
    }

    false
}
