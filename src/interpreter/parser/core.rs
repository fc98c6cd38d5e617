use std::iter::Peekable;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{atom::parse_atom, binary::parse_infix, statement::parse_primary},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses statements until the token stream is exhausted.
///
/// Grammar: `program := primary*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the program.
///
/// # Returns
/// Every top-level node, in source order.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Node>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut nodes = Vec::new();
    while tokens.peek().is_some() {
        nodes.push(parse_primary(tokens)?);
    }
    Ok(nodes)
}

/// Parses a value: an atom followed by any chain of infix operators.
///
/// This is the entry point for expression parsing. Operator grouping is
/// delegated to [`parse_infix`], starting from the weakest binding power so
/// that every operator is accepted.
///
/// Grammar: `value := atom infix_tail`
pub fn parse_value<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let lhs = parse_atom(tokens)?;
    parse_infix(tokens, lhs, 0)
}
