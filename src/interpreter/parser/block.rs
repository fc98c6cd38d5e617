use std::iter::Peekable;

use crate::{
    ast::{Block, Branch, Node},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            atom::parse_grouped,
            binary::parse_infix,
            core::{ParseResult, parse_value},
            statement::parse_primary,
            utils::{expect, unexpected},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements, each optionally terminated by
/// `;`. Parsing continues until the matching `}`.
///
/// Grammar: `block := "{" primary* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// A [`Block`] holding every parsed statement.
///
/// # Errors
/// `UnterminatedBlock` carrying the line of the `{` if the input ends first.
pub(crate) fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Block>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = expect(tokens, TokenKind::BlockOpen, "'{'")?;
    let mut body = Vec::new();

    loop {
        match tokens.peek() {
            None => return Err(ParseError::UnterminatedBlock { line: open.line }),
            Some(Token { kind: TokenKind::BlockClose, .. }) => {
                tokens.next();
                break;
            },
            Some(_) => body.push(parse_primary(tokens)?),
        }
    }

    Ok(Block { body })
}

/// Parses an `if` or `unless` conditional with optional `else`.
///
/// Syntax:
/// ```text
///     if <condition> { ... }
///     if <condition> { ... } else { ... }
///     if <condition> { ... } else if <condition> { ... } else { ... }
///     unless <condition> { ... } else { ... }
/// ```
/// `unless c { A } else { B }` is stored as the branch `c => B` with default
/// body `A`, i.e. the bodies swap places. An `else if` / `else unless` tail is
/// parsed recursively and its arms are appended to this conditional's branch
/// list.
///
/// # Parameters
/// - `tokens`: Token stream positioned at `if` or `unless`.
///
/// # Returns
/// A [`Node::Conditional`].
pub(crate) fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let keyword = match tokens.next() {
        Some(token) if matches!(token.kind, TokenKind::If | TokenKind::Unless) => token,
        Some(token) => return Err(unexpected("'if' or 'unless'", token)),
        None => {
            return Err(ParseError::UnexpectedEndOfInput { expected: "'if' or 'unless'".to_string() });
        },
    };

    let condition = parse_condition(tokens)?;
    let body = parse_block(tokens)?;

    let tail = match tokens.peek() {
        Some(Token { kind: TokenKind::Else, .. }) => {
            tokens.next();
            match tokens.peek() {
                Some(Token { kind: TokenKind::If | TokenKind::Unless, .. }) => {
                    Some(ElseTail::Chain(parse_conditional(tokens)?))
                },
                _ => Some(ElseTail::Body(parse_block(tokens)?)),
            }
        },
        _ => None,
    };

    if keyword.kind == TokenKind::Unless {
        let branch_body = match tail {
            Some(ElseTail::Body(block)) => block,
            Some(ElseTail::Chain(node)) => Block { body: vec![node] },
            None => Block::default(),
        };
        return Ok(Node::Conditional { branches:  vec![Branch { condition,
                                                               body: branch_body }],
                                      else_body: Some(body), });
    }

    let mut branches = vec![Branch { condition, body }];
    let else_body = match tail {
        Some(ElseTail::Body(block)) => Some(block),
        Some(ElseTail::Chain(Node::Conditional { branches: rest,
                                                 else_body, })) => {
            branches.extend(rest);
            else_body
        },
        Some(ElseTail::Chain(node)) => Some(Block { body: vec![node] }),
        None => None,
    };

    Ok(Node::Conditional { branches, else_body })
}

enum ElseTail {
    Body(Block),
    Chain(Node),
}

/// Parses the condition of an `if`/`unless`.
///
/// A leading `(` is always a grouping here: `if (a) { ... }` must not be read
/// as a function literal swallowing the body.
fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(Token { kind: TokenKind::BracketOpen, .. }) => {
            let grouped = parse_grouped(tokens)?;
            parse_infix(tokens, grouped, 0)
        },
        _ => parse_value(tokens),
    }
}
