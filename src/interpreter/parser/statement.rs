use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_value},
            utils::expect,
        },
    },
};

/// Parses a single statement with its optional trailing `;`.
///
/// Grammar: `primary := (value | use_stmt | import_stmt) [";"]`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// The statement's node.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let node = match tokens.peek().map(|t| t.kind) {
        Some(TokenKind::Use) => {
            tokens.next();
            Node::Use(parse_module_name(tokens)?)
        },
        Some(TokenKind::Import) => {
            tokens.next();
            Node::Import(parse_module_name(tokens)?)
        },
        _ => parse_value(tokens)?,
    };

    if let Some(Token { kind: TokenKind::EndStatement, .. }) = tokens.peek() {
        tokens.next();
    }

    Ok(node)
}

fn parse_module_name<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    let token = expect(tokens, TokenKind::Identifier, "module name")?;
    Ok(token.text().to_string())
}
