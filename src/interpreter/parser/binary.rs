use std::iter::Peekable;

use crate::{
    ast::Node,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{atom::parse_atom, core::ParseResult},
    },
};

/// Returns how tightly an infix operator binds; higher binds tighter.
///
/// The table, strongest first:
///
/// | power | operators |
/// |-------|-----------|
/// | 8     | `.`       |
/// | 7     | `=`       |
/// | 6     | `\|>`     |
/// | 5     | `*` `/`   |
/// | 4     | `+` `-`   |
/// | 3     | `eq`      |
/// | 2     | `and`     |
/// | 1     | `or`      |
///
/// `*` and `/` share one rank and `+` and `-` another, instead of each
/// operator getting a rank of its own, so `8 / 2 * 2` is `8` and `5 - 2 + 1`
/// is `4`.
///
/// Operators on the same row group left to right. Because `=` binds tighter
/// than arithmetic, `x = 2 + 3` groups as `(x = 2) + 3`; write
/// `x = (2 + 3)` to bind the sum.
///
/// # Example
/// ```
/// use fnscript::interpreter::parser::binary::binding_power;
///
/// assert!(binding_power("*") > binding_power("+"));
/// assert_eq!(binding_power("*"), binding_power("/"));
/// assert_eq!(binding_power("+"), binding_power("-"));
/// assert_eq!(binding_power("x"), None);
/// ```
#[must_use]
pub fn binding_power(op: &str) -> Option<u8> {
    match op {
        "." => Some(8),
        "=" => Some(7),
        "|>" => Some(6),
        "*" | "/" => Some(5),
        "+" | "-" => Some(4),
        "eq" => Some(3),
        "and" => Some(2),
        "or" => Some(1),
        _ => None,
    }
}

/// Peeks at the next token and returns it with its binding power if it is an
/// infix operator.
fn peek_operator<'a, I>(tokens: &mut Peekable<I>) -> Option<(&'a str, u8)>
    where I: Iterator<Item = &'a Token>
{
    let token: &'a Token = *tokens.peek()?;
    if token.kind != TokenKind::InfixOperator {
        return None;
    }
    let op = token.text();
    binding_power(op).map(|power| (op, power))
}

/// Folds a run of infix operators onto `lhs` by precedence climbing.
///
/// While the next operator binds at least as tightly as `min_power`, it is
/// consumed together with the following atom. Before combining, any later
/// operators that bind strictly tighter than the one just consumed are folded
/// into the right operand by recursing with a raised threshold. Every
/// combination becomes a `Call` of the operator identifier with two
/// arguments.
///
/// This yields left-to-right grouping for equal powers (`8 - 2 - 1` is
/// `(8 - 2) - 1`) and deeper binding for tighter runs (`2 + 3 * 4` is
/// `2 + (3 * 4)`).
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after `lhs`.
/// - `lhs`: The already parsed left operand.
/// - `min_power`: The weakest operator this call may consume.
///
/// # Returns
/// `lhs` combined with every operator this level accepted.
pub(crate) fn parse_infix<'a, I>(tokens: &mut Peekable<I>,
                                 mut lhs: Node,
                                 min_power: u8)
                                 -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    while let Some((op, power)) = peek_operator(tokens)
          && power >= min_power
    {
        tokens.next();
        let mut rhs = parse_atom(tokens)?;

        while let Some((_, next_power)) = peek_operator(tokens)
              && next_power > power
        {
            rhs = parse_infix(tokens, rhs, power + 1)?;
        }

        lhs = Node::infix(op, lhs, rhs);
    }

    Ok(lhs)
}
