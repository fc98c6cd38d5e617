use log::debug;

use crate::{ast::Node, error::ParseError, interpreter::lexer::Token};

/// Atoms: literals, identifiers, calls, groupings and function literals.
///
/// Everything an infix operator can sit between.
pub mod atom;
/// Infix operators and precedence climbing.
///
/// Turns `a + b * c` into nested calls of the operator identifiers, grouping
/// by the binding-power table.
pub mod binary;
/// Brace-delimited bodies and conditionals.
pub mod block;
/// Program-level entry points shared by every other parser module.
pub mod core;
/// Top-level and block-level statements: values, `use` and `import`, with an
/// optional trailing `;`.
pub mod statement;
/// Helpers for expected tokens, comma-separated lists and lookahead.
pub mod utils;

/// Parses a complete token list into its top-level nodes.
///
/// The whole input must be consumed; any token that cannot start or continue
/// a statement is a hard error.
///
/// # Errors
/// Returns the first [`ParseError`] encountered. No partial tree is returned.
///
/// # Example
/// ```
/// use fnscript::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("x = 5; x").unwrap();
/// let nodes = parse(&tokens).unwrap();
///
/// assert_eq!(nodes.len(), 2);
/// assert!(matches!(&nodes[0], Node::Call { callee, .. } if callee.name == "="));
/// ```
pub fn parse(tokens: &[Token]) -> Result<Vec<Node>, ParseError> {
    let mut iter = tokens.iter().peekable();
    let nodes = core::parse_program(&mut iter)?;
    debug!("parsed {} top-level nodes from {} tokens", nodes.len(), tokens.len());
    Ok(nodes)
}
