//! # fnscript
//!
//! fnscript is a small scripting language where everything is a block.
//! Blocks are scopes, objects and functions at once: `point = { x = 1 }`
//! builds an object, `point.x` reads from it, and `(a, b) { a + b }` is a
//! block that can be called.
//!
//! The crate exposes each stage separately (lexer, parser, evaluator) as well
//! as a [`Session`](interpreter::session::Session) that keeps a root
//! environment across units of input and rolls back units that fail.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    interpreter::{lexer::tokenize, parser::parse as parse_tokens, session::Session, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the small structs it is built
/// from. The tree is produced by the parser, never modified afterwards, and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines a closed set of node variants for all language constructs.
/// - Renders nodes back to a compact, fully parenthesised source form.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Each phase has its own error enum; [`Error`] wraps all of them so callers
/// that run whole units can propagate a single type.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches names and line numbers for context.
/// - Implements `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and sessions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Provides entry points for parsing and evaluating user code.
/// - Keeps a committed root environment across units of input.
pub mod interpreter;

pub use error::Error;

/// Tokenizes and parses source text into top-level nodes.
///
/// # Errors
/// Returns the lexing or parsing error that stopped the parse.
///
/// # Examples
/// ```
/// let nodes = fnscript::parse("add = (a, b) { a + b }; add(2, 3)").unwrap();
/// assert_eq!(nodes.len(), 2);
///
/// assert!(fnscript::parse("add(2, 3").is_err());
/// ```
pub fn parse(source: &str) -> Result<Vec<Node>, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_tokens(&tokens)?)
}

/// Runs a complete program in a fresh root environment.
///
/// All top-level nodes are evaluated in order against one root; the value of
/// the last node that produced one is returned.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use fnscript::{interpreter::value::core::Value, run};
///
/// // Precedence climbing: multiplication binds tighter than addition.
/// assert_eq!(run("2 + 3 * 4").unwrap(), Some(Value::Integer(14)));
///
/// // Bindings cannot be rebound in the same scope.
/// assert!(run("x = 5; x = 6").is_err());
/// ```
pub fn run(source: &str) -> Result<Option<Value>, Error> {
    Session::new().run(source)
}
