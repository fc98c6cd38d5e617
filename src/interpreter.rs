/// The evaluator module executes nodes against environments.
///
/// The evaluator walks the syntax tree, resolves identifiers through the
/// environment chain, applies the special forms `=` and `.`, runs conditionals
/// and closures, and produces values. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Evaluates every node variant with an exhaustive match.
/// - Calls natives and closures with exact arity checks.
/// - Reports runtime errors such as unknown identifiers or redefinitions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens, each
/// carrying its kind, its text where relevant and its source line. Whitespace
/// and comments are consumed without producing tokens.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Recognises keywords and word operators before plain identifiers.
/// - Reports lexical errors for input no rule matches.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser is recursive descent with precedence climbing for infix
/// operators. Every infix operator, including `=` and `.`, becomes an ordinary
/// call node.
///
/// # Responsibilities
/// - Converts tokens into nodes.
/// - Disambiguates grouping from function literals by lookahead.
/// - Rejects any grammar violation with a located error.
pub mod parser;
/// Persistent sessions and module resolution.
///
/// A session keeps one root environment across many units of source and rolls
/// back any unit that fails.
pub mod session;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, strings, booleans and environments. Environments act
/// as scopes, objects and functions at once.
pub mod value;
