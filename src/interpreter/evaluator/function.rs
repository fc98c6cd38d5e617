/// Integer arithmetic and string concatenation.
///
/// Implements `+`, `-`, `*` and `/` with overflow and division-by-zero checks.
pub mod arithmetic;
/// Miscellaneous builtins.
///
/// The pipe operator `|>` and `assert`.
pub mod builtin;
/// Calls, closures and the builtin registry.
///
/// Resolves callees, checks arity, runs closures in fresh frames and builds
/// the natives installed into every root environment.
pub mod core;
/// Equality and boolean operators.
///
/// `eq`, `and`, `or`, `!` and `not`, all based on truthiness.
pub mod logic;
/// The `print` function implementation.
///
/// Outputs a value to standard output.
pub mod print;
