/// Evaluation of conditionals and bare blocks.
///
/// Both run their bodies in a fresh child frame of the current environment.
pub mod conditional;

/// Core evaluation logic.
///
/// Contains the node dispatcher, sequence evaluation and the `EvalResult`
/// alias shared by every evaluator module.
pub mod core;

/// Function evaluation.
///
/// Handles calls, closures and the built-in function registry.
pub mod function;

/// The special forms `=` and `.`, and `import`.
///
/// These look like ordinary calls or statements but do not evaluate all of
/// their operands in the current environment.
pub mod special;
