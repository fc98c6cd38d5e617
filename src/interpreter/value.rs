/// Call behaviour attached to environments.
///
/// Defines `Callable` with its two variants: a native host function with a
/// fixed arity, or a user closure made of parameters, a body and the captured
/// defining environment.
pub mod callable;
/// The `Value` enum and its conversions.
///
/// Integers, strings, booleans and environments are the only runtime values;
/// functions are environments that carry a call behaviour.
pub mod core;
/// Environments ("blocks").
///
/// An environment is both a lexical scope and a first-class value. This module
/// implements binding, lookup through the parent chain, bulk merging for
/// `import`, and snapshots used to roll back failed units.
pub mod environment;
