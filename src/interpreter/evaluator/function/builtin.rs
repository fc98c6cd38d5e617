use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{arithmetic::type_error, core::call_value},
        },
        value::core::Value,
    },
};

/// Passes the left operand to the function on the right.
///
/// `x |> f` is `f(x)`; chains read left to right, so `x |> f |> g` is
/// `g(f(x))`.
///
/// # Errors
/// `NotCallable` if the right operand is not a function, plus anything the
/// function raises.
pub fn pipe(args: &[Value]) -> EvalResult<Value> {
    match args {
        [value, function] => call_value(function, "|>", std::slice::from_ref(value)),
        _ => Err(type_error("|>", args)),
    }
}

/// Fails unless the argument is truthy.
///
/// Named `assert_fn` to avoid confusion with the `assert!` macro; bound as
/// `assert`.
///
/// # Returns
/// The argument, unchanged.
///
/// # Errors
/// `AssertionFailed` if the argument is `false`.
///
/// # Example
/// ```
/// use fnscript::interpreter::{evaluator::function::builtin::assert_fn, value::core::Value};
///
/// assert!(assert_fn(&[Value::Bool(true)]).is_ok());
/// assert!(assert_fn(&[Value::Bool(false)]).is_err());
/// ```
pub fn assert_fn(args: &[Value]) -> EvalResult<Value> {
    match args {
        [value] if value.is_truthy() => Ok(value.clone()),
        [_] => Err(RuntimeError::AssertionFailed),
        _ => Err(type_error("assert", args)),
    }
}
