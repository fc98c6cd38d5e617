use crate::interpreter::{
    evaluator::{core::EvalResult, function::arithmetic::type_error},
    value::core::Value,
};

/// Compares two values for equality.
///
/// Integers, strings and booleans compare by value; blocks compare by
/// identity. Values of different types are never equal.
///
/// # Example
/// ```
/// use fnscript::interpreter::{evaluator::function::logic::eq, value::core::Value};
///
/// assert_eq!(eq(&[Value::Integer(1), Value::Integer(1)]).unwrap(), Value::Bool(true));
/// assert_eq!(eq(&[Value::Integer(1), Value::from("1")]).unwrap(), Value::Bool(false));
/// ```
pub fn eq(args: &[Value]) -> EvalResult<Value> {
    match args {
        [a, b] => Ok(Value::Bool(a == b)),
        _ => Err(type_error("eq", args)),
    }
}

/// `true` if both operands are truthy.
///
/// Both operands are already evaluated when this runs; there is no short
/// circuit.
pub fn and(args: &[Value]) -> EvalResult<Value> {
    match args {
        [a, b] => Ok(Value::Bool(a.is_truthy() && b.is_truthy())),
        _ => Err(type_error("and", args)),
    }
}

/// `true` if either operand is truthy.
pub fn or(args: &[Value]) -> EvalResult<Value> {
    match args {
        [a, b] => Ok(Value::Bool(a.is_truthy() || b.is_truthy())),
        _ => Err(type_error("or", args)),
    }
}

/// Logical negation, bound as both `!` and `not`.
pub fn not(args: &[Value]) -> EvalResult<Value> {
    match args {
        [value] => Ok(Value::Bool(!value.is_truthy())),
        _ => Err(type_error("not", args)),
    }
}
