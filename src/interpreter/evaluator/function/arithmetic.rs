use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Builds the error for operands a builtin cannot handle.
pub(crate) fn type_error(operation: &str, args: &[Value]) -> RuntimeError {
    let types: Vec<&str> = args.iter().map(Value::type_name).collect();
    RuntimeError::TypeError { operation: operation.to_string(),
                              details:   format!("unsupported operands ({})", types.join(", ")), }
}

fn overflow(operation: &str) -> RuntimeError {
    RuntimeError::Overflow { operation: operation.to_string() }
}

/// Adds two integers or concatenates two strings.
///
/// # Errors
/// - `Overflow` if the integer sum does not fit in 64 bits.
/// - `TypeError` for any other combination of operands.
///
/// # Example
/// ```
/// use fnscript::interpreter::{evaluator::function::arithmetic::add, value::core::Value};
///
/// assert_eq!(add(&[Value::Integer(2), Value::Integer(3)]).unwrap(), Value::Integer(5));
/// assert_eq!(add(&[Value::from("ab"), Value::from("cd")]).unwrap(), Value::from("abcd"));
/// assert!(add(&[Value::Integer(1), Value::from("x")]).is_err());
/// ```
pub fn add(args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::Integer(a), Value::Integer(b)] => {
            a.checked_add(*b).map(Value::Integer).ok_or_else(|| overflow("+"))
        },
        [Value::String(a), Value::String(b)] => Ok(Value::from(format!("{a}{b}"))),
        _ => Err(type_error("+", args)),
    }
}

/// Generates an integer-only binary builtin backed by a checked `i64`
/// operation.
macro_rules! checked_integer_builtin {
    ($fname:ident, $symbol:literal, $checked:ident) => {
        #[doc = concat!("Applies `", $symbol, "` to two integers.")]
        ///
        /// # Errors
        /// - `Overflow` if the result does not fit in 64 bits.
        /// - `TypeError` if either operand is not an integer.
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            match args {
                [Value::Integer(a), Value::Integer(b)] => {
                    a.$checked(*b).map(Value::Integer).ok_or_else(|| overflow($symbol))
                },
                _ => Err(type_error($symbol, args)),
            }
        }
    };
}

checked_integer_builtin!(sub, "-", checked_sub);
checked_integer_builtin!(mul, "*", checked_mul);

/// Divides two integers, rounding toward negative infinity.
///
/// `7 / 2` is `3` and `-7 / 2` is `-4`.
///
/// # Errors
/// - `DivisionByZero` if the divisor is zero.
/// - `Overflow` for `i64::MIN / -1`.
/// - `TypeError` if either operand is not an integer.
///
/// # Example
/// ```
/// use fnscript::interpreter::{evaluator::function::arithmetic::div, value::core::Value};
///
/// assert_eq!(div(&[Value::Integer(7), Value::Integer(2)]).unwrap(), Value::Integer(3));
/// assert_eq!(div(&[Value::Integer(-7), Value::Integer(2)]).unwrap(), Value::Integer(-4));
/// assert!(div(&[Value::Integer(1), Value::Integer(0)]).is_err());
/// ```
pub fn div(args: &[Value]) -> EvalResult<Value> {
    match args {
        [Value::Integer(_), Value::Integer(0)] => Err(RuntimeError::DivisionByZero),
        [Value::Integer(a), Value::Integer(b)] => {
            let quotient = a.checked_div(*b).ok_or_else(|| overflow("/"))?;
            if a % b != 0 && (*a < 0) != (*b < 0) {
                Ok(Value::Integer(quotient - 1))
            } else {
                Ok(Value::Integer(quotient))
            }
        },
        _ => Err(type_error("/", args)),
    }
}
