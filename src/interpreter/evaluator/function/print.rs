use crate::interpreter::{
    evaluator::{core::EvalResult, function::arithmetic::type_error},
    value::core::Value,
};

/// Prints a value to standard output and returns it unchanged.
///
/// Accepts exactly one argument of any type. The value is formatted using its
/// `Display` implementation.
///
/// # Parameters
/// - `args`: Slice containing one argument.
///
/// # Returns
/// The printed value.
///
/// # Example
/// ```
/// use fnscript::interpreter::{evaluator::function::print::print, value::core::Value};
///
/// // The function prints the value to stdout, but the doctest
/// // only checks the returned result.
/// let result = print(&[Value::Integer(42)]).unwrap();
///
/// assert_eq!(result, Value::Integer(42));
/// ```
pub fn print(args: &[Value]) -> EvalResult<Value> {
    match args {
        [value] => {
            println!("{value}");
            Ok(value.clone())
        },
        _ => Err(type_error("print", args)),
    }
}
