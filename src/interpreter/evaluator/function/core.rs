use std::rc::Rc;

use log::trace;

use crate::{
    ast::{Identifier, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{arithmetic, builtin, logic, print},
        },
        value::{
            callable::{Callable, Closure, NativeFunction},
            core::Value,
            environment::Environment,
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values whose length has
/// already been checked against its arity.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table read when building a root environment),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "+"      => { arity: 2, func: arithmetic::add },
    "-"      => { arity: 2, func: arithmetic::sub },
    "*"      => { arity: 2, func: arithmetic::mul },
    "/"      => { arity: 2, func: arithmetic::div },
    "eq"     => { arity: 2, func: logic::eq },
    "and"    => { arity: 2, func: logic::and },
    "or"     => { arity: 2, func: logic::or },
    "!"      => { arity: 1, func: logic::not },
    "not"    => { arity: 1, func: logic::not },
    "|>"     => { arity: 2, func: builtin::pipe },
    "assert" => { arity: 1, func: builtin::assert_fn },
    "print"  => { arity: 1, func: print::print },
}

/// Returns a fresh native for every entry of the builtin registry.
///
/// The registry itself is a static table and is never modified; each root
/// environment receives its own natives built from it.
pub(crate) fn builtins() -> impl Iterator<Item = NativeFunction> {
    BUILTIN_TABLE.iter()
                 .map(|def| NativeFunction::new(def.name, def.arity, def.func))
}

/// Calls a value with already evaluated arguments.
///
/// # Parameters
/// - `callee`: The value to call; it must be a block with a call behaviour.
/// - `name`: Name used in error messages.
/// - `args`: Evaluated arguments.
///
/// # Errors
/// `NotCallable` if `callee` has no call behaviour, plus anything the call
/// itself raises.
///
/// # Example
/// ```
/// use fnscript::interpreter::{
///     evaluator::function::core::call_value,
///     value::{core::Value, environment::Environment},
/// };
///
/// let root = Environment::root();
/// let plus = root.lookup("+").unwrap();
///
/// let sum = call_value(&plus, "+", &[Value::Integer(2), Value::Integer(3)]).unwrap();
/// assert_eq!(sum, Value::Integer(5));
/// assert!(call_value(&Value::Integer(1), "one", &[]).is_err());
/// ```
pub fn call_value(callee: &Value, name: &str, args: &[Value]) -> EvalResult<Value> {
    let callable = callee.as_block()
                         .and_then(Environment::callable)
                         .ok_or_else(|| RuntimeError::NotCallable { name: name.to_string() })?;
    invoke(&callable, name, args)
}

/// Runs a call behaviour.
///
/// Natives check their own arity and report their own name. Closures are
/// checked here against their parameter count and report `name`.
pub fn invoke(callable: &Callable, name: &str, args: &[Value]) -> EvalResult<Value> {
    match callable {
        Callable::Native(native) => native.invoke(args),
        Callable::Closure(closure) => call_closure(closure, name, args),
    }
}

/// Executes a user-defined function.
///
/// A new frame is created as a child of the captured environment and the
/// parameters are bound in it positionally. The body is then evaluated in
/// that frame.
///
/// # Returns
/// The value of the last body node that produced one, or the frame itself
/// as a block if none did.
///
/// # Errors
/// `ArityMismatch` if the argument count differs from the parameter count.
fn call_closure(closure: &Closure, name: &str, args: &[Value]) -> EvalResult<Value> {
    if args.len() != closure.params.len() {
        return Err(RuntimeError::ArityMismatch { name:     name.to_string(),
                                                 expected: closure.params.len(),
                                                 found:    args.len(), });
    }
    trace!("calling '{name}' with {} arguments", args.len());

    let frame = closure.captured.child();
    for (param, arg) in closure.params.iter().zip(args) {
        frame.define(&param.name, arg.clone())?;
    }

    let result = frame.evaluate_sequence(&closure.body)?;
    Ok(result.unwrap_or_else(|| Value::Block(frame)))
}

impl Environment {
    /// Evaluates a call of a named callable.
    ///
    /// The callee is resolved first, then every argument is evaluated left to
    /// right in this environment, then the call is made.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if the callee is unbound.
    /// - `NotCallable` if it is bound to something without a call behaviour.
    /// - `MissingValue` if an argument produces nothing.
    /// - `ArityMismatch` if the argument count is wrong.
    pub(crate) fn eval_call(&self, callee: &Identifier, args: &[Node]) -> EvalResult<Value> {
        let target =
            self.lookup(&callee.name)
                .ok_or_else(|| RuntimeError::UnknownIdentifier { name: callee.name.clone() })?;
        let callable = target.as_block()
                             .and_then(Self::callable)
                             .ok_or_else(|| RuntimeError::NotCallable { name: callee.name.clone() })?;

        let arg_vals = args.iter()
                           .map(|arg| self.evaluate_value(arg))
                           .collect::<EvalResult<Vec<_>>>()?;

        invoke(&callable, &callee.name, &arg_vals)
    }

    /// Evaluates a function literal into a closure over this environment.
    ///
    /// The closure sees bindings added to this environment after its
    /// creation, which lets a function bound by `=` call itself.
    pub(crate) fn eval_function_literal(&self, params: &[Identifier], body: &Rc<[Node]>) -> Value {
        let closure = Closure { params:   params.to_vec(),
                                body:     Rc::clone(body),
                                captured: self.clone(), };
        Value::Block(Self::with_callable(Callable::Closure(closure)))
    }
}
