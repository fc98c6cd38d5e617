use std::{fmt, rc::Rc};

use crate::{
    ast::{Identifier, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, environment::Environment},
    },
};

/// Signature of a host function callable from scripts.
pub type NativeFn = dyn Fn(&[Value]) -> EvalResult<Value>;

/// A host function with a name and an exact arity.
///
/// Built-in operators are natives, and hosts can create their own to expose
/// Rust behaviour inside namespace objects (see [`Environment::object`]).
#[derive(Clone)]
pub struct NativeFunction {
    name:  Rc<str>,
    arity: usize,
    func:  Rc<NativeFn>,
}

impl NativeFunction {
    /// Wraps a Rust closure as a callable native.
    ///
    /// # Example
    /// ```
    /// use fnscript::interpreter::value::{callable::NativeFunction, core::Value};
    ///
    /// let double = NativeFunction::new("double", 1, |args| match args {
    ///     [Value::Integer(n)] => Ok(Value::Integer(n * 2)),
    ///     _ => Ok(Value::Bool(false)),
    /// });
    ///
    /// assert_eq!(double.invoke(&[Value::Integer(21)]).unwrap(), Value::Integer(42));
    /// assert!(double.invoke(&[]).is_err());
    /// ```
    pub fn new(name: &str,
               arity: usize,
               func: impl Fn(&[Value]) -> EvalResult<Value> + 'static)
               -> Self {
        Self { name: Rc::from(name),
               arity,
               func: Rc::new(func) }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Calls the native after checking the argument count.
    ///
    /// # Errors
    /// `ArityMismatch` if `args` does not have exactly `arity` elements, or
    /// whatever the native itself reports.
    pub fn invoke(&self, args: &[Value]) -> EvalResult<Value> {
        if args.len() != self.arity {
            return Err(RuntimeError::ArityMismatch { name:     self.name.to_string(),
                                                     expected: self.arity,
                                                     found:    args.len(), });
        }
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// A user-defined function produced by evaluating a function literal.
#[derive(Clone)]
pub struct Closure {
    /// Positional parameter names.
    pub params:   Vec<Identifier>,
    /// The literal's body, shared with the syntax tree.
    pub body:     Rc<[Node]>,
    /// The environment the literal was evaluated in.
    pub captured: Environment,
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
         .field("params", &self.params)
         .field("body_len", &self.body.len())
         .finish_non_exhaustive()
    }
}

/// What happens when an environment is called.
#[derive(Debug, Clone)]
pub enum Callable {
    Native(NativeFunction),
    Closure(Closure),
}

impl Callable {
    /// The exact number of arguments a call must supply.
    #[must_use]
    pub fn arity(&self) -> usize {
        match self {
            Self::Native(native) => native.arity(),
            Self::Closure(closure) => closure.params.len(),
        }
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native(native) => write!(f, "<native {}>", native.name()),
            Self::Closure(closure) => {
                let params: Vec<&str> = closure.params.iter().map(|p| p.name.as_str()).collect();
                write!(f, "<fn({})>", params.join(", "))
            },
        }
    }
}
