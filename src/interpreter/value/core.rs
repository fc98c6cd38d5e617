use std::{fmt, rc::Rc};

use crate::interpreter::value::environment::Environment;

/// Represents a runtime value in the interpreter.
///
/// Every expression that produces something produces one of these. Functions
/// have no variant of their own: a function literal evaluates to a
/// [`Value::Block`] whose environment carries a call behaviour.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// An immutable string.
    String(Rc<str>),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// An environment: a namespace object, a block result or a function.
    Block(Environment),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Environment> for Value {
    fn from(env: Environment) -> Self {
        Self::Block(env)
    }
}

/// Primitives compare structurally; environments compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Block(a), Self::Block(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Value {
    /// Returns the user-facing name of the value's type.
    ///
    /// Environments with a call behaviour report `"function"`.
    ///
    /// # Example
    /// ```
    /// use fnscript::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "integer");
    /// assert_eq!(Value::from("hi").type_name(), "string");
    /// ```
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Block(env) if env.is_callable() => "function",
            Self::Block(_) => "block",
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// Only `false` is falsy; every other value, including `0` and the empty
    /// string, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }

    /// Returns the environment if this value is a block.
    #[must_use]
    pub const fn as_block(&self) -> Option<&Environment> {
        match self {
            Self::Block(env) => Some(env),
            _ => None,
        }
    }
}

/// Integers, strings and booleans print plainly. Environments use their own
/// display form; with the alternate flag (`{:#}`) a non-callable environment
/// is abbreviated to `{...}` so nested blocks stay on one short line.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Block(env) if f.alternate() && !env.is_callable() => f.write_str("{...}"),
            Self::Block(env) => write!(f, "{env}"),
        }
    }
}
