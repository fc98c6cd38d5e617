use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use log::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::builtins},
        value::{
            callable::{Callable, NativeFunction},
            core::Value,
        },
    },
};

/// The bindings and call behaviour behind an [`Environment`].
#[derive(Default)]
struct Scope {
    bindings: HashMap<String, Value>,
    /// Binding names in first-insertion order, for display.
    order:    Vec<String>,
    parent:   Option<Environment>,
    callable: Option<Callable>,
}

/// A scope that doubles as a first-class value.
///
/// Cloning an `Environment` yields another handle to the same scope, so
/// bindings added through one handle are visible through every other. Names
/// bound in an environment's own mapping cannot be rebound there with
/// [`define`](Self::define); only [`merge`](Self::merge) overwrites.
///
/// Lookups fall through to the parent chain; [`get_own`](Self::get_own)
/// sees only the scope's own bindings.
///
/// # Example
/// ```
/// use fnscript::interpreter::value::{core::Value, environment::Environment};
///
/// let root = Environment::root();
/// let frame = root.child();
/// frame.define("x", Value::Integer(1)).unwrap();
///
/// assert_eq!(frame.lookup("x"), Some(Value::Integer(1)));
/// assert!(frame.lookup("+").is_some());
/// assert_eq!(root.lookup("x"), None);
/// assert!(frame.define("x", Value::Integer(2)).is_err());
/// ```
#[derive(Clone)]
pub struct Environment {
    scope: Rc<RefCell<Scope>>,
}

/// A copy of an environment's own bindings, taken before a unit runs so the
/// unit's effects can be discarded.
#[derive(Debug, Clone)]
pub struct Snapshot {
    bindings: HashMap<String, Value>,
    order:    Vec<String>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_scope(Scope::default())
    }
}

impl Environment {
    fn from_scope(scope: Scope) -> Self {
        Self { scope: Rc::new(RefCell::new(scope)) }
    }

    /// Creates a root environment holding every built-in.
    ///
    /// Each call builds a fresh, independent root from the immutable builtin
    /// registry.
    #[must_use]
    pub fn root() -> Self {
        let root = Self::default();
        for native in builtins() {
            root.bind(native.name().to_string(), Self::native(native).into());
        }
        trace!("created root environment with {} builtins", root.len());
        root
    }

    /// Creates an empty environment with no parent and no call behaviour.
    ///
    /// Hosts use this to assemble namespace objects, typically filled with
    /// [`define_native`](Self::define_native).
    #[must_use]
    pub fn object() -> Self {
        Self::default()
    }

    /// Creates an empty environment whose call behaviour is `native`.
    #[must_use]
    pub fn native(native: NativeFunction) -> Self {
        Self::with_callable(Callable::Native(native))
    }

    /// Creates an empty environment with the given call behaviour.
    #[must_use]
    pub fn with_callable(callable: Callable) -> Self {
        Self::from_scope(Scope { callable: Some(callable),
                                 ..Scope::default() })
    }

    /// Creates a new, empty scope whose lookups fall through to `self`.
    #[must_use]
    pub fn child(&self) -> Self {
        Self::from_scope(Scope { parent: Some(self.clone()),
                                 ..Scope::default() })
    }

    /// Resolves `name` in this scope, then in its ancestors.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let scope = self.scope.borrow();
        if let Some(value) = scope.bindings.get(name) {
            return Some(value.clone());
        }
        scope.parent.as_ref().and_then(|parent| parent.lookup(name))
    }

    /// Resolves `name` in this scope's own bindings only.
    ///
    /// This is how the member name on the right of `.` is found.
    #[must_use]
    pub fn get_own(&self, name: &str) -> Option<Value> {
        self.scope.borrow().bindings.get(name).cloned()
    }

    /// Whether `name` is bound in this scope's own bindings.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.scope.borrow().bindings.contains_key(name)
    }

    /// Binds `name` in this scope's own bindings.
    ///
    /// # Errors
    /// `Redefinition` if `name` is already bound here. Bindings in ancestors
    /// do not count, so shadowing an outer name is allowed.
    pub fn define(&self, name: &str, value: Value) -> EvalResult<()> {
        if self.contains(name) {
            return Err(RuntimeError::Redefinition { name: name.to_string() });
        }
        self.bind(name.to_string(), value);
        Ok(())
    }

    /// Binds a native function as `name`.
    ///
    /// # Errors
    /// `Redefinition` if `name` is already bound here.
    ///
    /// # Example
    /// ```
    /// use fnscript::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let server = Environment::object();
    /// server.define_native("port", 0, |_| Ok(Value::Integer(8080))).unwrap();
    ///
    /// assert!(server.get_own("port").is_some());
    /// ```
    pub fn define_native(&self,
                         name: &str,
                         arity: usize,
                         func: impl Fn(&[Value]) -> EvalResult<Value> + 'static)
                         -> EvalResult<()> {
        let native = NativeFunction::new(name, arity, func);
        self.define(name, Self::native(native).into())
    }

    /// Copies every own binding of `other` into this scope, overwriting names
    /// that already exist here.
    pub fn merge(&self, other: &Self) {
        for (name, value) in other.bindings() {
            self.bind(name, value);
        }
    }

    fn bind(&self, name: String, value: Value) {
        let mut scope = self.scope.borrow_mut();
        if !scope.bindings.contains_key(&name) {
            scope.order.push(name.clone());
        }
        scope.bindings.insert(name, value);
    }

    /// Returns this scope's own bindings in first-insertion order.
    #[must_use]
    pub fn bindings(&self) -> Vec<(String, Value)> {
        let scope = self.scope.borrow();
        scope.order
             .iter()
             .filter_map(|name| scope.bindings.get(name).map(|v| (name.clone(), v.clone())))
             .collect()
    }

    /// Number of own bindings.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.scope.borrow().bindings.len()
    }

    /// Returns the call behaviour, if any.
    #[must_use]
    pub fn callable(&self) -> Option<Callable> {
        self.scope.borrow().callable.clone()
    }

    #[must_use]
    pub fn is_callable(&self) -> bool {
        self.scope.borrow().callable.is_some()
    }

    /// Whether both handles refer to the same scope.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.scope, &other.scope)
    }

    /// Copies the current own bindings so they can be restored later.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let scope = self.scope.borrow();
        Snapshot { bindings: scope.bindings.clone(),
                   order:    scope.order.clone(), }
    }

    /// Replaces the own bindings with a previously taken snapshot.
    ///
    /// Values reachable from the snapshot are shared, not copied. Script code
    /// cannot add bindings to a block it did not create in the current unit,
    /// so only host-side mutation of a nested block survives a restore.
    pub fn restore(&self, snapshot: Snapshot) {
        let mut scope = self.scope.borrow_mut();
        scope.bindings = snapshot.bindings;
        scope.order = snapshot.order;
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(callable) = self.callable() {
            return write!(f, "{callable}");
        }
        f.write_str("{")?;
        for (i, (name, value)) in self.bindings().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value:#}")?;
        }
        f.write_str("}")
    }
}

/// Lists own binding names only; parents and captured scopes are not followed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        f.debug_struct("Environment")
         .field("bindings", &scope.order)
         .field("callable", &scope.callable.is_some())
         .finish_non_exhaustive()
    }
}
