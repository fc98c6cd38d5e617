use log::{debug, info};

use crate::{
    ast::Node,
    error::Error,
    interpreter::{
        lexer::tokenize,
        parser::parse,
        value::{core::Value, environment::Environment},
    },
};

/// Supplies modules requested with `use name`.
///
/// The evaluator itself ignores `use`; a [`Session`] asks its resolver for
/// the module before the statement runs and binds whatever it returns.
pub trait ModuleResolver {
    /// Loads the module called `name`.
    ///
    /// # Returns
    /// `Ok(None)` if the resolver does not know the module; the `use` is then
    /// a no-op.
    fn resolve(&mut self, name: &str) -> Result<Option<Environment>, Error>;
}

/// A resolver that knows no modules.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoModules;

impl ModuleResolver for NoModules {
    fn resolve(&mut self, _name: &str) -> Result<Option<Environment>, Error> {
        Ok(None)
    }
}

/// A persistent root environment fed one unit of source at a time.
///
/// Each unit runs against the current root. If the unit fails at any stage,
/// every binding it added to the root is discarded, so the root only ever
/// reflects units that completed.
///
/// # Example
/// ```
/// use fnscript::interpreter::{session::Session, value::core::Value};
///
/// let mut session = Session::new();
/// session.run("x = 1").unwrap();
///
/// // Fails after binding `y`; the binding is rolled back.
/// assert!(session.run("y = 2; undefined").is_err());
///
/// assert_eq!(session.run("y = 3; x + y").unwrap(), Some(Value::Integer(4)));
/// ```
pub struct Session<R = NoModules> {
    root:     Environment,
    resolver: R,
}

impl Session {
    /// Creates a session with a fresh root and no module resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(NoModules)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ModuleResolver> Session<R> {
    /// Creates a session with a fresh root that loads `use`d modules through
    /// `resolver`.
    pub fn with_resolver(resolver: R) -> Self {
        Self { root: Environment::root(),
               resolver }
    }

    /// The committed root environment.
    pub const fn root(&self) -> &Environment {
        &self.root
    }

    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Tokenizes, parses and evaluates one unit of source text.
    ///
    /// Lex and parse errors are reported before anything runs, so they never
    /// touch the root.
    ///
    /// # Returns
    /// The value of the last top-level node that produced one.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, Error> {
        let tokens = tokenize(source)?;
        let nodes = parse(&tokens)?;
        self.evaluate(&nodes)
    }

    /// Evaluates already parsed nodes as one unit.
    ///
    /// The root's bindings are snapshotted first and restored if any node
    /// fails.
    pub fn evaluate(&mut self, nodes: &[Node]) -> Result<Option<Value>, Error> {
        let snapshot = self.root.snapshot();

        match evaluate_program(&self.root, nodes, &mut self.resolver) {
            Ok(value) => {
                debug!("committed unit of {} nodes", nodes.len());
                Ok(value)
            },
            Err(e) => {
                self.root.restore(snapshot);
                debug!("rolled back unit after error: {e}");
                Err(e)
            },
        }
    }
}

/// Evaluates top-level nodes in `env`, forwarding `use` to `resolver`.
///
/// For `use name`, if `name` is not yet bound in `env` the resolver is asked
/// for the module and a returned module is bound as `name`.
///
/// # Returns
/// The value of the last node that produced one.
pub fn evaluate_program<R>(env: &Environment,
                           nodes: &[Node],
                           resolver: &mut R)
                           -> Result<Option<Value>, Error>
    where R: ModuleResolver + ?Sized
{
    let mut last = None;

    for node in nodes {
        if let Node::Use(name) = node
           && !env.contains(name)
           && let Some(module) = resolver.resolve(name)?
        {
            info!("loaded module '{name}'");
            env.define(name, Value::Block(module))?;
        }

        if let Some(value) = env.evaluate(node)? {
            last = Some(value);
        }
    }

    Ok(last)
}
