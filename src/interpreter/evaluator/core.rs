use crate::{
    ast::{Identifier, Node},
    error::RuntimeError,
    interpreter::value::{core::Value, environment::Environment},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Environment {
    /// Evaluates a node in this environment.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node variant:
    /// - literals convert directly to values,
    /// - identifiers are looked up through the parent chain,
    /// - calls of `=` and `.` take their special forms, every other call
    ///   resolves the callee and invokes it,
    /// - function literals become closures over this environment,
    /// - blocks and conditionals run in child frames,
    /// - `import` merges a block's bindings into this environment,
    /// - `use` is left to the session's module resolver.
    ///
    /// Evaluation may add bindings to this environment's own mapping.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    ///
    /// # Returns
    /// `Some(Value)` for nodes that produce a value, or `None` for `use`,
    /// `import` and conditionals where no arm ran.
    ///
    /// # Example
    /// ```
    /// use fnscript::{
    ///     ast::Node,
    ///     interpreter::value::{core::Value, environment::Environment},
    /// };
    ///
    /// let env = Environment::root();
    /// let sum = Node::infix("+",
    ///                       Node::NumberLiteral("2".into()),
    ///                       Node::NumberLiteral("3".into()));
    ///
    /// assert_eq!(env.evaluate(&sum).unwrap(), Some(Value::Integer(5)));
    /// ```
    pub fn evaluate(&self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::NumberLiteral(text) => Self::eval_number(text).map(Some),
            Node::StringLiteral(text) => Ok(Some(Value::from(text.as_str()))),
            Node::BooleanLiteral(text) => Ok(Some(Value::Bool(text == "true"))),
            Node::Identifier(identifier) => self.eval_identifier(identifier).map(Some),
            Node::Call { callee, args } => match callee.name.as_str() {
                "=" => self.eval_assignment(args).map(Some),
                "." => self.eval_member_access(args),
                _ => self.eval_call(callee, args).map(Some),
            },
            Node::FunctionLiteral { params, body } => {
                Ok(Some(self.eval_function_literal(params, body)))
            },
            Node::Block(block) => self.eval_block(block).map(Some),
            Node::Conditional { branches, else_body } => {
                self.eval_conditional(branches, else_body.as_ref())
            },
            Node::Import(name) => {
                self.eval_import(name)?;
                Ok(None)
            },
            Node::Use(_) => Ok(None),
        }
    }

    /// Evaluates nodes in order and returns the value of the last one that
    /// produced a value.
    ///
    /// # Returns
    /// `None` if no node produced a value, including for an empty slice.
    pub fn evaluate_sequence(&self, nodes: &[Node]) -> EvalResult<Option<Value>> {
        let mut last = None;
        for node in nodes {
            if let Some(value) = self.evaluate(node)? {
                last = Some(value);
            }
        }
        Ok(last)
    }

    /// Evaluates a node that must produce a value.
    ///
    /// Arguments, conditions and the right side of `=` go through here.
    ///
    /// # Errors
    /// `MissingValue` if the node evaluates to nothing.
    pub(crate) fn evaluate_value(&self, node: &Node) -> EvalResult<Value> {
        self.evaluate(node)?.ok_or(RuntimeError::MissingValue)
    }

    fn eval_number(text: &str) -> EvalResult<Value> {
        text.parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| RuntimeError::LiteralTooLarge { text: text.to_string() })
    }

    fn eval_identifier(&self, identifier: &Identifier) -> EvalResult<Value> {
        self.lookup(&identifier.name)
            .ok_or_else(|| RuntimeError::UnknownIdentifier { name: identifier.name.clone() })
    }
}
