use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::call_value},
        value::{core::Value, environment::Environment},
    },
};

impl Environment {
    /// Evaluates `name = value`.
    ///
    /// The left operand must be a bare identifier; it is never evaluated. The
    /// right operand is evaluated here and bound in this environment's own
    /// mapping.
    ///
    /// # Returns
    /// The bound value.
    ///
    /// # Errors
    /// - `InvalidAssignmentTarget` if the left operand is not an identifier.
    /// - `MissingValue` if the right operand produces nothing.
    /// - `Redefinition` if the name is already bound in this scope.
    pub(crate) fn eval_assignment(&self, args: &[Node]) -> EvalResult<Value> {
        let [Node::Identifier(target), value] = args else {
            return Err(RuntimeError::InvalidAssignmentTarget);
        };

        let value = self.evaluate_value(value)?;
        self.define(&target.name, value.clone())?;
        Ok(value)
    }

    /// Evaluates `target.member`.
    ///
    /// The left operand is evaluated here and must yield a block. Only the
    /// member name on the right is resolved against that block's own
    /// bindings: `point.x` reads `x` from `point`, and `obj.f(a + 1)` calls
    /// `obj`'s `f` with `a + 1` evaluated in this environment.
    ///
    /// # Errors
    /// - `NonBlockDereference` if the left operand is not a block.
    /// - `InvalidAssignmentTarget` for `target.(name = value)`; members are
    ///   never bound from outside the block.
    /// - `InvalidMemberAccess` if the right operand is not a name or a call.
    pub(crate) fn eval_member_access(&self, args: &[Node]) -> EvalResult<Option<Value>> {
        let [target, member] = args else {
            return Err(dot_arity(args.len()));
        };

        let target = self.evaluate_value(target)?;
        self.eval_member(&target, member).map(Some)
    }

    fn eval_member(&self, target: &Value, member: &Node) -> EvalResult<Value> {
        let Value::Block(scope) = target else {
            return Err(RuntimeError::NonBlockDereference { found: target.type_name().to_string() });
        };

        match member {
            Node::Identifier(identifier) => own_member(scope, &identifier.name),
            Node::Call { callee, args } => match (callee.name.as_str(), args.as_slice()) {
                ("=", _) => Err(RuntimeError::InvalidAssignmentTarget),
                (".", [inner, rest]) => {
                    let inner = self.eval_member(target, inner)?;
                    self.eval_member(&inner, rest)
                },
                (".", _) => Err(dot_arity(args.len())),
                (name, _) => {
                    let function = own_member(scope, name)?;
                    let arg_vals = args.iter()
                                       .map(|arg| self.evaluate_value(arg))
                                       .collect::<EvalResult<Vec<_>>>()?;
                    call_value(&function, name, &arg_vals)
                },
            },
            _ => Err(RuntimeError::InvalidMemberAccess),
        }
    }

    /// Evaluates `import name`.
    ///
    /// Every own binding of the block bound to `name` is copied into this
    /// environment, replacing bindings with the same name. This is the one
    /// way to rebind an existing name.
    ///
    /// # Errors
    /// - `UnknownIdentifier` if `name` is unbound.
    /// - `NonBlockImport` if it is bound to something other than a block.
    pub(crate) fn eval_import(&self, name: &str) -> EvalResult<()> {
        let value = self.lookup(name)
                        .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string() })?;

        match value {
            Value::Block(module) => {
                self.merge(&module);
                Ok(())
            },
            other => Err(RuntimeError::NonBlockImport { name:  name.to_string(),
                                                        found: other.type_name().to_string(), }),
        }
    }
}

fn own_member(scope: &Environment, name: &str) -> EvalResult<Value> {
    scope.get_own(name)
         .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string() })
}

fn dot_arity(found: usize) -> RuntimeError {
    RuntimeError::ArityMismatch { name:     ".".to_string(),
                                  expected: 2,
                                  found, }
}
