use crate::{
    ast::{Block, Branch},
    interpreter::{
        evaluator::core::EvalResult,
        value::{core::Value, environment::Environment},
    },
};

impl Environment {
    /// Evaluates a conditional.
    ///
    /// Conditions are evaluated in declared order. The body of the first arm
    /// whose condition is truthy runs in a child frame and its sequence value
    /// is returned. If no condition is truthy the else body runs instead, when
    /// present.
    ///
    /// Bindings made inside any body stay in that body's frame.
    ///
    /// # Parameters
    /// - `branches`: Arms to try, in order.
    /// - `else_body`: Fallback body.
    ///
    /// # Returns
    /// The value of the body that ran, or `None` if no body ran or the body
    /// produced nothing.
    ///
    /// # Errors
    /// `MissingValue` if a condition produces nothing, plus any error raised
    /// by a condition or body.
    pub(crate) fn eval_conditional(&self,
                                   branches: &[Branch],
                                   else_body: Option<&Block>)
                                   -> EvalResult<Option<Value>> {
        for branch in branches {
            if self.evaluate_value(&branch.condition)?.is_truthy() {
                return self.child().evaluate_sequence(&branch.body.body);
            }
        }

        match else_body {
            Some(body) => self.child().evaluate_sequence(&body.body),
            None => Ok(None),
        }
    }

    /// Evaluates a bare block and returns its frame as a value.
    ///
    /// The body runs in a new child frame; its bindings become the members of
    /// the returned block, which is how `point = { x = 1 }` builds an object.
    pub(crate) fn eval_block(&self, block: &Block) -> EvalResult<Value> {
        let frame = self.child();
        frame.evaluate_sequence(&block.body)?;
        Ok(Value::Block(frame))
    }
}
