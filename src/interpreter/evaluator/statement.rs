use tracing::{debug, trace};

use crate::{
    ast::Node,
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates the right-hand side and stores it under `name`.
    pub(crate) fn eval_assign(&mut self, name: &str, value: &Node, line: usize) -> EvalResult<()> {
        let value = self.eval_number(value)?;
        self.store.set(name, value, line)?;
        debug!(line, name, value, "assigned variable");
        Ok(())
    }

    /// Evaluates statements in order and yields the value of the last one.
    ///
    /// Intermediate values are discarded; an empty block yields `None`.
    pub(crate) fn eval_block(&mut self, statements: &[Node]) -> EvalResult<Option<f64>> {
        let mut last = None;
        for statement in statements {
            last = self.eval(statement)?;
        }
        Ok(last)
    }

    /// Runs `then_branch` if the condition is non-zero, `else_branch`
    /// otherwise. An `elsif` chain recurses through the else branch.
    pub(crate) fn eval_if(&mut self,
                          condition: &Node,
                          then_branch: &[Node],
                          else_branch: &[Node])
                          -> EvalResult<()> {
        if self.eval_number(condition)? != 0.0 {
            self.eval_block(then_branch)?;
        } else {
            self.eval_block(else_branch)?;
        }
        Ok(())
    }

    /// Runs `body` for as long as the condition is non-zero, checking it
    /// before every iteration.
    ///
    /// A NaN condition counts as non-zero, like in `if`.
    pub(crate) fn eval_while(&mut self, condition: &Node, body: &[Node]) -> EvalResult<()> {
        let mut iterations: u64 = 0;
        while self.eval_number(condition)? != 0.0 {
            iterations += 1;
            trace!(line = condition.line_number(), iterations, "loop iteration");
            self.eval_block(body)?;
        }
        debug!(line = condition.line_number(), iterations, "loop finished");
        Ok(())
    }
}
