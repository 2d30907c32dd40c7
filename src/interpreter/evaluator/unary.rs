use crate::{
    ast::{Node, UnaryOperator},
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates the operand and applies a unary operator to it.
    pub(crate) fn eval_unary_op(&mut self, op: UnaryOperator, operand: &Node) -> EvalResult<f64> {
        let value = self.eval_number(operand)?;
        Ok(Self::eval_unary(op, value))
    }

    /// Applies a unary operator to a number.
    ///
    /// # Example
    /// ```
    /// use elsif::{ast::UnaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(Evaluator::eval_unary(UnaryOperator::Plus, -5.0), -5.0);
    /// ```
    #[must_use]
    pub const fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => -value,
        }
    }
}
