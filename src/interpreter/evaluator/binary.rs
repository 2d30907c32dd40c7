use crate::{
    ast::{BinaryOperator, Node},
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::truth,
};

impl Evaluator<'_> {
    /// Evaluates both operands, left first, and applies the operator.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Node,
                                 op: BinaryOperator,
                                 right: &Node)
                                 -> EvalResult<f64> {
        let lhs = self.eval_number(left)?;
        let rhs = self.eval_number(right)?;
        Ok(Self::eval_binary(op, lhs, rhs))
    }

    /// Applies a binary operator to two numbers.
    ///
    /// Comparisons return exactly `1.0` or `0.0`. Division and modulo follow
    /// IEEE-754: dividing by zero gives an infinity or NaN, never an error.
    /// `%` keeps the sign of the dividend.
    ///
    /// # Example
    /// ```
    /// use elsif::{ast::BinaryOperator, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Greater, 5.0, 3.0), 1.0);
    /// assert_eq!(Evaluator::eval_binary(BinaryOperator::Mod, -7.0, 3.0), -1.0);
    /// assert!(Evaluator::eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, lhs: f64, rhs: f64) -> f64 {
        match op {
            BinaryOperator::Add => lhs + rhs,
            BinaryOperator::Sub => lhs - rhs,
            BinaryOperator::Mul => lhs * rhs,
            BinaryOperator::Div => lhs / rhs,
            BinaryOperator::Mod => lhs % rhs,
            BinaryOperator::Less => truth(lhs < rhs),
            BinaryOperator::Greater => truth(lhs > rhs),
            BinaryOperator::LessEqual => truth(lhs <= rhs),
            BinaryOperator::GreaterEqual => truth(lhs >= rhs),
            #[allow(clippy::float_cmp)]
            BinaryOperator::Equal => truth(lhs == rhs),
            #[allow(clippy::float_cmp)]
            BinaryOperator::NotEqual => truth(lhs != rhs),
        }
    }
}
