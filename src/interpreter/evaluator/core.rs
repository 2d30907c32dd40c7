use crate::{
    ast::{LiteralValue, Node},
    error::RuntimeError,
    interpreter::store::Store,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Tree-walking evaluator over a borrowed variable store.
///
/// The evaluator holds no state of its own besides the store it was lent, so
/// creating one per run is free and two runs never observe each other.
pub struct Evaluator<'s> {
    pub(crate) store: &'s mut Store,
}

impl<'s> Evaluator<'s> {
    /// Creates an evaluator that reads and writes `store`.
    pub const fn new(store: &'s mut Store) -> Self {
        Self { store }
    }

    /// Evaluates a node.
    ///
    /// Expressions yield `Some(number)`. Assignments, conditionals, loops and
    /// `NoOp` yield `None`. A block yields whatever its last statement
    /// yields.
    ///
    /// # Errors
    /// Returns a `TypeError` when a non-numeric value is used as a number and
    /// a `NameError` when a variable name is not a single uppercase letter.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<f64>> {
        match node {
            Node::Literal { value, line } => Self::eval_literal(value, *line).map(Some),
            Node::Variable { name, line } => self.store.get(name, *line).map(Some),
            Node::UnaryOp { op, operand, .. } => self.eval_unary_op(*op, operand).map(Some),
            Node::BinaryOp { left, op, right, .. } => {
                self.eval_binary_op(left, *op, right).map(Some)
            },
            Node::Assign { name, value, line } => {
                self.eval_assign(name, value, *line)?;
                Ok(None)
            },
            Node::Block { statements, .. } => self.eval_block(statements),
            Node::If { condition,
                       then_branch,
                       else_branch,
                       .. } => {
                self.eval_if(condition, then_branch, else_branch)?;
                Ok(None)
            },
            Node::While { condition, body, .. } => {
                self.eval_while(condition, body)?;
                Ok(None)
            },
            Node::NoOp => Ok(None),
        }
    }

    /// Evaluates a node that must produce a number.
    ///
    /// Statements are rejected before they run, so a misplaced assignment
    /// never reaches the store.
    ///
    /// # Errors
    /// Returns a `TypeError` if the node is a statement or a block that yields
    /// no value.
    pub fn eval_number(&mut self, node: &Node) -> EvalResult<f64> {
        let not_a_number = || RuntimeError::TypeError { details: "statement used where a number is required".to_string(),
                                                        line:    node.line_number(), };

        if node.is_statement() {
            return Err(not_a_number());
        }
        self.eval(node)?.ok_or_else(not_a_number)
    }

    /// Converts a literal into the numeric domain.
    ///
    /// Booleans become `1.0`/`0.0`, the same values comparisons produce.
    /// Strings cannot be used as numbers.
    ///
    /// # Example
    /// ```
    /// use elsif::{ast::LiteralValue, interpreter::evaluator::core::Evaluator};
    ///
    /// assert_eq!(Evaluator::eval_literal(&LiteralValue::Bool(true), 1), Ok(1.0));
    /// assert!(Evaluator::eval_literal(&LiteralValue::Str("x".into()), 1).is_err());
    /// ```
    pub fn eval_literal(value: &LiteralValue, line: usize) -> EvalResult<f64> {
        match value {
            LiteralValue::Number(n) => Ok(*n),
            LiteralValue::Bool(b) => Ok(crate::util::num::truth(*b)),
            LiteralValue::Str(s) => Err(RuntimeError::TypeError { details: format!("string \"{s}\" cannot be used as a number"),
                                                                   line }),
        }
    }
}

/// Evaluates a parsed tree against `store`.
///
/// Returns the value of the last statement when it is an expression, `None`
/// when the program ends in a statement or is empty.
///
/// # Errors
/// Propagates the first [`RuntimeError`]; the store keeps every assignment
/// made before it.
///
/// # Example
/// ```
/// use elsif::{
///     ast::{BinaryOperator, LiteralValue, Node},
///     interpreter::{evaluator::core::evaluate, store::Store},
/// };
///
/// let two = Node::Literal { value: LiteralValue::Number(2.0),
///                           line:  1, };
/// let sum = Node::BinaryOp { left:  Box::new(two.clone()),
///                            op:    BinaryOperator::Add,
///                            right: Box::new(two),
///                            line:  1, };
///
/// let mut store = Store::new();
/// assert_eq!(evaluate(&sum, &mut store), Ok(Some(4.0)));
/// ```
pub fn evaluate(node: &Node, store: &mut Store) -> EvalResult<Option<f64>> {
    Evaluator::new(store).eval(node)
}
