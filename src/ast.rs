use std::fmt;

/// Represents a literal value in the language.
///
/// Integer and real literals share the `Number` case: the parser widens
/// integers to `f64` once, so evaluation works on a single numeric domain.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal.
    Number(f64),
    /// A string literal. Only storable, never usable as a number.
    Str(String),
    /// A boolean literal: `true` or `false`.
    Bool(bool),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// A node of the abstract syntax tree.
///
/// The set of variants is closed; the evaluator matches on it exhaustively.
/// Statement sequences (`then_branch`, `else_branch`, `body`, `statements`)
/// are executed in order. The tree owns all of its children, so there is no
/// sharing between subtrees.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A constant value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Unary plus or minus.
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// An arithmetic or comparison operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Binds the value of an expression to a variable.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A sequence of statements; a whole program parses into one.
    Block {
        /// Statements inside the block.
        statements: Vec<Self>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Conditional statement. An `elsif` clause is an `If` nested as the only
    /// element of the enclosing `else_branch`.
    If {
        /// The condition; any non-zero number selects `then_branch`.
        condition:   Box<Self>,
        /// Statements run when the condition holds.
        then_branch: Vec<Self>,
        /// Statements run otherwise. Empty when there is no `else`.
        else_branch: Vec<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// Loop statement, re-checking its condition before each iteration.
    While {
        /// The loop condition.
        condition: Box<Self>,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// The empty statement.
    NoOp,
}

impl Node {
    /// Gets the line number from `self`. `NoOp` has no source position and
    /// reports line 0.
    /// ## Example
    /// ```
    /// use elsif::ast::Node;
    ///
    /// let node = Node::Variable { name: "X".to_string(),
    ///                             line: 5, };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// assert_eq!(Node::NoOp.line_number(), 0);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assign { line, .. }
            | Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. } => *line,
            Self::NoOp => 0,
        }
    }

    /// Returns `true` for the node kinds that only exist for their effect and
    /// never produce a value.
    #[must_use]
    pub const fn is_statement(&self) -> bool {
        matches!(self,
                 Self::Assign { .. } | Self::If { .. } | Self::While { .. } | Self::NoOp)
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl BinaryOperator {
    /// Returns `true` for the six comparison operators.
    ///
    /// # Example
    /// ```
    /// use elsif::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::LessEqual.is_comparison());
    /// assert!(!BinaryOperator::Mod.is_comparison());
    /// ```
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual
                 | Self::Equal
                 | Self::NotEqual)
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Negate => write!(f, "-"),
        }
    }
}
