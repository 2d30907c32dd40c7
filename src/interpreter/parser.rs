/// Parser state and the token-level primitives.
///
/// Holds the lexer and the single lookahead token, and implements advancing,
/// expectation checks and error construction shared by every grammar rule.
pub mod core;

/// Binary expression parsing.
///
/// Implements the three precedence levels that combine operands: `term`,
/// `expr` and `conditional`.
pub mod binary;

/// Factor parsing.
///
/// Handles literals, variables, parenthesized expressions and unary signs.
pub mod unary;

/// Statement parsing.
///
/// Implements assignments, `if`/`elsif`/`else`, `while` and bare expression
/// statements.
pub mod statement;

/// Statement list parsing.
///
/// Collects statements up to a terminating keyword, handling `;` separators
/// and empty bodies.
pub mod block;
