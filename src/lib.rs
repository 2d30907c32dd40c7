//! # elsif
//!
//! elsif is a small tree-walking interpreter for an imperative scripting
//! language with arithmetic, comparisons, single-letter variables `A`-`Z` and
//! `if`/`elsif`/`else` and `while` blocks.
//!
//! ```
//! use elsif::{Store, interpret};
//!
//! let mut store = Store::new();
//! interpret("A = 0; while A < 3 A = A + 1 end", &mut store).unwrap();
//! assert_eq!(store.value_of('A'), Some(3.0));
//!
//! assert_eq!(interpret("2 + 3 * 4", &mut Store::new()).unwrap(), Some(14.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{evaluator::core::evaluate, lexer::Lexer, parser::core::Parser};
pub use crate::{
    ast::Node,
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{lexer::Token, store::Store},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator and literal types
/// that represent a program as a tree. The tree is built by the parser and
/// traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one closed set of node variants for expressions and statements.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting a
/// program. Every error carries the source line it was raised on.
///
/// # Responsibilities
/// - Defines one error enum per phase (lexer, parser, evaluator).
/// - Wraps them in a single [`Error`] for the public entry points.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the variable
/// store.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and store.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion.
pub mod util;

/// Tokenizes `source` completely.
///
/// Each token is paired with the line it was found on. The terminating
/// [`Token::Eof`] is not included.
///
/// # Errors
/// Returns the first [`LexError`].
///
/// # Example
/// ```
/// use elsif::{Token, tokenize};
///
/// let tokens = tokenize("A = 1 # one").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Identifier("A".into()), 1),
///                 (Token::Equals, 1),
///                 (Token::Integer(1), 1)]);
///
/// assert!(tokenize("A ! B").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    Lexer::new(source).collect()
}

/// Parses `source` into a program [`Node::Block`].
///
/// # Errors
/// Returns the first lexing or parsing error.
///
/// # Example
/// ```
/// use elsif::{Error, parse};
///
/// assert!(parse("if A > 1 B = 2 end").is_ok());
/// assert!(matches!(parse("if A > 1 B = 2"), Err(Error::Parse(_))));
/// ```
pub fn parse(source: &str) -> Result<Node, Error> {
    Parser::new(source)?.parse()
}

/// Parses and evaluates `source` against `store`.
///
/// Returns the value of the program's last statement when that statement is
/// an expression, and `None` otherwise. Variables assigned by the program are
/// left in `store` for the caller to inspect.
///
/// # Errors
/// Returns the first lexing, parsing or runtime error. Nothing is evaluated
/// unless the whole program parses.
///
/// # Examples
/// ```
/// use elsif::{Store, interpret};
///
/// let mut store = Store::new();
/// let source = "A = 5; if A > 10 C = 1 elsif A > 3 C = 2 else C = 3 end";
/// assert_eq!(interpret(source, &mut store).unwrap(), None);
/// assert_eq!(store.value_of('C'), Some(2.0));
///
/// // Lower-case letters are not variables.
/// assert!(interpret("x = 1", &mut Store::new()).is_err());
/// ```
pub fn interpret(source: &str, store: &mut Store) -> Result<Option<f64>, Error> {
    let program = parse(source)?;
    let result = evaluate(&program, store)?;
    debug!(?result, assigned = store.len(), "program finished");
    Ok(result)
}
