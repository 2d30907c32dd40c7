/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], the dispatch over node variants and the
/// numeric coercion of literals.
pub mod core;

/// Binary operator evaluation logic.
///
/// Applies arithmetic and comparison operators to two evaluated operands.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Statement evaluation.
///
/// Executes assignments, blocks, conditionals and loops for their effect on
/// the variable store.
pub mod statement;
