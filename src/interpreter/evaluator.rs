/// Core evaluation logic.
///
/// Contains the `Evaluator`, the statement loop that threads bindings
/// through a program, and expression dispatch.
pub mod core;

/// Variable bindings.
///
/// A persistent, append-only chain of name/value pairs. Each assignment
/// extends the chain for the statements that follow it.
pub mod environment;

/// Binary operator evaluation logic.
///
/// Handles `+`, `-`, `*`, `/` and `^` on numbers with IEEE semantics.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Function evaluation.
///
/// Handles calls into the static builtin table, argument checking, and
/// return value computation.
pub mod function;

/// Utility functions for evaluation.
///
/// Argument extraction helpers shared by builtin implementations.
pub mod utils;
