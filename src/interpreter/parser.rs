/// Core expression parsing.
///
/// Provides the expression entry point and the parser result type.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles negation, exponentiation, literals, identifiers, function calls
/// and parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels, both
/// left-associative.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists and identifiers.
pub mod utils;

/// Statement parsing.
///
/// Splits a token stream into assignments and expression statements and
/// assembles them into a `Program`.
pub mod statement;
