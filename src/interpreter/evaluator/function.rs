/// Built-in function implementations.
///
/// Elementwise scalar functions such as `exp`, `abs` and the rounding
/// family, plus `pow`.
pub mod builtin;
/// Logarithm function implementations.
///
/// Natural, base-2 and base-10 logarithms. All three return `-Infinity` at
/// zero and a `DomainError` for negative arguments.
pub mod log;
/// `min` and `max` function implementations.
///
/// Returns the smaller or larger of two numbers.
pub mod min_max;
/// The `sqrt` (square root) function implementation.
///
/// Rejects negative arguments with a `DomainError`.
pub mod sqrt;

pub mod core;
