/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unexpected tokens, unbalanced parentheses and
/// malformed numeric literals, all detected before evaluation starts.
pub mod parse_error;
/// Evaluation errors.
///
/// Defines the error kinds and the `ErrorValue` payload produced while
/// evaluating a program. These errors are ordinary data: they travel through
/// the evaluator inside `Result` and surface to callers as `Value::Error`.
pub mod eval_error;

pub use eval_error::{ErrorKind, ErrorValue};
pub use parse_error::ParseError;
