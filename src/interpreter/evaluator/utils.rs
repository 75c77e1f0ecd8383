use crate::{
    error::ErrorValue,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Extracts the single numeric argument of a one-argument builtin.
///
/// # Errors
/// Returns an `ArityError` naming `name` when `args` does not hold exactly
/// one value, or the argument's own error if it is an error value.
///
/// # Example
/// ```
/// use squiggle_scalar::interpreter::{evaluator::utils::unary_arg, value::core::Value};
///
/// assert_eq!(unary_arg("exp", &[Value::Number(1.0)]), Ok(1.0));
/// assert!(unary_arg("exp", &[]).is_err());
/// ```
pub fn unary_arg(name: &str, args: &[Value]) -> EvalResult<f64> {
    match args {
        [x] => x.as_number(),
        _ => Err(ErrorValue::arity(name, 1, args.len())),
    }
}

/// Extracts both numeric arguments of a two-argument builtin.
///
/// # Errors
/// Returns an `ArityError` when `args` does not hold exactly two values. If
/// both arguments are errors, the first one is returned.
pub fn binary_args(name: &str, args: &[Value]) -> EvalResult<(f64, f64)> {
    match args {
        [a, b] => Ok((a.as_number()?, b.as_number()?)),
        _ => Err(ErrorValue::arity(name, 2, args.len())),
    }
}
