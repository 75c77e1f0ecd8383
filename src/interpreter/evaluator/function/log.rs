use crate::{
    error::ErrorValue,
    interpreter::{
        evaluator::{core::EvalResult, utils::unary_arg},
        value::core::Value,
    },
};

/// Computes the natural logarithm of a value.
///
/// - `log(0)` (either sign of zero) is `-Infinity`.
/// - A negative argument is a `DomainError` with the message
///   `"log of negative number"`; it never silently becomes NaN.
/// - Otherwise the result is `x.ln()`, so NaN stays NaN and `Infinity`
///   stays `Infinity`.
///
/// # Example
/// ```
/// use squiggle_scalar::{
///     error::ErrorKind,
///     interpreter::{evaluator::function::log::log, value::core::Value},
/// };
///
/// assert_eq!(log(&[Value::Number(1.0)]), Ok(Value::Number(0.0)));
/// assert_eq!(log(&[Value::Number(2.5)]), Ok(Value::Number(2.5_f64.ln())));
/// assert_eq!(log(&[Value::Number(0.0)]), Ok(Value::Number(f64::NEG_INFINITY)));
///
/// let err = log(&[Value::Number(-5.0)]).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::DomainError);
/// assert_eq!(err.message(), "log of negative number");
/// ```
pub fn log(args: &[Value]) -> EvalResult<Value> {
    logarithm("log", args, f64::ln)
}

/// Computes the base-2 logarithm, with the same domain rules as [`log`].
pub fn log2(args: &[Value]) -> EvalResult<Value> {
    logarithm("log2", args, f64::log2)
}

/// Computes the base-10 logarithm, with the same domain rules as [`log`].
pub fn log10(args: &[Value]) -> EvalResult<Value> {
    logarithm("log10", args, f64::log10)
}

fn logarithm(name: &str, args: &[Value], f: fn(f64) -> f64) -> EvalResult<Value> {
    let x = unary_arg(name, args)?;

    if x == 0.0 {
        return Ok(Value::Number(f64::NEG_INFINITY));
    }
    if x < 0.0 {
        return Err(ErrorValue::domain(format!("{name} of negative number")));
    }

    Ok(Value::Number(f(x)))
}
