use crate::{
    error::ErrorValue,
    interpreter::{
        evaluator::{core::EvalResult, utils::unary_arg},
        value::core::Value,
    },
};

/// Computes the square root of a value.
///
/// Negative arguments are a `DomainError`, matching how `log` treats its
/// own domain. Negative zero is allowed and returns negative zero.
///
/// # Example
/// ```
/// use squiggle_scalar::interpreter::{evaluator::function::sqrt::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Number(9.0)]), Ok(Value::Number(3.0)));
/// assert!(sqrt(&[Value::Number(-9.0)]).is_err());
/// ```
pub fn sqrt(args: &[Value]) -> EvalResult<Value> {
    let x = unary_arg("sqrt", args)?;

    if x < 0.0 {
        return Err(ErrorValue::domain("sqrt of negative number"));
    }

    Ok(Value::Number(x.sqrt()))
}
