use crate::interpreter::{
    evaluator::{core::EvalResult, utils::binary_args},
    value::core::Value,
};

/// Computes the minimum or maximum of two numbers.
///
/// The operation is selected by `name` (`"min"` or `"max"`). A NaN argument
/// is ignored in favour of the other one, as with `f64::min`/`f64::max`.
///
/// # Example
/// ```
/// use squiggle_scalar::interpreter::{evaluator::function::min_max::min_max, value::core::Value};
///
/// let args = [Value::Number(2.0), Value::Number(-3.0)];
/// assert_eq!(min_max("min", &args), Ok(Value::Number(-3.0)));
/// assert_eq!(min_max("max", &args), Ok(Value::Number(2.0)));
/// ```
pub fn min_max(name: &str, args: &[Value]) -> EvalResult<Value> {
    let (a, b) = binary_args(name, args)?;

    let result = if name == "min" { a.min(b) } else { a.max(b) };
    Ok(Value::Number(result))
}
