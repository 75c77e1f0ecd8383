use crate::interpreter::{
    evaluator::{
        core::EvalResult,
        utils::{binary_args, unary_arg},
    },
    value::core::Value,
};

/// Generates a one-argument builtin that applies an `f64` method.
///
/// These functions are total on the reals, so they never produce a domain
/// error; NaN and infinities pass through with IEEE semantics.
///
/// # Example
/// ```
/// use squiggle_scalar::interpreter::{evaluator::function::builtin::abs, value::core::Value};
///
/// assert_eq!(abs(&[Value::Number(-2.5)]), Ok(Value::Number(2.5)));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            let x = unary_arg(stringify!($fname), args)?;
            Ok(Value::Number(x.$real_fn()))
        }
    };
}

real_builtin!(exp, exp);
real_builtin!(abs, abs);

/// Applies a rounding operation such as `f64::floor` to the single argument
/// of the builtin `name`.
///
/// # Example
/// ```
/// use squiggle_scalar::interpreter::{evaluator::function::builtin::unary_round, value::core::Value};
///
/// let r = unary_round("floor", &[Value::Number(3.8)], f64::floor).unwrap();
/// assert_eq!(r, Value::Number(3.0));
/// ```
pub fn unary_round(name: &str, args: &[Value], op: fn(f64) -> f64) -> EvalResult<Value> {
    let x = unary_arg(name, args)?;
    Ok(Value::Number(op(x)))
}

/// Raises the first argument to the power of the second.
pub fn pow(args: &[Value]) -> EvalResult<Value> {
    let (base, exponent) = binary_args("pow", args)?;
    Ok(Value::Number(base.powf(exponent)))
}
