use tracing::debug;

use crate::{
    ast::Expr,
    error::ErrorValue,
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            environment::Environment,
            function::{builtin, log, min_max, sqrt},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns the
/// computed value or an error.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - the exact number of arguments it takes,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
///
/// The table is immutable static data, so concurrent evaluations read it
/// without any synchronization.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: usize,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "log"   => { arity: 1, func: log::log },
    "log2"  => { arity: 1, func: log::log2 },
    "log10" => { arity: 1, func: log::log10 },
    "exp"   => { arity: 1, func: builtin::exp },
    "sqrt"  => { arity: 1, func: sqrt::sqrt },
    "abs"   => { arity: 1, func: builtin::abs },
    "floor" => { arity: 1, func: |args| builtin::unary_round("floor", args, f64::floor) },
    "ceil"  => { arity: 1, func: |args| builtin::unary_round("ceil", args, f64::ceil) },
    "round" => { arity: 1, func: |args| builtin::unary_round("round", args, f64::round) },
    "min"   => { arity: 2, func: |args| min_max::min_max("min", args) },
    "max"   => { arity: 2, func: |args| min_max::min_max("max", args) },
    "pow"   => { arity: 2, func: builtin::pow },
}

/// Whether `name` refers to a builtin function.
///
/// # Example
/// ```
/// use squiggle_scalar::interpreter::evaluator::function::core::is_builtin;
///
/// assert!(is_builtin("log"));
/// assert!(!is_builtin("sample"));
/// ```
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TABLE.iter().any(|b| b.name == name)
}

impl Evaluator {
    /// Evaluates a function call expression.
    ///
    /// Arguments are evaluated left to right. The first argument that fails
    /// becomes the result of the call and the remaining arguments are not
    /// evaluated. Only then is the function looked up, so `foo(log(-1))`
    /// reports the domain error rather than the unknown function.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize,
                                     env: &Environment)
                                     -> EvalResult<Value> {
        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg, env))
                                .collect::<EvalResult<Vec<_>>>()?;

        debug!(name, args = arg_vals.len(), line, "call");
        Self::eval_function(name, &arg_vals)
    }

    /// Applies the builtin `name` to already evaluated arguments.
    ///
    /// # Errors
    /// - `UnknownFunctionError` if `name` is not in the builtin table.
    /// - `ArityError` if the argument count does not match.
    /// - Any error the builtin itself produces.
    ///
    /// # Example
    /// ```
    /// use squiggle_scalar::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let v = Evaluator::eval_function("max", &[Value::Number(1.0), Value::Number(4.0)]);
    /// assert_eq!(v, Ok(Value::Number(4.0)));
    /// ```
    pub fn eval_function(name: &str, arg_vals: &[Value]) -> EvalResult<Value> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|b| b.name == name)
                                   .ok_or_else(|| ErrorValue::unknown_function(name))?;

        if arg_vals.len() != builtin.arity {
            return Err(ErrorValue::arity(name, builtin.arity, arg_vals.len()));
        }

        (builtin.func)(arg_vals)
    }
}
