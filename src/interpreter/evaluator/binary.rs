use tracing::trace;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            environment::Environment,
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates both operands of a binary expression and combines them.
    ///
    /// The left operand is evaluated first; if it fails, the right operand is
    /// never evaluated. Because the parser builds left-associative trees, a
    /// chain like `x + y + z` is summed as `(x + y) + z`.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 env: &Environment)
                                 -> EvalResult<Value> {
        let left = self.eval(left, env)?;
        let right = self.eval(right, env)?;
        trace!(%left, %op, %right, "binary");
        Self::eval_binary(op, &left, &right)
    }

    /// Evaluates a binary operation between two values.
    ///
    /// All arithmetic follows IEEE-754: overflow saturates to `±Infinity`
    /// and division by zero yields an infinity or NaN rather than an error.
    /// An error operand is returned unchanged.
    ///
    /// # Example
    /// ```
    /// use squiggle_scalar::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_binary(BinaryOperator::Add, &Value::Number(0.1), &Value::Number(0.2));
    /// assert_eq!(sum, Ok(Value::Number(0.1 + 0.2)));
    ///
    /// let huge = Evaluator::eval_binary(BinaryOperator::Mul, &Value::Number(f64::MAX), &Value::Number(2.0));
    /// assert_eq!(huge, Ok(Value::Number(f64::INFINITY)));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let l = left.as_number()?;
        let r = right.as_number()?;

        let result = match op {
            BinaryOperator::Add => l + r,
            BinaryOperator::Sub => l - r,
            BinaryOperator::Mul => l * r,
            BinaryOperator::Div => l / r,
            BinaryOperator::Pow => l.powf(r),
        };

        Ok(Value::Number(result))
    }
}
