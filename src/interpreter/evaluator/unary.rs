use tracing::trace;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            environment::Environment,
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a unary operation.
    ///
    /// Negation flips the sign bit, so `-0` evaluates to negative zero.
    pub(crate) fn eval_unary_op(&self,
                                op: UnaryOperator,
                                expr: &Expr,
                                env: &Environment)
                                -> EvalResult<Value> {
        let value = self.eval(expr, env)?.as_number()?;
        trace!(%op, value, "unary");

        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value)),
        }
    }
}
