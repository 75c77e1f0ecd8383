use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    error::{ErrorKind, ErrorValue},
    interpreter::{evaluator::environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// `ErrorValue` describing the first failure. The public entry points fold
/// the error back into `Value::Error`.
pub type EvalResult<T> = Result<T, ErrorValue>;

/// Walks expression trees and produces values.
///
/// The evaluator holds no state of its own: bindings live in the
/// `Environment` passed to each call and builtins live in a static table.
/// One evaluator can therefore be shared freely, including across threads,
/// and evaluating the same program twice with the same environment always
/// gives the same result.
///
/// # Example
/// ```
/// use squiggle_scalar::{
///     ast::{BinaryOperator, Expr, Program, Statement},
///     interpreter::{
///         evaluator::{core::Evaluator, environment::Environment},
///         value::core::Value,
///     },
/// };
///
/// let program = Program::new(vec![
///     Statement::Assignment { name: "x".to_string(), value: Expr::number(2.0, 1), line: 1 },
///     Statement::Expression { expr: Expr::binary(Expr::identifier("x", 1),
///                                                BinaryOperator::Add,
///                                                Expr::number(3.0, 1),
///                                                1),
///                             line: 1 },
/// ]);
///
/// let value = Evaluator::new().eval_program(&program, &Environment::new());
/// assert_eq!(value, Value::Number(5.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates a program and returns the value of its last statement.
    ///
    /// Evaluation starts from `env`; assignments made by the program are
    /// visible to the statements after them and are discarded afterwards.
    /// The first error produced by any statement becomes the result.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.statements.len()))]
    pub fn eval_program(&self, program: &Program, env: &Environment) -> Value {
        let result = self.eval_statements(&program.statements, env)
                         .map(|(value, _)| value);
        if let Err(e) = &result {
            debug!(kind = %e.kind(), message = e.message(), "program evaluated to an error");
        }
        Value::from(result)
    }

    /// Evaluates a statement sequence, returning the last value together with
    /// the environment extended by every assignment in the sequence.
    ///
    /// # Errors
    /// Returns the first error any statement produces, or `EmptyProgram` when
    /// `statements` is empty.
    pub fn eval_statements(&self,
                           statements: &[Statement],
                           env: &Environment)
                           -> EvalResult<(Value, Environment)> {
        let mut env = env.clone();
        let mut last = None;

        for statement in statements {
            let (value, next) = self.eval_statement(statement, &env)?;
            env = next;
            last = Some(value);
        }

        let value = last.ok_or_else(|| {
                            ErrorValue::new(ErrorKind::EmptyProgram, "program has no statements")
                        })?;
        Ok((value, env))
    }

    /// Evaluates a single statement.
    ///
    /// An assignment evaluates its right-hand side in `env` and returns the
    /// assigned value alongside `env` extended with the new binding. An
    /// expression statement returns its value and `env` unchanged.
    pub fn eval_statement(&self,
                          statement: &Statement,
                          env: &Environment)
                          -> EvalResult<(Value, Environment)> {
        match statement {
            Statement::Assignment { name, value, line } => {
                let value = self.eval(value, env)?;
                debug!(name = name.as_str(), %value, line, "bind");
                let env = env.bind(name.as_str(), value.clone());
                Ok((value, env))
            },
            Statement::Expression { expr, .. } => Ok((self.eval(expr, env)?, env.clone())),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches based on expression variant: literals, identifiers, unary
    /// and binary operations, and function calls.
    ///
    /// # Errors
    /// Returns the first error produced while evaluating `expr` or any of
    /// its subexpressions.
    pub fn eval(&self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        trace!(line = expr.line_number(), "eval");

        match expr {
            Expr::Literal { value, .. } => Ok(Value::Number(*value)),
            Expr::Identifier { name, .. } => env.lookup(name)?.clone().into_result(),
            Expr::UnaryOp { op, expr, .. } => self.eval_unary_op(*op, expr, env),
            Expr::BinaryOp { left, op, right, .. } => self.eval_binary_op(left, *op, right, env),
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.eval_function_call(name, arguments, *line, env),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::BinaryOperator;

    fn assign(name: &str, value: Expr) -> Statement {
        Statement::Assignment { name: name.to_string(),
                                value,
                                line: 1 }
    }

    fn expr(expr: Expr) -> Statement {
        Statement::Expression { expr, line: 1 }
    }

    #[test]
    fn later_assignment_shadows_earlier_one() {
        let program = Program::new(vec![assign("x", Expr::number(1.0, 1)),
                                        assign("x", Expr::number(2.0, 1)),
                                        expr(Expr::identifier("x", 1))]);
        assert_eq!(Evaluator::new().eval_program(&program, &Environment::new()),
                   Value::Number(2.0));
    }

    #[test]
    fn trailing_assignment_yields_assigned_value() {
        let program = Program::new(vec![assign("x", Expr::number(7.0, 1))]);
        assert_eq!(Evaluator::new().eval_program(&program, &Environment::new()),
                   Value::Number(7.0));
    }

    #[test]
    fn empty_program_is_an_error() {
        let value = Evaluator::new().eval_program(&Program::default(), &Environment::new());
        assert_eq!(value.kind(), Some(ErrorKind::EmptyProgram));
    }

    #[test]
    fn failed_assignment_stops_the_program() {
        let program = Program::new(vec![assign("x", Expr::identifier("missing", 1)),
                                        expr(Expr::number(1.0, 2))]);
        let value = Evaluator::new().eval_program(&program, &Environment::new());
        assert_eq!(value, Value::Error(ErrorValue::unbound("missing")));
    }

    #[test]
    fn caller_environment_is_not_modified() {
        let env = Environment::new().bind("a", Value::Number(1.0));
        let program = Program::new(vec![assign("b", Expr::number(2.0, 1)),
                                        expr(Expr::binary(Expr::identifier("a", 1),
                                                          BinaryOperator::Add,
                                                          Expr::identifier("b", 1),
                                                          1))]);
        let evaluator = Evaluator::new();
        let (value, extended) = evaluator.eval_statements(&program.statements, &env).unwrap();

        assert_eq!(value, Value::Number(3.0));
        assert!(extended.contains("b"));
        assert!(!env.contains("b"));
        assert_eq!(evaluator.eval_program(&program, &env), Value::Number(3.0));
    }
}
