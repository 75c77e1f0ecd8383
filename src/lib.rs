//! # squiggle-scalar
//!
//! An evaluator for the scalar core of the Squiggle expression language.
//! It parses programs such as `x = 1; y = 2; x + y` or `log(2.5)`, binds
//! variables in an environment, evaluates builtin math functions, and
//! returns either a number or a structured error value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{lexer::tokenize, parser::statement::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of a program as a tree. The AST is built by the
/// parser and traversed by the evaluator; callers with their own front end
/// can construct it directly.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for diagnostics.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Syntax problems are reported as `ParseError`s. Evaluation failures are
/// `ErrorValue`s, which travel as data and reach callers as `Value::Error`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers or stable kinds for matching and reporting.
/// - Implements the standard error traits so errors can be boxed.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;

pub use interpreter::{
    evaluator::{
        core::{EvalResult, Evaluator},
        environment::Environment,
    },
    value::core::Value,
};

/// Parses source text into a [`Program`].
///
/// # Errors
/// Returns a `ParseError` for invalid tokens or malformed syntax.
///
/// # Examples
/// ```
/// use squiggle_scalar::parse;
///
/// let program = parse("x = 2; log(x)").unwrap();
/// assert_eq!(program.statements.len(), 2);
///
/// assert!(parse("log(").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Parses and evaluates `source` in a fresh environment.
///
/// Syntax errors are returned as `Err`. Evaluation failures are not: they
/// come back as `Ok(Value::Error(..))`, so the caller inspects the value's
/// tag to tell success from failure.
///
/// # Errors
/// Returns a `ParseError` if `source` does not parse.
///
/// # Examples
/// ```
/// use squiggle_scalar::{error::ErrorKind, interpreter::value::core::Value, run};
///
/// assert_eq!(run("x = 2; y = 3; z = 4; x + y + z").unwrap(), Value::Number(9.0));
/// assert_eq!(run("log(0)").unwrap(), Value::Number(f64::NEG_INFINITY));
///
/// let value = run("log(-5)").unwrap();
/// assert_eq!(value.kind(), Some(ErrorKind::DomainError));
/// assert_eq!(value.to_string(), "DomainError: log of negative number");
/// ```
pub fn run(source: &str) -> Result<Value, ParseError> {
    run_in(source, &Environment::new())
}

/// Parses and evaluates `source` starting from the bindings in `env`.
///
/// `env` itself is left untouched; assignments made by the program are only
/// visible while it runs.
///
/// # Errors
/// Returns a `ParseError` if `source` does not parse.
///
/// # Examples
/// ```
/// use squiggle_scalar::{
///     interpreter::{evaluator::environment::Environment, value::core::Value},
///     run_in,
/// };
///
/// let env = Environment::new().bind("rate", Value::Number(0.5));
/// assert_eq!(run_in("rate * 4", &env).unwrap(), Value::Number(2.0));
/// ```
pub fn run_in(source: &str, env: &Environment) -> Result<Value, ParseError> {
    let program = parse(source)?;
    Ok(Evaluator::new().eval_program(&program, env))
}

/// Runs a script and optionally prints its final value.
///
/// This function parses and evaluates all statements in the provided source
/// string. If execution succeeds, it returns `Ok(())`; otherwise, it returns
/// an error with details about the failure. An evaluation that ends in an
/// error value counts as a failure here.
///
/// # Errors
/// Returns an error if parsing fails or if the program evaluates to an error
/// value.
///
/// # Examples
/// ```
/// use squiggle_scalar::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let source = "result = 2 + 2";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let source = "y = x + 1"; // 'x' is not defined
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    match run(source)? {
        Value::Error(e) => Err(Box::new(e)),
        value => {
            if auto_print {
                println!("{value}");
            }
            Ok(())
        },
    }
}
