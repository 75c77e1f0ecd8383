use std::fs;

use pretty_assertions::assert_eq;
use squiggle_scalar::{
    Environment, Evaluator, Value,
    error::{ErrorKind, ParseError},
    get_result, parse, run, run_in,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "squiggle")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expected_output(&content).unwrap_or_else(|| {
                                                    panic!("{path:?} has no `// expect:` line")
                                                });

        count += 1;
        let value = run(&content).unwrap_or_else(|e| panic!("{path:?} failed to parse: {e}"));
        assert_eq!(value.to_string(), expected, "unexpected result for {path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn expected_output(content: &str) -> Option<String> {
    content.lines()
           .next()
           .and_then(|line| line.strip_prefix("// expect:"))
           .map(|expected| expected.trim().to_string())
}

fn assert_number(src: &str, expected: f64) {
    match run(src) {
        Ok(Value::Number(n)) => assert_eq!(n, expected, "wrong result for {src:?}"),
        other => panic!("Script {src:?} did not produce a number: {other:?}"),
    }
}

fn assert_error(src: &str, kind: ErrorKind) {
    let value = run(src).unwrap_or_else(|e| panic!("Script {src:?} failed to parse: {e}"));
    assert_eq!(value.kind(), Some(kind), "wrong result for {src:?}: {value}");
}

#[test]
fn concrete_scenarios() {
    assert_eq!(run("log(0)").unwrap(), Value::Number(f64::NEG_INFINITY));
    assert_eq!(run("log(-5)").unwrap(),
               Value::error(ErrorKind::DomainError, "log of negative number"));
    assert_eq!(run("x = 2; y = 3; z = 4; x + y + z").unwrap(),
               Value::Number(9.0));
}

#[test]
fn log_matches_natural_logarithm() {
    assert_number("log(2.5)", 2.5_f64.ln());
    assert_number("log(1)", 0.0);
    assert_number("log(1e308)", 1e308_f64.ln());
    assert_number("log(-0)", f64::NEG_INFINITY);
}

#[test]
fn arithmetic_and_precedence() {
    assert_number("1 + 2 * 3", 7.0);
    assert_number("(1 + 2) * 3", 9.0);
    assert_number("10 - 4 - 3", 3.0);
    assert_number("2 ^ 3 ^ 2", 512.0);
    assert_number("-2 ^ 2", -4.0);
    assert_number("2 ^ -1", 0.5);
    assert_number("8 / 4 / 2", 1.0);
    assert_number("1 / 0", f64::INFINITY);
}

#[test]
fn builtin_functions() {
    assert_number("exp(0)", 1.0);
    assert_number("sqrt(16)", 4.0);
    assert_number("abs(-3)", 3.0);
    assert_number("round(2.5)", 3.0);
    assert_number("ceil(2.1)", 3.0);
    assert_number("min(3, -1)", -1.0);
    assert_number("pow(2, 10)", 1024.0);
    assert_number("log2(1024)", 10.0);
}

#[test]
fn failures_are_values() {
    assert_error("log(-1)", ErrorKind::DomainError);
    assert_error("sqrt(-1)", ErrorKind::DomainError);
    assert_error("foo", ErrorKind::UnboundError);
    assert_error("foo(1)", ErrorKind::UnknownFunctionError);
    assert_error("log(1, 2)", ErrorKind::ArityError);
    assert_error("max(1)", ErrorKind::ArityError);
    assert_error("", ErrorKind::EmptyProgram);
    assert_error("x = log(-1); 5", ErrorKind::DomainError);
}

#[test]
fn variables_do_not_leak_between_runs() {
    assert_number("leak = 1; leak", 1.0);
    assert_error("leak", ErrorKind::UnboundError);
}

#[test]
fn caller_supplied_environment() {
    let env = Environment::new().bind("x", Value::Number(4.0));
    assert_eq!(run_in("y = x * 2; x + y", &env).unwrap(), Value::Number(12.0));
    assert!(!env.contains("y"));
}

#[test]
fn evaluation_is_repeatable() {
    let program = parse("a = 0.1; b = 0.2; c = a + b; log(c) + c").unwrap();
    let env = Environment::new();
    let evaluator = Evaluator::new();

    let first = evaluator.eval_program(&program, &env);
    let second = evaluator.eval_program(&program, &env);
    assert_eq!(first, second);
}

#[test]
fn syntax_errors_are_parse_errors() {
    assert_eq!(run("log(2"), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
    assert!(matches!(run("x = = 1"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(run("1 +\n2"), Err(ParseError::UnexpectedToken { line: 1, .. })));
    assert!(matches!(run("x # 1"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn get_result_reports_error_values() {
    assert!(get_result("x = 2; log(x)", false).is_ok());

    let err = get_result("log(-2)", false).unwrap_err();
    assert_eq!(err.to_string(), "DomainError: log of negative number");

    let err = get_result("log(", false).unwrap_err();
    assert_eq!(err.to_string(), "Error on line 1: Unexpected end of input.");

    let err = run("x = 1\ny = (x").unwrap_err();
    assert_eq!(err.line(), 2);
}
