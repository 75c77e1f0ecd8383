use std::iter::Peekable;

use crate::{
    ast::{Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect_identifier,
        },
    },
};

/// Parses a whole token stream into a [`Program`].
///
/// Statements are separated by `;` or line breaks; runs of separators and
/// leading or trailing separators are ignored. Anything left over after a
/// statement other than a separator is an error. Running out of tokens
/// mid-statement is reported on the line of the last token.
///
/// # Example
/// ```
/// use squiggle_scalar::interpreter::{lexer::tokenize, parser::statement::parse_program};
///
/// let tokens = tokenize("x = 1; y = 2\n\nx + y;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 3);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();
    let end_line = tokens.last().map_or(1, |(_, line)| *line);

    loop {
        while let Some((Token::Semicolon | Token::NewLine, _)) = iter.peek() {
            iter.next();
        }
        if iter.peek().is_none() {
            break;
        }

        let statement = parse_statement(&mut iter).map_err(|e| e.at_end_line(end_line))?;
        statements.push(statement);

        match iter.peek() {
            None | Some((Token::Semicolon | Token::NewLine, _)) => {},
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                  line:  *line, });
            },
        }
    }

    Ok(Program::new(statements))
}

/// Parses a single statement.
/// A statement may be one of:
/// - an assignment, `<identifier> = <expression>`.
/// - an expression used as a statement.
///
/// The statement's source line is taken from the next available token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let current_line = tokens.peek().map_or(0, |(_, l)| *l);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Expression { expr,
                               line: current_line })
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: only when the next token is an
/// identifier and the one after it is `=` is an assignment parsed.
/// Otherwise it returns `Ok(None)` and does not consume tokens.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();
        if let Some((Token::Equals, _)) = lookahead.peek() {
            let (name, line) = expect_identifier(tokens)?;
            tokens.next();

            let value = parse_expression(tokens)?;
            return Ok(Some(Statement::Assignment { name, value, line }));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        ast::{BinaryOperator, Expr, UnaryOperator},
        interpreter::lexer::tokenize,
    };

    fn parse(source: &str) -> ParseResult<Program> {
        parse_program(&tokenize(source).unwrap())
    }

    fn single_expr(source: &str) -> Expr {
        match parse(source).unwrap().statements.as_slice() {
            [Statement::Expression { expr, .. }] => expr.clone(),
            other => panic!("expected one expression, got {other:?}"),
        }
    }

    #[test]
    fn addition_is_left_associative() {
        let expected = Expr::binary(Expr::binary(Expr::identifier("x", 1),
                                                 BinaryOperator::Add,
                                                 Expr::identifier("y", 1),
                                                 1),
                                    BinaryOperator::Add,
                                    Expr::identifier("z", 1),
                                    1);
        assert_eq!(single_expr("x + y + z"), expected);
    }

    #[test]
    fn power_is_right_associative_and_binds_tighter_than_negation() {
        let expected = Expr::UnaryOp { op:   UnaryOperator::Negate,
                                       expr: Box::new(Expr::binary(Expr::number(2.0, 1),
                                                                   BinaryOperator::Pow,
                                                                   Expr::binary(Expr::number(3.0, 1),
                                                                                BinaryOperator::Pow,
                                                                                Expr::number(2.0, 1),
                                                                                1),
                                                                   1)),
                                       line: 1, };
        assert_eq!(single_expr("-2 ^ 3 ^ 2"), expected);
    }

    #[test]
    fn assignments_and_expressions_split_on_separators() {
        let program = parse("x = 1; y = 2\nx").unwrap();
        assert_eq!(program.statements,
                   vec![Statement::Assignment { name:  "x".to_string(),
                                                value: Expr::number(1.0, 1),
                                                line:  1, },
                        Statement::Assignment { name:  "y".to_string(),
                                                value: Expr::number(2.0, 1),
                                                line:  1, },
                        Statement::Expression { expr: Expr::identifier("x", 2),
                                                line: 2, }]);
    }

    #[test]
    fn call_with_several_arguments() {
        assert_eq!(single_expr("max(1, log(2))"),
                   Expr::call("max",
                              vec![Expr::number(1.0, 1),
                                   Expr::call("log", vec![Expr::number(2.0, 1)], 1)],
                              1));
    }

    #[test]
    fn empty_source_is_an_empty_program() {
        assert_eq!(parse(" ;\n; ").unwrap(), Program::default());
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(parse("(1 + 2"), Err(ParseError::ExpectedClosingParen { line: 1 }));
        assert_eq!(parse("1 2"),
                   Err(ParseError::UnexpectedTrailingTokens { token: "Number(2.0)".to_string(),
                                                              line:  1, }));
        assert_eq!(parse("log(1"), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
        assert_eq!(parse("log(1 2)"), Err(ParseError::ExpectedClosingParen { line: 1 }));
        assert!(matches!(parse("* 2"), Err(ParseError::UnexpectedToken { .. })));
    }

    #[test]
    fn end_of_input_is_reported_on_the_last_line() {
        assert_eq!(parse("log("), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
        assert_eq!(parse("x ="), Err(ParseError::UnexpectedEndOfInput { line: 1 }));
        assert_eq!(parse("x = 1\ny = 2 *"), Err(ParseError::UnexpectedEndOfInput { line: 2 }));
        assert_eq!(parse("x = 1\n\n(\n"), Err(ParseError::UnexpectedToken { token: "NewLine".to_string(),
                                                                           line:  3, }));

        let err = parse("a = 1\nb = log(").unwrap_err();
        assert_eq!(err.line(), 2);
        assert_eq!(err.to_string(), "Error on line 2: Unexpected end of input.");
    }
}
