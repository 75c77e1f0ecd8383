use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_arguments,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation is
/// right-associative and binds looser than `^`, so `-2^2` is `-(2^2)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line: *line, })
    } else {
        parse_power(tokens)
    }
}

/// Parses exponentiation.
///
/// `^` is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`. The
/// exponent may itself be negated, as in `2 ^ -1`.
///
/// Grammar: `power := primary ("^" unary)?`
fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens)?;

    if let Some((Token::Caret, line)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::binary(base, BinaryOperator::Pow, exponent, *line));
    }

    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
///
/// Grammar (simplified):
/// ```text
///     primary := number
///              | identifier
///              | identifier "(" (expression ("," expression)*)? ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), line)) => Ok(Expr::number(*value, *line)),
        Some((Token::Identifier(name), line)) => {
            parse_identifier_or_function(tokens, name, *line)
        },
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { line: *line }),
            }
        },
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                               line:  *line, }),
        // Positioned by `parse_program` once the whole statement has failed.
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses what follows an identifier: an argument list makes it a call,
/// anything else leaves it a variable reference.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>,
                                       name: &str,
                                       line: usize)
                                       -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, open_line)) = tokens.peek() {
        tokens.next();
        let arguments = parse_arguments(tokens, *open_line)?;
        return Ok(Expr::call(name, arguments, line));
    }

    Ok(Expr::identifier(name, line))
}
