use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses the argument list of a call, after its opening `(` was consumed.
///
/// Grammar: `arguments := ")" | expression ("," expression)* ")"`
///
/// `open_line` is the line of the `(` and is used when the list is never
/// closed.
///
/// # Errors
/// - `ExpectedClosingParen` when an argument is followed by anything other
///   than `,` or `)`.
/// - `UnexpectedEndOfInput` when the tokens run out inside the list.
/// - Any error from parsing an argument.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>,
                                                             open_line: usize)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = Vec::new();
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expression(tokens)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => return Ok(arguments),
            Some(_) => return Err(ParseError::ExpectedClosingParen { line: open_line }),
            None => return Err(ParseError::UnexpectedEndOfInput { line: open_line }),
        }
    }
}

/// Consumes an identifier and returns its name with its line.
///
/// # Errors
/// Returns `UnexpectedToken` for any other token and `UnexpectedEndOfInput`
/// (still unpositioned, line 0) when no token is left.
pub(in crate::interpreter::parser) fn expect_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                               -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok((name.clone(), *line)),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
