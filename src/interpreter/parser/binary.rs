use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// Both operators are left-associative, so `x + y + z` becomes
/// `(x + y) + z` and is summed in that order.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                           parse_multiplicative)
}

/// Parses multiplication and division.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_associative(tokens,
                           |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                           parse_unary)
}

/// Folds `operand (op operand)*` into a left-leaning tree for every
/// operator `accepts` allows at this precedence level.
fn parse_left_associative<'a, I>(tokens: &mut Peekable<I>,
                                 accepts: fn(BinaryOperator) -> bool,
                                 operand: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = operand(tokens)?;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepts(op)
    {
        let line = *line;
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::binary(left, op, right, line);
    }

    Ok(left)
}

/// Maps a token to the binary operator it spells, if any.
///
/// # Example
/// ```
/// use squiggle_scalar::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}
