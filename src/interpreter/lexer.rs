use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5`, `2.` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `log`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```
    /// // Multi line comments.
    /// ```
    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Line breaks; statement separators like `;`.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits source text into tokens paired with their line numbers.
///
/// Lines are counted from 1.
///
/// # Errors
/// Returns `InvalidNumber` for a numeric literal that does not parse and
/// `UnexpectedToken` for any other unrecognized input.
///
/// # Example
/// ```
/// use squiggle_scalar::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1\nlog(x)").unwrap();
///
/// assert_eq!(tokens[0], (Token::Identifier("x".to_string()), 1));
/// assert_eq!(tokens[2], (Token::Number(1.0), 1));
/// assert_eq!(tokens[4], (Token::Identifier("log".to_string()), 2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            // A newline token is reported on the line it terminates.
            Ok(Token::NewLine) => tokens.push((Token::NewLine, line - 1)),
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                let slice = lexer.slice().to_string();
                if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                    return Err(ParseError::InvalidNumber { literal: slice,
                                                           line });
                }
                return Err(ParseError::UnexpectedToken { token: slice,
                                                         line });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn numbers_in_every_notation() {
        assert_eq!(kinds("3 3.25 .5 2. 1e-7 6.02E23"),
                   vec![Token::Number(3.0),
                        Token::Number(3.25),
                        Token::Number(0.5),
                        Token::Number(2.0),
                        Token::Number(1e-7),
                        Token::Number(6.02e23)]);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let tokens = tokenize("a // one\n/* two\nthree */ b").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Identifier("a".to_string()), 1),
                        (Token::NewLine, 1),
                        (Token::Identifier("b".to_string()), 3)]);
    }

    #[test]
    fn block_comments_with_star_runs() {
        assert_eq!(kinds("/** x **/ 1 /***/ 2"),
                   vec![Token::Number(1.0), Token::Number(2.0)]);

        let tokens = tokenize("/**\n * doc\n **/ c").unwrap();
        assert_eq!(tokens, vec![(Token::Identifier("c".to_string()), 3)]);
    }

    #[test]
    fn unknown_character_is_an_error() {
        assert_eq!(tokenize("x = $"),
                   Err(ParseError::UnexpectedToken { token: "$".to_string(),
                                                     line:  1, }));
    }
}
