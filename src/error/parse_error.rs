#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after a statement should have ended.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal could not be represented as a double.
    InvalidNumber {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Gets the line number the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpectedClosingParen { line }
            | Self::UnexpectedTrailingTokens { line, .. }
            | Self::InvalidNumber { line, .. } => *line,
        }
    }

    /// Places an end-of-input error that was raised without a position on
    /// `end_line`, the line of the last token. Other errors are unchanged.
    #[must_use]
    pub(crate) fn at_end_line(self, end_line: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { line: 0 } => Self::UnexpectedEndOfInput { line: end_line },
            other => other,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after statement. Check your input: {token}"),

            Self::InvalidNumber { literal, line } => {
                write!(f, "Error on line {line}: Invalid number literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
