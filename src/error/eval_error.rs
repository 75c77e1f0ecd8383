/// The category of an evaluation failure.
///
/// Kinds are stable and cheap to compare, so callers and tests match on the
/// kind rather than on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A builtin received an argument outside its domain (`log(-1)`).
    DomainError,
    /// An identifier was read before it was assigned.
    UnboundError,
    /// A call named a function missing from the builtin table.
    UnknownFunctionError,
    /// A builtin was called with the wrong number of arguments.
    ArityError,
    /// The program contained no statements.
    EmptyProgram,
}

impl ErrorKind {
    /// Returns the kind's name as it appears in rendered errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DomainError => "DomainError",
            Self::UnboundError => "UnboundError",
            Self::UnknownFunctionError => "UnknownFunctionError",
            Self::ArityError => "ArityError",
            Self::EmptyProgram => "EmptyProgram",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structured, inspectable evaluation failure.
///
/// `ErrorValue` is what `Value::Error` carries. Two error values are equal
/// when both their kind and their message are equal.
///
/// # Example
/// ```
/// use squiggle_scalar::error::{ErrorKind, ErrorValue};
///
/// let err = ErrorValue::domain("log of negative number");
///
/// assert_eq!(err.kind(), ErrorKind::DomainError);
/// assert_eq!(err.to_string(), "DomainError: log of negative number");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorValue {
    kind:    ErrorKind,
    message: String,
}

impl ErrorValue {
    /// Creates an error value from a kind and a human-readable message.
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind,
               message: message.into() }
    }

    /// Shorthand for an `ErrorKind::DomainError`.
    #[must_use]
    pub fn domain(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DomainError, message)
    }

    /// An `UnboundError` for the identifier `name`.
    #[must_use]
    pub fn unbound(name: &str) -> Self {
        Self::new(ErrorKind::UnboundError, format!("{name} is not defined"))
    }

    /// An `UnknownFunctionError` for the function `name`.
    #[must_use]
    pub fn unknown_function(name: &str) -> Self {
        Self::new(ErrorKind::UnknownFunctionError,
                  format!("{name} is not a function"))
    }

    /// An `ArityError` for a builtin that expected `expected` arguments.
    #[must_use]
    pub fn arity(name: &str, expected: usize, found: usize) -> Self {
        let plural = if expected == 1 { "" } else { "s" };
        Self::new(ErrorKind::ArityError,
                  format!("{name} expects {expected} argument{plural}, got {found}"))
    }

    /// The error's kind.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The error's message, without the kind prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ErrorValue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_pluralizes() {
        assert_eq!(ErrorValue::arity("log", 1, 2).message(),
                   "log expects 1 argument, got 2");
        assert_eq!(ErrorValue::arity("min", 2, 0).message(),
                   "min expects 2 arguments, got 0");
    }

    #[test]
    fn equality_uses_kind_and_message() {
        let a = ErrorValue::new(ErrorKind::DomainError, "x");
        let b = ErrorValue::new(ErrorKind::UnboundError, "x");
        assert_ne!(a, b);
        assert_eq!(a, ErrorValue::domain("x"));
    }
}
