use crate::{
    error::{ErrorKind, ErrorValue},
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// A value is either a double-precision number or an error. Errors are data:
/// they are returned from evaluation just like numbers, and callers tell the
/// two apart by matching on the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (IEEE-754 double precision).
    Number(f64),
    /// A failed evaluation, carrying its kind and message.
    Error(ErrorValue),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<ErrorValue> for Value {
    fn from(e: ErrorValue) -> Self {
        Self::Error(e)
    }
}

impl From<EvalResult<Self>> for Value {
    fn from(result: EvalResult<Self>) -> Self {
        result.unwrap_or_else(Self::Error)
    }
}

impl Value {
    /// Creates an error value from a kind and message.
    #[must_use]
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Error(ErrorValue::new(kind, message))
    }

    /// Returns the number, or propagates the carried error unchanged.
    ///
    /// # Example
    /// ```
    /// use squiggle_scalar::{error::ErrorValue, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::Number(2.5).as_number(), Ok(2.5));
    ///
    /// let err = ErrorValue::domain("log of negative number");
    /// assert_eq!(Value::Error(err.clone()).as_number(), Err(err));
    /// ```
    pub fn as_number(&self) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Error(e) => Err(e.clone()),
        }
    }

    /// Converts the value into a `Result`, moving the error out.
    pub fn into_result(self) -> EvalResult<Self> {
        match self {
            Self::Error(e) => Err(e),
            v @ Self::Number(_) => Ok(v),
        }
    }

    /// Whether this value is an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// The error kind, if this value is an error.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Error(e) => Some(e.kind()),
            Self::Number(_) => None,
        }
    }

    /// The number, if this value is a number.
    #[must_use]
    pub const fn number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Error(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) if n.is_nan() => write!(f, "NaN"),
            Self::Number(n) if n.is_infinite() => {
                write!(f, "{}Infinity", if *n < 0.0 { "-" } else { "" })
            },
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(e) => write!(f, "{e}"),
        }
    }
}
