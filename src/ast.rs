/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers the scalar subset of the language: numeric literals,
/// identifiers, function calls, and arithmetic. Each variant carries the
/// source line it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Function call expression (e.g. `log(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use squiggle_scalar::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }

    /// Builds a numeric literal node.
    #[must_use]
    pub const fn number(value: f64, line: usize) -> Self {
        Self::Literal { value, line }
    }

    /// Builds an identifier node.
    #[must_use]
    pub fn identifier(name: impl Into<String>, line: usize) -> Self {
        Self::Identifier { name: name.into(),
                           line }
    }

    /// Builds a binary operation node.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self, line: usize) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right),
                         line }
    }

    /// Builds a function call node.
    #[must_use]
    pub fn call(name: impl Into<String>, arguments: Vec<Self>, line: usize) -> Self {
        Self::FunctionCall { name: name.into(),
                             arguments,
                             line }
    }
}

/// Represents a top-level statement.
///
/// Statements are separated by `;` or newlines in the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable assignment binding a name to an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// An ordered sequence of statements.
///
/// The value of a program is the value of its final statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Wraps a list of statements.
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
