/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, resolves identifiers against the
/// environment, dispatches calls to the builtin table, and folds results into
/// a `Value`. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Threads variable bindings from each assignment to later statements.
/// - Reports domain, unbound-name and unknown-function failures as values.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators and separators. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric literals, identifiers, operators and comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a `Program` of statements whose expressions the evaluator walks.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates syntax, reporting errors with location info.
/// - Encodes operator precedence and associativity in the tree shape.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: a number or an error.
/// - Converts between values and the evaluator's `Result` type.
pub mod value;
