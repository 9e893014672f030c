/// The evaluator module executes the AST.
///
/// The evaluator walks the tree once, declaring variables in the symbol table,
/// executing statements and evaluating expressions into typed values. `print`
/// output is its only side effect.
///
/// # Responsibilities
/// - Executes declarations, assignments, conditionals, loops and `print`.
/// - Evaluates every operator with exact operand-type matching.
/// - Reports runtime errors such as division by zero or uninitialized reads.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces tokens one at a time,
/// each corresponding to a keyword, identifier, literal, operator or
/// punctuation mark, together with its line and column.
///
/// # Responsibilities
/// - Converts the input text into tokens with source positions.
/// - Resolves reserved words and integer literals.
/// - Marks unrecognized input with an error token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one method per grammar rule
/// and one token of lookahead. Operator precedence is encoded by the layering
/// of the expression rules.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting the first error with its position.
pub mod parser;
/// The value module defines the runtime data model.
///
/// This module declares the integer and boolean values produced by
/// expressions, the variables that store them, and the symbol table.
///
/// # Responsibilities
/// - Defines the `Value` enum and its type tags.
/// - Tracks which scalar and array slots have been assigned.
pub mod value;
