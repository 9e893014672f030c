/// Core evaluation logic and context management.
///
/// Contains the runtime context, the control-flow signal returned by
/// statement execution, and the expression dispatcher.
pub mod core;

/// Statement execution.
///
/// Runs blocks, declarations, assignments, conditionals, loops and `print`,
/// and consumes `break` at the nearest enclosing loop.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Implements logical, equality, relational, additive and multiplicative
/// operators on evaluated operands.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT and arithmetic negation.
pub mod unary;

/// Variable and array element access.
///
/// Reads and writes locations in the symbol table, including the checks for
/// undeclared names, unassigned slots and out-of-bounds indices.
pub mod location;
