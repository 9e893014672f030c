/// Core parser state and token handling.
///
/// Defines the [`core::Parser`] itself, the entry point that parses a whole
/// program, and the helpers every grammar rule uses to match tokens.
pub mod core;

/// Block and declaration parsing.
///
/// Parses braced blocks, the declaration list at their head, and the basic and
/// array types of each declaration.
pub mod block;

/// Statement parsing.
///
/// Parses statement lists, every statement form, and the locations used as
/// assignment targets and expression operands.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the precedence layers from logical or down to multiplication,
/// each folding its operands to the left.
pub mod binary;

/// Unary operator and factor parsing.
///
/// Handles prefix `!` and `-` as well as literals, locations and parenthesized
/// expressions.
pub mod unary;
