use crate::{
    ast::Position,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// Integers and booleans never convert into each other implicitly: binary
/// operators require both operands to carry the same tag, except for the
/// relational operators, which compare [`Value::raw`] representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparisons and logical operators. Conditions of `if`,
    /// `while` and `do`-`while` must evaluate to `Bool`.
    Bool(bool),
}

/// The type tag of a [`Value`] and the element type of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// Declared with `int`.
    Integer,
    /// Declared with `boolean`.
    Bool,
}

impl Value {
    /// Returns the type tag of the value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Integer(_) => ValueType::Integer,
            Self::Bool(_) => ValueType::Bool,
        }
    }

    /// Returns the raw integer representation of the value.
    ///
    /// Integers map to themselves, `false` to `0` and `true` to `1`.
    ///
    /// # Example
    /// ```
    /// use dragon::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(-4).raw(), -4);
    /// assert_eq!(Value::Bool(true).raw(), 1);
    /// assert_eq!(Value::Bool(false).raw(), 0);
    /// ```
    #[must_use]
    pub const fn raw(&self) -> i64 {
        match self {
            Self::Integer(n) => *n,
            Self::Bool(b) => *b as i64,
        }
    }

    /// Converts the value to `i64`, or returns an error if not an integer.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(RuntimeError::TypeMismatch)`: If the value is a boolean.
    pub fn as_integer(&self, position: Position) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Bool(_) => Err(self.expected(ValueType::Integer, position)),
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for conditions and logical operators.
    ///
    /// # Parameters
    /// - `position`: Source position for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::TypeMismatch)`: If the value is an integer.
    pub fn as_bool(&self, position: Position) -> EvalResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Integer(_) => Err(self.expected(ValueType::Bool, position)),
        }
    }

    fn expected(&self, expected: ValueType, position: Position) -> RuntimeError {
        RuntimeError::TypeMismatch { details: format!("expected {expected}, found {} {self}",
                                                      self.value_type()),
                                     position }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Bool => write!(f, "boolean"),
        }
    }
}
