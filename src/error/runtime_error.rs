use crate::{ast::Position, error::ErrorKind};

#[derive(Debug)]
/// Represents all errors that can occur during execution.
pub enum RuntimeError {
    /// A declaration named a basic type other than `integer` or `boolean`.
    UnknownType {
        /// The unknown type name.
        name:     String,
        /// The source position of the type.
        position: Position,
    },
    /// An array declared with a size that cannot be allocated as `usize`.
    InvalidArraySize {
        /// The name of the array.
        name:     String,
        /// The declared size.
        size:     i64,
        /// The source position of the array type.
        position: Position,
    },
    /// Operand or assignment types do not agree.
    TypeMismatch {
        /// Details about the mismatch.
        details:  String,
        /// The source position where the mismatch was detected.
        position: Position,
    },
    /// Tried to use a variable that was never declared.
    UndeclaredVariable {
        /// The name of the variable.
        name:     String,
        /// The source position of the reference.
        position: Position,
    },
    /// Read a scalar variable before assigning it.
    UninitializedVariable {
        /// The name of the variable.
        name:     String,
        /// The source position of the read.
        position: Position,
    },
    /// Read an array element before assigning it.
    UninitializedElement {
        /// The name of the array.
        name:     String,
        /// The element index.
        index:    usize,
        /// The source position of the read.
        position: Position,
    },
    /// Indexed an array outside `0..size`.
    IndexOutOfBounds {
        /// The name of the array.
        name:     String,
        /// The index that was requested.
        index:    i64,
        /// The declared size of the array.
        size:     usize,
        /// The source position of the access.
        position: Position,
    },
    /// The right operand of `/` was `0` or `false`.
    DivisionByZero {
        /// The source position of the operator.
        position: Position,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source position of the operator.
        position: Position,
    },
    /// A `break` escaped every enclosing loop.
    BreakOutsideLoop {
        /// The source position of the outermost block.
        position: Position,
    },
    /// Writing program output failed.
    Output {
        /// The underlying I/O failure.
        details:  String,
        /// The source position of the `print` statement.
        position: Position,
    },
}

impl RuntimeError {
    /// The category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownType { .. } | Self::InvalidArraySize { .. } => ErrorKind::Declaration,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::UndeclaredVariable { .. } => ErrorKind::UndeclaredVariable,
            Self::UninitializedVariable { .. } | Self::UninitializedElement { .. } => {
                ErrorKind::UninitializedAccess
            },
            Self::IndexOutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::BreakOutsideLoop { .. } => ErrorKind::BreakOutsideLoop,
            Self::Output { .. } => ErrorKind::Output,
        }
    }

    /// The source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownType { position, .. }
            | Self::InvalidArraySize { position, .. }
            | Self::TypeMismatch { position, .. }
            | Self::UndeclaredVariable { position, .. }
            | Self::UninitializedVariable { position, .. }
            | Self::UninitializedElement { position, .. }
            | Self::IndexOutOfBounds { position, .. }
            | Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::BreakOutsideLoop { position }
            | Self::Output { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownType { name, position } => {
                write!(f, "Error on {position}: Unknown basic type '{name}'.")
            },
            Self::InvalidArraySize { name,
                                     size,
                                     position, } => write!(f,
                                                           "Error on {position}: Array '{name}' cannot have size {size}."),
            Self::TypeMismatch { details, position } => {
                write!(f, "Error on {position}: Type mismatch: {details}.")
            },
            Self::UndeclaredVariable { name, position } => {
                write!(f, "Error on {position}: Variable '{name}' is not declared.")
            },
            Self::UninitializedVariable { name, position } => {
                write!(f, "Error on {position}: Variable '{name}' is not initialized yet.")
            },
            Self::UninitializedElement { name,
                                         index,
                                         position, } => write!(f,
                                                               "Error on {position}: Array '{name}' has no value at index {index} yet."),
            Self::IndexOutOfBounds { name,
                                     index,
                                     size,
                                     position, } => write!(f,
                                                           "Error on {position}: Index {index} is out of bounds for array '{name}' of size {size}."),
            Self::DivisionByZero { position } => write!(f, "Error on {position}: Division by zero."),
            Self::Overflow { position } => write!(f,
                                                  "Error on {position}: Integer overflow while trying to compute result."),
            Self::BreakOutsideLoop { position } => {
                write!(f, "Error on {position}: 'break' used outside of a loop.")
            },
            Self::Output { details, position } => {
                write!(f, "Error on {position}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
