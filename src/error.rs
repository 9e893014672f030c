/// Parsing errors.
///
/// Defines all error types that can occur while scanning and parsing source
/// code. Parse errors include grammar mismatches, unrecognized characters and
/// integer literals that do not fit the value model.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program:
/// type mismatches, reads of unassigned variables, out-of-bounds indices,
/// division by zero and similar failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The category of a fatal error.
///
/// Every error the interpreter reports falls into exactly one of these kinds,
/// which lets callers react to a failure without matching on message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input the scanner could not turn into a valid token.
    Lexical,
    /// A token that does not fit the grammar at that point.
    Syntax,
    /// A declaration with an unknown type name.
    Declaration,
    /// Operand or assignment types that disagree.
    TypeMismatch,
    /// A reference to a name that was never declared.
    UndeclaredVariable,
    /// A read of a variable or array element that was never assigned.
    UninitializedAccess,
    /// An array index outside the declared bounds.
    OutOfBounds,
    /// Division by zero (or by `false`).
    DivisionByZero,
    /// Integer arithmetic that does not fit in 64 bits.
    Overflow,
    /// A `break` executed outside of any loop.
    BreakOutsideLoop,
    /// Program output could not be written.
    Output,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Lexical => "lexical error",
            Self::Syntax => "syntax error",
            Self::Declaration => "declaration error",
            Self::TypeMismatch => "type mismatch",
            Self::UndeclaredVariable => "undeclared variable",
            Self::UninitializedAccess => "uninitialized access",
            Self::OutOfBounds => "index out of bounds",
            Self::DivisionByZero => "division by zero",
            Self::Overflow => "integer overflow",
            Self::BreakOutsideLoop => "break outside loop",
            Self::Output => "output error",
        };
        write!(f, "{name}")
    }
}

/// Any error that aborts a run, whichever phase raised it.
#[derive(Debug)]
pub enum Error {
    /// Scanning or parsing failed; nothing was executed.
    Parse(ParseError),
    /// Execution failed; output printed before the failure remains.
    Runtime(RuntimeError),
}

impl Error {
    /// The category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
