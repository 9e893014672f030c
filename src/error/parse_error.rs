use crate::{ast::Position, error::ErrorKind, interpreter::lexer::Token};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during scanning or parsing.
pub enum ParseError {
    /// Found a token that does not match the grammar at this point.
    UnexpectedToken {
        /// A description of what the grammar expected.
        expected: String,
        /// The token encountered.
        found:    Token,
        /// Where the token starts.
        position: Position,
    },
    /// The scanner found a character that starts no token.
    UnrecognizedCharacter {
        /// The offending source text.
        text:     String,
        /// Where the text starts.
        position: Position,
    },
    /// An integer literal too large to be represented as a 64-bit integer.
    LiteralTooLarge {
        /// The literal as written.
        text:     String,
        /// Where the literal starts.
        position: Position,
    },
    /// Statements or expressions nested beyond the supported depth.
    NestingTooDeep {
        /// The maximum number of nested levels.
        limit:    usize,
        /// Where the level past the limit starts.
        position: Position,
    },
    /// Found extra tokens after the closing brace of the program.
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:    Token,
        /// Where the token starts.
        position: Position,
    },
}

impl ParseError {
    /// The category of the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnexpectedToken { .. }
            | Self::NestingTooDeep { .. }
            | Self::UnexpectedTrailingTokens { .. } => ErrorKind::Syntax,
            Self::UnrecognizedCharacter { .. } | Self::LiteralTooLarge { .. } => {
                ErrorKind::Lexical
            },
        }
    }

    /// The source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnrecognizedCharacter { position, .. }
            | Self::LiteralTooLarge { position, .. }
            | Self::NestingTooDeep { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error on {position}: Unexpected token {found}, expected {expected}."),

            Self::UnrecognizedCharacter { text, position } => {
                write!(f, "Error on {position}: Unrecognized character '{text}'.")
            },

            Self::LiteralTooLarge { text, position } => {
                write!(f, "Error on {position}: Literal {text} is too large.")
            },

            Self::NestingTooDeep { limit, position } => {
                write!(f, "Error on {position}: Nesting exceeds the limit of {limit} levels.")
            },

            Self::UnexpectedTrailingTokens { found, position } => write!(f,
                                                                         "Error on {position}: Extra tokens after the program block, starting with {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
