use crate::{
    ast::{Position, Program},
    error::ParseError,
    interpreter::lexer::{LexErrorKind, LexicalError, Scanner, Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply statements and expressions may nest.
///
/// Each nested statement, parenthesis, prefix operator and binary operator
/// counts one level. The limit keeps parsing, evaluation and dropping of the
/// tree within the stack.
pub const MAX_NESTING: usize = 128;

/// A recursive-descent parser with one token of lookahead.
///
/// The parser pulls tokens from a [`Scanner`] on demand and never backtracks.
/// Each grammar rule is a method that consumes exactly the tokens it covers and
/// returns the corresponding AST node. The first mismatch aborts parsing.
///
/// ## Example
/// ```
/// use dragon::interpreter::parser::core::Parser;
///
/// let program = Parser::new("{ int x; x = 1; }").parse().unwrap();
/// assert!(program.block.decls.is_some());
/// assert!(program.block.stmts.is_some());
///
/// let err = Parser::new("{ int x x; }").parse().unwrap_err();
/// assert_eq!(err.position().column, 9);
/// ```
pub struct Parser<'src> {
    scanner:  Scanner<'src>,
    current:  Token,
    position: Position,
    depth:    usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source` and loads the first token.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token();
        let position = scanner.position();

        Self { scanner,
               current,
               position,
               depth: 0 }
    }

    /// Parses a complete program.
    ///
    /// Grammar: `program := block`, followed by the end of input.
    ///
    /// # Errors
    /// Returns the first `ParseError` encountered, or
    /// `UnexpectedTrailingTokens` if anything follows the program block.
    pub fn parse(&mut self) -> ParseResult<Program> {
        let program = self.parse_program()?;

        match &self.current {
            Token::End => Ok(program),
            Token::Error(_) => Err(self.unexpected("end of input")),
            found => Err(ParseError::UnexpectedTrailingTokens { found:    found.clone(),
                                                                position: self.position, }),
        }
    }

    /// Parses the program root.
    ///
    /// Grammar: `program := block`
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let position = self.position;
        let block = self.parse_block()?;

        Ok(Program { block, position })
    }

    /// The token currently under consideration.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// The position of the current token.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Moves to the next token and returns the one that was current.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        let next = self.scanner.next_token();
        self.position = self.scanner.position();

        std::mem::replace(&mut self.current, next)
    }

    /// Returns whether the current token equals `token`.
    pub(in crate::interpreter::parser) fn check(&self, token: &Token) -> bool {
        self.current == *token
    }

    /// Consumes the current token if it equals `expected`.
    ///
    /// # Returns
    /// The position of the consumed token.
    ///
    /// # Errors
    /// Returns an `UnexpectedToken` error naming `expected` otherwise.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 expected: &Token)
                                                 -> ParseResult<Position> {
        if self.check(expected) {
            let position = self.position;
            self.advance();
            return Ok(position);
        }

        Err(self.unexpected(&expected.to_string()))
    }

    /// Consumes an identifier and returns its name and position.
    pub(in crate::interpreter::parser) fn expect_identifier(&mut self)
                                                            -> ParseResult<(String, Position)> {
        let position = self.position;

        if let Token::Id(name) = &self.current {
            let name = name.clone();
            self.advance();
            return Ok((name, position));
        }

        Err(self.unexpected("an identifier"))
    }

    /// Consumes an integer literal and returns its value.
    pub(in crate::interpreter::parser) fn expect_number(&mut self) -> ParseResult<i64> {
        match self.current {
            Token::Num(value) => {
                self.advance();
                Ok(value)
            },
            _ => Err(self.unexpected("a number")),
        }
    }

    /// Enters one more level of nesting.
    ///
    /// # Errors
    /// Returns `NestingTooDeep` once [`MAX_NESTING`] levels are open.
    pub(in crate::interpreter::parser) fn nest(&mut self) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(ParseError::NestingTooDeep { limit:    MAX_NESTING,
                                                    position: self.position, });
        }

        self.depth += 1;
        Ok(())
    }

    /// Leaves `levels` levels of nesting entered with [`Parser::nest`].
    pub(in crate::interpreter::parser) const fn unnest(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Builds the error for a current token that does not match `expected`.
    ///
    /// Scanner errors reaching the parser are reported as lexical errors
    /// rather than as a plain token mismatch.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: &str) -> ParseError {
        let position = self.position;

        match &self.current {
            Token::Error(LexicalError { kind: LexErrorKind::UnrecognizedCharacter,
                                        text, }) => {
                ParseError::UnrecognizedCharacter { text: text.clone(),
                                                    position }
            },
            Token::Error(LexicalError { kind: LexErrorKind::LiteralTooLarge,
                                        text, }) => ParseError::LiteralTooLarge { text: text.clone(),
                                                                                  position },
            found => ParseError::UnexpectedToken { expected: expected.to_string(),
                                                   found: found.clone(),
                                                   position },
        }
    }
}
