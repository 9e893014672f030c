use crate::{
    ast::{Expr, Location, Statement, Stmts},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

/// Returns whether `token` can begin a statement.
///
/// ## Example
/// ```
/// use dragon::interpreter::{lexer::Token, parser::statement::starts_statement};
///
/// assert!(starts_statement(&Token::Print));
/// assert!(starts_statement(&Token::LBrace));
/// assert!(!starts_statement(&Token::Int));
/// ```
#[must_use]
pub const fn starts_statement(token: &Token) -> bool {
    matches!(token,
             Token::Id(_)
             | Token::If
             | Token::While
             | Token::Do
             | Token::Break
             | Token::Print
             | Token::LBrace)
}

impl Parser<'_> {
    /// Parses the statement list of a block.
    ///
    /// The list ends at the first token that cannot start a statement, which
    /// is normally the closing brace.
    ///
    /// Grammar: `stmts := stmt stmts | ε`
    pub fn parse_stmts(&mut self) -> ParseResult<Option<Box<Stmts>>> {
        let mut stmts = Vec::new();

        while starts_statement(self.current()) {
            stmts.push(self.parse_stmt()?);
        }

        Ok(stmts.into_iter().rev().fold(None, |next, stmt| {
                                      Some(Box::new(Stmts { position: stmt.position(),
                                                            stmt,
                                                            next }))
                                  }))
    }

    /// Parses a single statement.
    ///
    /// Grammar:
    /// ```text
    /// stmt := loc "=" bool ";"
    ///       | "if" "(" bool ")" stmt ("else" stmt)?
    ///       | "while" "(" bool ")" stmt
    ///       | "do" stmt "while" "(" bool ")" ";"
    ///       | "break" ";"
    ///       | "print" "(" bool ")" ";"
    ///       | block
    /// ```
    /// A dangling `else` binds to the nearest `if`.
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if the current token starts no statement or
    /// any part of the statement is malformed, and `NestingTooDeep` if
    /// statements nest too deeply.
    pub fn parse_stmt(&mut self) -> ParseResult<Statement> {
        self.nest()?;
        let stmt = self.parse_stmt_form()?;
        self.unnest(1);

        Ok(stmt)
    }

    /// Parses the statement starting at the current token.
    fn parse_stmt_form(&mut self) -> ParseResult<Statement> {
        let position = self.position();

        match self.current() {
            Token::Id(_) => {
                let location = self.parse_loc()?;
                self.expect(&Token::Assign)?;
                let value = self.parse_bool()?;
                self.expect(&Token::Semicolon)?;

                Ok(Statement::Assign { location,
                                       value,
                                       position })
            },
            Token::If => {
                self.advance();
                let condition = self.parse_parenthesized()?;
                let then_stmt = Box::new(self.parse_stmt()?);

                if self.check(&Token::Else) {
                    self.advance();
                    let else_stmt = Box::new(self.parse_stmt()?);

                    return Ok(Statement::IfElse { condition,
                                                  then_stmt,
                                                  else_stmt,
                                                  position });
                }

                Ok(Statement::If { condition,
                                   then_stmt,
                                   position })
            },
            Token::While => {
                self.advance();
                let condition = self.parse_parenthesized()?;
                let body = Box::new(self.parse_stmt()?);

                Ok(Statement::While { condition,
                                      body,
                                      position })
            },
            Token::Do => {
                self.advance();
                let body = Box::new(self.parse_stmt()?);
                self.expect(&Token::While)?;
                let condition = self.parse_parenthesized()?;
                self.expect(&Token::Semicolon)?;

                Ok(Statement::DoWhile { body,
                                        condition,
                                        position })
            },
            Token::Break => {
                self.advance();
                self.expect(&Token::Semicolon)?;

                Ok(Statement::Break { position })
            },
            Token::Print => {
                self.advance();
                let value = self.parse_parenthesized()?;
                self.expect(&Token::Semicolon)?;

                Ok(Statement::Print { value, position })
            },
            Token::LBrace => Ok(Statement::Block(self.parse_block()?)),
            _ => Err(self.unexpected("a statement")),
        }
    }

    /// Parses a location: an identifier with an optional index.
    ///
    /// The same rule serves assignment targets and expression operands.
    ///
    /// Grammar: `loc := ID ("[" bool "]")?`
    pub fn parse_loc(&mut self) -> ParseResult<Location> {
        let (name, position) = self.expect_identifier()?;

        if self.check(&Token::LBracket) {
            self.nest()?;
            self.advance();
            let index = Box::new(self.parse_bool()?);
            self.expect(&Token::RBracket)?;
            self.unnest(1);

            return Ok(Location::ArrayAccess { name,
                                              index,
                                              position });
        }

        Ok(Location::Id { name, position })
    }

    /// Parses a parenthesized expression, `"(" bool ")"`.
    fn parse_parenthesized(&mut self) -> ParseResult<Expr> {
        self.expect(&Token::LParen)?;
        let condition = self.parse_bool()?;
        self.expect(&Token::RParen)?;

        Ok(condition)
    }
}
