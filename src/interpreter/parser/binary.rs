use crate::{
    ast::{Expr, RelationalOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses logical-or expressions.
    ///
    /// This is the entry point for expression parsing. It begins at the lowest
    /// precedence level and descends through the hierarchy. Every operator
    /// folded into the tree, at any level, counts toward
    /// [`MAX_NESTING`](crate::interpreter::parser::core::MAX_NESTING) while the
    /// expression is being parsed.
    ///
    /// The rule is: `bool := join ("||" join)*`
    pub fn parse_bool(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_join()?;
        let mut folded = 0;

        while self.check(&Token::Or) {
            let position = self.position();
            self.nest()?;
            folded += 1;
            self.advance();
            let right = self.parse_join()?;
            left = Expr::Or { left: Box::new(left),
                              right: Box::new(right),
                              position };
        }

        self.unnest(folded);
        Ok(left)
    }

    /// Parses logical-and expressions.
    ///
    /// The rule is: `join := equality ("&&" equality)*`
    pub fn parse_join(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;
        let mut folded = 0;

        while self.check(&Token::And) {
            let position = self.position();
            self.nest()?;
            folded += 1;
            self.advance();
            let right = self.parse_equality()?;
            left = Expr::And { left: Box::new(left),
                               right: Box::new(right),
                               position };
        }

        self.unnest(folded);
        Ok(left)
    }

    /// Parses equality and inequality comparisons.
    ///
    /// The rule is: `equality := rel (("==" | "!=") rel)*`
    pub fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_rel()?;
        let mut folded = 0;

        loop {
            let is_equal = match self.current() {
                Token::Eq => true,
                Token::NotEq => false,
                _ => break,
            };
            let position = self.position();
            self.nest()?;
            folded += 1;
            self.advance();
            let right = self.parse_rel()?;
            left = Expr::Equality { left: Box::new(left),
                                    right: Box::new(right),
                                    is_equal,
                                    position };
        }

        self.unnest(folded);
        Ok(left)
    }

    /// Parses an ordering comparison.
    ///
    /// Unlike the other layers this one takes at most one operator, so
    /// `a < b < c` leaves the second `<` unconsumed and fails in the caller.
    ///
    /// The rule is: `rel := expr (("<" | "<=" | ">" | ">=") expr)?`
    pub fn parse_rel(&mut self) -> ParseResult<Expr> {
        let left = self.parse_expr()?;

        let Some(op) = token_to_relational_operator(self.current()) else {
            return Ok(left);
        };
        let position = self.position();
        self.nest()?;
        self.advance();
        let right = self.parse_expr()?;
        self.unnest(1);

        Ok(Expr::Relational { left: Box::new(left),
                              right: Box::new(right),
                              op,
                              position })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `expr := term (("+" | "-") term)*`
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        let mut folded = 0;

        loop {
            let is_add = match self.current() {
                Token::Plus => true,
                Token::Minus => false,
                _ => break,
            };
            let position = self.position();
            self.nest()?;
            folded += 1;
            self.advance();
            let right = self.parse_term()?;
            left = Expr::Add { left: Box::new(left),
                               right: Box::new(right),
                               is_add,
                               position };
        }

        self.unnest(folded);
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `term := unary (("*" | "/") unary)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        let mut folded = 0;

        loop {
            let is_mul = match self.current() {
                Token::Star => true,
                Token::Slash => false,
                _ => break,
            };
            let position = self.position();
            self.nest()?;
            folded += 1;
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::Mul { left: Box::new(left),
                               right: Box::new(right),
                               is_mul,
                               position };
        }

        self.unnest(folded);
        Ok(left)
    }
}

/// Maps a token to its corresponding relational operator.
///
/// # Returns
/// `Some(RelationalOperator)` for `<`, `<=`, `>` and `>=`, otherwise `None`.
///
/// # Example
/// ```
/// use dragon::{
///     ast::RelationalOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_relational_operator},
/// };
///
/// assert_eq!(token_to_relational_operator(&Token::LessEq),
///            Some(RelationalOperator::LessEqual));
/// assert_eq!(token_to_relational_operator(&Token::Eq), None);
/// ```
#[must_use]
pub const fn token_to_relational_operator(token: &Token) -> Option<RelationalOperator> {
    match token {
        Token::Less => Some(RelationalOperator::Less),
        Token::LessEq => Some(RelationalOperator::LessEqual),
        Token::Greater => Some(RelationalOperator::Greater),
        Token::GreaterEq => Some(RelationalOperator::GreaterEqual),
        _ => None,
    }
}
