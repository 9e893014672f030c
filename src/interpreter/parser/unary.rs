use crate::{
    ast::{Expr, Factor, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses prefix operators.
    ///
    /// Operators nest to the right, so `!!x` and `--x` are accepted.
    ///
    /// Grammar: `unary := ("!" | "-") unary | factor`
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.current() {
            Token::Not => UnaryOperator::Not,
            Token::Minus => UnaryOperator::Negate,
            _ => return self.parse_factor(),
        };
        let position = self.position();
        self.nest()?;
        self.advance();
        let operand = self.parse_unary()?;
        self.unnest(1);

        Ok(Expr::Unary { op,
                         operand: Box::new(operand),
                         position })
    }

    /// Parses a primary expression.
    ///
    /// A parenthesized expression yields its inner node directly; there is no
    /// separate grouping node.
    ///
    /// Grammar: `factor := "(" bool ")" | loc | NUM | "true" | "false"`
    ///
    /// # Errors
    /// Returns `UnexpectedToken` if the current token cannot start an
    /// expression.
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        let position = self.position();

        let factor = match self.current() {
            Token::LParen => {
                self.nest()?;
                self.advance();
                let expr = self.parse_bool()?;
                self.expect(&Token::RParen)?;
                self.unnest(1);
                return Ok(expr);
            },
            Token::Id(_) => Factor::Location(self.parse_loc()?),
            Token::Num(value) => {
                let value = *value;
                self.advance();
                Factor::Int(value)
            },
            Token::True => {
                self.advance();
                Factor::Bool(true)
            },
            Token::False => {
                self.advance();
                Factor::Bool(false)
            },
            _ => return Err(self.unexpected("an expression")),
        };

        Ok(Expr::Factor { factor, position })
    }
}
