use crate::{
    ast::{BasicType, Block, Decl, Decls, Type},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// A block consists of zero or more declarations followed by zero or more
    /// statements. Declarations may not appear after the first statement.
    ///
    /// Grammar: `block := "{" decls stmts "}"`
    ///
    /// # Returns
    /// A `Block` whose lists are `None` when empty.
    pub fn parse_block(&mut self) -> ParseResult<Block> {
        let position = self.expect(&Token::LBrace)?;
        let decls = self.parse_decls()?;
        let stmts = self.parse_stmts()?;
        self.expect(&Token::RBrace)?;

        Ok(Block { decls,
                   stmts,
                   position })
    }

    /// Parses the declaration list at the head of a block.
    ///
    /// The list continues while the current token starts a type. The
    /// right-recursive list is assembled after the loop, so long declaration
    /// lists do not deepen the call stack.
    ///
    /// Grammar: `decls := decl decls | ε`
    pub fn parse_decls(&mut self) -> ParseResult<Option<Box<Decls>>> {
        let mut decls = Vec::new();

        while matches!(self.current(), Token::Int | Token::Boolean) {
            decls.push(self.parse_decl()?);
        }

        Ok(decls.into_iter().rev().fold(None, |next, decl| {
                                      Some(Box::new(Decls { position: decl.position,
                                                            decl,
                                                            next }))
                                  }))
    }

    /// Parses a single declaration.
    ///
    /// The array size may follow either the basic type (`int[3] a;`) or the
    /// name (`int a[3];`), but not both.
    ///
    /// Grammar: `decl := type ID ("[" NUM "]")? ";"`
    pub fn parse_decl(&mut self) -> ParseResult<Decl> {
        let position = self.position();
        let ty = self.parse_type()?;
        let (name, _) = self.expect_identifier()?;

        let ty = match ty {
            Type::Basic(element) if self.check(&Token::LBracket) => {
                self.parse_array_suffix(element)?
            },
            ty => ty,
        };
        self.expect(&Token::Semicolon)?;

        Ok(Decl { ty, name, position })
    }

    /// Parses a basic type with an optional array size suffix.
    ///
    /// Only one suffix is accepted; there are no multi-dimensional arrays.
    ///
    /// Grammar: `type := basic ("[" NUM "]")?`
    pub fn parse_type(&mut self) -> ParseResult<Type> {
        let element = self.parse_basic()?;

        if self.check(&Token::LBracket) {
            return self.parse_array_suffix(element);
        }

        Ok(Type::Basic(element))
    }

    /// Parses `"[" NUM "]"` into an array of `element`.
    fn parse_array_suffix(&mut self, element: BasicType) -> ParseResult<Type> {
        let position = self.expect(&Token::LBracket)?;
        let size = self.expect_number()?;
        self.expect(&Token::RBracket)?;

        Ok(Type::Array { element,
                         size,
                         position })
    }

    /// Parses a basic type keyword and resolves it to its type name.
    ///
    /// Grammar: `basic := "int" | "boolean"`
    pub fn parse_basic(&mut self) -> ParseResult<BasicType> {
        let position = self.position();
        let name = match self.current() {
            Token::Int => "integer",
            Token::Boolean => "boolean",
            _ => return Err(self.unexpected("'int' or 'boolean'")),
        };
        self.advance();

        Ok(BasicType { name: name.to_string(),
                       position })
    }
}
