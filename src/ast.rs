/// A location in the source text.
///
/// Lines and columns are both 1-indexed. The column counts characters since the
/// last newline, so multi-byte characters advance it by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The character column within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// The root of every parsed program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level block.
    pub block:    Block,
    /// Position of the opening brace.
    pub position: Position,
}

/// A braced block: declarations first, then statements.
///
/// Either list may be absent. An absent list is `None`, never an empty node.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The declarations at the start of the block.
    pub decls:    Option<Box<Decls>>,
    /// The statements following the declarations.
    pub stmts:    Option<Box<Stmts>>,
    /// Position of the opening brace.
    pub position: Position,
}

/// A right-recursive, non-empty list of declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Decls {
    /// The first declaration of the list.
    pub decl:     Decl,
    /// The remaining declarations.
    pub next:     Option<Box<Self>>,
    /// Position of the first declaration.
    pub position: Position,
}

impl Decls {
    /// Iterates over the declarations in source order.
    ///
    /// ## Example
    /// ```
    /// let program = dragon::parse("{ int a; boolean b; }").unwrap();
    /// let decls = program.block.decls.as_deref().unwrap();
    /// let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
    ///
    /// assert_eq!(names, ["a", "b"]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Decl> {
        std::iter::successors(Some(self), |decls| decls.next.as_deref()).map(|decls| &decls.decl)
    }
}

/// A single variable declaration, `type name;`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decl {
    /// The declared type.
    pub ty:       Type,
    /// The declared variable name.
    pub name:     String,
    /// Position of the type keyword.
    pub position: Position,
}

/// A basic type, carrying its resolved name (`"integer"` or `"boolean"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicType {
    /// The type name.
    pub name:     String,
    /// Position of the type keyword.
    pub position: Position,
}

/// The declared type of a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// A scalar of the given basic type.
    Basic(BasicType),
    /// A fixed-size, one-dimensional array.
    Array {
        /// Type of every element.
        element:  BasicType,
        /// The declared number of elements.
        size:     i64,
        /// Position of the opening bracket.
        position: Position,
    },
}

/// A storage location: a scalar variable or one element of an array.
///
/// Used both as an assignment target and as an expression factor.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    /// A plain variable reference.
    Id {
        /// Name of the variable.
        name:     String,
        /// Position of the identifier.
        position: Position,
    },
    /// An indexed array element, `name[index]`.
    ArrayAccess {
        /// Name of the array variable.
        name:     String,
        /// The index expression.
        index:    Box<Expr>,
        /// Position of the identifier.
        position: Position,
    },
}

impl Location {
    /// The source position of the location.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Id { position, .. } | Self::ArrayAccess { position, .. } => *position,
        }
    }
}

/// A right-recursive, non-empty list of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmts {
    /// The first statement of the list.
    pub stmt:     Statement,
    /// The remaining statements.
    pub next:     Option<Box<Self>>,
    /// Position of the first statement.
    pub position: Position,
}

impl Stmts {
    /// Iterates over the statements in source order.
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        std::iter::successors(Some(self), |stmts| stmts.next.as_deref()).map(|stmts| &stmts.stmt)
    }
}

/// An executable statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `loc = expr;`
    Assign {
        /// The assignment target.
        location: Location,
        /// The assigned expression.
        value:    Expr,
        /// Position of the target.
        position: Position,
    },
    /// `if (cond) stmt`
    If {
        /// The condition, which must evaluate to a boolean.
        condition: Expr,
        /// Executed when the condition holds.
        then_stmt: Box<Self>,
        /// Position of the `if` keyword.
        position:  Position,
    },
    /// `if (cond) stmt else stmt`
    IfElse {
        /// The condition, which must evaluate to a boolean.
        condition: Expr,
        /// Executed when the condition holds.
        then_stmt: Box<Self>,
        /// Executed otherwise.
        else_stmt: Box<Self>,
        /// Position of the `if` keyword.
        position:  Position,
    },
    /// `while (cond) stmt`
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Box<Self>,
        /// Position of the `while` keyword.
        position:  Position,
    },
    /// `do stmt while (cond);`
    DoWhile {
        /// The loop body, executed at least once.
        body:      Box<Self>,
        /// The loop condition.
        condition: Expr,
        /// Position of the `do` keyword.
        position:  Position,
    },
    /// `print(expr);`
    Print {
        /// The printed expression.
        value:    Expr,
        /// Position of the `print` keyword.
        position: Position,
    },
    /// `break;`
    Break {
        /// Position of the `break` keyword.
        position: Position,
    },
    /// A nested block.
    Block(Block),
}

impl Statement {
    /// The source position of the statement.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Assign { position, .. }
            | Self::If { position, .. }
            | Self::IfElse { position, .. }
            | Self::While { position, .. }
            | Self::DoWhile { position, .. }
            | Self::Print { position, .. }
            | Self::Break { position } => *position,
            Self::Block(block) => block.position,
        }
    }
}

/// The four ordering comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelationalOperator {
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// A primary operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    /// An integer literal.
    Int(i64),
    /// A boolean literal.
    Bool(bool),
    /// A variable or array element.
    Location(Location),
}

/// An expression node.
///
/// Every binary variant keeps both operands; evaluation always visits both,
/// including for `||` and `&&`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Logical or (`||`).
    Or {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// Logical and (`&&`).
    And {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// Equality (`==`) or inequality (`!=`).
    Equality {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// `true` for `==`, `false` for `!=`.
        is_equal: bool,
        /// Position of the operator.
        position: Position,
    },
    /// An ordering comparison.
    Relational {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// The comparison.
        op:       RelationalOperator,
        /// Position of the operator.
        position: Position,
    },
    /// Addition (`+`) or subtraction (`-`).
    Add {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// `true` for `+`, `false` for `-`.
        is_add:   bool,
        /// Position of the operator.
        position: Position,
    },
    /// Multiplication (`*`) or division (`/`).
    Mul {
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
        /// `true` for `*`, `false` for `/`.
        is_mul:   bool,
        /// Position of the operator.
        position: Position,
    },
    /// A prefix operator applied to an operand.
    Unary {
        /// The operator.
        op:       UnaryOperator,
        /// The operand.
        operand:  Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A literal or a location.
    Factor {
        /// The operand.
        factor:   Factor,
        /// Position of the literal or identifier.
        position: Position,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use dragon::ast::{Expr, Factor, Position};
    ///
    /// let expr = Expr::Factor { factor:   Factor::Int(7),
    ///                           position: Position::new(3, 5), };
    ///
    /// assert_eq!(expr.position(), Position::new(3, 5));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Or { position, .. }
            | Self::And { position, .. }
            | Self::Equality { position, .. }
            | Self::Relational { position, .. }
            | Self::Add { position, .. }
            | Self::Mul { position, .. }
            | Self::Unary { position, .. }
            | Self::Factor { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RelationalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}
