use std::io::Write;

use crate::{
    ast::{Expr, Factor, Position, Program},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{eval_add, eval_and, eval_equality, eval_mul, eval_or, eval_relational},
            unary::eval_unary,
        },
        value::{core::Value, variable::SymbolTable},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// `Break` travels up through statement lists and blocks until a `while` or
/// `do`-`while` consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Execution continues with the next statement.
    Normal,
    /// A `break` at the given position is unwinding to the nearest loop.
    Break(Position),
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the symbol table shared by every
/// block of the program and the sink that receives `print` output.
///
/// ## Usage
///
/// `Context` is created once per run. [`Context::interpret`] executes a parsed
/// program; the lower-level `execute_*` and [`Context::evaluate_expr`] methods
/// are public so single statements and expressions can be run against the
/// same state.
///
/// ## Example
/// ```
/// use dragon::interpreter::evaluator::core::Context;
///
/// let program = dragon::parse("{ int x; x = 6 * 7; print(x); }").unwrap();
/// let mut context = Context::new(Vec::new());
/// context.interpret(&program).unwrap();
///
/// assert_eq!(context.into_output(), b"42\n");
/// ```
pub struct Context<W: Write> {
    pub(in crate::interpreter::evaluator) symbols: SymbolTable,
    pub(in crate::interpreter::evaluator) out:     W,
}

impl<W: Write> Context<W> {
    /// Creates a context with an empty symbol table that prints to `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { symbols: SymbolTable::new(),
               out }
    }

    /// Executes a whole program.
    ///
    /// Runs the top-level block. A `break` that no loop consumed is an error.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised, or `BreakOutsideLoop`.
    pub fn interpret(&mut self, program: &Program) -> EvalResult<()> {
        match self.execute_block(&program.block)? {
            Flow::Normal => Ok(()),
            Flow::Break(position) => Err(RuntimeError::BreakOutsideLoop { position }),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Both operands
    /// of every binary operator are evaluated, left first, before the
    /// operator is applied; there is no short-circuiting.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The typed result of the expression.
    pub fn evaluate_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Or { left,
                       right,
                       position, } => {
                let (left, right) = self.evaluate_operands(left, right)?;
                eval_or(left, right, *position)
            },
            Expr::And { left,
                        right,
                        position, } => {
                let (left, right) = self.evaluate_operands(left, right)?;
                eval_and(left, right, *position)
            },
            Expr::Equality { left,
                             right,
                             is_equal,
                             position, } => {
                let (left, right) = self.evaluate_operands(left, right)?;
                eval_equality(*is_equal, left, right, *position)
            },
            Expr::Relational { left, right, op, .. } => {
                let (left, right) = self.evaluate_operands(left, right)?;
                Ok(eval_relational(*op, left, right))
            },
            Expr::Add { left,
                        right,
                        is_add,
                        position, } => {
                let (left, right) = self.evaluate_operands(left, right)?;
                eval_add(*is_add, left, right, *position)
            },
            Expr::Mul { left,
                        right,
                        is_mul,
                        position, } => {
                let (left, right) = self.evaluate_operands(left, right)?;
                eval_mul(*is_mul, left, right, *position)
            },
            Expr::Unary { op,
                          operand,
                          position, } => {
                let value = self.evaluate_expr(operand)?;
                eval_unary(*op, value, *position)
            },
            Expr::Factor { factor, .. } => match factor {
                Factor::Int(n) => Ok(Value::Integer(*n)),
                Factor::Bool(b) => Ok(Value::Bool(*b)),
                Factor::Location(location) => self.read_location(location),
            },
        }
    }

    /// The symbol table holding every declared variable.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consumes the context and returns the output sink.
    #[must_use]
    pub fn into_output(self) -> W {
        self.out
    }

    fn evaluate_operands(&mut self, left: &Expr, right: &Expr) -> EvalResult<(Value, Value)> {
        let left = self.evaluate_expr(left)?;
        let right = self.evaluate_expr(right)?;

        Ok((left, right))
    }
}
