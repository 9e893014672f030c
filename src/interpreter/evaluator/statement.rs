use std::io::Write;

use tracing::trace;

use crate::{
    ast::{BasicType, Block, Decl, Decls, Expr, Position, Statement, Stmts, Type},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        value::{core::ValueType, variable::Variable},
    },
    util::num::i64_to_usize_checked,
};

/// Resolves a basic type name to its value type.
///
/// # Errors
/// Returns `UnknownType` for any name other than `integer` or `boolean`.
///
/// # Example
/// ```
/// use dragon::{
///     ast::{BasicType, Position},
///     interpreter::{evaluator::statement::resolve_basic_type, value::core::ValueType},
/// };
///
/// let basic = BasicType { name:     "boolean".to_string(),
///                         position: Position::new(1, 3), };
/// assert_eq!(resolve_basic_type(&basic).unwrap(), ValueType::Bool);
///
/// let unknown = BasicType { name:     "float".to_string(),
///                           position: Position::new(1, 3), };
/// assert!(resolve_basic_type(&unknown).is_err());
/// ```
pub fn resolve_basic_type(basic: &BasicType) -> EvalResult<ValueType> {
    match basic.name.as_str() {
        "integer" => Ok(ValueType::Integer),
        "boolean" => Ok(ValueType::Bool),
        _ => Err(RuntimeError::UnknownType { name:     basic.name.clone(),
                                             position: basic.position, }),
    }
}

impl<W: Write> Context<W> {
    /// Executes a block: every declaration in order, then the statements.
    ///
    /// The block shares the context's single symbol table; its declarations
    /// remain visible after it finishes.
    pub fn execute_block(&mut self, block: &Block) -> EvalResult<Flow> {
        if let Some(decls) = &block.decls {
            self.execute_decls(decls)?;
        }

        match &block.stmts {
            Some(stmts) => self.execute_stmts(stmts),
            None => Ok(Flow::Normal),
        }
    }

    /// Executes a declaration list in source order.
    pub fn execute_decls(&mut self, decls: &Decls) -> EvalResult<()> {
        decls.iter().try_for_each(|decl| self.execute_decl(decl))
    }

    /// Declares a single variable.
    ///
    /// Declaring never checks for an existing variable: a previous binding of
    /// the same name is discarded together with its values.
    ///
    /// # Errors
    /// - `UnknownType` if the basic type name is not recognized.
    /// - `InvalidArraySize` if an array size is negative or its slots cannot
    ///   be allocated. Sizes above
    ///   [`MAX_ARRAY_SIZE`](crate::interpreter::value::variable::MAX_ARRAY_SIZE)
    ///   are refused up front.
    pub fn execute_decl(&mut self, decl: &Decl) -> EvalResult<()> {
        let variable = match &decl.ty {
            Type::Basic(basic) => Variable::scalar(resolve_basic_type(basic)?),
            Type::Array { element,
                          size,
                          position, } => {
                let ty = resolve_basic_type(element)?;
                let invalid = || RuntimeError::InvalidArraySize { name:     decl.name.clone(),
                                                                  size:     *size,
                                                                  position: *position, };
                let length = i64_to_usize_checked(*size, ()).map_err(|()| invalid())?;
                Variable::array(ty, length).ok_or_else(invalid)?
            },
        };

        self.symbols.declare(&decl.name, variable);
        Ok(())
    }

    /// Executes a statement list, stopping early on `break`.
    pub fn execute_stmts(&mut self, stmts: &Stmts) -> EvalResult<Flow> {
        for stmt in stmts.iter() {
            if let Flow::Break(position) = self.execute_stmt(stmt)? {
                return Ok(Flow::Break(position));
            }
        }

        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// # Returns
    /// `Flow::Break` if a `break` was executed and not yet consumed by a loop,
    /// otherwise `Flow::Normal`.
    pub fn execute_stmt(&mut self, stmt: &Statement) -> EvalResult<Flow> {
        match stmt {
            Statement::Assign { location, value, .. } => {
                self.assign_location(location, value)?;
                Ok(Flow::Normal)
            },
            Statement::If { condition,
                            then_stmt,
                            position, } => {
                if self.evaluate_condition(condition, *position)? {
                    return self.execute_stmt(then_stmt);
                }
                Ok(Flow::Normal)
            },
            Statement::IfElse { condition,
                                then_stmt,
                                else_stmt,
                                position, } => {
                if self.evaluate_condition(condition, *position)? {
                    self.execute_stmt(then_stmt)
                } else {
                    self.execute_stmt(else_stmt)
                }
            },
            Statement::While { condition,
                               body,
                               position, } => self.execute_while(condition, body, *position),
            Statement::DoWhile { body,
                                 condition,
                                 position, } => self.execute_do_while(body, condition, *position),
            Statement::Print { value, position } => {
                let value = self.evaluate_expr(value)?;
                writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output { details:
                                                                                  e.to_string(),
                                                                              position: *position, })?;
                Ok(Flow::Normal)
            },
            Statement::Break { position } => Ok(Flow::Break(*position)),
            Statement::Block(block) => self.execute_block(block),
        }
    }

    /// Runs a `while` loop until its condition is false or its body breaks.
    pub fn execute_while(&mut self,
                         condition: &Expr,
                         body: &Statement,
                         position: Position)
                         -> EvalResult<Flow> {
        while self.evaluate_condition(condition, position)? {
            if let Flow::Break(at) = self.execute_stmt(body)? {
                trace!(line = at.line, column = at.column, "while loop left by break");
                break;
            }
        }

        Ok(Flow::Normal)
    }

    /// Runs a `do`-`while` loop: the body once, then again while the
    /// condition holds, unless the body breaks.
    pub fn execute_do_while(&mut self,
                            body: &Statement,
                            condition: &Expr,
                            position: Position)
                            -> EvalResult<Flow> {
        loop {
            if let Flow::Break(at) = self.execute_stmt(body)? {
                trace!(line = at.line, column = at.column, "do-while loop left by break");
                break;
            }
            if !self.evaluate_condition(condition, position)? {
                break;
            }
        }

        Ok(Flow::Normal)
    }

    /// Evaluates a condition, which must produce a boolean.
    fn evaluate_condition(&mut self, condition: &Expr, position: Position) -> EvalResult<bool> {
        let value = self.evaluate_expr(condition)?;

        value.as_bool(position).map_err(|_| RuntimeError::TypeMismatch {
            details: format!("condition must be boolean, found {} {value}", value.value_type()),
            position,
        })
    }
}
