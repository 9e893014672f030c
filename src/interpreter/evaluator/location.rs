use std::io::Write;

use crate::{
    ast::{Expr, Location, Position},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            core::Value,
            variable::{Storage, Variable},
        },
    },
    util::num::i64_to_usize_checked,
};

impl<W: Write> Context<W> {
    /// Reads the value stored at a location.
    ///
    /// For array elements the index is evaluated after the variable is found
    /// and must be an integer. Reads are bounds-checked just like writes.
    ///
    /// # Errors
    /// - `UndeclaredVariable` if the name was never declared.
    /// - `TypeMismatch` if a scalar is indexed or an array is read whole.
    /// - `IndexOutOfBounds` if the index is outside the array.
    /// - `UninitializedVariable`/`UninitializedElement` if the slot was never
    ///   assigned.
    pub fn read_location(&mut self, location: &Location) -> EvalResult<Value> {
        match location {
            Location::Id { name, position } => {
                let variable = self.lookup(name, *position)?;

                match &variable.storage {
                    Storage::Scalar(Some(value)) => Ok(*value),
                    Storage::Scalar(None) => {
                        Err(RuntimeError::UninitializedVariable { name:     name.clone(),
                                                                  position: *position, })
                    },
                    Storage::Array(_) => Err(RuntimeError::TypeMismatch {
                        details: format!("array '{name}' cannot be used without an index"),
                        position: *position,
                    }),
                }
            },
            Location::ArrayAccess { name,
                                    index,
                                    position, } => {
                self.lookup(name, *position)?;
                let index = self.evaluate_expr(index)?;
                let variable = self.lookup(name, *position)?;
                let slots = array_slots(name, variable, *position)?;
                let index = resolve_index(name, index, slots.len(), *position)?;

                slots[index].ok_or_else(|| RuntimeError::UninitializedElement { name:     name.clone(),
                                                                               index,
                                                                               position: *position, })
            },
        }
    }

    /// Evaluates `value` and stores it at `location`, marking the slot as
    /// initialized.
    ///
    /// For array elements the index is evaluated before the value.
    ///
    /// # Errors
    /// - `UndeclaredVariable` if the name was never declared.
    /// - `TypeMismatch` if the value's type differs from the declared type, a
    ///   scalar is indexed, or an array is assigned whole.
    /// - `IndexOutOfBounds` if the index is outside `0..size`.
    pub fn assign_location(&mut self, location: &Location, value: &Expr) -> EvalResult<()> {
        match location {
            Location::Id { name, position } => {
                self.lookup(name, *position)?;
                let value = self.evaluate_expr(value)?;
                let variable = self.lookup_mut(name, *position)?;
                check_assignable(name, variable, value, *position)?;

                match &mut variable.storage {
                    Storage::Scalar(slot) => {
                        *slot = Some(value);
                        Ok(())
                    },
                    Storage::Array(_) => Err(RuntimeError::TypeMismatch {
                        details: format!("cannot assign a single value to array '{name}'"),
                        position: *position,
                    }),
                }
            },
            Location::ArrayAccess { name,
                                    index,
                                    position, } => {
                self.lookup(name, *position)?;
                let index = self.evaluate_expr(index)?;
                let value = self.evaluate_expr(value)?;
                let variable = self.lookup_mut(name, *position)?;
                let size = array_slots(name, variable, *position)?.len();
                let index = resolve_index(name, index, size, *position)?;
                check_assignable(name, variable, value, *position)?;

                if let Storage::Array(slots) = &mut variable.storage {
                    slots[index] = Some(value);
                }
                Ok(())
            },
        }
    }

    fn lookup(&self, name: &str, position: Position) -> EvalResult<&Variable> {
        self.symbols
            .get(name)
            .ok_or_else(|| RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                              position })
    }

    fn lookup_mut(&mut self, name: &str, position: Position) -> EvalResult<&mut Variable> {
        self.symbols
            .get_mut(name)
            .ok_or_else(|| RuntimeError::UndeclaredVariable { name: name.to_string(),
                                                              position })
    }
}

/// Returns the element slots of an array variable.
fn array_slots<'v>(name: &str,
                   variable: &'v Variable,
                   position: Position)
                   -> EvalResult<&'v [Option<Value>]> {
    match &variable.storage {
        Storage::Array(slots) => Ok(slots),
        Storage::Scalar(_) => Err(RuntimeError::TypeMismatch {
            details: format!("'{name}' is not an array and cannot be indexed"),
            position,
        }),
    }
}

/// Checks an index value against an array of `size` elements.
fn resolve_index(name: &str, index: Value, size: usize, position: Position) -> EvalResult<usize> {
    let index = index.as_integer(position)?;

    match i64_to_usize_checked(index, ()) {
        Ok(i) if i < size => Ok(i),
        _ => Err(RuntimeError::IndexOutOfBounds { name: name.to_string(),
                                                  index,
                                                  size,
                                                  position }),
    }
}

/// Checks that `value` may be stored in `variable`.
fn check_assignable(name: &str,
                    variable: &Variable,
                    value: Value,
                    position: Position)
                    -> EvalResult<()> {
    if variable.ty == value.value_type() {
        return Ok(());
    }

    Err(RuntimeError::TypeMismatch { details: format!("cannot assign {} {value} to '{name}' of type {}",
                                                      value.value_type(),
                                                      variable.ty),
                                     position })
}
