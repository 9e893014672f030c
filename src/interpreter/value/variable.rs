use std::collections::HashMap;

use tracing::trace;

use crate::interpreter::value::core::{Value, ValueType};

/// The slots of a variable, each `None` until first assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Storage {
    /// A single value.
    Scalar(Option<Value>),
    /// One slot per element; the length is the declared size.
    Array(Vec<Option<Value>>),
}

/// The largest number of elements an array may be declared with.
pub const MAX_ARRAY_SIZE: usize = 1 << 24;

/// A declared, typed storage cell.
///
/// Every value held in [`Variable::storage`] has the type recorded in
/// [`Variable::ty`]; the evaluator checks this on each assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The declared type, or element type for arrays.
    pub ty:      ValueType,
    /// The value slots.
    pub storage: Storage,
}

impl Variable {
    /// Creates an unassigned scalar variable.
    #[must_use]
    pub const fn scalar(ty: ValueType) -> Self {
        Self { ty,
               storage: Storage::Scalar(None) }
    }

    /// Creates an array variable with `size` unassigned slots.
    ///
    /// # Returns
    /// `None` if `size` exceeds [`MAX_ARRAY_SIZE`] or the slots cannot be
    /// allocated.
    #[must_use]
    pub fn array(ty: ValueType, size: usize) -> Option<Self> {
        if size > MAX_ARRAY_SIZE {
            return None;
        }

        let mut slots = Vec::new();
        slots.try_reserve_exact(size).ok()?;
        slots.resize(size, None);

        Some(Self { ty,
                    storage: Storage::Array(slots) })
    }

    /// Returns the declared array size, or `None` for scalars.
    #[must_use]
    pub fn size(&self) -> Option<usize> {
        match &self.storage {
            Storage::Scalar(_) => None,
            Storage::Array(slots) => Some(slots.len()),
        }
    }
}

/// The single store of all variables of a program run.
///
/// Names live in one flat namespace: blocks, loops and branches do not open
/// scopes, and a declaration inside a nested block stays visible after the
/// block ends.
///
/// ## Example
/// ```
/// use dragon::interpreter::value::{
///     core::{Value, ValueType},
///     variable::{Storage, SymbolTable, Variable},
/// };
///
/// let mut symbols = SymbolTable::new();
/// symbols.declare("x", Variable::scalar(ValueType::Integer));
/// symbols.get_mut("x").unwrap().storage = Storage::Scalar(Some(Value::Integer(3)));
///
/// // Redeclaring discards the previous value.
/// symbols.declare("x", Variable::scalar(ValueType::Integer));
/// assert_eq!(symbols.get("x").unwrap().storage, Storage::Scalar(None));
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: HashMap<String, Variable>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to a freshly declared variable.
    ///
    /// Any previous variable of the same name is replaced, along with all of
    /// its assigned values.
    pub fn declare(&mut self, name: &str, variable: Variable) {
        let (ty, size) = (variable.ty, variable.size());

        if self.variables.insert(name.to_string(), variable).is_some() {
            trace!(name, %ty, ?size, "redeclared variable");
        } else {
            trace!(name, %ty, ?size, "declared variable");
        }
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    /// Looks up a variable by name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.get_mut(name)
    }

    /// The number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns whether no variable has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
