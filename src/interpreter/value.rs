/// Runtime values and their types.
///
/// Defines the `Value` enum carried through expression evaluation and the
/// `ValueType` tag used for declarations and type checks.
pub mod core;

/// Variables and the symbol table.
///
/// Defines typed storage cells, scalar or array, that track which slots have
/// been assigned, and the single flat table that maps names to them.
pub mod variable;
