use crate::{
    ast::{Position, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, ValueType},
    },
};

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Not`: boolean negation; the operand must be a boolean.
/// - `Negate`: integer negation; the operand must be an integer.
///
/// # Parameters
/// - `op`: Unary operator.
/// - `value`: Input value.
/// - `position`: Source position for error reporting.
///
/// # Returns
/// The computed `Value` wrapped in `EvalResult`.
///
/// # Errors
/// - `TypeMismatch` if the operand has the wrong type.
/// - `Overflow` when negating `i64::MIN`.
///
/// # Example
/// ```
/// use dragon::{
///     ast::{Position, UnaryOperator},
///     interpreter::{evaluator::unary::eval_unary, value::core::Value},
/// };
///
/// // Negation
/// let v = eval_unary(UnaryOperator::Negate, Value::Integer(5), Position::default()).unwrap();
/// assert_eq!(v, Value::Integer(-5));
///
/// // Boolean not
/// let v = eval_unary(UnaryOperator::Not, Value::Bool(false), Position::default()).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// // Operand types are not converted
/// assert!(eval_unary(UnaryOperator::Not, Value::Integer(0), Position::default()).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: Value, position: Position) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOperator::Negate, Value::Integer(n)) => {
            n.checked_neg()
             .map(Value::Integer)
             .ok_or(RuntimeError::Overflow { position })
        },
        _ => {
            let expected = match op {
                UnaryOperator::Not => ValueType::Bool,
                UnaryOperator::Negate => ValueType::Integer,
            };
            Err(RuntimeError::TypeMismatch { details: format!("'{op}' expects {expected}, found {} {value}",
                                                              value.value_type()),
                                             position })
        },
    }
}
