use crate::{
    ast::{Position, RelationalOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates logical or on two evaluated operands.
///
/// Both operands must be booleans. The right operand has already been
/// evaluated, so an error inside it was reported even when the left operand
/// alone decides the result.
///
/// # Example
/// ```
/// use dragon::{
///     ast::Position,
///     interpreter::{evaluator::binary::eval_or, value::core::Value},
/// };
///
/// let result = eval_or(Value::Bool(false), Value::Bool(true), Position::default());
/// assert_eq!(result.unwrap(), Value::Bool(true));
/// assert!(eval_or(Value::Bool(true), Value::Integer(1), Position::default()).is_err());
/// ```
pub fn eval_or(left: Value, right: Value, position: Position) -> EvalResult<Value> {
    let (left, right) = (left.as_bool(position)?, right.as_bool(position)?);

    Ok(Value::Bool(left || right))
}

/// Evaluates logical and on two evaluated operands.
///
/// Both operands must be booleans.
pub fn eval_and(left: Value, right: Value, position: Position) -> EvalResult<Value> {
    let (left, right) = (left.as_bool(position)?, right.as_bool(position)?);

    Ok(Value::Bool(left && right))
}

/// Evaluates `==` (`is_equal`) or `!=`.
///
/// # Errors
/// Returns `TypeMismatch` if the operands have different types.
pub fn eval_equality(is_equal: bool,
                     left: Value,
                     right: Value,
                     position: Position)
                     -> EvalResult<Value> {
    let operator = if is_equal { "==" } else { "!=" };
    check_same_type(operator, left, right, position)?;

    Ok(Value::Bool((left == right) == is_equal))
}

/// Evaluates an ordering comparison on the raw representations.
///
/// No type check is applied: booleans compare as `0` and `1`, so mixed
/// operands are accepted.
///
/// # Example
/// ```
/// use dragon::{
///     ast::RelationalOperator,
///     interpreter::{evaluator::binary::eval_relational, value::core::Value},
/// };
///
/// let result = eval_relational(RelationalOperator::Less, Value::Bool(false), Value::Integer(1));
/// assert_eq!(result, Value::Bool(true));
/// ```
#[must_use]
pub fn eval_relational(op: RelationalOperator, left: Value, right: Value) -> Value {
    let (left, right) = (left.raw(), right.raw());

    Value::Bool(match op {
        RelationalOperator::Less => left < right,
        RelationalOperator::LessEqual => left <= right,
        RelationalOperator::Greater => left > right,
        RelationalOperator::GreaterEqual => left >= right,
    })
}

/// Evaluates `+` (`is_add`) or `-`.
///
/// Integers use checked arithmetic. On booleans `+` is logical or and `-`
/// yields the left operand.
///
/// # Errors
/// - `TypeMismatch` if the operands have different types.
/// - `Overflow` if the integer result does not fit in 64 bits.
pub fn eval_add(is_add: bool, left: Value, right: Value, position: Position) -> EvalResult<Value> {
    let operator = if is_add { "+" } else { "-" };

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            let result = if is_add { a.checked_add(b) } else { a.checked_sub(b) };
            result.map(Value::Integer)
                  .ok_or(RuntimeError::Overflow { position })
        },
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(if is_add { a || b } else { a })),
        _ => Err(mismatch(operator, left, right, position)),
    }
}

/// Evaluates `*` (`is_mul`) or `/`.
///
/// For division the right operand is checked first: `0` or `false` is a
/// division by zero whatever the left operand is. Integer division
/// truncates toward zero. On booleans `*` is logical and, `/` yields the
/// left operand.
///
/// # Errors
/// - `DivisionByZero` for `/` with a zero or `false` right operand.
/// - `TypeMismatch` if the operands have different types.
/// - `Overflow` if the integer result does not fit in 64 bits.
///
/// # Example
/// ```
/// use dragon::{
///     ast::Position,
///     error::RuntimeError,
///     interpreter::{evaluator::binary::eval_mul, value::core::Value},
/// };
///
/// let quotient = eval_mul(false, Value::Integer(7), Value::Integer(2), Position::default());
/// assert_eq!(quotient.unwrap(), Value::Integer(3));
///
/// let err = eval_mul(false, Value::Bool(true), Value::Bool(false), Position::default());
/// assert!(matches!(err, Err(RuntimeError::DivisionByZero { .. })));
/// ```
pub fn eval_mul(is_mul: bool, left: Value, right: Value, position: Position) -> EvalResult<Value> {
    let operator = if is_mul { "*" } else { "/" };

    if !is_mul && right.raw() == 0 {
        return Err(RuntimeError::DivisionByZero { position });
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            let result = if is_mul { a.checked_mul(b) } else { a.checked_div(b) };
            result.map(Value::Integer)
                  .ok_or(RuntimeError::Overflow { position })
        },
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(if is_mul { a && b } else { a })),
        _ => Err(mismatch(operator, left, right, position)),
    }
}

fn check_same_type(operator: &str, left: Value, right: Value, position: Position) -> EvalResult<()> {
    if left.value_type() == right.value_type() {
        return Ok(());
    }

    Err(mismatch(operator, left, right, position))
}

fn mismatch(operator: &str, left: Value, right: Value, position: Position) -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{operator}' to {} {left} and {} {right}",
                                                  left.value_type(),
                                                  right.value_type()),
                                 position }
}
