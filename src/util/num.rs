/// Safely converts an `i64` to `usize` if and only if it is non-negative and
/// fits.
///
/// Used for array sizes and indices, which the language computes as 64-bit
/// signed integers.
///
/// ## Errors
/// Returns `Err(error)` if the value is negative or does not fit in `usize`.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if the conversion fails.
///
/// ## Example
/// ```
/// use dragon::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(3, "negative!"), Ok(3));
/// assert_eq!(i64_to_usize_checked(-1, "negative!"), Err("negative!"));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

