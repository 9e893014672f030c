/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the language's
/// 64-bit signed integers and the `usize` sizes and indices used for array
/// storage, without silent truncation or sign loss.
pub mod num;
