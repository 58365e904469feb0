/// Numeric conversion helpers.
///
/// Exponent conversion and the floored remainder used by `%`. Conversions
/// that could lose data return an `Option` instead of wrapping silently.
pub mod num;

/// Stack headroom for the recursive parser and evaluator.
pub mod stack;
