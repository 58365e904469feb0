/// Binary operator dispatch.
///
/// Evaluates both operands, left first, and routes the pair to the
/// arithmetic or comparison rules.
pub mod core;

/// Arithmetic operators: `+ - * / %`.
pub mod scalar;

/// Equality and ordering operators.
pub mod comparison;

/// Exponentiation.
pub mod power;
