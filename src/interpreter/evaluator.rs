/// Binary operator evaluation logic.
///
/// Handles arithmetic, exponentiation and the equality and ordering
/// comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements `+`, `-` and `NOT`.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the main dispatch, variable handling and error propagation.
pub mod core;

/// `IF`/`ELIF`/`ELSE` chains.
pub mod conditional;

/// Evaluation of `FOR` and `WHILE` loops.
///
/// Manages the loop variable and runs each pass of the body in its own
/// binding level.
pub mod for_loop;
