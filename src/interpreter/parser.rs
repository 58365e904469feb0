/// Parser state, entry point and shared helpers.
///
/// Declares the `Parser` cursor, the `parse` entry point, the `ParseResult`
/// alias and the nesting limits.
pub mod core;

/// Binary operator parsing.
///
/// The comparison, arithmetic, term and power levels of the precedence
/// hierarchy.
pub mod binary;

/// Control constructs.
///
/// `IF`/`ELIF`/`ELSE` conditionals, `FOR` loops and `WHILE` loops.
pub mod control;

/// Top-level expressions.
///
/// Declarations, reassignments and the lowest precedence level.
pub mod statement;

/// Prefix signs and primary expressions.
pub mod unary;

/// Token classification helpers.
pub mod utils;
