//! # stanza
//!
//! stanza is a small line-oriented expression language written in Rust.
//! It scans, parses and evaluates one line at a time against a persistent
//! environment, with integer and float arithmetic, comparisons, variables,
//! conditionals and loops.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{
        environment::Environment, evaluator::core::evaluate, lexer::scan, parser::core::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` type and related enums that represent the
/// syntactic structure of a line as a tree. The tree is built by the parser
/// and walked by the evaluator.
///
/// # Responsibilities
/// - Defines node kinds for every language construct.
/// - Attaches a source span to every node for error reporting.
/// - Renders trees in a parenthesised form for debugging and tests.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a line.
/// Every error carries the span it refers to and can be rendered as a report
/// with the offending source underlined.
///
/// # Responsibilities
/// - Defines one error enum per stage, plus the [`Error`](error::Error)
///   union returned by [`run`].
/// - Renders reports with carets under the offending span.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together scanning, parsing, evaluation and value
/// representations to provide a complete runtime for source lines.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, environment
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Source positions and spans.
///
/// Tracks offset, line and column of every token so errors can point at the
/// exact text they concern.
pub mod position;
/// The interactive session.
///
/// Runs lines one at a time against a shared environment and formats the
/// outcome of each for display.
pub mod shell;
/// General utilities for numeric conversion and recursion.
///
/// This module provides routines used by the parser and the evaluator, such
/// as exponent conversion, floored remainders and on-demand stack growth.
pub mod util;

/// Runs one line of source text.
///
/// The text is scanned, parsed and evaluated against `env`. Bindings made by
/// the line stay in `env`, so a session can call `run` repeatedly with the
/// same environment.
///
/// Returns `Some(value)` when the line produces a value and `None` for a
/// declaration, a reassignment or a loop whose body never ran.
///
/// # Errors
/// The first error of any stage. Scanning and parsing errors leave `env`
/// untouched; a runtime error keeps the bindings made before it.
///
/// # Examples
/// ```
/// use stanza::{
///     interpreter::{environment::Environment, value::core::Value},
///     run,
/// };
///
/// let mut env = Environment::new();
/// assert_eq!(run("<stdin>", "let a = 5", &mut env), Ok(None));
/// assert_eq!(run("<stdin>", "a * (2 + 3)", &mut env), Ok(Some(Value::from(25))));
///
/// // 'b' is not defined
/// assert!(run("<stdin>", "b + 1", &mut env).is_err());
/// ```
pub fn run(source_name: &str, text: &str, env: &mut Environment) -> Result<Option<Value>, Error> {
    let tokens = scan(source_name, text)?;
    debug!(tokens = %tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "),
           "scanned");

    let tree = parse(&tokens)?;
    debug!(tree = %tree, depth = tree.depth(), "parsed");

    Ok(evaluate(&tree, env)?)
}
