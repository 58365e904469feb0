/// The environment module holds variable bindings across evaluations.
///
/// An environment is a stack of binding levels. The global level lives for
/// a whole session, so a `let` on one line is visible on the next; loops push
/// short-lived levels for their bodies.
pub mod environment;
/// The evaluator module executes syntax trees and computes results.
///
/// The evaluator walks the tree produced by the parser, performs arithmetic
/// and comparisons, manages variable state and runs control flow. It is the
/// last stage of interpretation.
///
/// # Responsibilities
/// - Evaluates every node kind, producing a value or nothing.
/// - Declares, reassigns and reads variables through the environment.
/// - Reports runtime errors such as division by zero or unknown names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to a meaningful language element such as a
/// number, identifier, operator or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and span.
/// - Distinguishes keywords from identifiers.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a tree that encodes operator precedence and associativity, so evaluation
/// can follow the tree shape directly.
///
/// # Responsibilities
/// - Converts tokens into [`Node`](crate::ast::Node)s.
/// - Validates the grammar, reporting errors with their span.
/// - Bounds nesting so hostile input cannot exhaust the stack.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Every expression evaluates to a number (integer or float) or a Boolean.
/// This module provides display, promotion and comparison for them.
pub mod value;
