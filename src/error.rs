/// Scanning errors.
///
/// Raised when the source text contains a character that cannot start a
/// token, or a literal the scanner cannot represent.
pub mod lex_error;
/// Human readable error excerpts.
///
/// Turns a span into the offending source lines with carets underneath.
pub mod render;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking the tree:
/// division by zero, unknown or redeclared variables, type mismatches and
/// integer overflow.
pub mod runtime_error;
/// Parsing errors.
///
/// Raised when the token list does not follow the grammar. Each variant names
/// what the parser expected to find.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;
use thiserror::Error;

use crate::position::Span;

/// Any error produced while running a line of source text.
///
/// Each pipeline stage reports its own error type; they all convert into this
/// one so a caller sees a single `Result`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// The name printed at the head of a rendered report.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Lex(_) => "LexError",
            Self::Syntax(_) => "SyntaxError",
            Self::Runtime(_) => "RuntimeError",
        }
    }

    /// The region of source text the error points at.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::Lex(e) => e.span(),
            Self::Syntax(e) => e.span(),
            Self::Runtime(e) => e.span(),
        }
    }

    /// Renders the full report: kind, details, location and an underlined
    /// excerpt of the source.
    ///
    /// # Examples
    /// ```
    /// use stanza::{interpreter::environment::Environment, run};
    ///
    /// let mut env = Environment::new();
    /// let error = run("<stdin>", "7 / 0", &mut env).unwrap_err();
    ///
    /// assert_eq!(error.render(),
    ///            "RuntimeError: Attempt to divide by zero\n\
    ///             File <stdin>, line 1\n\
    ///             \n\
    ///             7 / 0\n    ^");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let span = self.span();
        format!("{}: {self}\nFile {}, line {}\n\n{}",
                self.kind(),
                span.source_name(),
                span.start.line + 1,
                render::render(span.start.source_text(), &span.start, &span.end))
    }
}
