use thiserror::Error;

use crate::{interpreter::lexer::token::Keyword, position::Span};

/// Represents all errors that can occur while parsing a token list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// A control construct is missing one of its keywords.
    #[error("Expected '{keyword}'")]
    ExpectedKeyword {
        /// The keyword that was required.
        keyword: Keyword,
        /// The token found instead.
        span:    Span,
    },
    /// `let` or `FOR` not followed by a name.
    #[error("Expected identifier")]
    ExpectedIdentifier {
        /// The token found instead.
        span: Span,
    },
    /// A declared name not followed by `=`.
    #[error("Expected '='")]
    ExpectedEquals {
        /// The token found instead.
        span: Span,
    },
    /// A parenthesised expression that was never closed.
    #[error("Expected ')'")]
    ExpectedClosingParen {
        /// The token found instead.
        span: Span,
    },
    /// No factor could start at this token.
    #[error("Expected int or float")]
    ExpectedFactor {
        /// The token found instead.
        span: Span,
    },
    /// No expression could start at this token.
    #[error("Expected 'let', int, float, identifier, '+', '-', '(' or 'NOT'")]
    ExpectedExpression {
        /// The token found instead.
        span: Span,
    },
    /// A complete expression was followed by more input.
    #[error("Expected operator or end of input")]
    UnexpectedTrailingInput {
        /// The first token after the expression.
        span: Span,
    },
    /// The input nests deeper than the parser allows.
    #[error("Expression nested too deeply (limit is {limit})")]
    NestingTooDeep {
        /// The limit that was exceeded.
        limit: usize,
        /// The construct that crossed the limit.
        span:  Span,
    },
    /// The syntax tree is taller than the parser allows, even though nothing
    /// is nested, as in a very long `1 + 1 + ...` chain.
    #[error("Expression too complex (syntax tree deeper than {limit} levels)")]
    TreeTooTall {
        /// The limit that was exceeded.
        limit: usize,
        /// The operation that crossed the limit.
        span:  Span,
    },
}

impl SyntaxError {
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::ExpectedKeyword { span, .. }
            | Self::ExpectedIdentifier { span }
            | Self::ExpectedEquals { span }
            | Self::ExpectedClosingParen { span }
            | Self::ExpectedFactor { span }
            | Self::ExpectedExpression { span }
            | Self::UnexpectedTrailingInput { span }
            | Self::NestingTooDeep { span, .. }
            | Self::TreeTooTall { span, .. } => span,
        }
    }
}
