use thiserror::Error;

use crate::position::Span;

/// Represents all errors that can occur while scanning source text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Illegal character '{character}'")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        span:      Span,
    },
    /// A character that must be followed by a specific second character
    /// (`!` without `=`).
    #[error("Expected '{expected}'")]
    ExpectedCharacter {
        /// The character that should have followed.
        expected: char,
        /// Covers the lone character and whatever followed it.
        span:     Span,
    },
    /// An integer literal that does not fit in 64 bits.
    #[error("Integer literal {literal} is too large")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// Where the literal was found.
        span:    Span,
    },
}

impl LexError {
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::IllegalCharacter { span, .. }
            | Self::ExpectedCharacter { span, .. }
            | Self::LiteralTooLarge { span, .. } => span,
        }
    }
}
