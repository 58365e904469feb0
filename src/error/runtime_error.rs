use thiserror::Error;

use crate::position::Span;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// Division by a number equal to zero.
    #[error("Attempt to divide by zero")]
    DivisionByZero {
        /// The divisor.
        span: Span,
    },
    /// Modulo by a number equal to zero.
    #[error("Attempt to divide by zero (modulo)")]
    ModuloByZero {
        /// The divisor.
        span: Span,
    },
    /// Read of a name with no binding.
    #[error("{name} not defined")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The access.
        span: Span,
    },
    /// Declaration of a name that is already visible.
    #[error("Variable {name} already assigned")]
    AlreadyAssigned {
        /// The name of the variable.
        name: String,
        /// The declaration.
        span: Span,
    },
    /// Reassignment of a name with no binding.
    #[error("Variable {name} not defined")]
    AssignmentToUndefined {
        /// The name of the variable.
        name: String,
        /// The reassignment.
        span: Span,
    },
    /// A Boolean used where only a number makes sense.
    #[error("Expected a number")]
    ExpectedNumber {
        /// The operand that is not a number.
        span: Span,
    },
    /// An operand that produced no value.
    #[error("Expression does not produce a value")]
    MissingValue {
        /// The operand.
        span: Span,
    },
    /// Integer arithmetic left the 64-bit range.
    #[error("Integer overflow")]
    Overflow {
        /// The operation.
        span: Span,
    },
    /// An operation whose result is not a real number.
    #[error("Result of {operation} is not a real number")]
    NotReal {
        /// Description of the operation.
        operation: String,
        /// The operation.
        span:      Span,
    },
    /// A `FOR` loop with a step of zero.
    #[error("Loop step must not be zero")]
    ZeroStep {
        /// The step expression.
        span: Span,
    },
}

impl RuntimeError {
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::DivisionByZero { span }
            | Self::ModuloByZero { span }
            | Self::UnknownVariable { span, .. }
            | Self::AlreadyAssigned { span, .. }
            | Self::AssignmentToUndefined { span, .. }
            | Self::ExpectedNumber { span }
            | Self::MissingValue { span }
            | Self::Overflow { span }
            | Self::NotReal { span, .. }
            | Self::ZeroStep { span } => span,
        }
    }
}
