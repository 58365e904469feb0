use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::number::Number},
    position::Span,
};

/// Represents a runtime value in the interpreter.
///
/// Every value remembers the span of the expression that produced it.
/// Operations never mutate a value; they build a new one tagged with the
/// span of the node that produced it. Equality compares payloads only and
/// ignores spans.
#[derive(Debug, Clone)]
pub enum Value {
    /// An integer or float.
    Number {
        value: Number,
        span:  Option<Span>,
    },
    /// Produced by comparisons and `NOT`. Displayed as `fact` or `cap`.
    Boolean {
        value: bool,
        span:  Option<Span>,
    },
}

impl Value {
    #[must_use]
    pub const fn number(value: Number) -> Self {
        Self::Number { value, span: None }
    }

    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Boolean { value, span: None }
    }

    #[must_use]
    pub const fn span(&self) -> Option<&Span> {
        match self {
            Self::Number { span, .. } | Self::Boolean { span, .. } => span.as_ref(),
        }
    }

    /// Re-tags the value with the span of the expression that produced it.
    #[must_use]
    pub fn with_span(self, span: &Span) -> Self {
        match self {
            Self::Number { value, .. } => Self::Number { value,
                                                         span: Some(span.clone()) },
            Self::Boolean { value, .. } => Self::Boolean { value,
                                                           span: Some(span.clone()) },
        }
    }

    /// The span this value is tagged with, or `fallback` for an untagged value.
    #[must_use]
    pub fn span_or(&self, fallback: &Span) -> Span {
        self.span().unwrap_or(fallback).clone()
    }

    /// Returns the numeric payload.
    ///
    /// # Errors
    /// [`RuntimeError::ExpectedNumber`] for a Boolean, pointing at the value's
    /// own span (or `fallback` if it has none).
    pub fn as_number(&self, fallback: &Span) -> EvalResult<Number> {
        match self {
            Self::Number { value, .. } => Ok(*value),
            Self::Boolean { .. } => Err(RuntimeError::ExpectedNumber { span: self.span_or(fallback) }),
        }
    }

    /// Truth value used by conditions: a Boolean is itself, a number is true
    /// when it is non-zero.
    ///
    /// # Examples
    /// ```
    /// use stanza::interpreter::value::core::Value;
    ///
    /// assert!(Value::from(true).is_truthy());
    /// assert!(Value::from(-2).is_truthy());
    /// assert!(!Value::from(0.0).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number { value, .. } => !value.is_zero(),
            Self::Boolean { value, .. } => *value,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number { value: a, .. }, Self::Number { value: b, .. }) => a == b,
            (Self::Boolean { value: a, .. }, Self::Boolean { value: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::number(Number::Int(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::number(Number::Float(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Boolean { value: true, .. } => f.write_str("fact"),
            Self::Boolean { value: false, .. } => f.write_str("cap"),
        }
    }
}
