use std::{cmp::Ordering, fmt};

/// A numeric value: a 64-bit integer or a double precision float.
///
/// Integers stay integers under `+ - * %` and non-negative integer powers;
/// anything involving a float, and every division, produces a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(value) => value == 0,
            Self::Float(value) => value == 0.0,
        }
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(value) => value < 0,
            Self::Float(value) => value.is_sign_negative() && value != 0.0,
        }
    }

    /// Converts to the nearest float.
    ///
    /// Integers beyond 2^53 round to the closest representable value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(value) => value as f64,
            Self::Float(value) => value,
        }
    }

    /// Converts a pair to floats, for operations that mix the two kinds.
    ///
    /// # Example
    /// ```
    /// use stanza::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Int(4).promote(Number::Float(0.5)), (4.0, 0.5));
    /// ```
    #[must_use]
    pub fn promote(self, other: Self) -> (f64, f64) {
        (self.to_f64(), other.to_f64())
    }

    /// Orders two numbers by value, mixing integers and floats freely.
    ///
    /// Returns `None` only when a float is NaN.
    ///
    /// # Examples
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use stanza::interpreter::value::number::Number;
    ///
    /// assert_eq!(Number::Int(2).compare(Number::Float(2.5)), Some(Ordering::Less));
    /// assert_eq!(Number::Int(3).compare(Number::Float(3.0)), Some(Ordering::Equal));
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Int(a), Self::Float(b)) => (a as f64).partial_cmp(&b),
            (Self::Float(a), Self::Int(b)) => a.partial_cmp(&(b as f64)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
        }
    }

    /// Numeric equality: `1 == 1.0`.
    #[must_use]
    pub fn equals(self, other: Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            // Integral floats keep a trailing `.0` so they read as floats.
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => write!(f, "{value:.1}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}
