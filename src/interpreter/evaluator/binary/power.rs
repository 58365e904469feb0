use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, number::Number},
    },
    position::Span,
    util::num::i64_to_u32_exponent,
};

impl Interpreter<'_> {
    /// Evaluates `base ^ exponent`.
    pub fn eval_power(&mut self, base: &Node, exponent: &Node, span: &Span) -> EvalResult<Value> {
        let base = self.eval_child(base)?;
        let exponent = self.eval_child(exponent)?;
        Self::eval_pow(&base, &exponent, span)
    }

    /// Raises one value to the power of another.
    ///
    /// - An integer to a non-negative integer power stays an integer;
    ///   overflow is reported.
    /// - A negative integer exponent or any float operand gives a float.
    /// - Zero to a negative power is a division by zero.
    /// - A result that is not a real number (a negative base with a
    ///   fractional exponent) is an error.
    ///
    /// # Example
    /// ```
    /// use stanza::{
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    ///     position::Span,
    /// };
    ///
    /// let span = Span::default();
    /// let pow = |a: Value, b: Value| Interpreter::eval_pow(&a, &b, &span).unwrap();
    ///
    /// assert_eq!(pow(2.into(), 10.into()), Value::from(1024));
    /// assert_eq!(pow(2.into(), (-1).into()), Value::from(0.5));
    /// assert_eq!(pow(9.into(), 0.5.into()), Value::from(3.0));
    /// ```
    pub fn eval_pow(base: &Value, exponent: &Value, span: &Span) -> EvalResult<Value> {
        let a = base.as_number(span)?;
        let b = exponent.as_number(span)?;

        if a.is_zero() && b.is_negative() {
            return Err(RuntimeError::DivisionByZero { span: exponent.span_or(span) });
        }

        if let (Number::Int(x), Number::Int(y)) = (a, b)
           && y >= 0
        {
            return Self::int_pow(x, y).map(Value::from)
                                      .ok_or_else(|| RuntimeError::Overflow { span: span.clone() });
        }

        let (x, y) = a.promote(b);
        let result = x.powf(y);
        if result.is_nan() && !x.is_nan() && !y.is_nan() {
            return Err(RuntimeError::NotReal { operation: format!("{a} ^ {b}"),
                                               span:      span.clone(), });
        }
        Ok(Value::from(result))
    }

    /// Integer power for a non-negative exponent.
    ///
    /// Exponents beyond `u32` only fit for the bases 0, 1 and -1.
    fn int_pow(base: i64, exponent: i64) -> Option<i64> {
        match i64_to_u32_exponent(exponent) {
            Some(exponent) => base.checked_pow(exponent),
            None => match base {
                0 | 1 => Some(base),
                -1 if exponent % 2 == 0 => Some(1),
                -1 => Some(-1),
                _ => None,
            },
        }
    }
}
