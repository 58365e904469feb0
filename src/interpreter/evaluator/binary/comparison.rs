use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    position::Span,
};

impl Interpreter<'_> {
    /// Evaluates an equality or ordering operator.
    ///
    /// `==` and `!=` accept any pair of values: numbers compare by value
    /// (`1 == 1.0`), Booleans by truth, and values of different kinds are
    /// simply unequal. The ordering operators require two numbers.
    ///
    /// # Errors
    /// [`RuntimeError::ExpectedNumber`](crate::error::RuntimeError::ExpectedNumber)
    /// when an ordering operand is a Boolean, pointing at that operand.
    ///
    /// # Example
    /// ```
    /// use stanza::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    ///     position::Span,
    /// };
    ///
    /// let span = Span::default();
    /// let equal = Interpreter::eval_comparison(BinaryOperator::Equal,
    ///                                          &Value::from(2),
    ///                                          &Value::from(2.0),
    ///                                          &span).unwrap();
    /// assert_eq!(equal, Value::from(true));
    ///
    /// let mixed = Interpreter::eval_comparison(BinaryOperator::NotEqual,
    ///                                          &Value::from(1),
    ///                                          &Value::from(true),
    ///                                          &span).unwrap();
    /// assert_eq!(mixed, Value::from(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           span: &Span)
                           -> EvalResult<Value> {
        use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

        let result = match op {
            Equal => Self::values_equal(left, right),
            NotEqual => !Self::values_equal(left, right),
            Less | Greater | LessEqual | GreaterEqual => {
                let ordering = left.as_number(span)?.compare(right.as_number(span)?);
                match (op, ordering) {
                    (Less, Some(Ordering::Less))
                    | (LessEqual, Some(Ordering::Less | Ordering::Equal))
                    | (Greater, Some(Ordering::Greater))
                    | (GreaterEqual, Some(Ordering::Greater | Ordering::Equal)) => true,
                    _ => false,
                }
            },
            _ => unreachable!("eval_comparison used with an arithmetic operator"),
        };
        Ok(Value::boolean(result))
    }

    fn values_equal(left: &Value, right: &Value) -> bool {
        match (left, right) {
            (Value::Number { value: a, .. }, Value::Number { value: b, .. }) => a.equals(*b),
            (Value::Boolean { value: a, .. }, Value::Boolean { value: b, .. }) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;

    fn compare(op: BinaryOperator, left: Value, right: Value) -> EvalResult<Value> {
        Interpreter::eval_comparison(op, &left, &right, &Span::default())
    }

    #[test]
    fn ordering_mixes_integers_and_floats() {
        assert_eq!(compare(BinaryOperator::Less, 1.into(), 1.5.into()), Ok(true.into()));
        assert_eq!(compare(BinaryOperator::GreaterEqual, 2.into(), 2.0.into()), Ok(true.into()));
        assert_eq!(compare(BinaryOperator::Greater, 2.into(), 2.into()), Ok(false.into()));
        assert_eq!(compare(BinaryOperator::LessEqual, 3.into(), 2.into()), Ok(false.into()));
    }

    #[test]
    fn booleans_compare_by_truth() {
        assert_eq!(compare(BinaryOperator::Equal, true.into(), true.into()), Ok(true.into()));
        assert_eq!(compare(BinaryOperator::NotEqual, true.into(), false.into()), Ok(true.into()));
    }

    #[test]
    fn different_kinds_are_unequal() {
        assert_eq!(compare(BinaryOperator::Equal, 1.into(), true.into()), Ok(false.into()));
        assert_eq!(compare(BinaryOperator::Equal, 0.into(), false.into()), Ok(false.into()));
    }

    #[test]
    fn ordering_booleans_is_an_error() {
        assert!(matches!(compare(BinaryOperator::Less, true.into(), 1.into()),
                         Err(RuntimeError::ExpectedNumber { .. })));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Value::from(f64::NAN);
        assert_eq!(compare(BinaryOperator::Less, nan.clone(), 1.into()), Ok(false.into()));
        assert_eq!(compare(BinaryOperator::Equal, nan.clone(), nan), Ok(false.into()));
    }
}
