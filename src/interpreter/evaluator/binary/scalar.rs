use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, number::Number},
    },
    position::Span,
    util::num::{floored_rem_f64, floored_rem_i64},
};

impl Interpreter<'_> {
    /// Evaluates an arithmetic operation on two values.
    ///
    /// Both operands must be numbers. Errors about an operand point at that
    /// operand's span; overflow points at the whole operation.
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
    /// let result = Interpreter::eval_scalar_op(BinaryOperator::Div,
    ///                                          &Value::from(7),
    ///                                          &Value::from(2),
    ///                                          &span).unwrap();
    /// assert_eq!(result, Value::from(3.5));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          span: &Span)
                          -> EvalResult<Value> {
        let a = left.as_number(span)?;
        let b = right.as_number(span)?;
        let result = Self::eval_arithmetic(op, a, b, &right.span_or(span), span)?;
        Ok(Value::number(result))
    }

    /// Applies an arithmetic operator to two numbers.
    ///
    /// - `+ - *` on two integers stay integers, with overflow reported.
    /// - `/` always produces a float.
    /// - `%` is floored: the result takes the sign of the divisor.
    /// - Mixing an integer with a float promotes the integer.
    ///
    /// # Parameters
    /// - `divisor_span`: Where a division by zero is reported.
    /// - `span`: Where overflow is reported.
    pub fn eval_arithmetic(op: BinaryOperator,
                           a: Number,
                           b: Number,
                           divisor_span: &Span,
                           span: &Span)
                           -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        if matches!(op, Div | Mod) && b.is_zero() {
            let span = divisor_span.clone();
            return Err(if op == Div {
                           RuntimeError::DivisionByZero { span }
                       } else {
                           RuntimeError::ModuloByZero { span }
                       });
        }

        if let (Number::Int(x), Number::Int(y)) = (a, b)
           && op != Div
        {
            let result = match op {
                Add => x.checked_add(y),
                Sub => x.checked_sub(y),
                Mul => x.checked_mul(y),
                Mod => floored_rem_i64(x, y),
                _ => unreachable!("eval_arithmetic used with a comparison operator"),
            };
            return result.map(Number::Int)
                         .ok_or_else(|| RuntimeError::Overflow { span: span.clone() });
        }

        let (x, y) = a.promote(b);
        let result = match op {
            Add => x + y,
            Sub => x - y,
            Mul => x * y,
            Div => x / y,
            Mod => floored_rem_f64(x, y),
            _ => unreachable!("eval_arithmetic used with a comparison operator"),
        };
        Ok(Number::Float(result))
    }
}
