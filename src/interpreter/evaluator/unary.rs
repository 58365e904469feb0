use crate::{
    ast::{Node, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, number::Number},
    },
    position::Span,
};

impl Interpreter<'_> {
    /// Evaluates the operand, then applies the unary operator to it.
    pub fn eval_unary_op(&mut self, op: UnaryOperator, operand: &Node) -> EvalResult<Value> {
        let value = self.eval_child(operand)?;
        Self::eval_unary(op, &value, &operand.span)
    }

    /// Applies a unary operator to a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the operand unchanged.
    /// - `Minus`: numeric negation. Negating the smallest integer overflows.
    /// - `Not`: flips a Boolean. A number passes through untouched.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `span`: Where errors are reported when the value carries no span.
    ///
    /// # Example
    /// ```
    /// use stanza::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    ///     position::Span,
    /// };
    ///
    /// let span = Span::default();
    ///
    /// // Negation
    /// let v = Interpreter::eval_unary(UnaryOperator::Minus, &Value::from(5), &span).unwrap();
    /// assert_eq!(v, Value::from(-5));
    ///
    /// // Boolean not
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::from(false), &span).unwrap();
    /// assert_eq!(v, Value::from(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, span: &Span) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => Ok(value.clone()),
            UnaryOperator::Minus => match value.as_number(span)? {
                Number::Int(n) => n.checked_neg()
                                   .map(Value::from)
                                   .ok_or_else(|| RuntimeError::Overflow { span: value.span_or(span) }),
                Number::Float(x) => Ok(Value::from(-x)),
            },
            UnaryOperator::Not => match value {
                Value::Boolean { value, .. } => Ok(Value::boolean(!value)),
                Value::Number { .. } => Ok(value.clone()),
            },
        }
    }
}
