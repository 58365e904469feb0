use crate::{
    ast::{BinaryOperator, Node},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    position::Span,
};

impl Interpreter<'_> {
    /// Evaluates a binary operation.
    ///
    /// The left operand is evaluated before the right one; an error in the
    /// left operand stops evaluation before the right one runs.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `op`: The operator.
    /// - `right`: Right operand.
    /// - `span`: Span of the whole operation.
    pub fn eval_binary_op(&mut self,
                          left: &Node,
                          op: BinaryOperator,
                          right: &Node,
                          span: &Span)
                          -> EvalResult<Value> {
        let left = self.eval_child(left)?;
        let right = self.eval_child(right)?;

        if op.is_comparison() {
            Self::eval_comparison(op, &left, &right, span)
        } else {
            Self::eval_scalar_op(op, &left, &right, span)
        }
    }
}
