use crate::{
    ast::{BinaryOperator, ForLoopContext, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, number::Number},
    },
    position::Span,
};

impl Interpreter<'_> {
    /// Evaluates a `FOR` loop.
    ///
    /// `FOR i IN start TO end STEP step DO body` binds `i` to `start` and
    /// evaluates the body while `i < end` (positive step) or `i > end`
    /// (negative step), advancing `i` by `step` after every pass. The end
    /// bound is exclusive and the step defaults to `1`.
    ///
    /// Every pass runs in its own binding level holding the loop variable, so
    /// a `let` inside the body is fresh on each pass and gone after the loop.
    /// The loop variable cannot shadow a name that is already visible.
    ///
    /// The last evaluated body value is returned. If the loop executes zero
    /// times, the result is `None`.
    ///
    /// # Parameters
    /// - `context`: Loop header and body.
    /// - `span`: Span of the whole loop, used for counter overflow.
    ///
    /// # Errors
    /// - [`RuntimeError::AlreadyAssigned`] when the loop variable is visible.
    /// - [`RuntimeError::ExpectedNumber`] when a bound or the step is a
    ///   Boolean.
    /// - [`RuntimeError::ZeroStep`] for a step equal to zero.
    ///
    /// # Example
    /// ```
    /// use stanza::interpreter::{
    ///     environment::Environment,
    ///     evaluator::core::evaluate,
    ///     lexer::scan,
    ///     parser::core::parse,
    ///     value::core::Value,
    /// };
    ///
    /// let mut env = Environment::new();
    /// let tree = parse(&scan("<stdin>", "FOR i IN 10 TO 0 STEP -3 DO i").unwrap()).unwrap();
    /// assert_eq!(evaluate(&tree, &mut env), Ok(Some(Value::from(1))));
    /// assert!(!env.contains("i"));
    /// ```
    pub fn eval_for(&mut self, context: &ForLoopContext, span: &Span) -> EvalResult<Option<Value>> {
        if self.env.contains(&context.variable) {
            return Err(RuntimeError::AlreadyAssigned { name: context.variable.clone(),
                                                       span: context.variable_span.clone(), });
        }

        let start = self.eval_child(&context.start)?.as_number(&context.start.span)?;
        let end = self.eval_child(&context.end)?.as_number(&context.end.span)?;
        let step = match &context.step {
            Some(step) => {
                let value = self.eval_child(step)?.as_number(&step.span)?;
                if value.is_zero() {
                    return Err(RuntimeError::ZeroStep { span: step.span.clone() });
                }
                value
            },
            None => Number::Int(1),
        };

        let ascending = !step.is_negative();
        let mut counter = start;
        let mut last_value = None;

        while Self::in_range(counter, end, ascending) {
            let bind = Some((context.variable.as_str(), Value::number(counter)));
            last_value = self.eval_scoped(&context.body, bind)?;
            counter = Self::eval_arithmetic(BinaryOperator::Add, counter, step, span, span)?;
        }

        Ok(last_value)
    }

    /// Evaluates a `WHILE` loop.
    ///
    /// The condition is re-evaluated before every pass and the body runs in
    /// a fresh binding level each time. Returns the last body value, or
    /// `None` when the body never ran.
    pub fn eval_while(&mut self, condition: &Node, body: &Node) -> EvalResult<Option<Value>> {
        let mut last_value = None;
        while self.eval_child(condition)?.is_truthy() {
            last_value = self.eval_scoped(body, None)?;
        }
        Ok(last_value)
    }

    fn in_range(counter: Number, end: Number, ascending: bool) -> bool {
        match counter.compare(end) {
            Some(ordering) if ascending => ordering.is_lt(),
            Some(ordering) => ordering.is_gt(),
            None => false,
        }
    }
}
