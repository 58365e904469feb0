use crate::{
    ast::{IfCase, Node},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter<'_> {
    /// Evaluates an `IF`/`ELIF`/`ELSE` chain.
    ///
    /// Conditions are tried in order and only the body of the first truthy
    /// one is evaluated. Without a truthy case the `ELSE` body is evaluated,
    /// and without an `ELSE` the result is `None`.
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
    /// let tree = parse(&scan("<stdin>", "IF 1 > 2 THEN 10 ELSE 20").unwrap()).unwrap();
    /// assert_eq!(evaluate(&tree, &mut env), Ok(Some(Value::from(20))));
    /// ```
    pub fn eval_conditional(&mut self,
                            cases: &[IfCase],
                            else_case: Option<&Node>)
                            -> EvalResult<Option<Value>> {
        for case in cases {
            if self.eval_child(&case.condition)?.is_truthy() {
                return self.eval(&case.body);
            }
        }

        match else_case {
            Some(body) => self.eval(body),
            None => Ok(None),
        }
    }
}
