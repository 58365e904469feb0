use crate::{
    ast::{Node, NodeKind},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
    position::Span,
    util::stack::with_headroom,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks a syntax tree against an [`Environment`].
///
/// The interpreter holds no state of its own; all bindings live in the
/// environment it borrows, so the same environment can be handed to a new
/// interpreter for every line of a session.
pub struct Interpreter<'env> {
    pub(super) env: &'env mut Environment,
}

/// Evaluates `node` in `env`.
///
/// Returns `Some(value)` for expressions and `None` for statements that
/// produce nothing (declarations, reassignments, loops that never ran).
///
/// # Errors
/// The first [`RuntimeError`] raised anywhere in the tree; evaluation stops
/// there. Bindings made before the error are kept.
///
/// # Examples
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
/// let tree = parse(&scan("<stdin>", "let a = 4").unwrap()).unwrap();
/// assert_eq!(evaluate(&tree, &mut env), Ok(None));
///
/// let tree = parse(&scan("<stdin>", "a ^ 2").unwrap()).unwrap();
/// assert_eq!(evaluate(&tree, &mut env), Ok(Some(Value::from(16))));
/// ```
pub fn evaluate(node: &Node, env: &mut Environment) -> EvalResult<Option<Value>> {
    Interpreter::new(env).eval(node)
}

impl<'env> Interpreter<'env> {
    pub const fn new(env: &'env mut Environment) -> Self {
        Self { env }
    }

    /// Evaluates a node and returns the resulting value.
    ///
    /// This is the main dispatch: every node kind has exactly one evaluation
    /// rule. A produced value is tagged with the node's span.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        with_headroom(|| self.eval_node(node))
    }

    fn eval_node(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        let value = match &node.kind {
            NodeKind::Number(number) => Some(Value::number(*number)),
            NodeKind::Unary { op, operand } => Some(self.eval_unary_op(*op, operand)?),
            NodeKind::Binary { left, op, right } => {
                Some(self.eval_binary_op(left, *op, right, &node.span)?)
            },
            NodeKind::Power { base, exponent } => Some(self.eval_power(base, exponent, &node.span)?),
            NodeKind::VarDeclare { name, value } => {
                self.eval_declaration(name, value, &node.span)?;
                None
            },
            NodeKind::VarAssign { name, value } => {
                self.eval_assignment(name, value, &node.span)?;
                None
            },
            NodeKind::VarAccess { name } => Some(self.eval_variable(name, &node.span)?),
            NodeKind::Conditional { cases, else_case } => {
                self.eval_conditional(cases, else_case.as_deref())?
            },
            NodeKind::ForLoop(context) => self.eval_for(context, &node.span)?,
            NodeKind::WhileLoop { condition, body } => self.eval_while(condition, body)?,
        };
        Ok(value.map(|value| value.with_span(&node.span)))
    }

    /// Evaluates a subexpression that must produce a value.
    ///
    /// # Errors
    /// [`RuntimeError::MissingValue`] when the node is a statement such as a
    /// declaration.
    pub fn eval_child(&mut self, node: &Node) -> EvalResult<Value> {
        self.eval(node)?
            .ok_or_else(|| RuntimeError::MissingValue { span: node.span.clone() })
    }

    /// Evaluates a node inside a fresh binding level, closed again afterwards.
    pub(super) fn eval_scoped(&mut self, node: &Node, bind: Option<(&str, Value)>) -> EvalResult<Option<Value>> {
        self.env.in_scope(|env| {
                    if let Some((name, value)) = bind {
                        env.declare(name, value);
                    }
                    Interpreter::new(env).eval(node)
                })
    }

    /// Reads a variable.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownVariable`] when no level binds `name`.
    fn eval_variable(&self, name: &str, span: &Span) -> EvalResult<Value> {
        self.env
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           span: span.clone(), })
    }

    /// Evaluates `let name = value`.
    ///
    /// The value is evaluated first, then the name is checked: declaring a
    /// name that is visible at any level is an error.
    fn eval_declaration(&mut self, name: &str, value: &Node, span: &Span) -> EvalResult<()> {
        let value = self.eval_child(value)?;
        if self.env.contains(name) {
            return Err(RuntimeError::AlreadyAssigned { name: name.to_string(),
                                                       span: span.clone(), });
        }
        self.env.declare(name, value);
        Ok(())
    }

    /// Evaluates `name = value`.
    ///
    /// The name must already be bound; this is checked before the value is
    /// evaluated.
    fn eval_assignment(&mut self, name: &str, value: &Node, span: &Span) -> EvalResult<()> {
        if !self.env.contains(name) {
            return Err(RuntimeError::AssignmentToUndefined { name: name.to_string(),
                                                             span: span.clone(), });
        }
        let value = self.eval_child(value)?;
        self.env.assign(name, value);
        Ok(())
    }
}
