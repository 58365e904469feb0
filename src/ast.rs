use std::fmt;

use crate::{interpreter::value::number::Number, position::Span};

/// A node of the syntax tree.
///
/// Every node carries the span of source text it was parsed from and the
/// height of its subtree. Both are computed once, when the node is built, from
/// the node's direct children.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    depth:    usize,
}

impl Node {
    #[must_use]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        let depth = kind.children().map(Self::depth).max().unwrap_or(0) + 1;
        Self { kind, span, depth }
    }

    /// Height of the subtree rooted here; a leaf has depth 1.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }
}

/// All node variants of the language.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An integer or float literal.
    Number(Number),
    /// `-x`, `+x` or `NOT x`.
    Unary {
        op:      UnaryOperator,
        operand: Box<Node>,
    },
    /// A left-associative infix operation.
    Binary {
        left:  Box<Node>,
        op:    BinaryOperator,
        right: Box<Node>,
    },
    /// `base ^ exponent`, kept apart from [`NodeKind::Binary`] because it is
    /// right-associative. Unary signs bind tighter, so `-2 ^ 2` is
    /// `(-2) ^ 2`.
    Power {
        base:     Box<Node>,
        exponent: Box<Node>,
    },
    /// `let name = value`
    VarDeclare {
        name:  String,
        value: Box<Node>,
    },
    /// `name = value`
    VarAssign {
        name:  String,
        value: Box<Node>,
    },
    /// A read of a variable.
    VarAccess {
        name: String,
    },
    /// `IF c THEN e (ELIF c THEN e)* (ELSE e)?`
    Conditional {
        cases:     Vec<IfCase>,
        else_case: Option<Box<Node>>,
    },
    /// `FOR name IN start TO end (STEP step)? DO body`
    ForLoop(Box<ForLoopContext>),
    /// `WHILE condition DO body`
    WhileLoop {
        condition: Box<Node>,
        body:      Box<Node>,
    },
}

impl NodeKind {
    /// Direct children, in source order.
    pub fn children(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        match self {
            Self::Number(_) | Self::VarAccess { .. } => Box::new(std::iter::empty()),
            Self::Unary { operand, .. } => Box::new(std::iter::once(operand.as_ref())),
            Self::Binary { left, right, .. } => Box::new([left.as_ref(), right.as_ref()].into_iter()),
            Self::Power { base, exponent } => Box::new([base.as_ref(), exponent.as_ref()].into_iter()),
            Self::VarDeclare { value, .. } | Self::VarAssign { value, .. } => {
                Box::new(std::iter::once(value.as_ref()))
            },
            Self::Conditional { cases, else_case } => {
                Box::new(cases.iter()
                              .flat_map(|case| [&case.condition, &case.body])
                              .chain(else_case.as_deref()))
            },
            Self::ForLoop(context) => Box::new([&context.start, &context.end].into_iter()
                                                                             .chain(context.step.as_ref())
                                                                             .chain(std::iter::once(&context.body))),
            Self::WhileLoop { condition, body } => {
                Box::new([condition.as_ref(), body.as_ref()].into_iter())
            },
        }
    }
}

/// One `condition THEN body` arm of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct IfCase {
    pub condition: Node,
    pub body:      Node,
}

/// The parts of a `FOR` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoopContext {
    /// Name bound to the counter on each pass.
    pub variable:      String,
    /// Span of the loop variable's name.
    pub variable_span: Span,
    pub start:         Node,
    pub end:           Node,
    /// Defaults to `1` when absent.
    pub step:          Option<Node>,
    pub body:          Node,
}

/// Infix operators handled by [`NodeKind::Binary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl BinaryOperator {
    /// Whether the operator compares rather than computes.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual)
    }
}

/// Prefix operators handled by [`NodeKind::Unary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,
    Minus,
    Not,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Not => "NOT",
        };
        write!(f, "{operator}")
    }
}

/// Renders the tree as a fully parenthesised expression, mainly for logs.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Number(number) => write!(f, "{number}"),
            NodeKind::Unary { op, operand } => match op {
                UnaryOperator::Not => write!(f, "(NOT {operand})"),
                _ => write!(f, "({op}{operand})"),
            },
            NodeKind::Binary { left, op, right } => write!(f, "({left} {op} {right})"),
            NodeKind::Power { base, exponent } => write!(f, "({base} ^ {exponent})"),
            NodeKind::VarDeclare { name, value } => write!(f, "(let {name} = {value})"),
            NodeKind::VarAssign { name, value } => write!(f, "({name} = {value})"),
            NodeKind::VarAccess { name } => write!(f, "{name}"),
            NodeKind::Conditional { cases, else_case } => {
                f.write_str("(")?;
                for (i, case) in cases.iter().enumerate() {
                    let keyword = if i == 0 { "IF" } else { " ELIF" };
                    write!(f, "{keyword} {} THEN {}", case.condition, case.body)?;
                }
                if let Some(else_case) = else_case {
                    write!(f, " ELSE {else_case}")?;
                }
                f.write_str(")")
            },
            NodeKind::ForLoop(context) => {
                write!(f,
                       "(FOR {} IN {} TO {}",
                       context.variable, context.start, context.end)?;
                if let Some(step) = &context.step {
                    write!(f, " STEP {step}")?;
                }
                write!(f, " DO {})", context.body)
            },
            NodeKind::WhileLoop { condition, body } => write!(f, "(WHILE {condition} DO {body})"),
        }
    }
}
