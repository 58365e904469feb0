use crate::{
    ast::{BinaryOperator, Node, NodeKind, UnaryOperator},
    interpreter::{
        lexer::token::{Keyword, TokenKind},
        parser::{
            core::{ParseResult, Parser},
            utils::token_to_binary_operator,
        },
    },
    position::Span,
};

impl Parser<'_> {
    /// Parses a left-associative chain `operand (op operand)*` where `op` is
    /// one of `operators`.
    ///
    /// # Parameters
    /// - `operand`: Parser for the next higher precedence level.
    /// - `operators`: Operators accepted at this level.
    pub(super) fn parse_binary(&mut self,
                               operand: fn(&mut Self) -> ParseResult<Node>,
                               operators: &[BinaryOperator])
                               -> ParseResult<Node> {
        let mut left = operand(self)?;
        while let Some(op) = token_to_binary_operator(&self.current().kind)
              && operators.contains(&op)
        {
            self.advance();
            let right = operand(self)?;
            let span = left.span.to(&right.span);
            left = self.node(NodeKind::Binary { left: Box::new(left),
                                                op,
                                                right: Box::new(right) },
                             span)?;
        }
        Ok(left)
    }

    /// Parses comparisons and the `NOT` prefix.
    ///
    /// The rule is:
    /// `comparison := "NOT" comparison | arithmetic (("==" | "!=" | ">" | ">=" |
    /// "<" | "<=") arithmetic)*`
    ///
    /// Consecutive `NOT`s are collected in a loop rather than by recursion.
    pub(super) fn parse_comparison(&mut self) -> ParseResult<Node> {
        let mut negations = Vec::new();
        while self.current().is_keyword(Keyword::Not) {
            negations.push(self.advance().span.start.clone());
        }

        let start = self.mark();
        let mut node = self.parse_binary(Self::parse_arithmetic,
                                         &[BinaryOperator::Equal,
                                           BinaryOperator::NotEqual,
                                           BinaryOperator::Greater,
                                           BinaryOperator::GreaterEqual,
                                           BinaryOperator::Less,
                                           BinaryOperator::LessEqual])
                           .map_err(|error| self.unless_progress(start, error))?;

        for not_start in negations.into_iter().rev() {
            let span = Span::new(not_start, node.span.end.clone());
            node = self.node(NodeKind::Unary { op:      UnaryOperator::Not,
                                               operand: Box::new(node), },
                             span)?;
        }
        Ok(node)
    }

    /// Parses addition and subtraction.
    ///
    /// The rule is: `arithmetic := term (("+" | "-") term)*`
    pub(super) fn parse_arithmetic(&mut self) -> ParseResult<Node> {
        self.parse_binary(Self::parse_term, &[BinaryOperator::Add, BinaryOperator::Sub])
    }

    /// Parses multiplication, division and remainder.
    ///
    /// The rule is: `term := power (("*" | "/" | "%") power)*`
    pub(super) fn parse_term(&mut self) -> ParseResult<Node> {
        self.parse_binary(Self::parse_power,
                          &[BinaryOperator::Mul, BinaryOperator::Div, BinaryOperator::Mod])
    }

    /// Parses exponentiation with right-associativity:
    /// `a ^ b ^ c` parses as `a ^ (b ^ c)`.
    ///
    /// The rule is: `power := factor ("^" power)?`
    pub(super) fn parse_power(&mut self) -> ParseResult<Node> {
        let first = self.parse_factor()?;

        let mut rest = Vec::new();
        while self.current().kind == TokenKind::Pow {
            self.advance();
            rest.push(self.parse_factor()?);
        }

        let Some(mut exponent) = rest.pop() else {
            return Ok(first);
        };
        while let Some(base) = rest.pop() {
            exponent = self.power(base, exponent)?;
        }
        self.power(first, exponent)
    }

    fn power(&self, base: Node, exponent: Node) -> ParseResult<Node> {
        let span = base.span.to(&exponent.span);
        self.node(NodeKind::Power { base:     Box::new(base),
                                    exponent: Box::new(exponent), },
                  span)
    }
}
