use crate::{
    ast::{Node, NodeKind, UnaryOperator},
    error::SyntaxError,
    interpreter::{
        lexer::token::{Keyword, TokenKind},
        parser::core::{ParseResult, Parser},
        value::number::Number,
    },
    position::Span,
};

impl Parser<'_> {
    /// Parses a factor: a primary expression with any number of prefix signs.
    ///
    /// The rule is: `factor := ("+" | "-") factor | primary`
    ///
    /// Signs are collected in a loop and applied innermost first, so `--x`
    /// becomes `-(-x)`.
    pub(super) fn parse_factor(&mut self) -> ParseResult<Node> {
        let mut signs = Vec::new();
        loop {
            let op = match self.current().kind {
                TokenKind::Plus => UnaryOperator::Plus,
                TokenKind::Minus => UnaryOperator::Minus,
                _ => break,
            };
            signs.push((op, self.advance().span.start.clone()));
        }

        let mut node = self.parse_primary()?;
        for (op, start) in signs.into_iter().rev() {
            let span = Span::new(start, node.span.end.clone());
            node = self.node(NodeKind::Unary { op,
                                               operand: Box::new(node) },
                             span)?;
        }
        Ok(node)
    }

    /// Parses a primary expression.
    ///
    /// ```text
    /// primary := INT | FLOAT | IDENTIFIER | "(" expression ")"
    ///          | if_expression | for_expression | while_expression
    /// ```
    ///
    /// A parenthesised expression yields the inner node unchanged.
    ///
    /// # Errors
    /// - [`SyntaxError::ExpectedClosingParen`] when `(` is never closed.
    /// - [`SyntaxError::ExpectedFactor`] when nothing can start here.
    fn parse_primary(&mut self) -> ParseResult<Node> {
        let token = self.current();
        match &token.kind {
            TokenKind::Int(value) => {
                self.advance();
                self.node(NodeKind::Number(Number::Int(*value)), token.span.clone())
            },
            TokenKind::Float(value) => {
                self.advance();
                self.node(NodeKind::Number(Number::Float(*value)), token.span.clone())
            },
            TokenKind::Identifier(name) => {
                self.advance();
                self.node(NodeKind::VarAccess { name: name.clone() }, token.span.clone())
            },
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression()?;
                if self.current().kind != TokenKind::RParen {
                    return Err(SyntaxError::ExpectedClosingParen { span: self.current().span.clone() });
                }
                self.advance();
                Ok(inner)
            },
            TokenKind::Keyword(Keyword::If) => self.parse_if(),
            TokenKind::Keyword(Keyword::For) => self.parse_for(),
            TokenKind::Keyword(Keyword::While) => self.parse_while(),
            _ => Err(SyntaxError::ExpectedFactor { span: token.span.clone() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::{Node, NodeKind},
        error::SyntaxError,
        interpreter::{lexer::scan, parser::core::parse, value::number::Number},
    };

    fn parse_text(text: &str) -> Result<Node, SyntaxError> {
        parse(&scan("<test>", text).unwrap())
    }

    #[test]
    fn literals_keep_their_kind() {
        assert_eq!(parse_text("7").unwrap().kind, NodeKind::Number(Number::Int(7)));
        assert_eq!(parse_text("7.5").unwrap().kind, NodeKind::Number(Number::Float(7.5)));
    }

    #[test]
    fn stacked_signs_nest() {
        assert_eq!(parse_text("--+x").unwrap().to_string(), "(-(-(+x)))");
    }

    #[test]
    fn unary_span_starts_at_the_sign() {
        let node = parse_text("1 * -abc").unwrap();
        let NodeKind::Binary { right, .. } = node.kind else {
            panic!("expected a binary node");
        };
        assert_eq!((right.span.start.column, right.span.end.column), (4, 8));
    }

    #[test]
    fn parenthesised_expression_is_its_inner_node() {
        let node = parse_text("(4)").unwrap();
        assert_eq!(node.kind, NodeKind::Number(Number::Int(4)));
        assert_eq!(node.span.start.column, 1);
    }

    #[test]
    fn unclosed_parenthesis() {
        let error = parse_text("(1 + 2").unwrap_err();
        assert!(matches!(error, SyntaxError::ExpectedClosingParen { .. }));
        assert_eq!(error.to_string(), "Expected ')'");
        assert_eq!(error.span().start.column, 6);
    }

    #[test]
    fn lone_closing_parenthesis() {
        let error = parse_text(")").unwrap_err();
        assert!(matches!(error, SyntaxError::ExpectedExpression { .. }));
    }

    #[test]
    fn reserved_word_without_rule_is_rejected() {
        let error = parse_text("1 AND 2").unwrap_err();
        assert!(matches!(error, SyntaxError::UnexpectedTrailingInput { .. }));
    }
}
