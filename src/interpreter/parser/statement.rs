use crate::{
    ast::{BinaryOperator, Node, NodeKind},
    error::SyntaxError,
    interpreter::{
        lexer::token::{Keyword, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a full expression.
    ///
    /// This is the entry point of the grammar and the lowest precedence level:
    ///
    /// ```text
    /// expression := "let" IDENTIFIER "=" expression
    ///             | IDENTIFIER "=" expression
    ///             | comparison (("+" | "-") comparison)*
    /// ```
    ///
    /// Reassignment is recognised with one token of lookahead; nothing is
    /// consumed until the `=` has been seen. Each call counts as one nesting
    /// level.
    ///
    /// # Errors
    /// The error of the failing sub-production, or
    /// [`SyntaxError::ExpectedExpression`] when no token was consumed.
    pub fn parse_expression(&mut self) -> ParseResult<Node> {
        self.nested(Self::parse_expression_body)
    }

    fn parse_expression_body(&mut self) -> ParseResult<Node> {
        let token = self.current();

        if token.is_keyword(Keyword::Let) {
            return self.parse_declaration();
        }

        if let TokenKind::Identifier(name) = &token.kind
           && self.peek_next().is_some_and(|next| next.kind == TokenKind::Eq)
        {
            self.advance();
            self.advance();
            let value = self.parse_expression()?;
            let span = token.span.to(&value.span);
            return self.node(NodeKind::VarAssign { name:  name.clone(),
                                                   value: Box::new(value), },
                             span);
        }

        let start = self.mark();
        self.parse_binary(Self::parse_comparison, &[BinaryOperator::Add, BinaryOperator::Sub])
            .map_err(|error| self.unless_progress(start, error))
    }

    /// Parses `let name = value`, starting at the `let` keyword.
    fn parse_declaration(&mut self) -> ParseResult<Node> {
        let keyword = self.advance();

        let name_token = self.current();
        let TokenKind::Identifier(name) = &name_token.kind else {
            return Err(SyntaxError::ExpectedIdentifier { span: name_token.span.clone() });
        };
        self.advance();

        if self.current().kind != TokenKind::Eq {
            return Err(SyntaxError::ExpectedEquals { span: self.current().span.clone() });
        }
        self.advance();

        let value = self.parse_expression()?;
        let span = keyword.span.to(&value.span);
        self.node(NodeKind::VarDeclare { name:  name.clone(),
                                         value: Box::new(value), },
                  span)
    }
}
