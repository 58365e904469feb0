use crate::{
    ast::{ForLoopContext, IfCase, Node, NodeKind},
    error::SyntaxError,
    interpreter::{
        lexer::token::{Keyword, TokenKind},
        parser::core::{ParseResult, Parser},
    },
    position::Span,
};

impl Parser<'_> {
    /// Parses a conditional, starting at the `IF` keyword.
    ///
    /// Syntax:
    /// ```text
    ///     IF <condition> THEN <expression>
    ///     ELIF <condition> THEN <expression>
    ///     ELSE <expression>
    /// ```
    /// Any number of `ELIF` arms may follow; `ELSE` is optional.
    ///
    /// # Errors
    /// - [`SyntaxError::ExpectedKeyword`] naming `THEN` when it is missing.
    /// - Propagates any errors from sub-expression parsing.
    pub(super) fn parse_if(&mut self) -> ParseResult<Node> {
        let keyword = self.advance();

        let mut cases = vec![self.parse_if_case()?];
        while self.current().is_keyword(Keyword::Elif) {
            self.advance();
            cases.push(self.parse_if_case()?);
        }

        let else_case = if self.current().is_keyword(Keyword::Else) {
            self.advance();
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };

        let end = match (&else_case, cases.last()) {
            (Some(node), _) => node.span.end.clone(),
            (None, Some(case)) => case.body.span.end.clone(),
            (None, None) => keyword.span.end.clone(),
        };
        let span = Span::new(keyword.span.start.clone(), end);
        self.node(NodeKind::Conditional { cases, else_case }, span)
    }

    fn parse_if_case(&mut self) -> ParseResult<IfCase> {
        let condition = self.parse_expression()?;
        self.expect_keyword(Keyword::Then)?;
        let body = self.parse_expression()?;
        Ok(IfCase { condition, body })
    }

    /// Parses a counting loop, starting at the `FOR` keyword.
    ///
    /// Syntax: `FOR <name> IN <start> TO <end> (STEP <step>)? DO <body>`
    ///
    /// # Errors
    /// - [`SyntaxError::ExpectedIdentifier`] when the loop variable is missing.
    /// - [`SyntaxError::ExpectedKeyword`] naming `IN`, `TO` or `DO`.
    pub(super) fn parse_for(&mut self) -> ParseResult<Node> {
        let keyword = self.advance();

        let name_token = self.current();
        let TokenKind::Identifier(variable) = &name_token.kind else {
            return Err(SyntaxError::ExpectedIdentifier { span: name_token.span.clone() });
        };
        self.advance();

        self.expect_keyword(Keyword::In)?;
        let start = self.parse_expression()?;

        self.expect_keyword(Keyword::To)?;
        let end = self.parse_expression()?;

        let step = if self.current().is_keyword(Keyword::Step) {
            self.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect_keyword(Keyword::Do)?;
        let body = self.parse_expression()?;

        let span = keyword.span.to(&body.span);
        let context = ForLoopContext { variable: variable.clone(),
                                       variable_span: name_token.span.clone(),
                                       start,
                                       end,
                                       step,
                                       body };
        self.node(NodeKind::ForLoop(Box::new(context)), span)
    }

    /// Parses a conditional loop, starting at the `WHILE` keyword.
    ///
    /// Syntax: `WHILE <condition> DO <body>`
    pub(super) fn parse_while(&mut self) -> ParseResult<Node> {
        let keyword = self.advance();
        let condition = self.parse_expression()?;
        self.expect_keyword(Keyword::Do)?;
        let body = self.parse_expression()?;

        let span = keyword.span.to(&body.span);
        self.node(NodeKind::WhileLoop { condition: Box::new(condition),
                                        body:      Box::new(body), },
                  span)
    }
}
