use std::borrow::Cow;

use crate::{
    ast::{Node, NodeKind},
    error::SyntaxError,
    interpreter::lexer::token::{Keyword, Token, TokenKind},
    position::Span,
    util::stack::with_headroom,
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// How many sub-expressions (parentheses, control-construct operands,
/// assignment values) may be nested inside each other.
pub const MAX_NESTING_DEPTH: usize = 100;

/// Maximum height of a syntax tree.
pub const MAX_TREE_DEPTH: usize = 256;

/// Recursive-descent parser over a scanned token list.
///
/// The parser only moves forward. Each grammar level is a method in one of
/// the sibling modules; they share the cursor and the nesting counter kept
/// here.
pub struct Parser<'t> {
    tokens:  &'t [Token],
    cursor:  usize,
    nesting: usize,
}

/// Parses a complete token list into a single expression tree.
///
/// The list is expected to end with an [`TokenKind::Eof`] token, as produced
/// by [`scan`](crate::interpreter::lexer::scan); one is supplied if it is
/// missing. After the expression, the parser must be at the end of input.
///
/// # Errors
/// Any [`SyntaxError`]; trailing input after a complete expression is
/// [`SyntaxError::UnexpectedTrailingInput`].
///
/// # Examples
/// ```
/// use stanza::interpreter::{lexer::scan, parser::core::parse};
///
/// let tokens = scan("<stdin>", "1 + 2 * 3").unwrap();
/// let tree = parse(&tokens).unwrap();
/// assert_eq!(tree.to_string(), "(1 + (2 * 3))");
///
/// let tokens = scan("<stdin>", "1 2").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let tokens: Cow<'_, [Token]> = match tokens.last() {
        Some(last) if last.kind == TokenKind::Eof => Cow::Borrowed(tokens),
        last => {
            let end = last.map(|token| token.span.end.clone()).unwrap_or_default();
            let mut owned = tokens.to_vec();
            owned.push(Token::new(TokenKind::Eof, end));
            Cow::Owned(owned)
        },
    };

    let mut parser = Parser::new(&tokens);
    let node = parser.parse_expression()?;

    let next = parser.current();
    if next.kind != TokenKind::Eof {
        return Err(SyntaxError::UnexpectedTrailingInput { span: next.span.clone() });
    }
    Ok(node)
}

impl<'t> Parser<'t> {
    /// `tokens` must not be empty and must end with an end-of-input token.
    pub(super) const fn new(tokens: &'t [Token]) -> Self {
        Self { tokens,
               cursor: 0,
               nesting: 0 }
    }

    pub(super) fn current(&self) -> &'t Token {
        &self.tokens[self.cursor]
    }

    pub(super) fn peek_next(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor + 1)
    }

    /// Consumes the current token and returns it. The end-of-input token is
    /// never consumed.
    pub(super) fn advance(&mut self) -> &'t Token {
        let token = self.current();
        if self.cursor + 1 < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    /// Index of the current token, used to tell whether a production made
    /// progress before it failed.
    pub(super) const fn mark(&self) -> usize {
        self.cursor
    }

    /// Consumes `keyword` or fails naming it.
    pub(super) fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<()> {
        if self.current().is_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(SyntaxError::ExpectedKeyword { keyword,
                                               span: self.current().span.clone() })
        }
    }

    /// Replaces `error` with the generic "expected an expression" error when
    /// nothing was consumed since `start`.
    pub(super) fn unless_progress(&self, start: usize, error: SyntaxError) -> SyntaxError {
        if self.cursor == start {
            SyntaxError::ExpectedExpression { span: self.current().span.clone() }
        } else {
            error
        }
    }

    /// Runs `parse` one nesting level deeper.
    pub(super) fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                     span:  self.current().span.clone(), });
        }
        self.nesting += 1;
        let result = with_headroom(|| parse(self));
        self.nesting -= 1;
        result
    }

    /// Builds a node, rejecting trees taller than [`MAX_TREE_DEPTH`].
    pub(super) fn node(&self, kind: NodeKind, span: Span) -> ParseResult<Node> {
        let node = Node::new(kind, span);
        if node.depth() > MAX_TREE_DEPTH {
            return Err(SyntaxError::TreeTooTall { limit: MAX_TREE_DEPTH,
                                                  span:  node.span, });
        }
        Ok(node)
    }
}
