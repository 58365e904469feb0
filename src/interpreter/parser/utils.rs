use crate::{ast::BinaryOperator, interpreter::lexer::token::TokenKind};

/// Maps a token to the infix operator it denotes, if any.
///
/// `^` is not listed: powers have their own node kind.
///
/// # Examples
/// ```
/// use stanza::{
///     ast::BinaryOperator,
///     interpreter::{lexer::token::TokenKind, parser::utils::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Lte), Some(BinaryOperator::LessEqual));
/// assert_eq!(token_to_binary_operator(&TokenKind::Pow), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Sub,
    };
    match kind {
        TokenKind::Plus => Some(Add),
        TokenKind::Minus => Some(Sub),
        TokenKind::Mul => Some(Mul),
        TokenKind::Divide => Some(Div),
        TokenKind::Modulo => Some(Mod),
        TokenKind::EqEq => Some(Equal),
        TokenKind::NotEq => Some(NotEqual),
        TokenKind::Lt => Some(Less),
        TokenKind::Gt => Some(Greater),
        TokenKind::Lte => Some(LessEqual),
        TokenKind::Gte => Some(GreaterEqual),
        _ => None,
    }
}
