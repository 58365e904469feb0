/// Token types produced by the scanner.
///
/// Declares `Token`, its `TokenKind` categories and the reserved `Keyword`
/// set.
pub mod token;

use logos::Logos;

use crate::{
    error::LexError,
    interpreter::lexer::token::{Keyword, Token, TokenKind},
    position::{Position, Source, Span},
};

/// Result type used by the scanner.
pub type LexResult<T> = Result<T, LexError>;

/// Raw lexemes recognised in the source text.
///
/// Only spaces and tabs separate lexemes; anything unmatched (a newline
/// included) is an illegal character.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t]+")]
enum Lexeme {
    /// Float literals such as `3.14`, `2.` or `.5`. A second `.` ends the
    /// literal.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    #[regex(r"\.[0-9]+", parse_float)]
    Float(f64),
    /// Integer literals such as `42`. Parsed by the scanner so overflow can be
    /// reported with a span.
    #[regex(r"[0-9]+")]
    Int,
    /// Identifiers and keywords: ASCII letters and underscores.
    #[regex(r"[a-zA-Z_]+")]
    Word,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Mul,
    #[token("/")]
    Divide,
    #[token("%")]
    Modulo,
    #[token("^")]
    Pow,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    /// `!` on its own is always an error.
    #[token("!")]
    Bang,
    #[token("<=")]
    Lte,
    #[token("<")]
    Lt,
    #[token(">=")]
    Gte,
    #[token(">")]
    Gt,
}

fn parse_float(lex: &logos::Lexer<Lexeme>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Walks a [`Position`] along the text in step with the byte offsets logos
/// reports.
struct Cursor<'t> {
    text:     &'t str,
    position: Position,
}

impl<'t> Cursor<'t> {
    fn new(source_name: &str, text: &'t str) -> Self {
        Self { text,
               position: Position::start(Source::new(source_name, text)) }
    }

    fn next_char(&self) -> Option<char> {
        self.text.get(self.position.offset..)?.chars().next()
    }

    /// Advances to byte `offset` and returns the position there.
    fn seek(&mut self, offset: usize) -> Position {
        while self.position.offset < offset {
            let current = self.next_char();
            self.position.advance(current);
        }
        self.position.clone()
    }
}

/// Converts source text into a list of tokens.
///
/// The list always ends with exactly one [`TokenKind::Eof`] token placed at
/// the end of the input. Scanning stops at the first error; no partial list
/// is returned.
///
/// # Parameters
/// - `source_name`: Name used in error reports.
/// - `text`: A single line of source text.
///
/// # Errors
/// - [`LexError::IllegalCharacter`] for a character that cannot start a token.
/// - [`LexError::ExpectedCharacter`] for `!` not followed by `=`.
/// - [`LexError::LiteralTooLarge`] for an integer literal beyond `i64`.
///
/// # Examples
/// ```
/// use stanza::interpreter::lexer::{scan, token::TokenKind};
///
/// let tokens = scan("<stdin>", "let a = 2.5").unwrap();
/// let kinds: Vec<String> = tokens.iter().map(ToString::to_string).collect();
/// assert_eq!(kinds, ["KEYWORD:let", "IDENTIFIER:a", "EQ", "FLOAT:2.5", "EOF"]);
///
/// assert!(scan("<stdin>", "1 $ 2").is_err());
/// ```
pub fn scan(source_name: &str, text: &str) -> LexResult<Vec<Token>> {
    let mut cursor = Cursor::new(source_name, text);
    let mut lexer = Lexeme::lexer(text);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let range = lexer.span();
        let slice = lexer.slice();
        let start = cursor.seek(range.start);

        let Ok(lexeme) = lexeme else {
            let character = slice.chars().next().unwrap_or_default();
            let end = start.advanced(Some(character));
            return Err(LexError::IllegalCharacter { character,
                                                    span: Span::new(start, end) });
        };

        let end = cursor.seek(range.end);
        let kind = match lexeme {
            Lexeme::Float(value) => TokenKind::Float(value),
            Lexeme::Int => match slice.parse() {
                Ok(value) => TokenKind::Int(value),
                Err(_) => {
                    return Err(LexError::LiteralTooLarge { literal: slice.to_string(),
                                                           span:    Span::new(start, end), });
                },
            },
            Lexeme::Word => Keyword::from_word(slice).map_or_else(|| TokenKind::Identifier(slice.to_string()),
                                                                  TokenKind::Keyword),
            Lexeme::Bang => {
                // The report covers the `!` and the character that should have been `=`.
                let end = match cursor.next_char() {
                    Some(next) if next != '\n' => end.advanced(Some(next)),
                    _ => end,
                };
                return Err(LexError::ExpectedCharacter { expected: '=',
                                                         span:     Span::new(start, end), });
            },
            Lexeme::Plus => TokenKind::Plus,
            Lexeme::Minus => TokenKind::Minus,
            Lexeme::Mul => TokenKind::Mul,
            Lexeme::Divide => TokenKind::Divide,
            Lexeme::Modulo => TokenKind::Modulo,
            Lexeme::Pow => TokenKind::Pow,
            Lexeme::LParen => TokenKind::LParen,
            Lexeme::RParen => TokenKind::RParen,
            Lexeme::EqEq => TokenKind::EqEq,
            Lexeme::Eq => TokenKind::Eq,
            Lexeme::NotEq => TokenKind::NotEq,
            Lexeme::Lte => TokenKind::Lte,
            Lexeme::Lt => TokenKind::Lt,
            Lexeme::Gte => TokenKind::Gte,
            Lexeme::Gt => TokenKind::Gt,
        };
        tokens.push(Token::spanning(kind, start, end));
    }

    let end_of_input = cursor.seek(text.len());
    tokens.push(Token::new(TokenKind::Eof, end_of_input));

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        scan("<test>", text).unwrap()
                            .into_iter()
                            .map(|token| token.kind)
                            .collect()
    }

    #[test]
    fn scans_a_declaration() {
        assert_eq!(kinds("let a = 10"),
                   vec![TokenKind::Keyword(Keyword::Let),
                        TokenKind::Identifier("a".into()),
                        TokenKind::Eq,
                        TokenKind::Int(10),
                        TokenKind::Eof]);
    }

    #[test]
    fn empty_input_is_only_eof() {
        let tokens = scan("<test>", "").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].span.start.offset, 0);
    }

    #[test]
    fn numbers_take_at_most_one_dot() {
        assert_eq!(kinds("1.2.3"),
                   vec![TokenKind::Float(1.2), TokenKind::Float(0.3), TokenKind::Eof]);
        assert_eq!(kinds("7."), vec![TokenKind::Float(7.0), TokenKind::Eof]);
        assert_eq!(kinds(".5"), vec![TokenKind::Float(0.5), TokenKind::Eof]);
    }

    #[test]
    fn two_character_operators_consume_both() {
        assert_eq!(kinds("<= >= == != < > ="),
                   vec![TokenKind::Lte,
                        TokenKind::Gte,
                        TokenKind::EqEq,
                        TokenKind::NotEq,
                        TokenKind::Lt,
                        TokenKind::Gt,
                        TokenKind::Eq,
                        TokenKind::Eof]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(kinds("IF if Let"),
                   vec![TokenKind::Keyword(Keyword::If),
                        TokenKind::Identifier("if".into()),
                        TokenKind::Identifier("Let".into()),
                        TokenKind::Eof]);
    }

    #[test]
    fn identifiers_do_not_contain_digits() {
        assert_eq!(kinds("a1"),
                   vec![TokenKind::Identifier("a".into()), TokenKind::Int(1), TokenKind::Eof]);
    }

    #[test]
    fn token_spans_track_columns() {
        let tokens = scan("<test>", "12 + abc").unwrap();
        let columns: Vec<(usize, usize)> =
            tokens.iter()
                  .map(|token| (token.span.start.column, token.span.end.column))
                  .collect();
        assert_eq!(columns, vec![(0, 2), (3, 4), (5, 8), (8, 9)]);
    }

    #[test]
    fn illegal_character_is_reported_with_its_position() {
        let error = scan("<test>", "1 + $").unwrap_err();
        let LexError::IllegalCharacter { character, span } = error else {
            panic!("expected an illegal character error, got {error:?}");
        };
        assert_eq!(character, '$');
        assert_eq!((span.start.column, span.end.column), (4, 5));
    }

    #[test]
    fn newline_is_illegal() {
        assert!(matches!(scan("<test>", "1\n2"),
                         Err(LexError::IllegalCharacter { character: '\n', .. })));
    }

    #[test]
    fn lone_bang_expects_equals() {
        let error = scan("<test>", "1 ! 2").unwrap_err();
        let LexError::ExpectedCharacter { expected, span } = error else {
            panic!("expected a missing character error, got {error:?}");
        };
        assert_eq!(expected, '=');
        assert_eq!((span.start.column, span.end.column), (2, 4));
    }

    #[test]
    fn oversized_integer_is_rejected() {
        assert!(matches!(scan("<test>", "99999999999999999999"),
                         Err(LexError::LiteralTooLarge { .. })));
    }

    #[test]
    fn non_ascii_characters_are_illegal() {
        assert!(matches!(scan("<test>", "π"),
                         Err(LexError::IllegalCharacter { character: 'π', .. })));
    }
}
