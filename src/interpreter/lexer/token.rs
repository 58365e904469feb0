use std::fmt;

use crate::position::{Position, Span};

/// Reserved words of the language.
///
/// `let` is lowercase, every other keyword is written in capitals. `AND` and
/// `OR` are reserved but have no grammar rule yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Let,
    Not,
    And,
    Or,
    If,
    Then,
    Elif,
    Else,
    For,
    In,
    To,
    Step,
    Do,
    While,
}

impl Keyword {
    /// Classifies a scanned word.
    ///
    /// # Examples
    /// ```
    /// use stanza::interpreter::lexer::token::Keyword;
    ///
    /// assert_eq!(Keyword::from_word("WHILE"), Some(Keyword::While));
    /// assert_eq!(Keyword::from_word("while"), None);
    /// ```
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        let keyword = match word {
            "let" => Self::Let,
            "NOT" => Self::Not,
            "AND" => Self::And,
            "OR" => Self::Or,
            "IF" => Self::If,
            "THEN" => Self::Then,
            "ELIF" => Self::Elif,
            "ELSE" => Self::Else,
            "FOR" => Self::For,
            "IN" => Self::In,
            "TO" => Self::To,
            "STEP" => Self::Step,
            "DO" => Self::Do,
            "WHILE" => Self::While,
            _ => return None,
        };
        Some(keyword)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Let => "let",
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::If => "IF",
            Self::Then => "THEN",
            Self::Elif => "ELIF",
            Self::Else => "ELSE",
            Self::For => "FOR",
            Self::In => "IN",
            Self::To => "TO",
            Self::Step => "STEP",
            Self::Do => "DO",
            Self::While => "WHILE",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category of a token, with its literal payload where it has one.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Float(f64),
    Identifier(String),
    Keyword(Keyword),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `^`
    Pow,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `=`
    Eq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
    /// End of input. Every scanned token list ends with exactly one.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "INT:{value}"),
            Self::Float(value) => write!(f, "FLOAT:{value}"),
            Self::Identifier(name) => write!(f, "IDENTIFIER:{name}"),
            Self::Keyword(keyword) => write!(f, "KEYWORD:{keyword}"),
            Self::Plus => f.write_str("PLUS"),
            Self::Minus => f.write_str("MINUS"),
            Self::Mul => f.write_str("MUL"),
            Self::Divide => f.write_str("DIV"),
            Self::Modulo => f.write_str("MOD"),
            Self::Pow => f.write_str("POW"),
            Self::LParen => f.write_str("LPAREN"),
            Self::RParen => f.write_str("RPAREN"),
            Self::Eq => f.write_str("EQ"),
            Self::EqEq => f.write_str("EE"),
            Self::NotEq => f.write_str("NE"),
            Self::Lt => f.write_str("LT"),
            Self::Gt => f.write_str("GT"),
            Self::Lte => f.write_str("LTE"),
            Self::Gte => f.write_str("GTE"),
            Self::Eof => f.write_str("EOF"),
        }
    }
}

/// A scanned token and the span of source text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Creates a single character token: its end is `start` advanced by one.
    #[must_use]
    pub fn new(kind: TokenKind, start: Position) -> Self {
        let end = start.advanced(None);
        Self { kind,
               span: Span::new(start, end) }
    }

    /// Creates a token covering `start..end`.
    #[must_use]
    pub const fn spanning(kind: TokenKind, start: Position, end: Position) -> Self {
        Self { kind,
               span: Span::new(start, end) }
    }

    #[must_use]
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
