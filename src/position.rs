use std::{fmt, sync::Arc};

/// A named piece of source text.
///
/// Every [`Position`] holds a shared handle to the source it points into, so
/// errors can be rendered long after scanning has finished.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Source {
    /// Name shown in error reports (a file path, `<stdin>`, ...).
    pub name: String,
    /// The full text that was scanned.
    pub text: String,
}

impl Source {
    /// Creates a new shared source record.
    #[must_use]
    pub fn new(name: &str, text: &str) -> Arc<Self> {
        Arc::new(Self { name: name.to_string(),
                        text: text.to_string(), })
    }
}

/// A location inside a [`Source`].
///
/// `offset` is a byte offset into the source text, `line` and `column` are
/// zero based. Positions are plain values: cloning one never aliases the
/// state of another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line:   usize,
    pub column: usize,
    source:     Arc<Source>,
}

impl Position {
    /// Returns the position of the first character of `source`.
    #[must_use]
    pub const fn start(source: Arc<Source>) -> Self {
        Self { offset: 0,
               line: 0,
               column: 0,
               source }
    }

    /// Moves one character forward.
    ///
    /// `current` is the character being stepped over. Stepping over a newline
    /// moves to the start of the next line; stepping past the end of the input
    /// (`None`) still advances by one.
    ///
    /// # Examples
    /// ```
    /// use stanza::position::{Position, Source};
    ///
    /// let mut pos = Position::start(Source::new("<test>", "a\nb"));
    /// pos.advance(Some('a'));
    /// assert_eq!((pos.offset, pos.line, pos.column), (1, 0, 1));
    /// pos.advance(Some('\n'));
    /// assert_eq!((pos.offset, pos.line, pos.column), (2, 1, 0));
    /// ```
    pub fn advance(&mut self, current: Option<char>) -> &mut Self {
        self.offset += current.map_or(1, char::len_utf8);
        self.column += 1;

        if current == Some('\n') {
            self.line += 1;
            self.column = 0;
        }
        self
    }

    /// Returns a copy of this position advanced by one character.
    #[must_use]
    pub fn advanced(&self, current: Option<char>) -> Self {
        let mut next = self.clone();
        next.advance(current);
        next
    }

    /// The source this position points into.
    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }

    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source.name
    }

    #[must_use]
    pub fn source_text(&self) -> &str {
        &self.source.text
    }
}

/// A half-open region of source text between two positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end:   Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns the span running from the start of `self` to the end of `other`.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self { start: self.start.clone(),
               end:   other.end.clone(), }
    }

    #[must_use]
    pub fn source_name(&self) -> &str {
        self.start.source_name()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "{}:{}:{}",
               self.start.source_name(),
               self.start.line + 1,
               self.start.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_follows_utf8_width() {
        let mut pos = Position::start(Source::new("<test>", "é1"));
        pos.advance(Some('é'));
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn advancing_past_the_end_still_moves() {
        let pos = Position::start(Source::new("<test>", ""));
        let next = pos.advanced(None);
        assert!(next.offset > pos.offset);
        assert_eq!(next.line, 0);
    }

    #[test]
    fn span_to_joins_outer_bounds() {
        let source = Source::new("<test>", "1 + 2");
        let start = Position::start(source);
        let mut far = start.clone();
        for c in "1 + 2".chars() {
            far.advance(Some(c));
        }
        let left = Span::new(start.clone(), start.advanced(Some('1')));
        let right = Span::new(far.clone(), far.advanced(None));
        let joined = left.to(&right);
        assert_eq!(joined.start, start);
        assert_eq!(joined.end.offset, 6);
    }

    #[test]
    fn span_display_is_one_based() {
        let pos = Position::start(Source::new("script.stz", "x"));
        let span = Span::new(pos.clone(), pos.advanced(Some('x')));
        assert_eq!(span.to_string(), "script.stz:1:1");
    }
}
