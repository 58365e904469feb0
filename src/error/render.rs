use crate::position::Position;

/// Draws the source lines covered by `start..end` with carets underneath.
///
/// Every line the span touches is printed followed by a marker line. The
/// first line is marked from the start column, the last line up to the end
/// column and lines in between are marked in full. At least one caret is
/// drawn per line, so empty spans (such as the end of input) stay visible.
/// Tabs in the excerpt are shown as single spaces to keep the carets aligned.
///
/// # Examples
/// ```
/// use stanza::{
///     error::render::render,
///     position::{Position, Source},
/// };
///
/// let text = "1 + x";
/// let mut start = Position::start(Source::new("<stdin>", text));
/// for c in "1 + ".chars() {
///     start.advance(Some(c));
/// }
/// let end = start.advanced(Some('x'));
///
/// assert_eq!(render(text, &start, &end), "1 + x\n    ^");
/// ```
#[must_use]
pub fn render(text: &str, start: &Position, end: &Position) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = end.line.max(start.line);

    (start.line..=last).map(|number| {
                           let line = lines.get(number).copied().unwrap_or_default();
                           let from = if number == start.line { start.column } else { 0 };
                           let to = if number == last {
                               end.column
                           } else {
                               line.chars().count()
                           };
                           let carets = to.saturating_sub(from).max(1);

                           format!("{}\n{}{}",
                                   line.replace('\t', " "),
                                   " ".repeat(from),
                                   "^".repeat(carets))
                       })
                       .collect::<Vec<_>>()
                       .join("\n")
}
