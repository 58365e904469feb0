/// Headroom that must be left on the current stack before recursing.
pub const RED_ZONE: usize = 128 * 1024;

/// Size of each extra stack segment allocated when the headroom runs out.
pub const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Runs `f`, first switching to a freshly allocated stack segment when less
/// than [`RED_ZONE`] bytes remain on the current one.
///
/// Every recursive step of the parser and the evaluator goes through here,
/// so deeply nested input cannot exhaust the stack of the calling thread.
///
/// ## Example
/// ```
/// use stanza::util::stack::with_headroom;
///
/// fn depth(n: u32) -> u32 {
///     with_headroom(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
/// }
///
/// assert_eq!(depth(10), 10);
/// ```
pub fn with_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}
