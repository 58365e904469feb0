/// The runtime value type.
///
/// Defines `Value`, the tagged Number/Boolean union every expression
/// evaluates to, together with its span tagging and display rules.
pub mod core;
/// Numeric payloads.
///
/// Defines `Number`, an integer or a float, with mixed-kind comparison and
/// checked promotion to float.
pub mod number;
