/// Converts a non-negative `i64` exponent to the `u32` that
/// [`i64::checked_pow`] expects.
///
/// Returns `None` for negative values and values beyond `u32::MAX`.
#[must_use]
pub fn i64_to_u32_exponent(value: i64) -> Option<u32> {
    u32::try_from(value).ok()
}

/// Integer remainder whose sign follows the divisor, so `-7 % 3 == 2`.
///
/// Returns `None` when the divisor is zero or the operation overflows
/// (`i64::MIN % -1`).
///
/// ## Example
/// ```
/// use stanza::util::num::floored_rem_i64;
///
/// assert_eq!(floored_rem_i64(7, 3), Some(1));
/// assert_eq!(floored_rem_i64(-7, 3), Some(2));
/// assert_eq!(floored_rem_i64(7, -3), Some(-2));
/// assert_eq!(floored_rem_i64(1, 0), None);
/// ```
#[must_use]
pub fn floored_rem_i64(value: i64, divisor: i64) -> Option<i64> {
    let rem = value.checked_rem(divisor)?;
    if rem != 0 && (rem < 0) != (divisor < 0) {
        Some(rem + divisor)
    } else {
        Some(rem)
    }
}

/// Float remainder whose sign follows the divisor.
///
/// ## Example
/// ```
/// use stanza::util::num::floored_rem_f64;
///
/// assert_eq!(floored_rem_f64(5.5, 2.0), 1.5);
/// assert_eq!(floored_rem_f64(-1.0, 3.0), 2.0);
/// ```
#[must_use]
pub fn floored_rem_f64(value: f64, divisor: f64) -> f64 {
    let rem = value % divisor;
    if rem != 0.0 && (rem < 0.0) != (divisor < 0.0) {
        rem + divisor
    } else {
        rem
    }
}
