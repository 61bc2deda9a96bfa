//! Base-10 rendering of signed integers by manual digit extraction.
//!
//! Digits are written from the end of a fixed buffer towards the front, so the
//! filled tail is already in reading order. The magnitude is taken with
//! `unsigned_abs`, which keeps `i64::MIN` representable.

/// Sign plus the 19 digits of `u64::MAX / 2 + 1`.
const MAX_DECIMAL_LEN: usize = 20;

/// Render `n` as `-?[0-9]+` without leading zeros.
///
/// # Examples
/// ```
/// use trafficutils::algorithms::to_decimal_string;
///
/// assert_eq!(to_decimal_string(0), "0");
/// assert_eq!(to_decimal_string(-42), "-42");
/// assert_eq!(to_decimal_string(i64::MIN), "-9223372036854775808");
/// ```
pub fn to_decimal_string(n: impl Into<i64>) -> String {
    let n = n.into();
    let mut buf = [0u8; MAX_DECIMAL_LEN];
    let mut pos = buf.len();
    let mut magnitude = n.unsigned_abs();

    loop {
        pos -= 1;
        buf[pos] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }

    if n < 0 {
        pos -= 1;
        buf[pos] = b'-';
    }

    // Only ASCII digits and '-' were written
    buf[pos..].iter().map(|&b| b as char).collect()
}
