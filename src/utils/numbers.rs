//! Number parsing and human-readable formatting.

use log::warn;

use crate::algorithms::to_decimal_string;

/// Parse a float, logging and returning `0.0` when the input is not a number.
pub fn parse_float_or_zero(s: &str) -> f64 {
    match s.trim().parse::<f64>() {
        Ok(num) => num,
        Err(_) => {
            warn!("Could not convert {:?} to a float", s);
            0.0
        }
    }
}

/// Format an integer with comma thousands separators
///
/// # Examples
/// ```
/// use trafficutils::utils::numbers::comma;
///
/// assert_eq!(comma(1234567), "1,234,567");
/// assert_eq!(comma(-1234), "-1,234");
/// assert_eq!(comma(999), "999");
/// ```
pub fn comma(v: i64) -> String {
    let rendered = to_decimal_string(v);
    match rendered.strip_prefix('-') {
        Some(digits) => format!("-{}", group_thousands(digits)),
        None => group_thousands(&rendered),
    }
}

/// Format a float with comma thousands separators, keeping the shortest
/// fractional part that round-trips.
///
/// The sign bit is kept, so negative zero renders as `-0`.
pub fn commaf(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }

    let rendered = v.abs().to_string();
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
    if v.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a float with exactly two decimal places
pub fn format_float(num: f64) -> String {
    format!("{:.2}", num)
}

/// Join integers with `delim` between consecutive values
pub fn join_ints(values: &[i64], delim: &str) -> String {
    values
        .iter()
        .map(|&v| to_decimal_string(v))
        .collect::<Vec<_>>()
        .join(delim)
}

/// Insert a comma every three digits counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
