//! Number-to-text helpers shared by the chart builders and the label animator.
//!
//! Grouping always uses `,` and the decimal point is always `.`, so the output
//! is stable regardless of the host locale.

/// Most fraction digits printed by [`format_grouped`].
const MAX_FRACTION_DIGITS: u32 = 3;

/// Inserts `,` every three digits of an unsigned integer (e.g. `1234567` -> `1,234,567`).
pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

/// Inserts `,` every three digits of a string of ASCII digits.
fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Grouped digits of a finite, non-negative whole number of any magnitude.
fn group_whole(whole: f64) -> String {
    group_digits(&format!("{:.0}", whole))
}

/// Formats `value` with thousands separators and up to three fraction digits,
/// dropping trailing zeros: `55706.51` -> `55,706.51`, `19479.10` -> `19,479.1`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let scale = 10_u32.pow(MAX_FRACTION_DIGITS);
    let mut whole = value.abs().trunc();
    let mut fraction = ((value.abs() - whole) * scale as f64).round() as u32;
    if fraction >= scale {
        whole += 1.0;
        fraction = 0;
    }

    let mut out = String::new();
    if value < 0.0 && (whole != 0.0 || fraction != 0) {
        out.push('-');
    }
    out.push_str(&group_whole(whole));
    if fraction != 0 {
        let frac = format!("{:03}", fraction);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Currency text with the sign only shown for negative values: `$40,242.57`, `-$120.5`.
pub fn format_currency(value: f64) -> String {
    let grouped = format_grouped(value.abs());
    if value < 0.0 && grouped != "0" {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Currency text that always carries a sign: `+$55,706.51`, `-$9,599.69`.
pub fn format_signed_currency(value: f64) -> String {
    let grouped = format_grouped(value.abs());
    if value < 0.0 && grouped != "0" {
        format!("-${}", grouped)
    } else {
        format!("+${}", grouped)
    }
}

/// Whole part of `value` (rounded toward negative infinity) with separators.
pub fn format_floored(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let floored = value.floor();
    let grouped = group_whole(floored.abs());
    if floored < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Fixed-precision text with `-0` normalised away (`-0.0` prints as `0.0`).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value);
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text[1..].to_string()
    } else {
        text
    }
}

/// Shortest plain rendering, as used for win rates: `100`, `95`, `81.8`.
pub fn format_plain(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value)
    } else {
        "0".to_string()
    }
}
