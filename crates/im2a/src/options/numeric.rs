//! Permissive number conversion for option values
//!
//! Values are read the way C's `atoi`/`atof` read them: leading whitespace is
//! skipped, the longest numeric prefix is used, and input with no numeric
//! prefix yields zero instead of an error. `"80px"` is 80 and `"abc"` is 0.

use std::convert::Infallible;

fn skip_space(input: &str) -> &str {
    input.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c'])
}

/// Integer prefix of `input`, saturating at the `i64` bounds
pub fn lenient_int(input: &str) -> i64 {
    let rest = skip_space(input);
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let mut value: i64 = 0;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }
    value
}

/// Floating point prefix of `input`
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, and the `inf`/`infinity`/`nan` spellings.
pub fn lenient_float(input: &str) -> f64 {
    let rest = skip_space(input);
    let bytes = rest.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let lower = rest[end..].to_ascii_lowercase();
    for word in ["infinity", "inf", "nan"] {
        if lower.starts_with(word) {
            return rest[..end + word.len()].parse().unwrap_or(0.0);
        }
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    rest[..end].parse().unwrap_or(0.0)
}

/// `clap` value parser wrapping [`lenient_int`]
pub(crate) fn parse_int(input: &str) -> Result<i64, Infallible> {
    Ok(lenient_int(input))
}

/// `clap` value parser wrapping [`lenient_float`]
pub(crate) fn parse_float(input: &str) -> Result<f64, Infallible> {
    Ok(lenient_float(input))
}
