//! Numeric text conversions shared by form handling and row rendering.
//!
//! Form fields are coerced the way a browser coerces `Number(text)`, and
//! rendered numbers follow the browser's number-to-text rules, so the same
//! input produces the same row text on every display sink.

/// Coerces free-form field text into a number.
///
/// Never fails: text that is not a numeric literal becomes `NaN`, and blank
/// text becomes `0`.
#[must_use]
pub fn coerce_number(input: &str) -> f64 {
    let text = input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(text) {
        return value;
    }

    if is_decimal_literal(text) {
        text.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Formats a number the way a browser stringifies it.
///
/// Integral values have no fractional part (`5`, not `5.0`), `-0` prints as
/// `0`, and magnitudes outside `[1e-6, 1e21)` switch to exponent notation
/// (`1e+21`, `1.5e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_owned();
    }
    if value < 0.0 {
        return format!("-{}", format_number(-value));
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `7.5e-1`.
    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    if k <= n && n <= 21 {
        let mut out = digits;
        out.push_str(&"0".repeat((n - k) as usize));
        out
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 >= 0 { '+' } else { '-' };
        let magnitude = (n - 1).abs();
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{sign}{magnitude}")
        } else {
            format!("{lead}.{rest}e{sign}{magnitude}")
        }
    }
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let body = &text[2..];
    if body.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0_f64;
    for c in body.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return Some(f64::NAN);
        };
        value = value * f64::from(radix) + f64::from(digit);
    }
    Some(value)
}

fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::{coerce_number, format_number};

    #[test]
    fn coerce_accepts_plain_decimals() {
        assert_eq!(coerce_number("12"), 12.0);
        assert_eq!(coerce_number(" 4.5 "), 4.5);
        assert_eq!(coerce_number("-.5"), -0.5);
        assert_eq!(coerce_number("5."), 5.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number("+2E-1"), 0.2);
    }

    #[test]
    fn coerce_blank_text_is_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number(" \t\n"), 0.0);
    }

    #[test]
    fn coerce_radix_and_infinity_literals() {
        assert_eq!(coerce_number("0x1F"), 31.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("Infinity"), f64::INFINITY);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn coerce_rejects_non_literals_as_nan() {
        for text in [
            "abc", "12abc", "inf", "nan", "infinity", "1_000", "-0x10", "0x", "0xZZ", ".", "1e",
            "1.2.3",
        ] {
            assert!(coerce_number(text).is_nan(), "{text:?} should coerce to NaN");
        }
    }

    #[test]
    fn format_matches_browser_number_text() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.75), "0.75");
        assert_eq!(format_number(2.99), "2.99");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-3.25), "-3.25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn format_special_and_extreme_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(123_456_789_012_345_680_000.0), "123456789012345680000");
    }
}
