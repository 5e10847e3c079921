//! Display formatting for operand strings.

/// Stringifies a computation result with the shortest round-trip form
/// (`4` not `4.0`). Negative zero collapses to `0`.
pub(crate) fn stringify(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Formats an operand string for display: the integer part gets thousands
/// separators (groups of three, ja-JP/Western convention), the fractional
/// part is re-appended verbatim. Presentation only; internal state always
/// keeps the raw string.
///
/// Non-numeric integer parts (e.g. `inf`) pass through unchanged.
pub fn format_operand(operand: &str) -> String {
    let (int_part, frac_part) = match operand.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (operand, None),
    };

    let grouped = match group_thousands(int_part) {
        Some(g) => g,
        None => int_part.to_string(),
    };

    match frac_part {
        Some(f) => format!("{}.{}", grouped, f),
        None => grouped,
    }
}

/// Inserts `,` every three digits from the right. Returns `None` when the
/// input is not a plain (optionally signed) digit string.
fn group_thousands(int_part: &str) -> Option<String> {
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let lead = digits.len() % 3;
    if lead > 0 {
        out.push_str(&digits[..lead]);
    }
    for (i, chunk) in digits.as_bytes()[lead..].chunks(3).enumerate() {
        if lead > 0 || i > 0 {
            out.push(',');
        }
        // chunks of a valid ASCII digit string
        out.push_str(std::str::from_utf8(chunk).ok()?);
    }
    Some(format!("{}{}", sign, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part_in_threes() {
        assert_eq!(format_operand("0"), "0");
        assert_eq!(format_operand("123"), "123");
        assert_eq!(format_operand("1234"), "1,234");
        assert_eq!(format_operand("1234567"), "1,234,567");
        assert_eq!(format_operand("1000000000"), "1,000,000,000");
    }

    #[test]
    fn fraction_is_verbatim() {
        assert_eq!(format_operand("1234.5678"), "1,234.5678");
        assert_eq!(format_operand("0.3000000000000000444"), "0.3000000000000000444");
        assert_eq!(format_operand("12."), "12.");
    }

    #[test]
    fn negative_sign_preserved() {
        assert_eq!(format_operand("-7"), "-7");
        assert_eq!(format_operand("-1234.5"), "-1,234.5");
    }

    #[test]
    fn non_numeric_passes_through() {
        assert_eq!(format_operand("inf"), "inf");
        assert_eq!(format_operand(""), "");
    }

    #[test]
    fn stringify_drops_trailing_zero_fraction() {
        assert_eq!(stringify(4.0), "4");
        assert_eq!(stringify(3.5), "3.5");
        assert_eq!(stringify(-0.0), "0");
    }
}
