/// Whitespace that separates tokens: ASCII space, tab, line feed, vertical
/// tab, form feed and carriage return. Non-breaking and other Unicode spaces
/// stay inside a token.
pub fn is_token_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Strip leading and trailing control characters and ASCII spaces
/// (everything up to U+0020). Unicode spaces such as NBSP are kept.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Parse a single whitespace-free token as a number.
///
/// Thousands separators are removed before parsing:
/// - "68" -> 68.0
/// - "1,234.5" -> 1234.5
/// - "-12" -> -12.0
/// - "$100", "(45)", "n/a" -> None
///
/// Non-finite results ("inf", "NaN") are not treated as numbers.
pub fn parse_number(token: &str) -> Option<f64> {
    let normalized = token.replace(',', "");
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Find the first token on a line that parses as a number.
///
/// Returns the value together with the token it came from.
pub fn first_number(line: &str) -> Option<(f64, &str)> {
    line.split(is_token_separator)
        .filter(|token| !token.is_empty())
        .find_map(|token| parse_number(token).map(|v| (v, token)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_token() {
        assert_eq!(parse_number("68"), Some(68.0));
    }

    #[test]
    fn test_thousands_separator_stripped() {
        assert_eq!(parse_number("1,234.5"), Some(1234.5));
        assert_eq!(parse_number("12,345,678"), Some(12_345_678.0));
    }

    #[test]
    fn test_negative_and_exponent() {
        assert_eq!(parse_number("-12"), Some(-12.0));
        assert_eq!(parse_number("1e3"), Some(1000.0));
    }

    #[test]
    fn test_decorated_tokens_rejected() {
        assert_eq!(parse_number("$100"), None);
        assert_eq!(parse_number("(45)"), None);
        assert_eq!(parse_number("12%"), None);
        assert_eq!(parse_number(","), None);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("infinity"), None);
    }

    #[test]
    fn test_first_number_scans_left_to_right() {
        let (v, token) = first_number("Revenue 100 200 300").unwrap();
        assert_eq!(v, 100.0);
        assert_eq!(token, "100");
    }

    #[test]
    fn test_first_number_skips_words() {
        let (v, _) = first_number("Total SG&A Expenses 1,234.5 1,100.0").unwrap();
        assert_eq!(v, 1234.5);
    }

    #[test]
    fn test_runs_of_whitespace() {
        let (v, _) = first_number("Revenue\t\t  42 \x0b 43").unwrap();
        assert_eq!(v, 42.0);
    }

    #[test]
    fn test_no_number() {
        assert!(first_number("Revenue by segment").is_none());
        assert!(first_number("").is_none());
    }

    #[test]
    fn test_unicode_spaces_do_not_split_tokens() {
        assert!(first_number("SG&A\u{3000}5").is_none());
        assert!(first_number("Revenue\u{a0}100").is_none());
        let (v, token) = first_number("SG&A\u{a0}total 7").unwrap();
        assert_eq!(v, 7.0);
        assert_eq!(token, "7");
    }

    #[test]
    fn test_trim_line_keeps_unicode_spaces() {
        assert_eq!(trim_line("\x0c\t Revenue 5 \r"), "Revenue 5");
        assert_eq!(trim_line("\u{a0}Revenue 5\u{a0}"), "\u{a0}Revenue 5\u{a0}");
        assert_eq!(trim_line("\u{0}\u{1f}x"), "x");
    }
}
