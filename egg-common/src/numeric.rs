/// Strip trailing `'0'` characters, then a trailing `'.'` if one is left.
///
/// This is a character rule, not a numeric one: `"100"` becomes `"1"` and
/// `"000"` becomes the empty string. Use [`format_decimal`] when formatting
/// numbers.
pub fn trim_trailing_zeros(s: &str) -> &str {
    let s = s.trim_end_matches('0');
    s.strip_suffix('.').unwrap_or(s)
}

/// Format `value` with at most `places` fractional digits, dropping
/// trailing fractional zeros.
pub fn format_decimal(value: f64, places: usize) -> String {
    let fixed = format!("{value:.places$}");
    if places == 0 {
        return fixed;
    }
    trim_trailing_zeros(&fixed).to_string()
}
