/// Format an integer with `,` thousands separators (e.g. `5,000,000,000`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Return `done / total` clamped to [0, 1]. An empty total counts as finished.
#[inline]
pub fn ratio(done: u64, total: u64) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (done as f64 / total as f64).clamp(0.0, 1.0)
}

/// Text shown under the terminal, e.g. `Processed: 3 / 5,000,000,000`.
pub fn counter_label(done: u64, total: u64) -> String {
    format!(
        "Processed: {} / {}",
        format_thousands(done),
        format_thousands(total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(123_456), "123,456");
        assert_eq!(format_thousands(5_000_000_000), "5,000,000,000");
    }

    #[test]
    fn ratio_is_bounded() {
        assert_eq!(ratio(0, 10), 0.0);
        assert_eq!(ratio(5, 10), 0.5);
        assert_eq!(ratio(12, 10), 1.0);
        assert_eq!(ratio(0, 0), 1.0);
    }

    #[test]
    fn label_matches_initial_display() {
        assert_eq!(counter_label(0, 5_000_000_000), "Processed: 0 / 5,000,000,000");
    }
}
