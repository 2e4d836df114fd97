/// Formats an amount with thousands separators; fractions are rounded away.
pub fn format_amount(amount: Option<f64>) -> String {
    let Some(value) = amount.filter(|value| value.is_finite()) else {
        return "-".to_string();
    };

    #[allow(clippy::cast_possible_truncation)]
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Calendar date of an ISO-8601 timestamp (`2025-02-01T10:00:00Z` -> `2025-02-01`).
pub fn display_date(timestamp: &str) -> String {
    let trimmed = timestamp.trim();
    trimmed
        .split_once('T')
        .map_or(trimmed, |(date, _)| date)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(Some(0.0)), "0");
        assert_eq!(format_amount(Some(999.0)), "999");
        assert_eq!(format_amount(Some(1000.0)), "1,000");
        assert_eq!(format_amount(Some(1_234_567.4)), "1,234,567");
        assert_eq!(format_amount(Some(-45_000.0)), "-45,000");
    }

    #[test]
    fn format_amount_handles_missing_values() {
        assert_eq!(format_amount(None), "-");
        assert_eq!(format_amount(Some(f64::NAN)), "-");
    }

    #[test]
    fn display_date_strips_time() {
        assert_eq!(display_date("2025-02-01T10:00:00.000Z"), "2025-02-01");
        assert_eq!(display_date("2025-02-01"), "2025-02-01");
    }
}
