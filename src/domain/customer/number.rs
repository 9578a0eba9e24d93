// ============================================================================
// Customer Number Formatting
// ============================================================================

const NUMBER_WIDTH: usize = 5;

/// Renders a sequence value as a fixed-width, zero-padded customer number.
///
/// Values wider than the fixed width render at their natural width; there is
/// no truncation and no error once the counter outgrows five digits.
pub fn format_customer_number(sequence: i64) -> String {
    format!("{sequence:0width$}", width = NUMBER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_five_digits() {
        assert_eq!(format_customer_number(7), "00007");
        assert_eq!(format_customer_number(1), "00001");
        assert_eq!(format_customer_number(99999), "99999");
    }

    #[test]
    fn test_overflow_keeps_natural_width() {
        assert_eq!(format_customer_number(123456), "123456");
        assert_eq!(format_customer_number(10_000_000), "10000000");
    }
}
