/// Format a whole-rupiah amount for display: `30000` → `"Rp 30.000"`.
///
/// Thousands are grouped with `.` (Indonesian convention), no decimals.
#[must_use]
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_rupiah(0), "Rp 0");
    }

    #[test]
    fn below_one_thousand_is_ungrouped() {
        assert_eq!(format_rupiah(999), "Rp 999");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_rupiah(1_000), "Rp 1.000");
        assert_eq!(format_rupiah(30_000), "Rp 30.000");
        assert_eq!(format_rupiah(125_000), "Rp 125.000");
        assert_eq!(format_rupiah(1_234_567), "Rp 1.234.567");
    }

    #[test]
    fn max_value() {
        assert_eq!(format_rupiah(u64::MAX), "Rp 18.446.744.073.709.551.615");
    }
}
