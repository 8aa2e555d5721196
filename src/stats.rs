/// Percentage of `num` out of `den`, or 0 when `den` is 0.
pub fn pct(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        (num as f64 / den as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_denominator_is_zero() {
        assert_eq!(pct(0, 0), 0.0);
        assert_eq!(pct(42, 0), 0.0);
        assert_eq!(pct(u32::MAX, 0), 0.0);
    }

    #[test]
    fn test_exact_percentage() {
        assert_eq!(pct(1, 2), 50.0);
        assert_eq!(pct(3, 4), 75.0);
        assert_eq!(pct(2, 1), 200.0);
        assert_eq!(pct(72, 98), (72.0 / 98.0) * 100.0);
    }

    #[test]
    fn test_zero_numerator() {
        assert_eq!(pct(0, 10), 0.0);
    }
}
