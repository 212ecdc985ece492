//! Small numeric helpers shared by the aggregation code.

/// Round to two decimal places.
///
/// Matches decimal rounding of the exact binary value: a true tie goes to
/// the even cent, anything off the tie goes to the nearer cent.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    // exact product is scaled + err
    let err = value.mul_add(100.0, -scaled);
    let cents = if scaled.fract().abs() == 0.5 {
        if err == 0.0 {
            scaled.round_ties_even()
        } else if err > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round()
    };
    cents / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_000_1), 1.24);
        assert_eq!(round2(-1500.504), -1500.5);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_exact_ties_go_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(round2(1800.375), 1800.38);
        assert_eq!(round2(2.5), 2.5);
    }

    #[test]
    fn test_near_ties_follow_binary_value() {
        // 1500.50 * 1.05 lands just above the .525 tie
        assert_eq!(round2(1500.50 * 1.05), 1575.53);
        assert_eq!(round2(1575.525), 1575.53);
        // 2.675 is stored slightly below the tie
        assert_eq!(round2(2.675), 2.67);
    }
}
