//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Floor a f64 and clamp it to the u32 range, returning 0 for non-finite or negative values.
#[must_use]
pub fn floor_f64_to_u32(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let max = cast::<u32, f64>(u32::MAX).unwrap_or(f64::MAX);
    cast::<f64, u32>(value.min(max).floor()).unwrap_or(0)
}

/// Convert a usize count to f64 while allowing precision loss in a single location.
#[must_use]
pub fn count_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// Convert a u64 score sum to f64 while allowing precision loss in a single location.
#[must_use]
pub fn sum_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Floor a millisecond timestamp into u64, returning 0 for non-finite or negative values.
#[must_use]
pub fn millis_from_f64(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    cast::<f64, u64>(value.floor()).unwrap_or(u64::MAX)
}

/// Signed difference between two unsigned scores, saturating at the i64 range.
#[must_use]
pub fn signed_difference(from: u64, subtract: u64) -> i64 {
    let from = i64::try_from(from).unwrap_or(i64::MAX);
    let subtract = i64::try_from(subtract).unwrap_or(i64::MAX);
    from.saturating_sub(subtract)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_handles_non_finite_and_negative() {
        assert_eq!(floor_f64_to_u32(f64::NAN), 0);
        assert_eq!(floor_f64_to_u32(f64::INFINITY), 0);
        assert_eq!(floor_f64_to_u32(-3.5), 0);
        assert_eq!(floor_f64_to_u32(59.999), 59);
        assert_eq!(floor_f64_to_u32(60.0), 60);
        assert_eq!(floor_f64_to_u32(f64::from(u32::MAX) * 2.0), u32::MAX);
    }

    #[test]
    fn conversions_cover_ranges() {
        assert!((count_to_f64(3) - 3.0).abs() < f64::EPSILON);
        assert!((sum_to_f64(180) - 180.0).abs() < f64::EPSILON);
        assert_eq!(signed_difference(40, 60), -20);
        assert_eq!(signed_difference(501, 180), 321);
        assert_eq!(millis_from_f64(1_700_000_000_123.9), 1_700_000_000_123);
        assert_eq!(millis_from_f64(f64::NAN), 0);
    }
}
