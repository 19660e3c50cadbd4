/// Normalize degrees to the [0, 360) range.
pub fn normalize_degrees(value: f64) -> f64 {
    let wrapped = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn separation(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs().rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Signed difference `to - from` wrapped into [-180, 180).
pub fn signed_delta(from: f64, to: f64) -> f64 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize() {
        assert_relative_eq!(normalize_degrees(370.0), 10.0);
        assert_relative_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }

    #[test]
    fn test_separation_is_shortest_arc() {
        assert_relative_eq!(separation(10.0, 190.0), 180.0);
        assert_relative_eq!(separation(350.0, 10.0), 20.0);
        assert_relative_eq!(separation(10.0, 350.0), 20.0);
        assert_relative_eq!(separation(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_signed_delta_wraps() {
        assert_relative_eq!(signed_delta(359.0, 1.0), 2.0);
        assert_relative_eq!(signed_delta(1.0, 359.0), -2.0);
        assert_relative_eq!(signed_delta(0.0, 180.0), -180.0);
        assert_relative_eq!(signed_delta(100.0, 99.5), -0.5);
    }
}
