use super::angles::normalize_degrees;
use serde::{Deserialize, Serialize};

/// Mean obliquity of the ecliptic at J2000, in degrees.
pub const DEFAULT_OBLIQUITY_DEG: f64 = 23.439_28;

const DENOMINATOR_EPSILON: f64 = 1e-9;
const POLE_EPSILON_DEG: f64 = 1e-6;

/// How far a computed angle can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Exact,
    /// Coarse fallback near the poles where the formula is degenerate.
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleEstimate {
    pub longitude: f64,
    pub confidence: Confidence,
}

/// Shift a tropical longitude into the sidereal frame.
pub fn sidereal_longitude(tropical: f64, ayanamsa_deg: f64) -> f64 {
    normalize_degrees(tropical - ayanamsa_deg)
}

/// Ecliptic longitude of the Ascendant.
///
/// `atan2(-cos ST, sin ST·cos ε + tan φ·sin ε)`. Near the poles, or when the
/// denominator vanishes, falls back to 90° or 270° by the sign of `-cos ST`
/// with [`Confidence::Low`].
pub fn ascendant_longitude(
    sidereal_time_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> AngleEstimate {
    let st = sidereal_time_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let numerator = -st.cos();

    let near_pole = (90.0 - latitude_deg.abs()) < POLE_EPSILON_DEG;
    let denominator = if near_pole {
        0.0
    } else {
        st.sin() * eps.cos() + latitude_deg.to_radians().tan() * eps.sin()
    };

    if near_pole || denominator.abs() < DENOMINATOR_EPSILON {
        log::warn!(
            "Ascendant is degenerate at latitude {:.6} (sidereal time {:.6}), using coarse fallback",
            latitude_deg,
            sidereal_time_deg
        );
        let longitude = if numerator > 0.0 { 90.0 } else { 270.0 };
        return AngleEstimate {
            longitude,
            confidence: Confidence::Low,
        };
    }

    AngleEstimate {
        longitude: normalize_degrees(numerator.atan2(denominator).to_degrees()),
        confidence: Confidence::Exact,
    }
}

/// Ecliptic longitude of the Midheaven: `atan2(sin ST, cos ST·cos ε)`.
pub fn midheaven_longitude(sidereal_time_deg: f64, obliquity_deg: f64) -> f64 {
    let st = sidereal_time_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_degrees(st.sin().atan2(st.cos() * eps.cos()).to_degrees())
}

/// Convert ecliptic coordinates to (right ascension, declination), degrees.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let lon = lon_deg.to_radians();
    let lat = lat_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let sin_dec = lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin();
    let dec = sin_dec.clamp(-1.0, 1.0).asin();
    let y = lon.sin() * eps.cos() - lat.tan() * eps.sin();
    let ra = y.atan2(lon.cos());

    (normalize_degrees(ra.to_degrees()), dec.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sidereal_shift() {
        assert_abs_diff_eq!(sidereal_longitude(95.0, 24.0), 71.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sidereal_longitude(10.0, 24.0), 346.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ascendant_at_equator() {
        let asc = ascendant_longitude(90.0, 0.0, DEFAULT_OBLIQUITY_DEG);
        assert_eq!(asc.confidence, Confidence::Exact);
        assert_abs_diff_eq!(asc.longitude, 0.0, epsilon = 1e-9);

        let asc = ascendant_longitude(0.0, 0.0, DEFAULT_OBLIQUITY_DEG);
        assert_abs_diff_eq!(asc.longitude, 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ascendant_pole_fallback() {
        let asc = ascendant_longitude(180.0, 90.0, DEFAULT_OBLIQUITY_DEG);
        assert_eq!(asc.confidence, Confidence::Low);
        assert_eq!(asc.longitude, 90.0);

        let asc = ascendant_longitude(0.0, -90.0, DEFAULT_OBLIQUITY_DEG);
        assert_eq!(asc.confidence, Confidence::Low);
        assert_eq!(asc.longitude, 270.0);
    }

    #[test]
    fn test_midheaven_cardinal_points() {
        assert_abs_diff_eq!(midheaven_longitude(0.0, DEFAULT_OBLIQUITY_DEG), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(midheaven_longitude(90.0, DEFAULT_OBLIQUITY_DEG), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(midheaven_longitude(180.0, DEFAULT_OBLIQUITY_DEG), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ecliptic_to_equatorial() {
        let (ra, dec) = ecliptic_to_equatorial(0.0, 0.0, DEFAULT_OBLIQUITY_DEG);
        assert_abs_diff_eq!(ra, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dec, 0.0, epsilon = 1e-9);

        // Summer solstice point sits at the obliquity
        let (ra, dec) = ecliptic_to_equatorial(90.0, 0.0, DEFAULT_OBLIQUITY_DEG);
        assert_abs_diff_eq!(ra, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dec, DEFAULT_OBLIQUITY_DEG, epsilon = 1e-9);
    }
}
