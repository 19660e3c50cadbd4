//! Julian day and sidereal time.
//!
//! GMST follows the IAU 2006 form: the Earth Rotation Angle plus the
//! Capitaine et al. (2003) polynomial in Julian centuries of TT (UT1 is used
//! for both arguments, which is well inside the accuracy this engine needs).

use super::angles::normalize_degrees;
use chrono::{DateTime, Utc};
use std::f64::consts::TAU;

/// Julian day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian day of the Unix epoch (1970-01-01 00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Julian day of a UTC instant.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let seconds = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Earth Rotation Angle in radians, in [0, 2π).
pub fn earth_rotation_angle(jd: f64) -> f64 {
    let du = jd - J2000_JD;
    let turns = 0.779_057_273_264_0 + 1.002_737_811_911_354_48 * du;
    (TAU * turns).rem_euclid(TAU)
}

/// Greenwich mean sidereal time in degrees, in [0, 360).
pub fn gmst_deg(jd: f64) -> f64 {
    let t = (jd - J2000_JD) / DAYS_PER_CENTURY;
    let poly_arcsec = 0.014_506
        + t * (4_612.156_534
            + t * (1.391_581_7 + t * (-0.000_000_44 + t * (-0.000_029_956 + t * -0.000_000_036_8))));
    let gmst = earth_rotation_angle(jd) + poly_arcsec * ARCSEC_TO_RAD;
    normalize_degrees(gmst.to_degrees())
}

/// Local sidereal time in degrees for an observer at `east_longitude_deg`.
pub fn local_sidereal_time_deg(jd: f64, east_longitude_deg: f64) -> f64 {
    normalize_degrees(gmst_deg(jd) + east_longitude_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    #[test]
    fn test_julian_day_of_j2000() {
        let noon = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_abs_diff_eq!(julian_day(noon), J2000_JD, epsilon = 1e-9);
        let unix = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_abs_diff_eq!(julian_day(unix), UNIX_EPOCH_JD, epsilon = 1e-9);
    }

    #[test]
    fn test_gmst_at_j2000() {
        // 18h 41m 50.55s at 2000-01-01 12:00 UT1
        assert_abs_diff_eq!(gmst_deg(J2000_JD), 280.46062, epsilon = 1e-3);
    }

    #[test]
    fn test_lst_adds_east_longitude() {
        let gmst = gmst_deg(J2000_JD);
        let lst = local_sidereal_time_deg(J2000_JD, 90.0);
        assert_abs_diff_eq!(lst, normalize_degrees(gmst + 90.0), epsilon = 1e-9);
    }
}
