//! Shadow points from mean-motion elements.
//!
//! The three Lilith variants and the lunar nodes are not physical bodies, so
//! they are computed here from a reference longitude and a constant daily
//! motion. Ketu is always Rahu + 180°.

use crate::bodies::Body;
use crate::coords::{ecliptic_to_equatorial, julian_day, normalize_degrees, DEFAULT_OBLIQUITY_DEG};
use crate::ephemeris::resolver::PositionResolver;
use crate::ephemeris::types::{GeoLocation, RawPosition};
use crate::error::ResolutionError;
use chrono::{DateTime, Utc};

/// Linear mean-motion model: `longitude_at_epoch + days · daily_motion`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElement {
    pub epoch_jd: f64,
    pub longitude_at_epoch: f64,
    /// Degrees per day, negative for regression
    pub daily_motion: f64,
}

impl MeanElement {
    pub fn longitude_at(&self, jd: f64) -> f64 {
        normalize_degrees(self.longitude_at_epoch + (jd - self.epoch_jd) * self.daily_motion)
    }
}

// 2000-01-01 00:00 UT
const EPOCH_2000: f64 = 2_451_544.5;

/// Mean element for a shadow point. Ketu has none of its own.
pub fn mean_element(body: Body) -> Option<MeanElement> {
    let element = match body {
        // Apogee, opposite the 83° perigee reference
        Body::BlackMoonLilith => MeanElement {
            epoch_jd: EPOCH_2000,
            longitude_at_epoch: 263.0,
            daily_motion: 0.111404,
        },
        // 1898-01-01
        Body::DarkMoonLilith => MeanElement {
            epoch_jd: 2_414_290.5,
            longitude_at_epoch: 0.0,
            daily_motion: 3.025,
        },
        // 1927-02-11
        Body::AsteroidLilith => MeanElement {
            epoch_jd: 2_424_922.5,
            longitude_at_epoch: 0.0,
            daily_motion: 0.23,
        },
        Body::Rahu => MeanElement {
            epoch_jd: EPOCH_2000,
            longitude_at_epoch: 15.0,
            daily_motion: -0.053,
        },
        _ => return None,
    };
    Some(element)
}

/// Tropical longitude of a shadow point at a Julian day.
pub fn shadow_longitude(body: Body, jd: f64) -> Option<f64> {
    match body {
        Body::Ketu => shadow_longitude(Body::Rahu, jd).map(|rahu| normalize_degrees(rahu + 180.0)),
        _ => mean_element(body).map(|element| element.longitude_at(jd)),
    }
}

/// Resolves shadow points locally and delegates physical bodies.
pub struct ShadowPointResolver<R> {
    inner: R,
    obliquity_deg: f64,
}

impl<R: PositionResolver> ShadowPointResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            obliquity_deg: DEFAULT_OBLIQUITY_DEG,
        }
    }

    /// Obliquity used to derive equatorial coordinates of the points.
    pub fn with_obliquity(mut self, obliquity_deg: f64) -> Self {
        self.obliquity_deg = obliquity_deg;
        self
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: PositionResolver> PositionResolver for ShadowPointResolver<R> {
    fn resolve(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPosition, ResolutionError> {
        if !body.is_shadow_point() {
            return self.inner.resolve(body, instant, location);
        }
        let longitude = shadow_longitude(body, julian_day(instant))
            .ok_or(ResolutionError::UnsupportedBody { body })?;
        let (right_ascension, declination) = ecliptic_to_equatorial(longitude, 0.0, self.obliquity_deg);
        Ok(RawPosition {
            ecliptic_longitude: longitude,
            ecliptic_latitude: 0.0,
            right_ascension,
            declination,
            distance_au: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    struct NoPlanets;

    impl PositionResolver for NoPlanets {
        fn resolve(
            &self,
            body: Body,
            _instant: DateTime<Utc>,
            _location: &GeoLocation,
        ) -> Result<RawPosition, ResolutionError> {
            Err(ResolutionError::UnsupportedBody { body })
        }
    }

    #[test]
    fn test_epoch_longitudes() {
        assert_abs_diff_eq!(shadow_longitude(Body::BlackMoonLilith, EPOCH_2000).unwrap(), 263.0);
        assert_abs_diff_eq!(shadow_longitude(Body::Rahu, EPOCH_2000).unwrap(), 15.0);
        assert_abs_diff_eq!(shadow_longitude(Body::Ketu, EPOCH_2000).unwrap(), 195.0);
        assert!(shadow_longitude(Body::Sun, EPOCH_2000).is_none());
    }

    #[test]
    fn test_nodes_regress() {
        let later = shadow_longitude(Body::Rahu, EPOCH_2000 + 100.0).unwrap();
        assert_abs_diff_eq!(later, 15.0 - 5.3, epsilon = 1e-9);
        let lilith = shadow_longitude(Body::BlackMoonLilith, EPOCH_2000 + 10.0).unwrap();
        assert_abs_diff_eq!(lilith, 263.0 + 1.11404, epsilon = 1e-9);
    }

    #[test]
    fn test_resolver_serves_points_and_delegates_planets() {
        let resolver = ShadowPointResolver::new(NoPlanets);
        let location = GeoLocation { lat: 0.0, lon: 0.0 };
        let instant = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();

        let ketu = resolver.resolve(Body::Ketu, instant, &location).unwrap();
        assert_abs_diff_eq!(ketu.ecliptic_longitude, 195.0, epsilon = 1e-9);
        assert_eq!(ketu.distance_au, None);

        let err = resolver.resolve(Body::Mars, instant, &location).unwrap_err();
        assert_eq!(err, ResolutionError::UnsupportedBody { body: Body::Mars });
    }
}
