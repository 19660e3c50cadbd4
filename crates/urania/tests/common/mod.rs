#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use urania::ephemeris::{GeoLocation, PositionResolver, RawPosition};
use urania::{Body, ResolutionError};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
}

pub fn observer() -> GeoLocation {
    GeoLocation::new(28.61, 77.21).unwrap()
}

/// Bodies moving at constant speed from fixed tropical longitudes at
/// [`epoch`]. Unlisted bodies are unsupported.
#[derive(Debug, Clone, Default)]
pub struct LinearResolver {
    bodies: HashMap<Body, (f64, f64)>,
}

impl LinearResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// `longitude` at the epoch, `speed` in degrees per day.
    pub fn with(mut self, body: Body, longitude: f64, speed: f64) -> Self {
        self.bodies.insert(body, (longitude, speed));
        self
    }
}

impl PositionResolver for LinearResolver {
    fn resolve(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<RawPosition, ResolutionError> {
        let (longitude, speed) = self
            .bodies
            .get(&body)
            .copied()
            .ok_or(ResolutionError::UnsupportedBody { body })?;
        let days = (instant - epoch()).num_milliseconds() as f64 / 86_400_000.0;
        Ok(RawPosition {
            ecliptic_longitude: (longitude + speed * days).rem_euclid(360.0),
            ecliptic_latitude: 0.0,
            right_ascension: 0.0,
            declination: 0.0,
            distance_au: Some(1.0),
        })
    }
}

/// A plausible sky: every physical body with a typical daily motion.
pub fn sky() -> LinearResolver {
    LinearResolver::new()
        .with(Body::Sun, 0.0, 0.9856)
        .with(Body::Moon, 117.0, 13.18)
        .with(Body::Mercury, 12.0, -0.4)
        .with(Body::Venus, 335.0, 1.2)
        .with(Body::Mars, 318.0, 0.77)
        .with(Body::Jupiter, 47.0, 0.22)
        .with(Body::Saturn, 343.0, 0.11)
        .with(Body::Uranus, 49.0, 0.04)
        .with(Body::Neptune, 357.0, 0.035)
        .with(Body::Pluto, 301.0, 0.013)
}
