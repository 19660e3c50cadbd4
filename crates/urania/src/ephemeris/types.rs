use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees, north positive
    pub lat: f64,
    /// Longitude in degrees, east positive
    pub lon: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Result<Self, ConfigurationError> {
        let message = if !lat.is_finite() || !lon.is_finite() {
            Some("coordinates must be finite")
        } else if !(-90.0..=90.0).contains(&lat) {
            Some("latitude must lie in [-90, 90]")
        } else if !(-180.0..=180.0).contains(&lon) {
            Some("longitude must lie in [-180, 180]")
        } else {
            None
        };
        match message {
            Some(message) => Err(ConfigurationError::InvalidLocation {
                lat,
                lon,
                message: message.to_string(),
            }),
            None => Ok(Self { lat, lon }),
        }
    }
}

/// Raw position of a body as reported by a resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Tropical ecliptic longitude in degrees
    pub ecliptic_longitude: f64,
    pub ecliptic_latitude: f64,
    pub right_ascension: f64,
    pub declination: f64,
    /// Geocentric distance in AU, absent for computed points
    pub distance_au: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_validation() {
        assert!(GeoLocation::new(51.5, -0.12).is_ok());
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(0.0, 200.0).is_err());
        assert!(GeoLocation::new(f64::NAN, 0.0).is_err());
    }
}
