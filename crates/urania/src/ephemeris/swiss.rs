use crate::bodies::Body;
use crate::coords::{ecliptic_to_equatorial, normalize_degrees, DEFAULT_OBLIQUITY_DEG};
use crate::ephemeris::resolver::PositionResolver;
use crate::ephemeris::types::{GeoLocation, RawPosition};
use crate::error::{ConfigurationError, ResolutionError};
use chrono::{DateTime, Datelike, Timelike, Utc};
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use swisseph::swe::{calc_ut, julday};

// Swiss Ephemeris planet IDs
const PLANET_IDS: &[(Body, i32)] = &[
    (Body::Sun, 0),
    (Body::Moon, 1),
    (Body::Mercury, 2),
    (Body::Venus, 3),
    (Body::Mars, 4),
    (Body::Jupiter, 5),
    (Body::Saturn, 6),
    (Body::Uranus, 7),
    (Body::Neptune, 8),
    (Body::Pluto, 9),
];

// FLG_SWIEPH
const FLAGS: i32 = 2;

/// Resolver backed by the Swiss Ephemeris data files.
///
/// Only physical bodies are served; wrap in a
/// [`crate::ephemeris::ShadowPointResolver`] for the shadow points.
pub struct SwissEphemerisResolver {
    _ephemeris_path: PathBuf,
    // The C library keeps global state
    lock: Mutex<()>,
}

impl SwissEphemerisResolver {
    /// Create a resolver with an optional ephemeris path, falling back to
    /// `SWISS_EPHEMERIS_PATH` and then `/usr/local/share/swisseph`.
    pub fn new(ephemeris_path: Option<PathBuf>) -> Result<Self, ConfigurationError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(ConfigurationError::EphemerisPath {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        Ok(Self {
            _ephemeris_path: path,
            lock: Mutex::new(()),
        })
    }
}

impl PositionResolver for SwissEphemerisResolver {
    fn resolve(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<RawPosition, ResolutionError> {
        let planet_code = PLANET_IDS
            .iter()
            .find(|(id, _)| *id == body)
            .map(|(_, code)| *code)
            .ok_or(ResolutionError::UnsupportedBody { body })?;

        let _guard = self.lock.lock().map_err(|_| ResolutionError::Lookup {
            body,
            instant,
            message: "Swiss Ephemeris lock poisoned".to_string(),
        })?;

        let jd = datetime_to_julian_day(instant);
        let result = calc_ut(jd, planet_code as u32, FLAGS as u32).map_err(|e| ResolutionError::Lookup {
            body,
            instant,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let out = result.out;
        let longitude = normalize_degrees(out[0]);
        let latitude = out[1];
        let (right_ascension, declination) =
            ecliptic_to_equatorial(longitude, latitude, DEFAULT_OBLIQUITY_DEG);

        Ok(RawPosition {
            ecliptic_longitude: longitude,
            ecliptic_latitude: latitude,
            right_ascension,
            declination,
            distance_au: Some(out[2]),
        })
    }
}

/// Convert UTC datetime to Julian Day
fn datetime_to_julian_day(dt: DateTime<Utc>) -> f64 {
    let hour_decimal =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
    // GREG_CAL = 1
    julday(dt.year(), dt.month() as i32, dt.day() as i32, hour_decimal, 1)
}
