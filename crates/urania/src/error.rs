use crate::bodies::Body;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Setup-time errors. These are fatal: the caller must fix the body list or
/// profile before running any part of the pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("Unknown body identifier: {id}. Valid bodies: {valid:?}")]
    UnknownBody { id: String, valid: Vec<String> },
    #[error("Body list is empty")]
    EmptyBodyList,
    #[error("Body {body} is listed more than once")]
    DuplicateBody { body: Body },
    #[error("Invalid orb {orb} for {aspect}: orbs must be finite and positive")]
    InvalidOrb { aspect: String, orb: f64 },
    #[error("Invalid value {value} for {field}")]
    InvalidWeight { field: String, value: f64 },
    #[error("Invalid symmetry window {window}: must lie in (0, 90)")]
    InvalidWindow { window: f64 },
    #[error("Invalid obliquity {degrees}: must lie in (0, 90)")]
    InvalidObliquity { degrees: f64 },
    #[error("Invalid ayanamsa: {message}")]
    InvalidAyanamsa { message: String },
    #[error("Invalid observer location ({lat}, {lon}): {message}")]
    InvalidLocation { lat: f64, lon: f64, message: String },
    #[error("Unknown aspect preset: {name}. Valid presets: {valid:?}")]
    UnknownPreset { name: String, valid: Vec<String> },
    #[error("Ephemeris path not found: {path}. {message}")]
    EphemerisPath { path: String, message: String },
}

/// Failures reported by a [`crate::ephemeris::PositionResolver`].
///
/// These are always propagated; no default position is ever substituted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("Body {body} is not supported by this resolver")]
    UnsupportedBody { body: Body },
    #[error("Instant {instant} is outside the supported range for {body}")]
    OutOfRange { body: Body, instant: DateTime<Utc> },
    #[error("Failed to resolve {body} at {instant}: {message}")]
    Lookup {
        body: Body,
        instant: DateTime<Utc>,
        message: String,
    },
}

/// Error returned by pipeline operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UraniaError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

pub type Result<T, E = UraniaError> = std::result::Result<T, E>;
