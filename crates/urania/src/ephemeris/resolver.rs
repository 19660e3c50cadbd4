use crate::bodies::Body;
use crate::ephemeris::types::{GeoLocation, RawPosition};
use crate::error::ResolutionError;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of raw body positions.
///
/// Implementations must be deterministic for a given (body, instant,
/// location) and must report failures instead of substituting defaults.
/// They are shared across rayon workers, hence `Send + Sync`.
pub trait PositionResolver: Send + Sync {
    fn resolve(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPosition, ResolutionError>;
}

impl<R: PositionResolver + ?Sized> PositionResolver for &R {
    fn resolve(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPosition, ResolutionError> {
        (**self).resolve(body, instant, location)
    }
}

impl<R: PositionResolver + ?Sized> PositionResolver for Box<R> {
    fn resolve(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPosition, ResolutionError> {
        (**self).resolve(body, instant, location)
    }
}

impl<R: PositionResolver + ?Sized> PositionResolver for Arc<R> {
    fn resolve(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPosition, ResolutionError> {
        (**self).resolve(body, instant, location)
    }
}
