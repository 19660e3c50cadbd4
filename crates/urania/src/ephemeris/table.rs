use crate::bodies::Body;
use crate::ephemeris::resolver::PositionResolver;
use crate::ephemeris::types::{GeoLocation, RawPosition};
use crate::error::ResolutionError;
use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use std::collections::HashMap;

/// The instants a snapshot at `instant` samples: the instant itself and one
/// day earlier for velocity. Fails with [`ResolutionError::OutOfRange`] when
/// the earlier instant is not representable.
pub fn sample_instants(body: Body, instant: DateTime<Utc>) -> Result<[DateTime<Utc>; 2], ResolutionError> {
    let previous = instant
        .checked_sub_signed(Duration::days(1))
        .ok_or(ResolutionError::OutOfRange { body, instant })?;
    Ok([instant, previous])
}

/// Precomputed positions for one observer, served as a resolver.
///
/// Lookups outside the prefetched (body, instant) pairs fail with
/// [`ResolutionError::OutOfRange`].
#[derive(Debug, Clone)]
pub struct PositionTable {
    location: GeoLocation,
    entries: HashMap<(Body, i64), RawPosition>,
}

impl PositionTable {
    pub fn new(location: GeoLocation) -> Self {
        Self {
            location,
            entries: HashMap::new(),
        }
    }

    /// Resolve every (body, instant) pair in parallel, failing on the first
    /// error.
    pub fn prefetch<R: PositionResolver + ?Sized>(
        resolver: &R,
        bodies: &[Body],
        instants: &[DateTime<Utc>],
        location: &GeoLocation,
    ) -> Result<Self, ResolutionError> {
        let pairs: Vec<(Body, DateTime<Utc>)> = instants
            .iter()
            .flat_map(|instant| bodies.iter().map(move |body| (*body, *instant)))
            .collect();

        let resolved = pairs
            .par_iter()
            .map(|(body, instant)| {
                resolver
                    .resolve(*body, *instant, location)
                    .map(|position| ((*body, instant.timestamp_millis()), position))
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "Prefetched {} positions ({} bodies x {} instants)",
            resolved.len(),
            bodies.len(),
            instants.len()
        );

        Ok(Self {
            location: *location,
            entries: resolved.into_iter().collect(),
        })
    }

    pub fn insert(&mut self, body: Body, instant: DateTime<Utc>, position: RawPosition) {
        self.entries.insert((body, instant.timestamp_millis()), position);
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PositionResolver for PositionTable {
    fn resolve(
        &self,
        body: Body,
        instant: DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<RawPosition, ResolutionError> {
        if *location != self.location {
            return Err(ResolutionError::Lookup {
                body,
                instant,
                message: format!(
                    "table was prefetched for ({}, {}), not ({}, {})",
                    self.location.lat, self.location.lon, location.lat, location.lon
                ),
            });
        }
        self.entries
            .get(&(body, instant.timestamp_millis()))
            .copied()
            .ok_or(ResolutionError::OutOfRange { body, instant })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Counting {
        calls: AtomicUsize,
    }

    impl PositionResolver for Counting {
        fn resolve(
            &self,
            body: Body,
            _instant: DateTime<Utc>,
            _location: &GeoLocation,
        ) -> Result<RawPosition, ResolutionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(RawPosition {
                ecliptic_longitude: body as usize as f64 * 10.0,
                ecliptic_latitude: 0.0,
                right_ascension: 0.0,
                declination: 0.0,
                distance_au: Some(1.0),
            })
        }
    }

    #[test]
    fn test_prefetch_then_serve() {
        let source = Counting {
            calls: AtomicUsize::new(0),
        };
        let location = GeoLocation { lat: 10.0, lon: 20.0 };
        let instant = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let instants = sample_instants(Body::Sun, instant).unwrap();
        let table =
            PositionTable::prefetch(&source, &[Body::Sun, Body::Mars], &instants, &location).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(source.calls.load(Ordering::SeqCst), 4);

        let mars = table.resolve(Body::Mars, instants[1], &location).unwrap();
        assert_eq!(mars.ecliptic_longitude, 40.0);

        let missing = table.resolve(Body::Moon, instant, &location).unwrap_err();
        assert_eq!(missing, ResolutionError::OutOfRange { body: Body::Moon, instant });

        let elsewhere = GeoLocation { lat: 0.0, lon: 0.0 };
        assert!(matches!(
            table.resolve(Body::Sun, instant, &elsewhere),
            Err(ResolutionError::Lookup { .. })
        ));
    }

    #[test]
    fn test_sample_instants_at_the_earliest_instant() {
        let err = sample_instants(Body::Moon, DateTime::<Utc>::MIN_UTC).unwrap_err();
        assert_eq!(
            err,
            ResolutionError::OutOfRange { body: Body::Moon, instant: DateTime::<Utc>::MIN_UTC }
        );
    }
}
