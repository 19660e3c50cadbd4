use crate::bodies::{Body, BodySet};
use crate::chart::{sample_bodies, Chart};
use crate::coords::{julian_day, normalize_degrees, sidereal_longitude, signed_delta};
use crate::cycles::types::{CyclePhase, CycleState, STATIONARY_EPSILON};
use crate::ephemeris::{GeoLocation, PositionResolver};
use crate::error::ResolutionError;
use crate::profile::AnalysisProfile;
use chrono::{DateTime, Duration, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Sidereal longitude and daily motion of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub body: Body,
    pub longitude: f64,
    pub velocity: f64,
}

impl MotionSample {
    /// Motion from two sidereal longitudes one day apart.
    pub fn from_longitudes(body: Body, longitude: f64, previous_longitude: f64) -> Self {
        Self {
            body,
            longitude,
            velocity: signed_delta(previous_longitude, longitude),
        }
    }
}

/// Days for a full circle at `velocity`, infinite when stationary.
pub fn cycle_length(velocity: f64) -> f64 {
    if velocity.abs() > STATIONARY_EPSILON {
        360.0 / velocity.abs()
    } else {
        f64::INFINITY
    }
}

fn offset_instant(instant: DateTime<Utc>, days: f64) -> Option<DateTime<Utc>> {
    let delta = Duration::milliseconds((days * MILLIS_PER_DAY).round() as i64);
    instant.checked_add_signed(delta)
}

/// Phase within the current circle, `None` when the cycle is infinite.
pub fn cycle_phase(
    longitude: f64,
    velocity: f64,
    cycle_length: f64,
    instant: DateTime<Utc>,
) -> Option<CyclePhase> {
    if !cycle_length.is_finite() {
        return None;
    }
    let progress = longitude / 360.0;
    let retrograde = velocity < 0.0;

    let (days_since_start, percent_from_start) = if retrograde {
        ((1.0 - progress) * cycle_length, (1.0 - progress) * 100.0)
    } else {
        (progress * cycle_length, progress * 100.0)
    };
    let days_to_end = cycle_length - days_since_start;
    let start_longitude = normalize_degrees(longitude - days_since_start * velocity);

    Some(CyclePhase {
        progress,
        days_since_start,
        days_to_end,
        start_longitude,
        midpoint_longitude: normalize_degrees(start_longitude + 180.0),
        percent_from_start,
        percent_to_midpoint: 100.0 - percent_from_start,
        started_at: offset_instant(instant, -days_since_start),
        ends_at: offset_instant(instant, days_to_end),
    })
}

/// Cycle states for the given motions.
///
/// Frequencies are normalized by the largest |velocity| in the set and
/// phased against `reference_longitude`; all are 0 when nothing moves.
pub fn cycles_from_motion(
    samples: &[MotionSample],
    reference_longitude: f64,
    instant: DateTime<Utc>,
) -> Vec<CycleState> {
    let max_abs = samples.iter().map(|s| s.velocity.abs()).fold(0.0, f64::max);

    samples
        .iter()
        .map(|sample| {
            let length = cycle_length(sample.velocity);
            let frequency = if max_abs > 0.0 {
                let phase = (sample.longitude - reference_longitude).to_radians().cos();
                (sample.velocity / max_abs * phase).clamp(-1.0, 1.0)
            } else {
                0.0
            };
            CycleState {
                body: sample.body,
                longitude: sample.longitude,
                velocity: sample.velocity,
                cycle_length: length,
                retrograde: sample.velocity < 0.0,
                frequency,
                phase: cycle_phase(sample.longitude, sample.velocity, length, instant),
            }
        })
        .collect()
}

/// Cycle states from a chart's already sampled motion.
pub fn cycles_for_chart(chart: &Chart, reference_longitude: f64) -> Vec<CycleState> {
    let samples: Vec<MotionSample> = chart
        .bodies
        .iter()
        .map(|b| MotionSample {
            body: b.body,
            longitude: b.sidereal_longitude,
            velocity: b.velocity,
        })
        .collect();
    cycles_from_motion(&samples, reference_longitude, chart.instant)
}

/// Sidereal longitude of the profile's reference body, taken from the chart
/// when present and resolved otherwise.
pub fn reference_longitude<R: PositionResolver + ?Sized>(
    resolver: &R,
    chart: &Chart,
    profile: &AnalysisProfile,
) -> Result<f64, ResolutionError> {
    if let Some(body) = chart.body(profile.reference_body) {
        return Ok(body.sidereal_longitude);
    }
    let raw = resolver.resolve(profile.reference_body, chart.instant, &chart.location)?;
    Ok(sidereal_longitude(raw.ecliptic_longitude, chart.ayanamsa_deg))
}

/// Sample each body at `instant` and one day earlier and derive its cycle.
pub fn compute_cycles<R: PositionResolver + ?Sized>(
    resolver: &R,
    instant: DateTime<Utc>,
    location: &GeoLocation,
    bodies: &BodySet,
    profile: &AnalysisProfile,
) -> Result<Vec<CycleState>, ResolutionError> {
    let jd = julian_day(instant);
    let ayanamsa_now = profile.ayanamsa.degrees_at(jd);
    let ayanamsa_previous = profile.ayanamsa.degrees_at(jd - 1.0);

    let samples = sample_bodies(resolver, bodies.as_slice(), instant, location)?;
    let motion: Vec<MotionSample> = samples
        .iter()
        .map(|s| {
            MotionSample::from_longitudes(
                s.body,
                sidereal_longitude(s.position.ecliptic_longitude, ayanamsa_now),
                sidereal_longitude(s.previous_longitude, ayanamsa_previous),
            )
        })
        .collect();

    let reference = match motion.iter().find(|m| m.body == profile.reference_body) {
        Some(m) => m.longitude,
        None => {
            let raw = resolver.resolve(profile.reference_body, instant, location)?;
            sidereal_longitude(raw.ecliptic_longitude, ayanamsa_now)
        }
    };

    Ok(cycles_from_motion(&motion, reference, instant))
}
