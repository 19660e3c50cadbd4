use crate::bodies::{Body, BodySet};
use crate::chart::types::{CelestialBody, Chart, ChartAngle};
use crate::coords::{
    ascendant_longitude, julian_day, local_sidereal_time_deg, midheaven_longitude,
    normalize_degrees, sidereal_longitude, signed_delta, Confidence,
};
use crate::ephemeris::{sample_instants, GeoLocation, PositionResolver, RawPosition};
use crate::error::ResolutionError;
use crate::profile::AnalysisProfile;
use crate::zodiac::{dignity_of, house_anchor_degree, house_number, nakshatra_for_longitude, ZodiacSign};
use chrono::{DateTime, Utc};
use rayon::prelude::*;

/// A body's position now and its tropical longitude one day earlier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySample {
    pub body: Body,
    pub position: RawPosition,
    pub previous_longitude: f64,
}

pub fn sample_body<R: PositionResolver + ?Sized>(
    resolver: &R,
    body: Body,
    instant: DateTime<Utc>,
    location: &GeoLocation,
) -> Result<BodySample, ResolutionError> {
    let [now, previous] = sample_instants(body, instant)?;
    let position = resolver.resolve(body, now, location)?;
    let previous = resolver.resolve(body, previous, location)?;
    Ok(BodySample {
        body,
        position,
        previous_longitude: previous.ecliptic_longitude,
    })
}

/// Sample every body in parallel. Order follows `bodies`.
pub fn sample_bodies<R: PositionResolver + ?Sized>(
    resolver: &R,
    bodies: &[Body],
    instant: DateTime<Utc>,
    location: &GeoLocation,
) -> Result<Vec<BodySample>, ResolutionError> {
    bodies
        .par_iter()
        .map(|body| sample_body(resolver, *body, instant, location))
        .collect()
}

/// Classify one sampled body: sidereal longitude, sign, house, nakshatra,
/// dignity and day-over-day motion.
pub fn classify_body(
    sample: &BodySample,
    ayanamsa_now: f64,
    ayanamsa_previous: f64,
    house_anchor_deg: f64,
) -> CelestialBody {
    let position = &sample.position;
    let tropical = normalize_degrees(position.ecliptic_longitude);
    let sidereal = sidereal_longitude(tropical, ayanamsa_now);
    let previous = sidereal_longitude(sample.previous_longitude, ayanamsa_previous);
    let velocity = signed_delta(previous, sidereal);
    let sign = ZodiacSign::from_longitude(sidereal);

    CelestialBody {
        body: sample.body,
        tropical_longitude: tropical,
        sidereal_longitude: sidereal,
        latitude: position.ecliptic_latitude,
        right_ascension: position.right_ascension,
        declination: position.declination,
        distance_au: position.distance_au,
        velocity,
        retrograde: velocity < 0.0,
        sign,
        house: house_number(sidereal, house_anchor_deg),
        nakshatra: nakshatra_for_longitude(sidereal),
        dignity: dignity_of(sample.body, sign),
    }
}

fn chart_angle(tropical: f64, ayanamsa_deg: f64, confidence: Confidence) -> ChartAngle {
    let sidereal = sidereal_longitude(tropical, ayanamsa_deg);
    ChartAngle {
        tropical_longitude: tropical,
        sidereal_longitude: sidereal,
        sign: ZodiacSign::from_longitude(sidereal),
        nakshatra: nakshatra_for_longitude(sidereal),
        confidence,
    }
}

/// Build a chart from already sampled bodies.
pub fn assemble_chart(
    instant: DateTime<Utc>,
    location: &GeoLocation,
    samples: &[BodySample],
    profile: &AnalysisProfile,
) -> Chart {
    let jd = julian_day(instant);
    let ayanamsa_now = profile.ayanamsa.degrees_at(jd);
    let ayanamsa_previous = profile.ayanamsa.degrees_at(jd - 1.0);

    let lst = local_sidereal_time_deg(jd, location.lon);
    let asc = ascendant_longitude(lst, location.lat, profile.obliquity_deg);
    let mc = midheaven_longitude(lst, profile.obliquity_deg);

    let ascendant = chart_angle(asc.longitude, ayanamsa_now, asc.confidence);
    let midheaven = chart_angle(mc, ayanamsa_now, Confidence::Exact);
    let house_anchor_deg = house_anchor_degree(ascendant.sidereal_longitude, profile.house_anchor);

    let bodies = samples
        .iter()
        .map(|sample| classify_body(sample, ayanamsa_now, ayanamsa_previous, house_anchor_deg))
        .collect();

    Chart {
        instant,
        location: *location,
        julian_day: jd,
        ayanamsa_deg: ayanamsa_now,
        local_sidereal_time_deg: lst,
        ascendant,
        midheaven,
        house_anchor_deg,
        bodies,
    }
}

/// Resolve and classify every body of the set at `instant`.
pub fn compute_chart<R: PositionResolver + ?Sized>(
    resolver: &R,
    instant: DateTime<Utc>,
    location: &GeoLocation,
    bodies: &BodySet,
    profile: &AnalysisProfile,
) -> Result<Chart, ResolutionError> {
    let samples = sample_bodies(resolver, bodies.as_slice(), instant, location)?;
    let chart = assemble_chart(instant, location, &samples, profile);
    log::debug!(
        "Chart at {} for ({}, {}): {} bodies, ascendant {:.3}",
        instant,
        location.lat,
        location.lon,
        chart.bodies.len(),
        chart.ascendant.sidereal_longitude
    );
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::Dignity;
    use approx::assert_abs_diff_eq;

    fn sample(body: Body, lon: f64, previous: f64) -> BodySample {
        BodySample {
            body,
            position: RawPosition {
                ecliptic_longitude: lon,
                ecliptic_latitude: 0.0,
                right_ascension: 0.0,
                declination: 0.0,
                distance_au: Some(1.0),
            },
            previous_longitude: previous,
        }
    }

    #[test]
    fn test_classify_sidereal_sign() {
        let body = classify_body(&sample(Body::Sun, 95.0, 94.0), 24.0, 24.0, 0.0);
        assert_abs_diff_eq!(body.sidereal_longitude, 71.0, epsilon = 1e-12);
        assert_eq!(body.sign, ZodiacSign::Gemini);
        assert_eq!(body.house, 3);
        assert_abs_diff_eq!(body.velocity, 1.0, epsilon = 1e-12);
        assert!(!body.retrograde);
    }

    #[test]
    fn test_velocity_across_zero() {
        let body = classify_body(&sample(Body::Mercury, 24.5, 25.0), 24.0, 24.0, 0.0);
        assert_abs_diff_eq!(body.sidereal_longitude, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(body.velocity, -0.5, epsilon = 1e-12);
        assert!(body.retrograde);

        let body = classify_body(&sample(Body::Moon, 25.0, 11.0), 24.0, 24.0, 0.0);
        assert_abs_diff_eq!(body.velocity, 14.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dignity_attached() {
        // 34° tropical is 10° sidereal Aries
        let body = classify_body(&sample(Body::Sun, 34.0, 33.0), 24.0, 24.0, 0.0);
        assert_eq!(body.dignity, Dignity::Exalted);
    }
}
