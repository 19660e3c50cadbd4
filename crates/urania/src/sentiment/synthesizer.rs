use crate::aspects::Aspect;
use crate::chart::{CelestialBody, Chart};
use crate::cycles::CycleState;
use crate::profile::AnalysisProfile;
use crate::sentiment::trend::trend_status;
use crate::sentiment::types::{BodyIndex, CompositeIndex, CompositeReport, IndexTerms};
use crate::zodiac::Dignity;

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Relative speed against the body's mean motion, 0 if the mean is 0.
pub fn velocity_factor(velocity: f64, mean_motion: f64, scale: f64) -> f64 {
    if mean_motion == 0.0 {
        0.0
    } else {
        (velocity - mean_motion) / mean_motion * scale
    }
}

/// Penalty for retrograde motion, 0 when direct.
pub fn retrograde_factor(
    velocity: f64,
    mean_motion: f64,
    dignity: Dignity,
    profile: &AnalysisProfile,
) -> f64 {
    if velocity >= 0.0 {
        return 0.0;
    }
    let weights = &profile.retrograde;
    let mut factor = weights.base;
    if mean_motion != 0.0 {
        factor += weights.speed * velocity.abs() / mean_motion.abs();
    }
    match dignity {
        Dignity::Debilitated => factor += weights.debilitated,
        Dignity::Exalted => factor += weights.exalted,
        _ => {}
    }
    factor
}

/// Index terms for one body. The velocity comes from its cycle when one is
/// given, otherwise from the chart.
pub fn body_index(
    body: &CelestialBody,
    aspects: &[Aspect],
    cycle: Option<&CycleState>,
    profile: &AnalysisProfile,
) -> BodyIndex {
    let velocity = cycle.map_or(body.velocity, |c| c.velocity);
    let mean = profile.mean_motion_of(body.body);

    let aspect_score: f64 = aspects
        .iter()
        .filter(|a| a.involves(body.body))
        .map(|a| a.strength)
        .sum();

    let terms = IndexTerms {
        aspect_score: unit(aspect_score),
        element_modifier: unit(profile.element_modifiers.for_element(body.sign.element())),
        velocity_factor: unit(velocity_factor(velocity, mean, profile.velocity_scale)),
        retrograde_factor: unit(retrograde_factor(velocity, mean, body.dignity, profile)),
        degree_score: unit(body.sidereal_longitude.to_radians().sin() * profile.degree_scale),
    };

    BodyIndex {
        body: body.body,
        index: CompositeIndex::new(terms.sum()),
        terms,
        weight: profile.importance_of(body.body),
    }
}

fn weighted_mean(values: impl Iterator<Item = (f64, f64)>) -> f64 {
    let (total, weight) = values.fold((0.0, 0.0), |(t, w), (value, weight)| {
        (t + value * weight, w + weight)
    });
    if weight > 0.0 {
        total / weight
    } else {
        0.0
    }
}

/// Per-body and aggregate composite index for a chart.
pub fn compute_composite_index(
    chart: &Chart,
    aspects: &[Aspect],
    cycles: &[CycleState],
    profile: &AnalysisProfile,
) -> CompositeReport {
    let bodies: Vec<BodyIndex> = chart
        .bodies
        .iter()
        .map(|b| {
            let cycle = cycles.iter().find(|c| c.body == b.body);
            body_index(b, aspects, cycle, profile)
        })
        .collect();

    let aggregate = weighted_mean(bodies.iter().map(|b| (b.index.value, b.weight)));
    let sidereal = weighted_mean(
        chart
            .bodies
            .iter()
            .map(|b| (b.sidereal_longitude.to_radians().sin(), profile.importance_of(b.body))),
    );

    let trend = bodies
        .iter()
        .find(|b| b.body == profile.focus_body)
        .and_then(|index| {
            let velocity = cycles
                .iter()
                .find(|c| c.body == index.body)
                .map(|c| c.velocity)
                .or_else(|| chart.body(index.body).map(|b| b.velocity))?;
            Some(trend_status(index.body, index.index.value, velocity))
        });

    CompositeReport {
        bodies,
        aggregate: CompositeIndex::new(aggregate),
        sidereal: CompositeIndex::new(sidereal),
        trend,
    }
}
