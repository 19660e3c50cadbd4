use crate::aspects::types::{Aspect, AspectKind, AspectTable};
use crate::bodies::Body;
use crate::chart::{CelestialBody, Chart};
use crate::coords::{separation, signed_delta};

/// Within this many degrees an aspect is flagged exact.
const EXACT_THRESHOLD_DEG: f64 = 0.1;

/// Best-fitting aspect for a separation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectMatch {
    pub kind: AspectKind,
    pub orb: f64,
    pub separation: f64,
    pub deviation: f64,
    pub strength: f64,
}

/// Aspect calculator over a profile's aspect table
pub struct AspectCalculator<'a> {
    table: &'a AspectTable,
}

impl<'a> AspectCalculator<'a> {
    pub fn new(table: &'a AspectTable) -> Self {
        Self { table }
    }

    /// Find the aspect whose window contains `sep`.
    ///
    /// When windows overlap the smallest |deviation| wins, ties going to the
    /// narrower orb.
    pub fn match_separation(&self, sep: f64) -> Option<AspectMatch> {
        let mut best: Option<AspectMatch> = None;
        for def in self.table.definitions() {
            let deviation = sep - def.kind.angle();
            if deviation.abs() > def.orb {
                continue;
            }
            let better = match &best {
                None => true,
                Some(current) => {
                    let (d, c) = (deviation.abs(), current.deviation.abs());
                    d < c || (d == c && def.orb < current.orb)
                }
            };
            if better {
                let strength = (def.base_weight * (1.0 - deviation.abs() / def.orb)).clamp(-1.0, 1.0);
                best = Some(AspectMatch {
                    kind: def.kind,
                    orb: def.orb,
                    separation: sep,
                    deviation,
                    strength,
                });
            }
        }
        best
    }

    /// Calculate the aspect between two bodies, if any.
    ///
    /// The result does not depend on argument order.
    pub fn calculate_aspect(
        &self,
        a: (Body, f64, f64),
        b: (Body, f64, f64),
    ) -> Option<Aspect> {
        let ((first, lon1, speed1), (second, lon2, speed2)) = if a.0 <= b.0 { (a, b) } else { (b, a) };

        let sep = separation(lon1, lon2);
        let matched = self.match_separation(sep)?;

        Some(Aspect {
            first,
            second,
            kind: matched.kind,
            separation: sep,
            deviation: matched.deviation,
            strength: matched.strength,
            applying: is_aspect_applying(lon1, lon2, speed1, speed2, matched.kind.angle(), sep),
            exact: matched.deviation.abs() < EXACT_THRESHOLD_DEG,
        })
    }

    /// Compute aspects between every unordered pair of bodies.
    pub fn compute_aspects(&self, bodies: &[CelestialBody]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (p1, p2) = (&bodies[i], &bodies[j]);
                if let Some(aspect) = self.calculate_aspect(
                    (p1.body, p1.sidereal_longitude, p1.velocity),
                    (p2.body, p2.sidereal_longitude, p2.velocity),
                ) {
                    aspects.push(aspect);
                }
            }
        }
        log::debug!("Found {} aspects among {} bodies", aspects.len(), bodies.len());
        aspects
    }
}

/// Compute the aspects of a chart's bodies. The Ascendant and Midheaven are
/// not aspected.
pub fn compute_aspects(chart: &Chart, table: &AspectTable) -> Vec<Aspect> {
    AspectCalculator::new(table).compute_aspects(&chart.bodies)
}

/// Determine if an aspect is applying (approaching exact) or separating
fn is_aspect_applying(
    lon1: f64,
    lon2: f64,
    speed1: f64,
    speed2: f64,
    aspect_angle: f64,
    current_angle: f64,
) -> bool {
    let relative_speed = speed1 - speed2;

    // Direction is unreliable for near-equal speeds
    if relative_speed.abs() < 0.01 {
        return current_angle < aspect_angle + 0.5;
    }

    let signed_diff = signed_delta(lon2, lon1);
    let current_distance = (current_angle - aspect_angle).abs();

    // Project forward a tenth of a day
    let time_step = 0.1;
    let future_angle = signed_delta(0.0, signed_diff + relative_speed * time_step).abs();
    let future_distance = (future_angle - aspect_angle).abs();

    future_distance < current_distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_opposition_at_exact_separation() {
        let table = AspectTable::standard();
        let calc = AspectCalculator::new(&table);
        let aspect = calc
            .calculate_aspect((Body::Sun, 10.0, 1.0), (Body::Moon, 190.0, 13.0))
            .unwrap();
        assert_eq!(aspect.kind, AspectKind::Opposition);
        assert_relative_eq!(aspect.strength, -0.2);
        assert!(aspect.exact);
    }

    #[test]
    fn test_strength_falls_off_linearly() {
        let table = AspectTable::standard();
        let calc = AspectCalculator::new(&table);
        let m = calc.match_separation(124.0).unwrap();
        assert_eq!(m.kind, AspectKind::Trine);
        assert_relative_eq!(m.deviation, 4.0);
        assert_relative_eq!(m.strength, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_overlapping_windows_pick_smallest_deviation() {
        let table = AspectTable::standard().with_orb(AspectKind::Trine, 16.0);
        let calc = AspectCalculator::new(&table);
        // 134 is inside both the widened Trine and the Sesquiquadrate
        let m = calc.match_separation(134.0).unwrap();
        assert_eq!(m.kind, AspectKind::Sesquiquadrate);
        let m = calc.match_separation(130.0).unwrap();
        assert_eq!(m.kind, AspectKind::Trine);
    }

    #[test]
    fn test_equal_deviation_prefers_narrower_orb() {
        let table = AspectTable::standard()
            .with_orb(AspectKind::Biquintile, 5.0)
            .with_orb(AspectKind::Quincunx, 3.0);
        let calc = AspectCalculator::new(&table);
        // 147 is exactly 3 from both
        let m = calc.match_separation(147.0).unwrap();
        assert_eq!(m.kind, AspectKind::Quincunx);

        let table = AspectTable::standard();
        let calc = AspectCalculator::new(&table);
        let m = calc.match_separation(146.0).unwrap();
        assert_eq!(m.kind, AspectKind::Biquintile);
        let m = calc.match_separation(146.5).unwrap();
        assert_eq!(m.kind, AspectKind::Quincunx);
    }

    #[test]
    fn test_no_aspect_outside_every_orb() {
        let table = AspectTable::standard();
        let calc = AspectCalculator::new(&table);
        assert!(calc.match_separation(100.0).is_none());
        assert!(calc.match_separation(20.0).is_none());
    }

    #[test]
    fn test_aspect_is_symmetric() {
        let table = AspectTable::standard();
        let calc = AspectCalculator::new(&table);
        let ab = calc.calculate_aspect((Body::Mars, 33.0, 0.5), (Body::Venus, 155.0, 1.2));
        let ba = calc.calculate_aspect((Body::Venus, 155.0, 1.2), (Body::Mars, 33.0, 0.5));
        assert_eq!(ab, ba);
        let aspect = ab.unwrap();
        assert_eq!(aspect.first, Body::Venus);
        assert_eq!(aspect.second, Body::Mars);
    }

    #[test]
    fn test_applying_when_closing_in() {
        let table = AspectTable::standard();
        let calc = AspectCalculator::new(&table);
        // Moon at 85 moving toward a square with the Sun at 0
        let aspect = calc
            .calculate_aspect((Body::Sun, 0.0, 1.0), (Body::Moon, 85.0, 13.0))
            .unwrap();
        assert_eq!(aspect.kind, AspectKind::Square);
        assert!(aspect.applying);

        let aspect = calc
            .calculate_aspect((Body::Sun, 0.0, 1.0), (Body::Moon, 95.0, 13.0))
            .unwrap();
        assert!(!aspect.applying);
    }
}
