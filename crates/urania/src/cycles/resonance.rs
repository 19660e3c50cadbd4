use crate::coords::separation;
use crate::cycles::types::{CycleState, Resonance};

/// Pairs whose frequencies and positions line up above `threshold`,
/// strongest first.
pub fn harmonic_resonance(cycles: &[CycleState], threshold: f64) -> Vec<Resonance> {
    let mut pairs = Vec::new();
    for i in 0..cycles.len() {
        for j in (i + 1)..cycles.len() {
            let (a, b) = if cycles[i].body <= cycles[j].body {
                (&cycles[i], &cycles[j])
            } else {
                (&cycles[j], &cycles[i])
            };
            let sep = separation(a.longitude, b.longitude);
            let ratio = if a.frequency == 0.0 || b.frequency == 0.0 {
                1.0
            } else {
                (a.frequency / b.frequency).min(b.frequency / a.frequency)
            };
            let resonance = (1.0 - sep / 180.0) * ratio;
            if resonance > threshold {
                pairs.push(Resonance {
                    first: a.body,
                    second: b.body,
                    separation: sep,
                    frequency_ratio: ratio,
                    resonance,
                });
            }
        }
    }
    pairs.sort_by(|x, y| {
        y.resonance
            .total_cmp(&x.resonance)
            .then_with(|| (x.first, x.second).cmp(&(y.first, y.second)))
    });
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::Body;
    use approx::assert_abs_diff_eq;

    fn state(body: Body, longitude: f64, frequency: f64) -> CycleState {
        CycleState {
            body,
            longitude,
            velocity: 1.0,
            cycle_length: 360.0,
            retrograde: false,
            frequency,
            phase: None,
        }
    }

    #[test]
    fn test_resonance_threshold_and_order() {
        let cycles = vec![
            state(Body::Sun, 0.0, 0.5),
            state(Body::Moon, 18.0, 0.4),
            state(Body::Mars, 9.0, 0.5),
            state(Body::Saturn, 170.0, 0.5),
        ];
        let pairs = harmonic_resonance(&cycles, 0.5);
        // Sun-Mars: (1 - 9/180) * 1.0 = 0.95
        assert_eq!((pairs[0].first, pairs[0].second), (Body::Sun, Body::Mars));
        assert_abs_diff_eq!(pairs[0].resonance, 0.95, epsilon = 1e-12);
        // Sun-Moon: 0.9 * 0.8 = 0.72
        assert!(pairs.iter().any(|p| (p.first, p.second) == (Body::Sun, Body::Moon)));
        assert!(pairs.iter().all(|p| p.second != Body::Saturn && p.first != Body::Saturn));
        assert!(pairs.windows(2).all(|w| w[0].resonance >= w[1].resonance));
    }

    #[test]
    fn test_zero_frequency_counts_as_unit_ratio() {
        let cycles = vec![state(Body::Sun, 0.0, 0.0), state(Body::Moon, 0.0, 0.7)];
        let pairs = harmonic_resonance(&cycles, 0.5);
        assert_eq!(pairs.len(), 1);
        assert_abs_diff_eq!(pairs[0].frequency_ratio, 1.0);
        assert_abs_diff_eq!(pairs[0].resonance, 1.0);
    }
}
