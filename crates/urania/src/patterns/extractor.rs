use crate::aspects::{Aspect, AspectKind};
use crate::bodies::Body;
use crate::chart::Chart;
use crate::coords::separation;
use crate::patterns::types::{Pattern, PatternKind};
use std::collections::{BTreeMap, BTreeSet};

type Adjacency = BTreeMap<Body, BTreeSet<Body>>;

fn adjacency(aspects: &[Aspect], kind: AspectKind) -> Adjacency {
    let mut adj: Adjacency = BTreeMap::new();
    for aspect in aspects.iter().filter(|a| a.kind == kind) {
        adj.entry(aspect.first).or_default().insert(aspect.second);
        adj.entry(aspect.second).or_default().insert(aspect.first);
    }
    adj
}

fn linked(adj: &Adjacency, a: Body, b: Body) -> bool {
    adj.get(&a).map_or(false, |set| set.contains(&b))
}

fn pairs_of(aspects: &[Aspect], kind: AspectKind, label: PatternKind, out: &mut BTreeSet<Pattern>) {
    for aspect in aspects.iter().filter(|a| a.kind == kind) {
        out.insert(Pattern::new(label, vec![aspect.first, aspect.second]));
    }
}

fn triads(aspects: &[Aspect], out: &mut BTreeSet<Pattern>) {
    let trines = adjacency(aspects, AspectKind::Trine);
    for aspect in aspects.iter().filter(|a| a.kind == AspectKind::Trine) {
        let (a, b) = aspect.pair();
        let (Some(na), Some(nb)) = (trines.get(&a), trines.get(&b)) else {
            continue;
        };
        for c in na.intersection(nb) {
            if *c != a && *c != b {
                out.insert(Pattern::new(PatternKind::Triad, vec![a, b, *c]));
            }
        }
    }
}

// Any four bodies with four or more squares among them contain two
// disjoint square pairs, so enumerating those pairs finds every such set.
fn square_sets(aspects: &[Aspect], out: &mut BTreeSet<Pattern>) {
    let squares: Vec<&Aspect> = aspects.iter().filter(|a| a.kind == AspectKind::Square).collect();
    let adj = adjacency(aspects, AspectKind::Square);
    for i in 0..squares.len() {
        for j in (i + 1)..squares.len() {
            let (a, b) = squares[i].pair();
            let (c, d) = squares[j].pair();
            let group: BTreeSet<Body> = [a, b, c, d].into_iter().collect();
            if group.len() != 4 {
                continue;
            }
            let members: Vec<Body> = group.into_iter().collect();
            let mut count = 0;
            for x in 0..4 {
                for y in (x + 1)..4 {
                    if linked(&adj, members[x], members[y]) {
                        count += 1;
                    }
                }
            }
            if count >= 4 {
                out.insert(Pattern::new(PatternKind::Square, members));
            }
        }
    }
}

fn geometric_pairs(chart: &Chart, symmetry_window_deg: f64, out: &mut BTreeSet<Pattern>) {
    let bodies = &chart.bodies;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let (p, q) = (&bodies[i], &bodies[j]);
            let sep = separation(p.sidereal_longitude, q.sidereal_longitude);
            if sep >= 180.0 - symmetry_window_deg {
                out.insert(Pattern::new(PatternKind::Symmetry, vec![p.body, q.body]));
            }
            if p.sign.opposite() == q.sign {
                out.insert(Pattern::new(PatternKind::Polarity, vec![p.body, q.body]));
            }
        }
    }
}

/// Extract every pattern from a chart and its aspects.
///
/// The result is deduplicated and ordered by kind, then by body tuple.
pub fn compute_patterns(aspects: &[Aspect], chart: &Chart, symmetry_window_deg: f64) -> Vec<Pattern> {
    let mut found = BTreeSet::new();
    pairs_of(aspects, AspectKind::Opposition, PatternKind::Duality, &mut found);
    triads(aspects, &mut found);
    square_sets(aspects, &mut found);
    pairs_of(aspects, AspectKind::Quintile, PatternKind::Pentagram, &mut found);
    pairs_of(aspects, AspectKind::Sextile, PatternKind::Hexagon, &mut found);
    geometric_pairs(chart, symmetry_window_deg, &mut found);
    log::debug!("Extracted {} patterns from {} aspects", found.len(), aspects.len());
    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aspect(first: Body, second: Body, kind: AspectKind) -> Aspect {
        Aspect {
            first,
            second,
            kind,
            separation: kind.angle(),
            deviation: 0.0,
            strength: 0.0,
            applying: false,
            exact: true,
        }
    }

    #[test]
    fn test_single_triad_from_three_trines() {
        let aspects = vec![
            aspect(Body::Sun, Body::Moon, AspectKind::Trine),
            aspect(Body::Moon, Body::Mars, AspectKind::Trine),
            aspect(Body::Sun, Body::Mars, AspectKind::Trine),
        ];
        let mut found = BTreeSet::new();
        triads(&aspects, &mut found);
        let found: Vec<_> = found.into_iter().collect();
        assert_eq!(found, vec![Pattern::new(PatternKind::Triad, vec![Body::Sun, Body::Moon, Body::Mars])]);
    }

    #[test]
    fn test_two_trines_are_not_a_triad() {
        let aspects = vec![
            aspect(Body::Sun, Body::Moon, AspectKind::Trine),
            aspect(Body::Moon, Body::Mars, AspectKind::Trine),
        ];
        let mut found = BTreeSet::new();
        triads(&aspects, &mut found);
        assert!(found.is_empty());
    }

    #[test]
    fn test_square_needs_four_squares() {
        let cross = vec![
            aspect(Body::Sun, Body::Moon, AspectKind::Square),
            aspect(Body::Moon, Body::Mars, AspectKind::Square),
            aspect(Body::Mars, Body::Venus, AspectKind::Square),
            aspect(Body::Sun, Body::Venus, AspectKind::Square),
        ];
        let mut found = BTreeSet::new();
        square_sets(&cross, &mut found);
        assert_eq!(found.len(), 1);
        assert_eq!(
            found.iter().next().unwrap().bodies,
            vec![Body::Sun, Body::Moon, Body::Venus, Body::Mars]
        );

        let mut found = BTreeSet::new();
        square_sets(&cross[..3], &mut found);
        assert!(found.is_empty());
    }

    #[test]
    fn test_pair_relabels() {
        let aspects = vec![
            aspect(Body::Sun, Body::Saturn, AspectKind::Opposition),
            aspect(Body::Venus, Body::Jupiter, AspectKind::Quintile),
            aspect(Body::Moon, Body::Mercury, AspectKind::Sextile),
        ];
        let mut found = BTreeSet::new();
        pairs_of(&aspects, AspectKind::Opposition, PatternKind::Duality, &mut found);
        pairs_of(&aspects, AspectKind::Quintile, PatternKind::Pentagram, &mut found);
        pairs_of(&aspects, AspectKind::Sextile, PatternKind::Hexagon, &mut found);
        let kinds: Vec<PatternKind> = found.iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PatternKind::Duality, PatternKind::Pentagram, PatternKind::Hexagon]);
    }
}
