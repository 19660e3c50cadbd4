mod common;

use common::{epoch, observer, LinearResolver};
use urania::aspects::{AspectCalculator, AspectTable};
use urania::{AnalysisProfile, AspectKind, Body, BodySet, Urania};

#[test]
fn test_opposition_between_sun_and_moon() {
    let resolver = LinearResolver::new()
        .with(Body::Sun, 10.0, 1.0)
        .with(Body::Moon, 190.0, 13.0);
    let engine = Urania::with_default_profile(resolver);
    let bodies = BodySet::new(vec![Body::Sun, Body::Moon]).unwrap();
    let chart = engine.compute_chart(epoch(), &observer(), &bodies).unwrap();

    let aspects = engine.compute_aspects(&chart);
    assert_eq!(aspects.len(), 1);
    let aspect = &aspects[0];
    assert_eq!(aspect.kind, AspectKind::Opposition);
    assert_eq!(aspect.pair(), (Body::Sun, Body::Moon));
    assert!(aspect.deviation.abs() < 1e-9);
    assert!((aspect.strength + 0.2).abs() < 1e-9);
    assert!(aspect.exact);
}

#[test]
fn test_aspect_is_symmetric() {
    let table = AspectTable::standard();
    let calculator = AspectCalculator::new(&table);

    let forward = calculator.calculate_aspect((Body::Mars, 10.0, 0.5), (Body::Venus, 100.0, 1.2));
    let backward = calculator.calculate_aspect((Body::Venus, 100.0, 1.2), (Body::Mars, 10.0, 0.5));
    assert!(forward.is_some());
    assert_eq!(forward, backward);
    assert_eq!(forward.unwrap().kind, AspectKind::Square);
}

#[test]
fn test_near_opposition_is_never_a_conjunction() {
    let table = AspectTable::standard();
    let calculator = AspectCalculator::new(&table);

    let mut sep = 172.5;
    while sep <= 180.0 {
        let matched = calculator.match_separation(sep).unwrap();
        assert_eq!(matched.kind, AspectKind::Opposition, "separation {}", sep);
        sep += 0.25;
    }
}

#[test]
fn test_every_match_lies_within_its_orb() {
    let table = AspectTable::standard();
    let calculator = AspectCalculator::new(&table);

    for tenth in 0..=1800 {
        let sep = tenth as f64 / 10.0;
        if let Some(matched) = calculator.match_separation(sep) {
            let orb = table.get(matched.kind).unwrap().orb;
            assert!(matched.deviation.abs() <= orb);
            assert!((-1.0..=1.0).contains(&matched.strength));
        }
    }
}

#[test]
fn test_classic_preset_widens_conjunction() {
    let standard = AspectTable::standard();
    let classic = AspectTable::preset("classic").unwrap();

    assert!(AspectCalculator::new(&standard).match_separation(9.0).is_none());
    let matched = AspectCalculator::new(&classic).match_separation(9.0).unwrap();
    assert_eq!(matched.kind, AspectKind::Conjunction);
    assert!(classic.get(AspectKind::Quincunx).is_none());
}

#[test]
fn test_unknown_preset_is_rejected() {
    assert!(AspectTable::preset("ptolemaic").is_err());
}

#[test]
fn test_major_only_profile_drops_minor_aspects() {
    let resolver = LinearResolver::new()
        .with(Body::Sun, 0.0, 1.0)
        .with(Body::Moon, 150.0, 13.0);
    let bodies = BodySet::new(vec![Body::Sun, Body::Moon]).unwrap();

    let standard = Urania::with_default_profile(resolver.clone());
    let chart = standard.compute_chart(epoch(), &observer(), &bodies).unwrap();
    assert_eq!(standard.compute_aspects(&chart)[0].kind, AspectKind::Quincunx);

    let profile = AnalysisProfile::default().with_aspects(AspectTable::major_only());
    let major = Urania::new(resolver, profile).unwrap();
    assert!(major.compute_aspects(&chart).is_empty());
}
