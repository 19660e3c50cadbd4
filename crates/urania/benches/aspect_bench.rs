use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::{AspectCalculator, AspectTable};
use urania::chart::{assemble_chart, BodySample};
use urania::ephemeris::{GeoLocation, RawPosition};
use urania::{AnalysisProfile, Body};
use chrono::{TimeZone, Utc};

fn bench_calculate_aspect(c: &mut Criterion) {
    let table = AspectTable::standard();
    let calculator = AspectCalculator::new(&table);

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| {
            calculator.calculate_aspect(
                black_box((Body::Sun, 100.0, 1.0)),
                black_box((Body::Moon, 222.0, 13.0)),
            )
        })
    });
}

fn bench_compute_aspects(c: &mut Criterion) {
    let table = AspectTable::standard();
    let calculator = AspectCalculator::new(&table);
    let instant = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    let location = GeoLocation::new(28.61, 77.21).unwrap();

    let samples: Vec<BodySample> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| BodySample {
            body: *body,
            position: RawPosition {
                ecliptic_longitude: i as f64 * 30.0,
                ecliptic_latitude: 0.0,
                right_ascension: 0.0,
                declination: 0.0,
                distance_au: None,
            },
            previous_longitude: i as f64 * 30.0 - 1.0,
        })
        .collect();
    let chart = assemble_chart(instant, &location, &samples, &AnalysisProfile::default());

    c.bench_function("compute_aspects", |b| {
        b.iter(|| calculator.compute_aspects(black_box(&chart.bodies)))
    });
}

criterion_group!(benches, bench_calculate_aspect, bench_compute_aspects);
criterion_main!(benches);
