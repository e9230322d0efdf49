//! Benchmark for the session-to-chart transform.

use std::collections::BTreeMap;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use traceview::chart::build_chart_spec;
use traceview::models::{Group, SessionData, ValueSeries};

/// A session with the given panel count, series per panel and samples per
/// series.
fn synthetic_session(groups: usize, series_per_group: usize, samples: usize) -> SessionData {
    let mut values = BTreeMap::new();
    let mut group_list = Vec::new();

    for gi in 0..groups {
        let mut ids = Vec::new();
        for si in 0..series_per_group {
            let id = format!("g{gi}.v{si}");
            let x: Vec<f64> = (0..samples).map(|i| i as f64 * 0.5).collect();
            let y: Vec<f64> = (0..samples).map(|i| (i as f64 * 0.1).sin()).collect();
            values.insert(
                id.clone(),
                ValueSeries {
                    name: format!("Series {gi}.{si}"),
                    x,
                    y,
                },
            );
            ids.push(id);
        }
        group_list.push(Group {
            name: format!("Group {gi}"),
            values: ids,
        });
    }

    SessionData {
        values,
        groups: group_list,
    }
}

fn bench_transform(c: &mut Criterion) {
    let small = synthetic_session(2, 2, 100);
    let large = synthetic_session(4, 3, 10_000);

    c.bench_function("transform_small_session", |b| {
        b.iter(|| build_chart_spec(black_box(&small)).unwrap())
    });

    c.bench_function("transform_large_session", |b| {
        b.iter(|| build_chart_spec(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, bench_transform);
criterion_main!(benches);
