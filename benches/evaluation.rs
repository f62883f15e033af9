//! Benchmarks for touch evaluation over target sets and tracks.
//!
//! The headline scenario is 50 targets against a 10,000-sample track, the
//! sizing a season of real activities produces. Timings are tracked for
//! regressions, not asserted.
//!
//! Run with: `cargo bench --bench evaluation`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use waypoint_matcher::{GpsPoint, ReferenceEvaluator, TargetPoint, TouchEvaluator};

#[cfg(feature = "parallel")]
use waypoint_matcher::ParallelEvaluator;

/// Random-walk track starting in central London, ~10m steps.
fn synthetic_track(rng: &mut StdRng, samples: usize) -> Vec<GpsPoint> {
    let mut lat = 51.5074;
    let mut lon = -0.1278;
    (0..samples)
        .map(|_| {
            lat += rng.gen_range(-0.0001..0.0001);
            lon += rng.gen_range(-0.0001..0.0001);
            GpsPoint::new(lat, lon)
        })
        .collect()
}

/// Target set of which none lies anywhere near the track: both operations
/// must scan every sample of every target (no short-circuit help).
fn untouched_targets(rng: &mut StdRng, count: usize) -> Vec<TargetPoint> {
    (0..count)
        .map(|_| {
            TargetPoint::new(
                GpsPoint::new(rng.gen_range(-40.0..40.0), rng.gen_range(60.0..170.0)),
                25.0,
            )
        })
        .collect()
}

/// Mixed target set: half sit on actual track samples, half far away.
fn mixed_targets(rng: &mut StdRng, track: &[GpsPoint], count: usize) -> Vec<TargetPoint> {
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                TargetPoint::new(track[rng.gen_range(0..track.len())], 25.0)
            } else {
                TargetPoint::new(
                    GpsPoint::new(rng.gen_range(-40.0..40.0), rng.gen_range(60.0..170.0)),
                    25.0,
                )
            }
        })
        .collect()
}

fn bench_headline_scenario(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let track = synthetic_track(&mut rng, 10_000);
    let targets = mixed_targets(&mut rng, &track, 50);

    let mut group = c.benchmark_group("50_targets_x_10k_samples");

    group.bench_function("any_touched/reference", |b| {
        let eval = ReferenceEvaluator;
        b.iter(|| eval.any_touched(&targets, &track));
    });
    group.bench_function("all_touched/reference", |b| {
        let eval = ReferenceEvaluator;
        b.iter(|| eval.all_touched(&targets, &track));
    });

    #[cfg(feature = "parallel")]
    {
        group.bench_function("any_touched/parallel", |b| {
            let eval = ParallelEvaluator;
            b.iter(|| eval.any_touched(&targets, &track));
        });
        group.bench_function("all_touched/parallel", |b| {
            let eval = ParallelEvaluator;
            b.iter(|| eval.all_touched(&targets, &track));
        });
    }

    group.finish();
}

fn bench_worst_case_scan(c: &mut Criterion) {
    // No target touched: every evaluation degenerates to the full
    // O(targets x samples) scan
    let mut group = c.benchmark_group("worst_case_no_touch");

    for samples in [1_000usize, 10_000, 50_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let track = synthetic_track(&mut rng, samples);
        let targets = untouched_targets(&mut rng, 50);

        group.bench_with_input(
            BenchmarkId::new("reference", samples),
            &samples,
            |b, _| {
                let eval = ReferenceEvaluator;
                b.iter(|| eval.any_touched(&targets, &track));
            },
        );

        #[cfg(feature = "parallel")]
        group.bench_with_input(
            BenchmarkId::new("parallel", samples),
            &samples,
            |b, _| {
                let eval = ParallelEvaluator;
                b.iter(|| eval.any_touched(&targets, &track));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_headline_scenario, bench_worst_case_scan);
criterion_main!(benches);
