//! Benchmarks for the trial engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use monty_hall_sim::games::classic::ClassicHost;
use monty_hall_sim::games::random_reveal::RandomHost;
use monty_hall_sim::sim::{play_trial, SimConfig, TrialRunner};

fn single_trial_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("classic_single_trial", |b| {
        b.iter(|| black_box(play_trial(&ClassicHost, true, &mut rng)))
    });

    c.bench_function("random_reveal_single_trial", |b| {
        b.iter(|| black_box(play_trial(&RandomHost, true, &mut rng)))
    });
}

fn run_10k_trials_benchmark(c: &mut Criterion) {
    c.bench_function("classic_10k_trials", |b| {
        b.iter(|| {
            let config = SimConfig::default()
                .with_trials(black_box(10_000))
                .with_seed(42);
            let mut runner = TrialRunner::new(ClassicHost, config);
            runner.run().unwrap()
        })
    });
}

criterion_group!(benches, single_trial_benchmark, run_10k_trials_benchmark);
criterion_main!(benches);
