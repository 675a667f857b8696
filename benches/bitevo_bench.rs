//! Criterion benchmarks for the evolutionary driver and its operators.
//!
//! Weights are drawn from a fixed seed so every sample runs the same
//! problem instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_bitevo::ga::operators::{flip_bit_mutation, one_point_crossover};
use u_bitevo::ga::{
    CappedGenerator, EvolutionConfig, EvolutionDriver, Generator, Individual, WeightVector,
};
use u_bitevo::random::SeededSource;

// ===========================================================================
// Full runs
// ===========================================================================

fn bench_capped_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("capped_run");
    group.sample_size(10);

    for (len, max_ones, pop, gen) in [
        (20usize, 4usize, 55usize, 90usize),
        (100, 10, 100, 50),
        (500, 25, 200, 20),
    ] {
        let config = EvolutionConfig::default()
            .with_genome_length(len)
            .with_max_ones(max_ones)
            .with_population_size(pop)
            .with_max_generations(gen)
            .with_seed(42);
        let weights = WeightVector::standard_normal(len, &mut SeededSource::new(7));
        let driver = EvolutionDriver::capped(config, weights).expect("valid benchmark config");
        group.bench_with_input(
            BenchmarkId::new(format!("l{}_k{}_p{}_g{}", len, max_ones, pop, gen), len),
            &driver,
            |b, d| {
                b.iter(|| {
                    let result = d.run();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

// ===========================================================================
// Operators
// ===========================================================================

fn bench_capped_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("capped_generator");

    for &(len, max_ones) in &[(20usize, 4usize), (200, 40), (1000, 100)] {
        let gen = CappedGenerator::new(len, max_ones).expect("valid bound");
        let mut rng = SeededSource::new(42);
        group.bench_with_input(BenchmarkId::from_parameter(len), &gen, |b, g| {
            b.iter(|| black_box(g.generate(&mut rng)))
        });
    }
    group.finish();
}

fn bench_variation(c: &mut Criterion) {
    let mut group = c.benchmark_group("variation");

    for &len in &[20usize, 200, 1000] {
        let mut rng = SeededSource::new(42);
        let mut a = Individual::zeros(len);
        let mut b = Individual::new(vec![true; len]);
        group.bench_with_input(BenchmarkId::new("crossover_mutation", len), &len, |bench, _| {
            bench.iter(|| {
                one_point_crossover(&mut a, &mut b, &mut rng);
                black_box(flip_bit_mutation(&mut a, 0.05, &mut rng))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_capped_run, bench_capped_generator, bench_variation);
criterion_main!(benches);
