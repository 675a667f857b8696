//! Full runs of the reference setup: L=20, max_ones=4, 55 individuals,
//! 90 generations.

use u_bitevo::ga::{EvolutionConfig, EvolutionDriver, EvolutionResult, Individual};
use u_bitevo::random::SeededSource;

fn reference_run(seed: u64) -> EvolutionResult {
    let config = EvolutionConfig::default().with_seed(seed);
    let mut rng = config.seeded_source();
    let driver = EvolutionDriver::capped_with_normal_weights(config, &mut rng)
        .expect("reference configuration is valid");
    driver.run_with(&mut rng)
}

fn fitnesses(result: &EvolutionResult) -> Vec<Option<f64>> {
    result
        .hall_of_fame
        .entries()
        .iter()
        .map(Individual::fitness)
        .collect()
}

#[test]
fn same_seed_reproduces_run() {
    let a = reference_run(2024);
    let b = reference_run(2024);

    assert_eq!(a.hall_of_fame, b.hall_of_fame);
    assert_eq!(fitnesses(&a), fitnesses(&b));
    assert_eq!(a.logbook, b.logbook);
    assert_eq!(a.evaluations, b.evaluations);
}

#[test]
fn different_seeds_diverge() {
    let a = reference_run(1);
    let b = reference_run(2);
    assert_ne!(a.logbook, b.logbook);
}

#[test]
fn reference_run_shape() {
    let result = reference_run(7);

    assert_eq!(result.generations, 90);
    assert_eq!(result.logbook.len(), 91);
    assert_eq!(result.population.len(), 55);
    assert_eq!(result.hall_of_fame.len(), 5);
    assert_eq!(result.logbook[0].evaluations, 55);

    let fs = fitnesses(&result);
    assert!(fs.windows(2).all(|w| w[0] >= w[1]), "not sorted: {fs:?}");
}

#[test]
fn capped_run_finds_good_feasible_solution() {
    let config = EvolutionConfig::default().with_seed(99);
    let mut rng = config.seeded_source();
    let driver = EvolutionDriver::capped_with_normal_weights(config, &mut rng).unwrap();
    let optimum = driver.evaluator().weights().best_feasible_score(4);
    let result = driver.run_with(&mut rng);

    let best = result.best().unwrap();
    let best_fitness = best.fitness().unwrap();
    assert!(best.count_ones() >= 1 && best.count_ones() <= 4);
    assert!(best_fitness <= optimum + 1e-9);
    assert!(
        best_fitness >= 0.75 * optimum,
        "best {best_fitness} far from optimum {optimum}"
    );
}

#[test]
fn unconstrained_run_is_reproducible() {
    let run = || {
        let mut rng = SeededSource::new(31);
        let config = EvolutionConfig::default().with_max_generations(30);
        let driver = EvolutionDriver::unconstrained_with_normal_weights(config, &mut rng).unwrap();
        driver.run_with(&mut rng)
    };
    let (a, b) = (run(), run());
    assert_eq!(a.logbook, b.logbook);
    assert_eq!(a.population, b.population);
}
