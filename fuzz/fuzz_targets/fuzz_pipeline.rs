#![no_main]

use arbitrary::Arbitrary;
use gauss_seidel::{Config, LinearSystem};
use libfuzzer_sys::fuzz_target;

/// Keeps diverging systems from spending the whole run sweeping.
const SWEEP_LIMIT: usize = 256;

fuzz_target!(|setup: Setup| {
    let Ok(system) = LinearSystem::new(setup.a, setup.b) else {
        return;
    };
    let config = setup
        .config
        .with_max_sweeps(setup.config.max_sweeps.min(SWEEP_LIMIT));
    let _ = gauss_seidel::gauss_seidel(&system, config);
    let _ = gauss_seidel::solve(&system, config);
});

#[derive(Debug, Arbitrary)]
struct Setup {
    a: Vec<Vec<f64>>,
    b: Vec<f64>,
    config: Config,
}
