use std::time::Instant;

use tracing::info;

use crate::simulation::engine::SimulationEngine;
use crate::simulation::params::UnitSystem;
use crate::simulation::states::{BodySpec, NVec2};

/// Wall-clock cost of one `step` at a given body count
#[derive(Debug, Clone, Copy)]
pub struct BenchSample {
    pub n: usize,
    pub ms_per_step: f64,
}

/// Helper to build an engine holding `n` unit-mass point bodies
/// Deterministic positions, no rand needed. Zero radius keeps the body
/// count constant (nothing merges unless two positions coincide).
pub fn make_engine(n: usize) -> SimulationEngine {
    let mut engine = SimulationEngine::with_units(UnitSystem::default());

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 500.0, (i_f * 0.13).cos() * 500.0);
        engine
            .add_body(BodySpec::new(x, NVec2::zeros(), 1.0, 0.0))
            .expect("finite unit-mass body");
    }

    engine
}

/// Time `SimulationEngine::step` for each body count in `ns`
pub fn bench_step(ns: &[usize], steps: usize) -> Vec<BenchSample> {
    let steps = steps.max(1);
    let mut samples = Vec::with_capacity(ns.len());

    for &n in ns {
        let mut engine = make_engine(n);

        // Warm up
        engine.step(1e-3);

        let t0 = Instant::now();
        for _ in 0..steps {
            engine.step(1e-3);
        }
        let ms_per_step = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        info!(n, bodies_after = engine.len(), ms_per_step, "step benchmark");
        samples.push(BenchSample { n, ms_per_step });
    }

    samples
}
