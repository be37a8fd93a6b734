//! Build a runnable scenario from configuration and drive it headless
//!
//! `Scenario` bundles a populated [`SimulationEngine`] with the caller-side
//! policies the engine itself does not own:
//! - timescale (applied by multiplying `dt`)
//! - world-bounds culling after each tick
//! - a cap on how many bodies are loaded

use tracing::{info, warn};

use crate::configuration::config::{RunConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::engine::SimulationEngine;
use crate::simulation::params::UnitSystem;
use crate::simulation::states::{BodySpec, NVec2};

/// Validated driver settings
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub dt: f64, // step actually passed to the engine (dt * timescale)
    pub steps: u64,
    pub world_bounds: Option<f64>,
    pub report_every: u64,
}

impl TryFrom<&RunConfig> for RunSettings {
    type Error = SimError;

    fn try_from(cfg: &RunConfig) -> Result<Self, Self::Error> {
        if !cfg.dt.is_finite() {
            return Err(SimError::InvalidRunSetting { name: "dt", value: cfg.dt });
        }
        if !(cfg.timescale > 0.0) || !cfg.timescale.is_finite() {
            return Err(SimError::InvalidRunSetting {
                name: "timescale",
                value: cfg.timescale,
            });
        }
        if let Some(bound) = cfg.world_bounds {
            if !(bound > 0.0) {
                return Err(SimError::InvalidRunSetting {
                    name: "world_bounds",
                    value: bound,
                });
            }
        }

        Ok(Self {
            dt: cfg.dt * cfg.timescale,
            steps: cfg.steps,
            world_bounds: cfg.world_bounds,
            report_every: cfg.report_every,
        })
    }
}

/// What a finished run looked like, for logging and tests
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub steps: u64,
    pub time: f64,
    pub initial_bodies: usize,
    pub final_bodies: usize,
    pub culled: usize,
    pub initial_mass: f64,
    pub final_mass: f64,
    pub initial_momentum: NVec2,
    pub final_momentum: NVec2,
}

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: SimulationEngine,
    pub run: RunSettings,
}

impl Scenario {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        let run = RunSettings::try_from(&cfg.run)?;

        let mut engine = SimulationEngine::with_units(UnitSystem::from(cfg.units));

        let limit = cfg.run.max_bodies.unwrap_or(usize::MAX);
        if cfg.bodies.len() > limit {
            warn!(
                configured = cfg.bodies.len(),
                max_bodies = limit,
                "scenario exceeds body cap, extra bodies ignored"
            );
        }

        // Bodies: `BodyConfig` -> validated `BodySpec` -> engine
        for bc in cfg.bodies.iter().take(limit) {
            engine.add_body(BodySpec::try_from(bc)?)?;
        }

        info!(bodies = engine.len(), g = engine.g(), dt = run.dt, "scenario built");

        Ok(Self { engine, run })
    }

    /// Run every configured tick and report conservation diagnostics
    pub fn run(&mut self) -> RunSummary {
        let initial_bodies = self.engine.len();
        let initial_mass = self.engine.total_mass();
        let initial_momentum = self.engine.total_momentum();
        let mut culled = 0;

        for tick in 1..=self.run.steps {
            self.engine.step(self.run.dt);

            if let Some(bound) = self.run.world_bounds {
                culled += self.engine.retain_within_bounds(bound);
            }

            if self.run.report_every > 0 && tick % self.run.report_every == 0 {
                let p = self.engine.total_momentum();
                info!(
                    tick,
                    time = self.engine.time(),
                    bodies = self.engine.len(),
                    mass = self.engine.total_mass(),
                    px = p.x,
                    py = p.y,
                    "progress"
                );
            }
        }

        RunSummary {
            steps: self.run.steps,
            time: self.engine.time(),
            initial_bodies,
            final_bodies: self.engine.len(),
            culled,
            initial_mass,
            final_mass: self.engine.total_mass(),
            initial_momentum,
            final_momentum: self.engine.total_momentum(),
        }
    }
}
