pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::SimError;

pub use simulation::states::{Body, BodySpec, Colour, NVec2};
pub use simulation::engine::SimulationEngine;
pub use simulation::collision::{are_colliding, merge_bodies};
pub use simulation::forces::NewtonianGravity;
pub use simulation::params::{UnitSystem, SOFTENING, HISTORY_CAP, MERGED_HISTORY_CAP};
pub use simulation::scenario::{Scenario, RunSettings, RunSummary};

pub use configuration::config::{ScenarioConfig, RunConfig, BodyConfig, UnitsConfig};

pub use benchmark::benchmark::{bench_step, BenchSample};
