use gravsim::{bench_step, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless gravitational N-body runner
#[derive(Parser, Debug)]
#[command(name = "gravsim", version, about)]
struct Args {
    /// Scenario YAML, looked up in the crate's `scenarios/` directory
    /// unless it is an existing path
    #[arg(short, long, default_value = "binary.yaml")]
    file_name: String,

    /// Logging verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Time `step` for growing body counts instead of running a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level: Level = args
        .log_level
        .parse()
        .with_context(|| format!("unknown log level `{}`", args.log_level))?;
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("gravsim v{}", env!("CARGO_PKG_VERSION"));

    if args.bench {
        bench_step(&[50, 100, 200, 400, 800, 1600], 5);
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(&scenario_cfg)
        .with_context(|| format!("invalid scenario {}", args.file_name))?;

    let summary = scenario.run();

    info!(
        steps = summary.steps,
        time = summary.time,
        bodies = summary.final_bodies,
        merged_or_culled = summary.initial_bodies - summary.final_bodies,
        culled = summary.culled,
        "run finished"
    );
    info!(
        initial_mass = summary.initial_mass,
        final_mass = summary.final_mass,
        dpx = summary.final_momentum.x - summary.initial_momentum.x,
        dpy = summary.final_momentum.y - summary.initial_momentum.y,
        "conservation check"
    );

    Ok(())
}
