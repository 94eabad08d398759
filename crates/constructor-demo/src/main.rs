//! Demonstration binary for constructor cost figures.
//!
//! Runs two fixed scenarios and writes one SVG figure for each:
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `constructor-config.yaml` (optional)
//! 3. Seed the random source
//! 4. Draw ten random constructors ("Random constructors")
//! 5. Draw the smoking constructors ("Constructors Smoking")

mod config;
mod error;
mod scenarios;

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE, DemoConfig};
use crate::error::DemoError;

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading or either scenario fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("constructor-demo starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(
        output_dir = %config.output_dir.display(),
        seed = ?config.seed,
        variables = ?config.variables.names(),
        population_count = config.population_count,
        "Configuration loaded"
    );

    // 3. Seed the random source.
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // 4. Random constructors.
    let random = scenarios::random_scenario(&config, &mut rng)?;
    scenarios::run_scenario(&random, &config)?;

    // 5. Smoking constructors.
    let smoking = scenarios::smoking_scenario()?;
    scenarios::run_scenario(&smoking, &config)?;

    info!("constructor-demo finished");
    Ok(())
}

/// Load configuration from `CONSTRUCTOR_CONFIG` or `constructor-config.yaml`.
///
/// A path set through `CONSTRUCTOR_CONFIG` must exist; a missing default
/// file means defaults.
fn load_config() -> Result<DemoConfig, DemoError> {
    let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = DemoConfig::load(explicit.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;
    Ok(config)
}
