//! The two demonstration scenarios.
//!
//! 1. A random population sized to the tracked variables, titled
//!    "Random constructors".
//! 2. The ten hand-authored smoking constructors, titled
//!    "Constructors Smoking".
//!
//! Both are drawn with the same figure settings.

use constructor_core::{Constructor, TrackedVariables, generate_population, smoking_constructors};
use constructor_plot::{Figure, PointColor, render};
use rand::Rng;
use tracing::{debug, info};

use crate::config::DemoConfig;
use crate::error::DemoError;

/// A titled constructor set and the file it is drawn to.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Figure title.
    pub title: &'static str,
    /// File name inside the output directory.
    pub file_name: &'static str,
    /// Constructors to plot.
    pub constructors: Vec<Constructor>,
}

/// Random constructors affecting every tracked variable.
///
/// # Errors
///
/// Returns [`DemoError::Constructor`] if population generation fails.
pub fn random_scenario<R: Rng>(config: &DemoConfig, rng: &mut R) -> Result<Scenario, DemoError> {
    let constructors = generate_population(
        config.population_count,
        config.variables.len(),
        &config.population,
        rng,
    )?;
    Ok(Scenario {
        title: "Random constructors",
        file_name: "random-constructors.svg",
        constructors,
    })
}

/// The smoking behavioural factors.
///
/// # Errors
///
/// Returns [`DemoError::Constructor`] if the built-in table is invalid.
pub fn smoking_scenario() -> Result<Scenario, DemoError> {
    Ok(Scenario {
        title: "Constructors Smoking",
        file_name: "constructors-smoking.svg",
        constructors: smoking_constructors()?,
    })
}

/// Draw `scenario` into the configured output directory.
///
/// # Errors
///
/// Returns [`DemoError::Io`] if the output directory cannot be created and
/// [`DemoError::Plot`] if the figure cannot be built or written.
pub fn run_scenario(scenario: &Scenario, config: &DemoConfig) -> Result<Figure, DemoError> {
    info!(
        title = scenario.title,
        constructors = scenario.constructors.len(),
        "Running scenario"
    );
    log_constructors(&scenario.constructors, &config.variables);

    std::fs::create_dir_all(&config.output_dir)?;
    let path = config.output_dir.join(scenario.file_name);
    let figure = render(
        &scenario.constructors,
        &config.figure.plot_options(scenario.title),
        &path,
        config.figure.size(),
    )?;

    info!(
        title = scenario.title,
        positive = figure.count_color(PointColor::Green),
        negative = figure.count_color(PointColor::Red),
        neutral = figure.count_color(PointColor::Black),
        "Scenario complete"
    );
    Ok(figure)
}

/// Debug-log each constructor and, where dimensions agree, the variable
/// state its activation would produce.
fn log_constructors(constructors: &[Constructor], variables: &TrackedVariables) {
    for (index, constructor) in constructors.iter().enumerate() {
        debug!(index = index, name = constructor.name(), "{}", constructor.describe());
        match variables.apply(constructor) {
            Ok(next) => debug!(
                index = index,
                variables = ?variables.names(),
                before = ?variables.values(),
                after = ?next.values(),
                "Activation outcome"
            ),
            Err(e) => debug!(index = index, error = %e, "Activation outcome skipped"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn temp_config(tag: &str) -> DemoConfig {
        DemoConfig {
            output_dir: std::env::temp_dir()
                .join(format!("constructor-demo-{tag}-{}", std::process::id())),
            ..DemoConfig::default()
        }
    }

    #[test]
    fn random_scenario_matches_variables() {
        let config = DemoConfig::default();
        let mut rng = StdRng::seed_from_u64(10);
        let scenario = random_scenario(&config, &mut rng).unwrap();
        assert_eq!(scenario.constructors.len(), 10);
        assert!(scenario.constructors.iter().all(|c| c.dimension() == 2));
        assert_eq!(scenario.title, "Random constructors");
    }

    #[test]
    fn seeded_random_scenario_is_reproducible() {
        let config = DemoConfig::default();
        let a = random_scenario(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = random_scenario(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.constructors, b.constructors);
    }

    #[test]
    fn smoking_scenario_writes_figure() {
        let config = temp_config("smoking");
        let scenario = smoking_scenario().unwrap();
        let figure = run_scenario(&scenario, &config).unwrap();
        assert_eq!(figure.count_color(PointColor::Green), 5);
        assert_eq!(figure.count_color(PointColor::Red), 5);
        assert!(config.output_dir.join("constructors-smoking.svg").exists());
        std::fs::remove_dir_all(&config.output_dir).unwrap();
    }

    #[test]
    fn empty_random_scenario_fails_to_plot() {
        let config = DemoConfig {
            population_count: 0,
            ..temp_config("empty")
        };
        let mut rng = StdRng::seed_from_u64(1);
        let scenario = random_scenario(&config, &mut rng).unwrap();
        let err = run_scenario(&scenario, &config).unwrap_err();
        assert!(matches!(
            err,
            DemoError::Plot {
                source: constructor_plot::PlotError::EmptyPopulation
            }
        ));
        let _ = std::fs::remove_dir_all(&config.output_dir);
    }
}
