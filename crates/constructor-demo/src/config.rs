//! Configuration loading for the demonstration scenarios.
//!
//! The optional `constructor-config.yaml` in the working directory mirrors
//! [`DemoConfig`]. Every key has a default, so a missing file or a partial
//! file reproduces the built-in scenarios: ten random constructors over
//! two tracked variables, axes fixed to `[0, 5]`.

use std::path::{Path, PathBuf};

use constructor_core::{PopulationParams, TrackedVariables};
use constructor_plot::{AxisRange, PlotOptions};
use serde::Deserialize;
use tracing::info;

/// Default config file name, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "constructor-config.yaml";

/// Environment variable overriding the config file path.
pub const CONFIG_PATH_ENV: &str = "CONSTRUCTOR_CONFIG";

/// Environment variable overriding [`DemoConfig::output_dir`].
pub const OUTPUT_DIR_ENV: &str = "CONSTRUCTOR_OUTPUT_DIR";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level demonstration configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DemoConfig {
    /// Directory the SVG figures are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Seed for the random population; fresh OS entropy when unset.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Variables the constructors act upon.
    #[serde(default)]
    pub variables: TrackedVariables,

    /// Number of constructors in the random scenario.
    #[serde(default = "default_population_count")]
    pub population_count: usize,

    /// Distributions for the random scenario.
    #[serde(default)]
    pub population: PopulationParams,

    /// Figure size and axis settings shared by both scenarios.
    #[serde(default)]
    pub figure: FigureConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            seed: None,
            variables: TrackedVariables::default(),
            population_count: default_population_count(),
            population: PopulationParams::default(),
            figure: FigureConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Resolve and load the configuration.
    ///
    /// An `explicit` path must exist. Without one, `fallback` is read if it
    /// exists, and defaults (with environment overrides) are used if not.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the explicit path cannot be read, or
    /// any error from [`DemoConfig::from_file`].
    pub fn load(explicit: Option<&Path>, fallback: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if fallback.exists() {
            Self::from_file(fallback)
        } else {
            info!(path = %fallback.display(), "Config file not found, using defaults");
            let mut config = Self::default();
            config.apply_env_overrides();
            Ok(config)
        }
    }

    /// Load configuration from a YAML file at the given path.
    ///
    /// `CONSTRUCTOR_OUTPUT_DIR` overrides `output_dir` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment-variable overrides.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dir) = std::env::var(OUTPUT_DIR_ENV) {
            self.output_dir = PathBuf::from(dir);
        }
    }
}

/// Figure size and axis settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FigureConfig {
    /// Width in pixels (default: 1024).
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in pixels (default: 768).
    #[serde(default = "default_height")]
    pub height: u32,

    /// Time-cost axis range (default: `[0, 5]`); `null` for the data extent.
    #[serde(default = "default_axis_range")]
    pub x_range: Option<AxisRange>,

    /// Energy-cost axis range (default: `[0, 5]`); `null` for the data extent.
    #[serde(default = "default_axis_range")]
    pub y_range: Option<AxisRange>,

    /// Counterfactual region size (default: 2).
    #[serde(default = "default_region_size")]
    pub counterfactual_diameter: f64,

    /// Easy-change region size (default: 2).
    #[serde(default = "default_region_size")]
    pub easy_change_diameter: f64,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            x_range: default_axis_range(),
            y_range: default_axis_range(),
            counterfactual_diameter: default_region_size(),
            easy_change_diameter: default_region_size(),
        }
    }
}

impl FigureConfig {
    /// Pixel size as `(width, height)`.
    pub const fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Plot options for a scenario with the given title.
    pub fn plot_options(&self, title: &str) -> PlotOptions {
        PlotOptions {
            x_range: self.x_range,
            y_range: self.y_range,
            counterfactual_diameter: self.counterfactual_diameter,
            easy_change_diameter: self.easy_change_diameter,
            title: Some(title.to_owned()),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("figures")
}

const fn default_population_count() -> usize {
    10
}

const fn default_width() -> u32 {
    1024
}

const fn default_height() -> u32 {
    768
}

fn default_axis_range() -> Option<AxisRange> {
    AxisRange::new(0.0, 5.0).ok()
}

const fn default_region_size() -> f64 {
    2.0
}
