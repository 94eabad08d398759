//! Caller-facing plot options.

use serde::Deserialize;

use crate::bounds::AxisRange;

/// Title used when none is set, or when the set title is empty.
pub const DEFAULT_TITLE: &str = "Constructors";

/// Everything [`crate::build_figure`] can be told, with its defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlotOptions {
    /// Time-cost axis range; the data extent when unset.
    #[serde(default)]
    pub x_range: Option<AxisRange>,

    /// Energy-cost axis range; the data extent when unset.
    #[serde(default)]
    pub y_range: Option<AxisRange>,

    /// Size of the counterfactual region (default: 2).
    ///
    /// Drawn as the circle's radius in data units.
    #[serde(default = "default_region_size")]
    pub counterfactual_diameter: f64,

    /// Size of the easy-change region (default: 2).
    ///
    /// Drawn as the circle's radius in data units.
    #[serde(default = "default_region_size")]
    pub easy_change_diameter: f64,

    /// Figure title; [`DEFAULT_TITLE`] when unset.
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            x_range: None,
            y_range: None,
            counterfactual_diameter: default_region_size(),
            easy_change_diameter: default_region_size(),
            title: None,
        }
    }
}

const fn default_region_size() -> f64 {
    2.0
}

impl PlotOptions {
    /// Set both axis ranges.
    #[must_use]
    pub const fn with_ranges(mut self, x_range: AxisRange, y_range: AxisRange) -> Self {
        self.x_range = Some(x_range);
        self.y_range = Some(y_range);
        self
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// The title to draw.
    pub fn resolved_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_TITLE,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = PlotOptions::default();
        assert!(opts.x_range.is_none());
        assert!(opts.y_range.is_none());
        assert!((opts.counterfactual_diameter - 2.0).abs() < 1e-12);
        assert!((opts.easy_change_diameter - 2.0).abs() < 1e-12);
        assert_eq!(opts.resolved_title(), "Constructors");
    }

    #[test]
    fn empty_title_falls_back() {
        let opts = PlotOptions::default().with_title("");
        assert_eq!(opts.resolved_title(), DEFAULT_TITLE);
    }

    #[test]
    fn explicit_title_kept() {
        let opts = PlotOptions::default().with_title("Random constructors");
        assert_eq!(opts.resolved_title(), "Random constructors");
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let opts: PlotOptions =
            serde_yml::from_str("x_range: [0.0, 5.0]\neasy_change_diameter: 1.0\n").unwrap();
        assert!(opts.x_range.is_some());
        assert!(opts.y_range.is_none());
        assert!((opts.counterfactual_diameter - 2.0).abs() < 1e-12);
        assert!((opts.easy_change_diameter - 1.0).abs() < 1e-12);
    }
}
