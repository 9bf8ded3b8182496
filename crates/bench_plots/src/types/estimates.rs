use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::{PlotError, PlotResult};

/// Criterion benchmark estimates, as written to `<benchmark>/new/estimates.json`.
/// Only the mean is used for plotting; the other statistics are kept optional so that files from
/// older criterion versions still deserialize.
#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct Estimates {
    pub mean: Stat,
    #[serde(default)]
    pub median: Option<Stat>,
    #[serde(default)]
    pub std_dev: Option<Stat>,
    #[serde(default)]
    pub median_abs_dev: Option<Stat>,
    #[serde(default)]
    pub slope: Option<Stat>,
}

/// Statistical estimate with confidence interval.
#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct Stat {
    pub point_estimate: f64,
    #[serde(default)]
    pub standard_error: f64,
    pub confidence_interval: ConfidenceInterval,
}

/// Confidence interval bounds.
#[derive(Clone, Debug, Deserialize, Default, PartialEq)]
pub struct ConfidenceInterval {
    #[serde(default)]
    pub confidence_level: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl Estimates {
    /// Reads and deserializes an estimates file.
    pub fn load(path: &Path) -> PlotResult<Self> {
        let data = fs::read_to_string(path)
            .map_err(|source| PlotError::EstimateLoad { path: path.to_path_buf(), source })?;
        serde_json::from_str(&data)
            .map_err(|source| PlotError::EstimateParse { path: path.to_path_buf(), source })
    }
}
