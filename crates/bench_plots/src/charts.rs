use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::config::ComparisonPair;
use crate::errors::{PlotError, PlotResult};
use crate::series::Series;
use crate::types::results::ResultGroup;

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

pub const COMPLEXITY_AXIS_LABEL: &str = r"$(M + N) D$";
pub const TIME_AXIS_LABEL: &str = r"$T \left(\si{\milli\second}\right)$";
/// Applied to the time axis when rendering.
pub const TIME_AXIS_SCALE: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

/// One plotted line.
#[derive(Clone, Debug, PartialEq)]
pub struct DataSet {
    pub label: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Lower and upper confidence bounds of `y`, if known.
    pub bounds: Option<(Vec<f64>, Vec<f64>)>,
}

/// A renderer-independent description of a chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    /// Base name of the produced files.
    pub name: String,
    pub x_label: String,
    pub y_label: String,
    pub x_log: bool,
    pub y_log: bool,
    /// Factor applied to every y value at render time.
    pub y_scale: f64,
    pub legend_position: LegendPosition,
    pub data_sets: Vec<DataSet>,
}

impl Chart {
    fn new(name: String, x_label: &str, y_label: String) -> Self {
        Self {
            name,
            x_label: x_label.to_string(),
            y_label,
            x_log: false,
            y_log: false,
            y_scale: 1.0,
            legend_position: LegendPosition::UpperLeft,
            data_sets: Vec::new(),
        }
    }
}

#[allow(clippy::as_conversions)]
fn to_axis_values(complexities: &[u64]) -> Vec<f64> {
    complexities.iter().map(|&complexity| complexity as f64).collect()
}

/// Absolute time over complexity for every algorithm of the group, on log-log axes.
/// Algorithms marked as `similar` are only included if `include_similar` is set.
pub fn absolute_comparison_chart(group: &ResultGroup, include_similar: bool) -> PlotResult<Chart> {
    let mut chart = Chart::new(
        format!("{}_comparison", group.name),
        COMPLEXITY_AXIS_LABEL,
        TIME_AXIS_LABEL.to_string(),
    );
    chart.x_log = true;
    chart.y_log = true;
    chart.y_scale = TIME_AXIS_SCALE;

    for algorithm in &group.algorithms {
        if algorithm.is_similar() && !include_similar {
            debug!("Excluding '{}' from {}.", algorithm.label, chart.name);
            continue;
        }
        let columns = Series::try_from(algorithm)?.columns();
        chart.data_sets.push(DataSet {
            label: Some(algorithm.display_label()),
            x: to_axis_values(&columns.complexity),
            y: columns.estimate,
            bounds: Some((columns.lower_bound, columns.upper_bound)),
        });
    }
    info!("Assembled {} with {} data set(s).", chart.name, chart.data_sets.len());
    Ok(chart)
}

/// Element-wise ratio of the baseline estimates to the comparison estimates. Both series must
/// cover the same complexities.
pub fn speedup(baseline: &Series, comparison: &Series) -> PlotResult<Vec<f64>> {
    if baseline.len() != comparison.len() {
        return Err(PlotError::SeriesLengthMismatch {
            baseline: baseline.label.clone(),
            comparison: comparison.label.clone(),
            baseline_len: baseline.len(),
            comparison_len: comparison.len(),
        });
    }
    baseline
        .points
        .iter()
        .zip(&comparison.points)
        .enumerate()
        .map(|(index, (baseline_point, comparison_point))| {
            if baseline_point.complexity != comparison_point.complexity {
                return Err(PlotError::MisalignedSeries {
                    baseline: baseline.label.clone(),
                    comparison: comparison.label.clone(),
                    index,
                    baseline_complexity: baseline_point.complexity,
                    comparison_complexity: comparison_point.complexity,
                });
            }
            let ratio = baseline_point.estimate / comparison_point.estimate;
            if !ratio.is_finite() {
                warn!(
                    "Speedup of '{}' over '{}' at complexity {} is {ratio}; the point won't be \
                     drawn.",
                    baseline.label, comparison.label, baseline_point.complexity
                );
            }
            Ok(ratio)
        })
        .collect()
}

/// Speedup of `pair.baseline` over `pair.comparison` by complexity, on a logarithmic x axis.
/// Algorithms marked as `similar` never take part.
pub fn speedup_chart(group: &ResultGroup, pair: &ComparisonPair) -> PlotResult<Chart> {
    let mut series_by_label = BTreeMap::new();
    for algorithm in group.algorithms.iter().filter(|algorithm| !algorithm.is_similar()) {
        series_by_label.insert(algorithm.label.as_str(), Series::try_from(algorithm)?);
    }

    let lookup = |label: &str| {
        let series = series_by_label.get(label).ok_or_else(|| PlotError::MissingAlgorithm {
            group: group.name.clone(),
            label: label.to_string(),
        })?;
        if series.is_empty() {
            return Err(PlotError::EmptySeries {
                group: group.name.clone(),
                label: label.to_string(),
            });
        }
        Ok(series)
    };
    let baseline = lookup(&pair.baseline)?;
    let comparison = lookup(&pair.comparison)?;
    let ratios = speedup(baseline, comparison)?;

    let mut chart =
        Chart::new(format!("{}_speedup", group.name), COMPLEXITY_AXIS_LABEL, pair.axis_label());
    chart.x_log = true;
    chart.data_sets.push(DataSet {
        label: None,
        x: to_axis_values(&baseline.complexities().collect::<Vec<_>>()),
        y: ratios,
        bounds: None,
    });
    info!("Assembled {} over {} complexities.", chart.name, baseline.len());
    Ok(chart)
}
