use crate::errors::{PlotError, PlotResult};
use crate::types::estimates::Stat;
use crate::types::results::{AlgorithmResult, RawSample};

#[cfg(test)]
#[path = "series_test.rs"]
mod series_test;

/// A mean estimate and its confidence interval, divided by the sample's scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedPoint {
    pub complexity: u64,
    pub estimate: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl NormalizedPoint {
    /// Divides the point estimate and both confidence interval bounds by `scale`.
    pub fn normalize(complexity: u64, mean: &Stat, scale: u64, label: &str) -> PlotResult<Self> {
        if scale == 0 {
            return Err(PlotError::ZeroScale { label: label.to_string(), complexity });
        }
        #[allow(clippy::as_conversions)]
        let scale = scale as f64;
        Ok(Self {
            complexity,
            estimate: mean.point_estimate / scale,
            lower_bound: mean.confidence_interval.lower_bound / scale,
            upper_bound: mean.confidence_interval.upper_bound / scale,
        })
    }
}

/// The normalized samples of one algorithm, ordered by ascending complexity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<NormalizedPoint>,
}

/// A [Series] split into aligned columns, in the shape the charts consume.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesColumns {
    pub complexity: Vec<u64>,
    pub estimate: Vec<f64>,
    pub lower_bound: Vec<f64>,
    pub upper_bound: Vec<f64>,
}

impl Series {
    pub fn from_samples(label: &str, samples: &[RawSample]) -> PlotResult<Self> {
        let mut points = samples
            .iter()
            .map(|RawSample { key, mean, .. }| {
                NormalizedPoint::normalize(key.complexity, mean, key.scale, label)
            })
            .collect::<PlotResult<Vec<_>>>()?;
        // Stable, so samples sharing a complexity keep their input order.
        points.sort_by_key(|point| point.complexity);
        Ok(Self { label: label.to_string(), points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn complexities(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|point| point.complexity)
    }

    pub fn estimates(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.estimate)
    }

    pub fn columns(&self) -> SeriesColumns {
        let mut columns = SeriesColumns::default();
        for point in &self.points {
            columns.complexity.push(point.complexity);
            columns.estimate.push(point.estimate);
            columns.lower_bound.push(point.lower_bound);
            columns.upper_bound.push(point.upper_bound);
        }
        columns
    }
}

impl TryFrom<&AlgorithmResult> for Series {
    type Error = PlotError;

    fn try_from(algorithm: &AlgorithmResult) -> PlotResult<Self> {
        Self::from_samples(&algorithm.label, &algorithm.samples)
    }
}
