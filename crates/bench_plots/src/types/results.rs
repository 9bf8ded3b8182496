use std::path::PathBuf;

use crate::sample_key::SampleKey;
use crate::types::estimates::Stat;

/// Substring marking algorithms that are only shown next to the compared ones, never part of a
/// speedup computation.
pub const SIMILAR_MARKER: &str = "similar";

/// All benchmark results of one `<name>_plot` criterion group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultGroup {
    /// Group name without the `_plot` suffix.
    pub name: String,
    pub algorithms: Vec<AlgorithmResult>,
}

/// The samples of one algorithm within a group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlgorithmResult {
    /// The raw directory name.
    pub label: String,
    pub samples: Vec<RawSample>,
}

/// One criterion benchmark run: the key decoded from its directory name and the mean of its
/// estimates file.
#[derive(Clone, Debug, PartialEq)]
pub struct RawSample {
    pub key: SampleKey,
    pub estimate_path: PathBuf,
    pub mean: Stat,
}

impl ResultGroup {
    pub fn algorithm(&self, label: &str) -> Option<&AlgorithmResult> {
        self.algorithms.iter().find(|algorithm| algorithm.label == label)
    }
}

impl AlgorithmResult {
    /// The label used in chart legends.
    pub fn display_label(&self) -> String {
        self.label.replace('_', "-")
    }

    pub fn is_similar(&self) -> bool {
        self.label.contains(SIMILAR_MARKER)
    }
}
