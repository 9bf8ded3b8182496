use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use crate::sample_key::SampleKeyError;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed sample directory {}: {source}", .path.display())]
    MalformedKey {
        path: PathBuf,
        #[source]
        source: SampleKeyError,
    },
    #[error("Failed to read estimates file {}: {source}", .path.display())]
    EstimateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to deserialize estimates file {}: {source}", .path.display())]
    EstimateParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Sample of '{label}' at complexity {complexity} has a zero scale.")]
    ZeroScale { label: String, complexity: u64 },
    #[error("Result group '{group}' has no results for algorithm '{label}'.")]
    MissingAlgorithm { group: String, label: String },
    #[error("Result group '{group}' has no samples of algorithm '{label}'.")]
    EmptySeries { group: String, label: String },
    #[error(
        "Cannot compute speedup of '{baseline}' over '{comparison}': series lengths differ \
         ({baseline_len} vs {comparison_len})."
    )]
    SeriesLengthMismatch {
        baseline: String,
        comparison: String,
        baseline_len: usize,
        comparison_len: usize,
    },
    #[error(
        "Cannot compute speedup of '{baseline}' over '{comparison}': complexity {baseline_complexity} \
         is paired with {comparison_complexity} at index {index}."
    )]
    MisalignedSeries {
        baseline: String,
        comparison: String,
        index: usize,
        baseline_complexity: u64,
        comparison_complexity: u64,
    },
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Failed to run '{command}': {source}")]
    Process {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{command}' exited with {status}.\nStderr: {stderr}")]
    ExternalTool { command: String, status: ExitStatus, stderr: String },
}
