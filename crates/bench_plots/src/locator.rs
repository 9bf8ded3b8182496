use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{PlotError, PlotResult};
use crate::sample_key::parse_sample_dir_name;
use crate::types::estimates::Estimates;
use crate::types::results::{AlgorithmResult, RawSample, ResultGroup};

#[cfg(test)]
#[path = "locator_test.rs"]
mod locator_test;

/// Suffix of the criterion group directories that hold plottable results.
pub const RESULT_GROUP_SUFFIX: &str = "_plot";

/// Path to the estimates file within a criterion sample directory.
/// Criterion stores the latest benchmark results in this subdirectory structure.
pub const CRITERION_ESTIMATES_PATH: &str = "new/estimates.json";

/// Directory criterion writes its HTML report into, next to the benchmark results.
const CRITERION_REPORT_DIR: &str = "report";

/// A located `<name>_plot` directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultGroupDir {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the result groups directly under the criterion output directory, ordered by name.
pub fn find_result_groups(criterion_dir: &Path) -> PlotResult<Vec<ResultGroupDir>> {
    let groups: Vec<ResultGroupDir> = sorted_subdirectories(criterion_dir)?
        .into_iter()
        .filter_map(|(dir_name, path)| {
            let name = dir_name.to_str()?.strip_suffix(RESULT_GROUP_SUFFIX)?;
            Some(ResultGroupDir { name: name.to_string(), path })
        })
        .collect();
    info!("Found {} result group(s) in {}.", groups.len(), criterion_dir.display());
    Ok(groups)
}

/// Reads every algorithm and sample of a result group into memory.
pub fn load_result_group(group_dir: &ResultGroupDir) -> PlotResult<ResultGroup> {
    let mut algorithms = Vec::new();
    for (dir_name, path) in sorted_subdirectories(&group_dir.path)? {
        let Some(label) = dir_name.to_str() else {
            debug!("Skipping {}: not a UTF-8 algorithm name.", path.display());
            continue;
        };
        if label == CRITERION_REPORT_DIR {
            continue;
        }
        algorithms.push(load_algorithm_result(label.to_string(), &path)?);
    }
    Ok(ResultGroup { name: group_dir.name.clone(), algorithms })
}

/// Reads the samples of one algorithm directory. Entries whose names don't encode a sample key
/// are skipped.
pub fn load_algorithm_result(label: String, algorithm_dir: &Path) -> PlotResult<AlgorithmResult> {
    let mut samples = Vec::new();
    for (name, path) in sorted_subdirectories(algorithm_dir)? {
        let Some(key) = parse_sample_dir_name(&name)
            .map_err(|source| PlotError::MalformedKey { path: path.clone(), source })?
        else {
            debug!("Skipping {}: not a sample directory.", path.display());
            continue;
        };
        let estimate_path = path.join(CRITERION_ESTIMATES_PATH);
        let estimates = Estimates::load(&estimate_path)?;
        samples.push(RawSample { key, estimate_path, mean: estimates.mean });
    }
    debug!("Loaded {} sample(s) of '{label}'.", samples.len());
    Ok(AlgorithmResult { label, samples })
}

/// Lists the immediate subdirectories of `dir` as `(name, path)` pairs, ordered by name.
fn sorted_subdirectories(dir: &Path) -> PlotResult<Vec<(OsString, PathBuf)>> {
    let io_error = |source: std::io::Error| PlotError::Io { path: dir.to_path_buf(), source };

    let mut subdirectories = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if !path.is_dir() {
            continue;
        }
        if let Some(name) = path.file_name() {
            subdirectories.push((name.to_os_string(), path.clone()));
        }
    }
    subdirectories.sort();
    Ok(subdirectories)
}
