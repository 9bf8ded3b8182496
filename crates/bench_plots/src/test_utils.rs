use std::fs;
use std::path::{Path, PathBuf};

use crate::locator::CRITERION_ESTIMATES_PATH;

/// Writes a criterion estimates file for `<group_dir>/<algorithm>/<sample_dir>` with the given
/// mean, and returns its path.
pub(crate) fn write_estimates(
    group_dir: &Path,
    algorithm: &str,
    sample_dir: &str,
    point_estimate: f64,
    lower_bound: f64,
    upper_bound: f64,
) -> PathBuf {
    let path = group_dir.join(algorithm).join(sample_dir).join(CRITERION_ESTIMATES_PATH);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let estimates = serde_json::json!({
        "mean": {
            "confidence_interval": {
                "confidence_level": 0.95,
                "lower_bound": lower_bound,
                "upper_bound": upper_bound,
            },
            "point_estimate": point_estimate,
            "standard_error": 1.0,
        },
        "median": {
            "confidence_interval": {
                "confidence_level": 0.95,
                "lower_bound": 0.0,
                "upper_bound": 0.0,
            },
            "point_estimate": 0.0,
            "standard_error": 0.0,
        },
        "slope": null,
    });
    fs::write(&path, serde_json::to_string_pretty(&estimates).unwrap()).unwrap();
    path
}

/// Writes the `demo_plot` group used across tests: two compared algorithms and a `similar` one,
/// each with samples `10__1` (100 ± 10) and `20__2` (300 ± 20), plus criterion's report directory.
pub(crate) fn write_demo_group(criterion_dir: &Path) -> PathBuf {
    let group_dir = criterion_dir.join("demo_plot");
    for algorithm in ["imara_diff-myers", "imara_diff-histogram", "similar"] {
        write_estimates(&group_dir, algorithm, "10__1", 100.0, 90.0, 110.0);
        write_estimates(&group_dir, algorithm, "20__2", 300.0, 280.0, 320.0);
        fs::create_dir_all(group_dir.join(algorithm).join("report")).unwrap();
    }
    fs::create_dir_all(group_dir.join("report")).unwrap();
    group_dir
}
