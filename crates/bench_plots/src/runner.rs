use std::path::PathBuf;

use tracing::info;

use crate::charts::{absolute_comparison_chart, speedup_chart};
use crate::config::PlotConfig;
use crate::errors::PlotResult;
use crate::export::convert_pdfs_to_svg;
use crate::locator::{find_result_groups, load_result_group};
use crate::render::ChartRenderer;
use crate::types::results::ResultGroup;

#[cfg(test)]
#[path = "runner_test.rs"]
mod runner_test;

/// Files produced by a plotting run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PlotArtifacts {
    /// One artifact per absolute comparison chart, then one per speedup chart.
    pub charts: Vec<PathBuf>,
    pub svgs: Vec<PathBuf>,
}

/// Loads every result group under the criterion directory.
pub fn load_result_groups(config: &PlotConfig) -> PlotResult<Vec<ResultGroup>> {
    find_result_groups(&config.criterion_dir)?.iter().map(load_result_group).collect()
}

/// Renders the absolute comparison and the speedup chart of every result group, then converts
/// the produced PDFs to SVG. The first error aborts the run.
pub fn run_plots(config: &PlotConfig, renderer: &impl ChartRenderer) -> PlotResult<PlotArtifacts> {
    let groups = load_result_groups(config)?;
    let mut artifacts = PlotArtifacts::default();

    for group in &groups {
        let chart = absolute_comparison_chart(group, config.include_similar)?;
        artifacts.charts.push(renderer.render(&chart, &config.output_dir)?);
    }

    for group in &groups {
        let chart = speedup_chart(group, &config.comparison_pair)?;
        artifacts.charts.push(renderer.render(&chart, &config.output_dir)?);
    }

    if let Some(converter) = &config.pdf_converter {
        artifacts.svgs = convert_pdfs_to_svg(&config.output_dir, converter)?;
    }

    info!(
        "Produced {} chart(s) and {} SVG(s) in {}.",
        artifacts.charts.len(),
        artifacts.svgs.len(),
        config.output_dir.display()
    );
    Ok(artifacts)
}
