use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::charts::Chart;
use crate::config::{PlotConfig, RenderConfig};
use crate::errors::{PlotError, PlotResult};
use crate::render::{ChartRenderer, TikzRenderer};
use crate::runner::{load_result_groups, run_plots, PlotArtifacts};
use crate::series::{NormalizedPoint, Series};
use crate::test_utils::{write_demo_group, write_estimates};

/// Keeps the rendered charts in memory instead of producing files.
#[derive(Default)]
struct RecordingRenderer {
    charts: RefCell<Vec<Chart>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, chart: &Chart, output_dir: &Path) -> PlotResult<PathBuf> {
        self.charts.borrow_mut().push(chart.clone());
        Ok(output_dir.join(&chart.name))
    }
}

struct Workspace {
    // Removed on drop.
    _root: TempDir,
    config: PlotConfig,
}

#[fixture]
fn workspace() -> Workspace {
    let root = TempDir::new().unwrap();
    let mut config = PlotConfig::with_root(root.path());
    config.pdf_converter = None;
    write_demo_group(&config.criterion_dir);
    Workspace { _root: root, config }
}

#[rstest]
fn demo_group_normalizes_to_the_expected_series(workspace: Workspace) {
    let groups = load_result_groups(&workspace.config).unwrap();

    assert_eq!(groups.len(), 1);
    let myers = groups[0].algorithm("imara_diff-myers").unwrap();
    assert_eq!(
        Series::try_from(myers).unwrap().points,
        vec![
            NormalizedPoint { complexity: 10, estimate: 100.0, lower_bound: 90.0, upper_bound: 110.0 },
            NormalizedPoint {
                complexity: 20,
                estimate: 150.0,
                lower_bound: 140.0,
                upper_bound: 160.0,
            },
        ]
    );
}

#[rstest]
fn renders_comparison_then_speedup_charts(workspace: Workspace) {
    let renderer = RecordingRenderer::default();

    let artifacts = run_plots(&workspace.config, &renderer).unwrap();

    let output_dir = &workspace.config.output_dir;
    assert_eq!(
        artifacts,
        PlotArtifacts {
            charts: vec![output_dir.join("demo_comparison"), output_dir.join("demo_speedup")],
            svgs: vec![],
        }
    );

    let charts = renderer.charts.borrow();
    let comparison = &charts[0];
    let labels: Vec<_> = comparison.data_sets.iter().map(|set| set.label.clone()).collect();
    assert_eq!(
        labels,
        vec![
            Some("imara-diff-histogram".to_string()),
            Some("imara-diff-myers".to_string()),
            Some("similar".to_string()),
        ]
    );
    assert_eq!(comparison.data_sets[1].x, vec![10.0, 20.0]);
    assert_eq!(comparison.data_sets[1].y, vec![100.0, 150.0]);

    let speedup = &charts[1];
    assert_eq!(speedup.data_sets.len(), 1);
    assert_eq!(speedup.data_sets[0].x, vec![10.0, 20.0]);
    assert_eq!(speedup.data_sets[0].y, vec![1.0, 1.0]);
}

#[rstest]
fn excluding_similar_only_affects_the_comparison_chart(mut workspace: Workspace) {
    workspace.config.include_similar = false;
    let renderer = RecordingRenderer::default();

    run_plots(&workspace.config, &renderer).unwrap();

    let charts = renderer.charts.borrow();
    assert_eq!(charts[0].data_sets.len(), 2);
    assert_eq!(charts[1].data_sets.len(), 1);
}

#[rstest]
fn tikz_sources_are_written_to_the_output_dir(workspace: Workspace) {
    let renderer = TikzRenderer::new(RenderConfig { build: false, ..Default::default() });

    let artifacts = run_plots(&workspace.config, &renderer).unwrap();

    let output_dir = &workspace.config.output_dir;
    let expected = vec![output_dir.join("demo_comparison.tex"), output_dir.join("demo_speedup.tex")];
    assert_eq!(artifacts.charts, expected);
    for path in &expected {
        assert!(fs::read_to_string(path).unwrap().contains("\\begin{tikzpicture}"));
    }
}

#[cfg(unix)]
#[rstest]
fn produced_pdfs_are_converted(mut workspace: Workspace) {
    workspace.config.pdf_converter = Some("cp".to_string());
    fs::create_dir_all(&workspace.config.output_dir).unwrap();
    fs::write(workspace.config.output_dir.join("demo_comparison.pdf"), "pdf").unwrap();

    let artifacts = run_plots(&workspace.config, &RecordingRenderer::default()).unwrap();

    assert_eq!(artifacts.svgs, vec![workspace.config.output_dir.join("demo_comparison.svg")]);
}

#[rstest]
fn missing_comparison_algorithm_aborts_the_run() {
    let root = TempDir::new().unwrap();
    let mut config = PlotConfig::with_root(root.path());
    config.pdf_converter = None;
    let group_dir = config.criterion_dir.join("lonely_plot");
    write_estimates(&group_dir, "imara_diff-myers", "10__1", 100.0, 90.0, 110.0);

    assert_matches!(
        run_plots(&config, &RecordingRenderer::default()),
        Err(PlotError::MissingAlgorithm { group, label })
            if group == "lonely" && label == "imara_diff-histogram"
    );
}

#[rstest]
fn zero_scale_aborts_the_run(workspace: Workspace) {
    let group_dir = workspace.config.criterion_dir.join("demo_plot");
    write_estimates(&group_dir, "imara_diff-myers", "30__0", 1.0, 1.0, 1.0);
    let renderer = RecordingRenderer::default();

    assert_matches!(
        run_plots(&workspace.config, &renderer),
        Err(PlotError::ZeroScale { complexity: 30, .. })
    );
    assert!(renderer.charts.borrow().is_empty());
}

#[rstest]
fn no_groups_produce_nothing() {
    let root = TempDir::new().unwrap();
    let mut config = PlotConfig::with_root(root.path());
    config.pdf_converter = None;
    fs::create_dir_all(&config.criterion_dir).unwrap();

    assert_eq!(run_plots(&config, &RecordingRenderer::default()).unwrap(), PlotArtifacts::default());
}
