use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASELINE_ALGORITHM: &str = "imara_diff-myers";
pub const DEFAULT_COMPARISON_ALGORITHM: &str = "imara_diff-histogram";
/// Default output directory used by the Criterion benchmarking library, relative to the
/// workspace root.
pub const CRITERION_OUTPUT_DIR: &str = "target/criterion";
pub const PLOTS_OUTPUT_DIR: &str = "plots";
pub const DEFAULT_LATEX_COMMAND: &str = "pdflatex";
pub const DEFAULT_PDF_CONVERTER: &str = "pdf2svg";
pub const DEFAULT_CHART_WIDTH: &str = r"0.83\textwidth";

/// The two algorithms whose ratio is plotted in the speedup charts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonPair {
    /// Numerator of the speedup.
    pub baseline: String,
    /// Denominator of the speedup.
    pub comparison: String,
}

impl Default for ComparisonPair {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE_ALGORITHM.to_string(),
            comparison: DEFAULT_COMPARISON_ALGORITHM.to_string(),
        }
    }
}

impl ComparisonPair {
    /// Axis label of the speedup, e.g. `$\frac{T_\mathrm{myers}}{T_\mathrm{histogram}}$`.
    pub fn axis_label(&self) -> String {
        format!(
            r"$\frac{{T_\mathrm{{{}}}}}{{T_\mathrm{{{}}}}}$",
            short_name(&self.baseline),
            short_name(&self.comparison)
        )
    }
}

// The part after the crate prefix: "imara_diff-myers" -> "myers".
fn short_name(label: &str) -> String {
    label.rsplit('-').next().unwrap_or(label).replace('_', r"\_")
}

/// Settings of the TikZ renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Plot width, as a TeX dimension.
    pub width: String,
    /// If false, only the `.tex` sources are written.
    pub build: bool,
    pub latex_command: String,
    /// Draw confidence intervals as error bars where a data set has them.
    pub error_bars: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH.to_string(),
            build: true,
            latex_command: DEFAULT_LATEX_COMMAND.to_string(),
            error_bars: false,
        }
    }
}

/// Everything a plotting run needs.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub criterion_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Whether `similar` algorithms appear in the absolute comparison charts.
    pub include_similar: bool,
    pub comparison_pair: ComparisonPair,
    pub render: RenderConfig,
    /// `None` disables the PDF to SVG conversion.
    pub pdf_converter: Option<String>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::with_root(&workspace_root())
    }
}

impl PlotConfig {
    /// Default configuration with the input and output directories placed under `root`.
    pub fn with_root(root: &Path) -> Self {
        Self {
            criterion_dir: root.join(CRITERION_OUTPUT_DIR),
            output_dir: root.join(PLOTS_OUTPUT_DIR),
            include_similar: true,
            comparison_pair: ComparisonPair::default(),
            render: RenderConfig::default(),
            pdf_converter: Some(DEFAULT_PDF_CONVERTER.to_string()),
        }
    }
}

/// Returns the workspace root directory (two levels up from the crate).
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.ancestors().nth(2).unwrap_or(manifest_dir).to_path_buf()
}
