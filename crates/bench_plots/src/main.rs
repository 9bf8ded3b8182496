use std::path::PathBuf;
use std::process::ExitCode;

use bench_plots::config::{
    ComparisonPair,
    PlotConfig,
    RenderConfig,
    DEFAULT_BASELINE_ALGORITHM,
    DEFAULT_COMPARISON_ALGORITHM,
    DEFAULT_LATEX_COMMAND,
    DEFAULT_PDF_CONVERTER,
};
use bench_plots::render::TikzRenderer;
use bench_plots::runner::run_plots;
use bench_plots::tracing_utils::configure_tracing;
use clap::Parser;
use tracing::{error, info};

/// Plots criterion results of `<group>_plot` benchmark groups.
/// Without arguments, reads `target/criterion` and writes to `plots`, both in the workspace root.
#[derive(Debug, Parser)]
#[clap(name = "bench-plots", version)]
struct BenchPlotsArgs {
    /// Criterion output directory to read results from.
    #[clap(long)]
    criterion_dir: Option<PathBuf>,

    /// Directory to write the charts to.
    #[clap(long)]
    output_dir: Option<PathBuf>,

    /// Numerator of the speedup charts.
    #[clap(long, default_value = DEFAULT_BASELINE_ALGORITHM)]
    baseline: String,

    /// Denominator of the speedup charts.
    #[clap(long, default_value = DEFAULT_COMPARISON_ALGORITHM)]
    comparison: String,

    /// Leave `similar` algorithms out of the absolute comparison charts.
    #[clap(long)]
    exclude_similar: bool,

    /// Draw confidence intervals as error bars in the absolute comparison charts.
    #[clap(long)]
    error_bars: bool,

    /// Only write the TikZ sources, without building PDFs.
    #[clap(long)]
    no_build: bool,

    /// LaTeX engine used to build the charts.
    #[clap(long, default_value = DEFAULT_LATEX_COMMAND)]
    latex: String,

    /// Command converting `<pdf> <svg>`.
    #[clap(long, default_value = DEFAULT_PDF_CONVERTER)]
    pdf_converter: String,

    /// Skip the PDF to SVG conversion.
    #[clap(long)]
    no_svg: bool,
}

impl From<BenchPlotsArgs> for PlotConfig {
    fn from(args: BenchPlotsArgs) -> Self {
        let mut config = PlotConfig::default();
        if let Some(criterion_dir) = args.criterion_dir {
            config.criterion_dir = criterion_dir;
        }
        if let Some(output_dir) = args.output_dir {
            config.output_dir = output_dir;
        }
        config.include_similar = !args.exclude_similar;
        config.comparison_pair =
            ComparisonPair { baseline: args.baseline, comparison: args.comparison };
        config.render = RenderConfig {
            build: !args.no_build,
            latex_command: args.latex,
            error_bars: args.error_bars,
            ..RenderConfig::default()
        };
        // Without built PDFs there is nothing to convert.
        config.pdf_converter = (!args.no_svg && !args.no_build).then_some(args.pdf_converter);
        config
    }
}

fn main() -> ExitCode {
    configure_tracing();
    let config = PlotConfig::from(BenchPlotsArgs::parse());
    info!("Plotting criterion results from {}.", config.criterion_dir.display());

    let renderer = TikzRenderer::new(config.render.clone());
    match run_plots(&config, &renderer) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
