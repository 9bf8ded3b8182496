use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{info, warn};

use crate::charts::{Chart, DataSet, LegendPosition};
use crate::config::RenderConfig;
use crate::errors::{PlotError, PlotResult};
use crate::process::run_command_checked;

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Turns a [Chart] into a file in `output_dir` and returns the path of the produced artifact.
pub trait ChartRenderer {
    fn render(&self, chart: &Chart, output_dir: &Path) -> PlotResult<PathBuf>;
}

/// Writes charts as standalone pgfplots documents and, if configured, builds them into PDFs.
#[derive(Clone, Debug, Default)]
pub struct TikzRenderer {
    pub config: RenderConfig,
}

impl TikzRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The full `.tex` source of `chart`.
    pub fn to_tikz(&self, chart: &Chart) -> String {
        let environment = axis_environment(chart);
        let mut tex = String::new();
        tex.push_str("\\documentclass[tikz]{standalone}\n");
        tex.push_str("\\usepackage{pgfplots}\n");
        tex.push_str("\\pgfplotsset{compat=1.17}\n");
        tex.push_str("\\usepackage{siunitx}\n");
        // The standalone class has no text block, give relative widths something to refer to.
        tex.push_str("\\setlength{\\textwidth}{16cm}\n");
        tex.push_str("\\begin{document}\n\\begin{tikzpicture}\n");
        tex.push_str(&format!(
            "\\begin{{{environment}}}[\n    width={},\n    xlabel={{{}}},\n    ylabel={{{}}},\n    \
             legend pos={},\n]\n",
            self.config.width,
            chart.x_label,
            chart.y_label,
            legend_pos(chart.legend_position)
        ));
        for data_set in &chart.data_sets {
            if data_set.x.is_empty() {
                warn!("Skipping an empty data set of {}.", chart.name);
                continue;
            }
            self.write_data_set(&mut tex, data_set, chart.y_scale);
        }
        tex.push_str(&format!("\\end{{{environment}}}\n"));
        tex.push_str("\\end{tikzpicture}\n\\end{document}\n");
        tex
    }

    fn write_data_set(&self, tex: &mut String, data_set: &DataSet, y_scale: f64) {
        let error_bounds = data_set.bounds.as_ref().filter(|_| self.config.error_bars);
        match error_bounds {
            Some(_) => tex.push_str(
                "\\addplot+[error bars/.cd, y dir=both, y explicit] table[x=x, y=y, y error \
                 minus=minus, y error plus=plus] {\nx y minus plus\n",
            ),
            None => tex.push_str("\\addplot table[x=x, y=y] {\nx y\n"),
        }
        for (index, (&x, &y)) in data_set.x.iter().zip(&data_set.y).enumerate() {
            tex.push_str(&format!("{} {}", tex_number(x), tex_number(y * y_scale)));
            if let Some((lower, upper)) = error_bounds {
                let minus = (y - lower[index]) * y_scale;
                let plus = (upper[index] - y) * y_scale;
                tex.push_str(&format!(" {} {}", tex_number(minus), tex_number(plus)));
            }
            tex.push('\n');
        }
        tex.push_str("};\n");
        if let Some(label) = &data_set.label {
            tex.push_str(&format!("\\addlegendentry{{{}}}\n", escape_tex(label)));
        }
    }
}

impl ChartRenderer for TikzRenderer {
    fn render(&self, chart: &Chart, output_dir: &Path) -> PlotResult<PathBuf> {
        fs::create_dir_all(output_dir)
            .map_err(|source| PlotError::Io { path: output_dir.to_path_buf(), source })?;

        let tex_path = output_dir.join(format!("{}.tex", chart.name));
        fs::write(&tex_path, self.to_tikz(chart))
            .map_err(|source| PlotError::Io { path: tex_path.clone(), source })?;
        info!("Wrote {}.", tex_path.display());

        if !self.config.build {
            return Ok(tex_path);
        }

        run_command_checked(
            Command::new(&self.config.latex_command)
                .arg("-interaction=nonstopmode")
                .arg("-halt-on-error")
                .arg("-output-directory")
                .arg(output_dir)
                .arg(&tex_path),
        )?;
        let pdf_path = tex_path.with_extension("pdf");
        info!("Built {}.", pdf_path.display());
        Ok(pdf_path)
    }
}

fn axis_environment(chart: &Chart) -> &'static str {
    match (chart.x_log, chart.y_log) {
        (true, true) => "loglogaxis",
        (true, false) => "semilogxaxis",
        (false, true) => "semilogyaxis",
        (false, false) => "axis",
    }
}

fn legend_pos(position: LegendPosition) -> &'static str {
    match position {
        LegendPosition::UpperLeft => "north west",
        LegendPosition::UpperRight => "north east",
        LegendPosition::LowerLeft => "south west",
        LegendPosition::LowerRight => "south east",
    }
}

// pgfplots skips coordinates given as nan.
fn tex_number(value: f64) -> String {
    if value.is_finite() {
        format!("{value:e}")
    } else {
        "nan".to_string()
    }
}

fn escape_tex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        if matches!(character, '_' | '%' | '&' | '#' | '$' | '{' | '}') {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    escaped
}
