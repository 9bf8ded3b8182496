use std::path::{Path, PathBuf};
use std::process::Command;

use glob::{glob, Pattern};
use tracing::{info, warn};

use crate::errors::{PlotError, PlotResult};
use crate::process::{describe, run_command};

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

/// Converts every PDF in `output_dir` into an SVG next to it, using `converter <pdf> <svg>`.
///
/// Returns the SVG paths whose conversion was attempted. A converter that exits with an error is
/// only reported; a converter that can't be started fails the export.
pub fn convert_pdfs_to_svg(output_dir: &Path, converter: &str) -> PlotResult<Vec<PathBuf>> {
    let pattern = format!("{}/*.pdf", Pattern::escape(&output_dir.to_string_lossy()));
    let mut pdfs = Vec::new();
    for entry in glob(&pattern)? {
        let pdf = entry.map_err(|error| PlotError::Io {
            path: error.path().to_path_buf(),
            source: error.into_error(),
        })?;
        pdfs.push(pdf);
    }
    pdfs.sort();

    let mut svgs = Vec::with_capacity(pdfs.len());
    for pdf in pdfs {
        let svg = pdf.with_extension("svg");
        let mut command = Command::new(converter);
        command.arg(&pdf).arg(&svg);

        let output = run_command(&mut command)?;
        if output.status.success() {
            info!("Converted {} to {}.", pdf.display(), svg.display());
        } else {
            warn!(
                "'{}' exited with {}: {}",
                describe(&command),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        svgs.push(svg);
    }
    Ok(svgs)
}
