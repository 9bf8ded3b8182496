use std::process::{Command, Output};

use tracing::debug;

use crate::errors::{PlotError, PlotResult};

/// Runs `command` to completion. Fails only if the process can't be started; the caller decides
/// what a non-zero exit status means.
pub fn run_command(command: &mut Command) -> PlotResult<Output> {
    let description = describe(command);
    debug!("Running: {description}");
    command.output().map_err(|source| PlotError::Process { command: description, source })
}

/// Runs `command` and fails if it doesn't exit successfully.
pub fn run_command_checked(command: &mut Command) -> PlotResult<Output> {
    let output = run_command(command)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        return Err(PlotError::ExternalTool {
            command: describe(command),
            status: output.status,
            stderr,
        });
    }
    Ok(output)
}

pub fn describe(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
