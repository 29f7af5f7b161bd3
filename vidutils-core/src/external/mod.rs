//! Interactions with the external ffmpeg and ffprobe command-line tools.
//!
//! Every invocation builds its argument list as discrete tokens, so
//! paths containing whitespace survive intact, and captures the tool's
//! combined output for diagnostics. No invocation is ever retried.

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};
use std::io;
use std::process::{Command, Stdio};

pub mod ffprobe;

pub use ffprobe::{probe, ProbeDocument, ProbeFormat, ProbeStream};

/// Checks that a required external command is available and executable.
///
/// Runs `<cmd_name> -version` with all output discarded. Used by the
/// CLI to fail early with a clear message instead of surfacing a spawn
/// error from the middle of an operation.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(command_start_error(cmd_name, e))
        }
    }
}

/// Runs ffmpeg with the given argument tokens, waiting for completion.
///
/// A non-zero exit is an error embedding the exit status and the
/// tool's combined stdout/stderr so encoder-level problems stay
/// diagnosable from the message alone.
pub fn run_ffmpeg<I, S>(args: I) -> CoreResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = Command::new("ffmpeg");
    cmd.args(args);
    log::debug!("Running ffmpeg command: {cmd:?}");

    let output = cmd
        .output()
        .map_err(|e| command_start_error("ffmpeg", e))?;

    if !output.status.success() {
        let combined = combined_output(&output.stdout, &output.stderr);
        log::error!("ffmpeg failed with {}: {}", output.status, combined.trim_end());
        return Err(command_failed_error("ffmpeg", output.status, combined));
    }

    Ok(())
}

/// Concatenates captured stdout and stderr the way a terminal would
/// have shown them, lossily decoding non-UTF-8 bytes.
pub(crate) fn combined_output(stdout: &[u8], stderr: &[u8]) -> String {
    let mut combined = String::from_utf8_lossy(stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(stderr));
    combined
}
