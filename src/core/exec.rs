//! Subprocess execution of ocrmypdf: blocking invocation with captured
//! output. A non-zero tool exit is data in the summary, not an error;
//! only a failed spawn is fatal.
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, error, info};

use crate::core::job::JobRequest;
use crate::error::{Error, Result};
use crate::types::JobSummary;

/// Default program name, resolved through PATH.
pub const OCRMYPDF_PROGRAM: &str = "ocrmypdf";

/// Return code recorded when a job's launch failed and the failure was
/// folded into a batch result (shell command-not-found convention).
pub const LAUNCH_FAILURE_CODE: i32 = 127;

/// Run one composed job to completion and summarize it.
///
/// Blocks until the child exits; stdout and stderr are captured, never
/// inherited. Spawn failures (missing binary, permission) surface as
/// [`Error::Launch`]; every other outcome, including non-zero exits, is
/// reported through the summary's `returncode`.
pub fn run_job(program: &Path, request: &JobRequest) -> Result<JobSummary> {
    debug!(
        program = %program.display(),
        input = %request.input.display(),
        profile = %request.profile.name,
        "launching ocrmypdf"
    );

    let output = Command::new(program)
        .args(request.command_args())
        .output()
        .map_err(|e| Error::Launch {
            program: program.display().to_string(),
            source: e,
        })?;

    // Signal-terminated children carry no exit code on unix; record -1.
    let returncode = output.status.code().unwrap_or(-1);
    let stdout = non_empty(String::from_utf8_lossy(&output.stdout).into_owned());
    let stderr = non_empty(String::from_utf8_lossy(&output.stderr).into_owned());

    if returncode == 0 {
        info!(
            input = %request.input.display(),
            output = %request.output.display(),
            profile = %request.profile.name,
            returncode,
            "ocrmypdf succeeded"
        );
    } else if let Some(err_text) = stderr.as_deref() {
        error!(
            input = %request.input.display(),
            output = %request.output.display(),
            profile = %request.profile.name,
            returncode,
            stderr = err_text,
            "ocrmypdf failed"
        );
    } else {
        error!(
            input = %request.input.display(),
            output = %request.output.display(),
            profile = %request.profile.name,
            returncode,
            "ocrmypdf failed"
        );
    }

    Ok(JobSummary {
        input: request.input.display().to_string(),
        output: request.output.display().to_string(),
        profile: request.profile.name.clone(),
        returncode,
        stdout,
        stderr,
    })
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() { None } else { Some(text) }
}

/// Resolve a tool on PATH, or verify an explicit path. Used by the
/// `doctor` preflight.
pub fn locate_tool(program: &Path) -> Option<PathBuf> {
    which::which(program).ok()
}
