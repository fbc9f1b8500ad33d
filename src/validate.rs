//! Post-OCR validation: shells out to poppler's pdfinfo and pdftotext and
//! records their outcomes. A PDF passes when every check exits 0. A check
//! whose tool cannot be launched is recorded as failed, not raised.
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

use crate::core::exec::LAUNCH_FAILURE_CODE;
use crate::types::{CheckResult, ValidationReport};

/// Upper bound on captured output kept per check.
pub const OUTPUT_PREVIEW_LIMIT: usize = 4096;

const PDFINFO_PROGRAM: &str = "pdfinfo";
const PDFTOTEXT_PROGRAM: &str = "pdftotext";

/// External tools consulted by [`validate_pdf`], in report order.
pub const VALIDATION_TOOLS: &[&str] = &[PDFINFO_PROGRAM, PDFTOTEXT_PROGRAM];

/// Run every validation tool against `pdf` and collect their results.
pub fn validate_pdf(pdf: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();

    let pdfinfo = run_check(PDFINFO_PROGRAM, &[pdf.as_os_str()]);
    let pdftotext = run_check(
        PDFTOTEXT_PROGRAM,
        &[OsStr::new("-q"), pdf.as_os_str(), OsStr::new("-")],
    );

    for (tool, check) in [(PDFINFO_PROGRAM, pdfinfo), (PDFTOTEXT_PROGRAM, pdftotext)] {
        if check.returncode == 0 {
            debug!(tool, pdf = %pdf.display(), "validation check passed");
        } else {
            warn!(
                tool,
                pdf = %pdf.display(),
                returncode = check.returncode,
                "validation check failed"
            );
        }
        report.checks.insert(tool.to_string(), check);
    }

    report
}

fn run_check(program: &str, args: &[&OsStr]) -> CheckResult {
    let mut command: Vec<String> = Vec::with_capacity(args.len() + 1);
    command.push(program.to_string());
    command.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));

    match Command::new(program).args(args).output() {
        Ok(output) => CheckResult {
            command,
            returncode: output.status.code().unwrap_or(-1),
            stdout: preview(String::from_utf8_lossy(&output.stdout).into_owned()),
            stderr: preview(String::from_utf8_lossy(&output.stderr).into_owned()),
        },
        Err(e) => {
            warn!(program, error = %e, "validation tool could not be launched");
            CheckResult {
                command,
                returncode: LAUNCH_FAILURE_CODE,
                stdout: String::new(),
                stderr: e.to_string(),
            }
        }
    }
}

/// Truncate captured output to the preview limit on a char boundary.
fn preview(mut text: String) -> String {
    if text.len() > OUTPUT_PREVIEW_LIMIT {
        let mut end = OUTPUT_PREVIEW_LIMIT;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}
