//! High-level orchestration API: run one OCR job or a whole directory
//! batch, each returning a structured summary. Prefer these entry points
//! over the `core` modules when embedding ocrpilot.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::exec::{self, LAUNCH_FAILURE_CODE};
use crate::core::job::{self, JobRequest};
use crate::core::profiles::Profile;
use crate::error::{Error, Result};
use crate::types::{BatchSummary, JobSummary, ValidationTotals};
use crate::validate;

/// OCR a single PDF with `profile`, invoking the tool at `program`.
///
/// When `output` is `None` the path is derived next to the input with the
/// `.ocr.pdf` suffix. Missing parents of an explicit output are created.
/// A missing input fails before anything is launched; an existing output
/// is overwritten by the tool, so reruns are idempotent.
pub fn ocr_file(
    program: &Path,
    input: &Path,
    output: Option<&Path>,
    profile: &Profile,
    extra_args: &[String],
) -> Result<JobSummary> {
    if !input.is_file() {
        return Err(Error::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => job::derive_output_path(input, None),
    };
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            create_output_dir(parent)?;
        }
    }

    let request = JobRequest::new(
        input.to_path_buf(),
        output,
        profile.clone(),
        extra_args.to_vec(),
    );
    exec::run_job(program, &request)
}

/// List the PDF files directly inside `input_dir`, sorted by file name.
/// Subdirectories and non-PDF entries are skipped; the extension match is
/// case-insensitive. A missing or non-directory `input_dir` is fatal.
pub fn collect_pdfs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(Error::InputDirInvalid {
            path: input_dir.to_path_buf(),
        });
    }

    let mut pdfs = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_pdf_extension(&path) {
            pdfs.push(path);
        }
    }
    pdfs.sort();
    Ok(pdfs)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

fn create_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// OCR every PDF in `input_dir` into `output_dir`, continuing past failed
/// jobs. Results come back in enumeration order with aggregate counts;
/// `validate_outputs` additionally runs the poppler checks on each
/// successful output and attaches the totals.
///
/// A job whose launch fails is recorded with a non-zero return code and
/// the batch continues; an empty directory yields an empty summary.
pub fn ocr_directory(
    program: &Path,
    input_dir: &Path,
    output_dir: &Path,
    profile: &Profile,
    extra_args: &[String],
    validate_outputs: bool,
) -> Result<BatchSummary> {
    let inputs = collect_pdfs(input_dir)?;
    create_output_dir(output_dir)?;

    info!(
        input_dir = %input_dir.display(),
        output_dir = %output_dir.display(),
        profile = %profile.name,
        files = inputs.len(),
        "starting batch"
    );

    let mut results = Vec::with_capacity(inputs.len());
    let mut succeeded = 0usize;
    let mut failed = 0usize;
    let mut totals = validate_outputs.then(ValidationTotals::default);

    for input in &inputs {
        let output = job::derive_output_path(input, Some(output_dir));
        let request = JobRequest::new(
            input.clone(),
            output.clone(),
            profile.clone(),
            extra_args.to_vec(),
        );

        let summary = match exec::run_job(program, &request) {
            Ok(summary) => summary,
            Err(Error::Launch { program, source }) => {
                warn!(
                    input = %input.display(),
                    program = %program,
                    error = %source,
                    "could not launch ocrmypdf; recording job as failed"
                );
                launch_failure(&request, &program, &source)
            }
            Err(e) => return Err(e),
        };

        if summary.succeeded() {
            succeeded += 1;
            if let Some(totals) = totals.as_mut() {
                totals.record(&validate::validate_pdf(&output));
            }
        } else {
            failed += 1;
        }
        results.push(summary);
    }

    info!(succeeded, failed, "batch complete");

    Ok(BatchSummary {
        profile: profile.name.clone(),
        input_dir: input_dir.display().to_string(),
        output_dir: output_dir.display().to_string(),
        results,
        failed,
        succeeded,
        validation: totals,
    })
}

fn launch_failure(request: &JobRequest, program: &str, error: &std::io::Error) -> JobSummary {
    JobSummary {
        input: request.input.display().to_string(),
        output: request.output.display().to_string(),
        profile: request.profile.name.clone(),
        returncode: LAUNCH_FAILURE_CODE,
        stdout: None,
        stderr: Some(format!("failed to launch '{program}': {error}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "balanced".to_string(),
            description: String::new(),
            ocrmypdf_args: vec!["--skip-text".to_string()],
        }
    }

    #[cfg(unix)]
    const STUB_OCR: &str = r#"#!/bin/sh
in=""
out=""
for a in "$@"; do
  in="$out"
  out="$a"
done
case "$in" in
  *fail-*) echo "simulated failure" >&2; exit 6 ;;
esac
: > "$out"
echo "ok"
"#;

    #[cfg(unix)]
    fn write_stub(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("fake-ocrmypdf");
        fs::write(&path, STUB_OCR).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn missing_input_dir_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_pdfs(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, Error::InputDirInvalid { .. }));
    }

    #[test]
    fn collect_skips_non_pdfs_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.pdf"), b"").unwrap();
        fs::write(dir.path().join("a.PDF"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        fs::create_dir(dir.path().join("0.pdf")).unwrap();

        let names: Vec<String> = collect_pdfs(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.PDF", "b.pdf"]);
    }

    #[test]
    fn empty_directory_yields_zero_counts() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        let output_dir = dir.path().join("out");
        fs::create_dir(&input_dir).unwrap();

        // Nothing gets launched, so the program path can be bogus.
        let summary = ocr_directory(
            Path::new("missing-tool"),
            &input_dir,
            &output_dir,
            &profile(),
            &[],
            false,
        )
        .unwrap();

        assert!(summary.results.is_empty());
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.failed, 0);
        assert_eq!(summary.validation, None);
        assert!(output_dir.is_dir());
    }

    #[test]
    fn uncreatable_output_dir_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        fs::create_dir(&input_dir).unwrap();
        fs::write(input_dir.join("a.pdf"), b"").unwrap();

        // A plain file blocks the output directory path.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let output_dir = blocker.join("out");

        let err = ocr_directory(
            Path::new("missing-tool"),
            &input_dir,
            &output_dir,
            &profile(),
            &[],
            false,
        )
        .unwrap_err();
        match err {
            Error::CreateOutputDir { path, .. } => assert_eq!(path, output_dir),
            other => panic!("expected create error, got {other:?}"),
        }
    }

    #[test]
    fn single_missing_input_is_fatal_before_launch() {
        let dir = tempfile::tempdir().unwrap();
        let err = ocr_file(
            Path::new("missing-tool"),
            &dir.path().join("absent.pdf"),
            None,
            &profile(),
            &[],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InputNotFound { .. }));
    }

    #[test]
    fn launch_failure_is_recorded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        let output_dir = dir.path().join("out");
        fs::create_dir(&input_dir).unwrap();
        fs::write(input_dir.join("a.pdf"), b"").unwrap();
        fs::write(input_dir.join("b.pdf"), b"").unwrap();

        let summary = ocr_directory(
            &dir.path().join("no-such-binary"),
            &input_dir,
            &output_dir,
            &profile(),
            &[],
            false,
        )
        .unwrap();

        assert_eq!(summary.failed, 2);
        assert_eq!(summary.succeeded, 0);
        for result in &summary.results {
            assert_eq!(result.returncode, LAUNCH_FAILURE_CODE);
            assert!(result.stderr.as_deref().unwrap().contains("failed to launch"));
        }
    }

    #[cfg(unix)]
    #[test]
    fn batch_records_results_in_order_with_counts() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path());
        let input_dir = dir.path().join("in");
        let output_dir = dir.path().join("out");
        fs::create_dir(&input_dir).unwrap();
        for name in ["a.pdf", "fail-b.pdf", "c.pdf"] {
            fs::write(input_dir.join(name), b"").unwrap();
        }

        let summary = ocr_directory(&stub, &input_dir, &output_dir, &profile(), &[], false)
            .unwrap();

        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.results.len(), 3);

        let inputs: Vec<&str> = summary.results.iter().map(|r| r.input.as_str()).collect();
        assert!(inputs[0].ends_with("a.pdf"));
        assert!(inputs[1].ends_with("c.pdf"));
        assert!(inputs[2].ends_with("fail-b.pdf"));

        assert!(output_dir.join("a.ocr.pdf").is_file());
        assert!(output_dir.join("c.ocr.pdf").is_file());
        assert_eq!(summary.results[2].returncode, 6);
        assert_eq!(
            summary.results[2].stderr.as_deref(),
            Some("simulated failure\n")
        );
    }

    #[cfg(unix)]
    #[test]
    fn validation_totals_follow_successes_without_touching_counts() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path());
        let input_dir = dir.path().join("in");
        let output_dir = dir.path().join("out");
        fs::create_dir(&input_dir).unwrap();
        for name in ["a.pdf", "b.pdf", "fail-c.pdf"] {
            fs::write(input_dir.join(name), b"").unwrap();
        }

        let summary = ocr_directory(&stub, &input_dir, &output_dir, &profile(), &[], true)
            .unwrap();

        // OCR accounting is independent of what the validators report.
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        let totals = summary.validation.unwrap();
        assert_eq!(totals.checked, 2);
        assert_eq!(totals.passed + totals.failed, totals.checked);
    }

    #[cfg(unix)]
    #[test]
    fn single_file_derives_output_and_reruns_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path());
        let input = dir.path().join("scan.pdf");
        fs::write(&input, b"").unwrap();

        let first = ocr_file(&stub, &input, None, &profile(), &[]).unwrap();
        assert_eq!(first.returncode, 0);
        let derived = dir.path().join("scan.ocr.pdf");
        assert!(derived.is_file());
        assert!(first.output.ends_with("scan.ocr.pdf"));

        // Output already exists; the rerun overwrites it.
        let second = ocr_file(&stub, &input, None, &profile(), &[]).unwrap();
        assert_eq!(second.returncode, 0);
        assert_eq!(first.output, second.output);
    }

    #[cfg(unix)]
    #[test]
    fn explicit_output_parent_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let stub = write_stub(dir.path());
        let input = dir.path().join("scan.pdf");
        fs::write(&input, b"").unwrap();
        let output = dir.path().join("nested/deep/out.pdf");

        let summary = ocr_file(&stub, &input, Some(&output), &profile(), &[]).unwrap();
        assert_eq!(summary.returncode, 0);
        assert!(output.is_file());
    }
}
