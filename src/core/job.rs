//! Job composition: turns a profile plus per-run extras into the exact
//! argument list handed to ocrmypdf, and derives output paths. Pure
//! transformations; filesystem effects live in `api` and `core::exec`.
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::core::profiles::Profile;

/// Flags prepended to every invocation; pins archival PDF/A output.
/// Profile or extra tokens may override them (the tool applies last-wins).
pub const FIXED_ARGS: &[&str] = &["--output-type", "pdfa"];

/// Extension replacing the input's own on derived output names.
pub const OUTPUT_EXTENSION: &str = "ocr.pdf";

/// Everything needed to launch one ocrmypdf run.
#[derive(Debug, Clone)]
pub struct JobRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub profile: Profile,
    pub extra_args: Vec<String>,
}

impl JobRequest {
    pub fn new(
        input: PathBuf,
        output: PathBuf,
        profile: Profile,
        extra_args: Vec<String>,
    ) -> Self {
        Self {
            input,
            output,
            profile,
            extra_args,
        }
    }

    /// Argument list after the program name: fixed flags, profile tokens,
    /// per-run extras, then input and output paths. Tokens are never
    /// deduplicated or reordered.
    pub fn command_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(
            FIXED_ARGS.len() + self.profile.ocrmypdf_args.len() + self.extra_args.len() + 2,
        );
        args.extend(FIXED_ARGS.iter().map(OsString::from));
        args.extend(self.profile.ocrmypdf_args.iter().map(OsString::from));
        args.extend(self.extra_args.iter().map(OsString::from));
        args.push(self.input.clone().into_os_string());
        args.push(self.output.clone().into_os_string());
        args
    }
}

/// Derive the output path for `input`: the file name keeps its stem and
/// takes the `.ocr.pdf` extension, placed next to the input, or inside
/// `output_dir` when given. Deterministic and idempotent.
pub fn derive_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let derived = input.with_extension(OUTPUT_EXTENSION);
    match (output_dir, derived.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => derived,
    }
}
