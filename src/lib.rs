#![doc = r#"
ocrpilot — profile-driven OCR orchestration for scanned PDFs.

This crate wraps the external `ocrmypdf` tool: named argument profiles read
from a YAML document, single-file and whole-directory batch runs, captured
subprocess output, and machine-readable JSON summaries. It performs no OCR
itself; it exists to make driving ocrmypdf repeatable and scriptable. It
powers the `ocrpilot` CLI and can be embedded in other Rust applications.

Requirements
------------
- `ocrmypdf` installed and reachable on PATH (or an explicit binary path).
- Optional: poppler's `pdfinfo`/`pdftotext` for output validation.

Quick start: OCR one file
-------------------------
```rust,no_run
use std::path::Path;
use ocrpilot::{ocr_file, ProfileSet};

fn main() -> ocrpilot::Result<()> {
    let profiles = ProfileSet::load(Path::new("config/ocr_profiles.yaml"))?;
    let profile = profiles.resolve("balanced")?;

    let summary = ocr_file(
        Path::new("ocrmypdf"),
        Path::new("scan.pdf"),
        None, // derive scan.ocr.pdf next to the input
        profile,
        &[],
    )?;

    println!("ocrmypdf exited with {}", summary.returncode);
    Ok(())
}
```

Batch a directory
-----------------
```rust,no_run
use std::path::Path;
use ocrpilot::{ocr_directory, ProfileSet};

fn main() -> ocrpilot::Result<()> {
    let profiles = ProfileSet::load(Path::new("config/ocr_profiles.yaml"))?;
    let profile = profiles.resolve("archive")?;

    let batch = ocr_directory(
        Path::new("ocrmypdf"),
        Path::new("/scans/in"),
        Path::new("/scans/out"),
        profile,
        &[],
        true, // validate outputs with pdfinfo/pdftotext
    )?;

    println!("succeeded={} failed={}", batch.succeeded, batch.failed);
    Ok(())
}
```

Error handling
--------------
A non-zero tool exit is not a Rust error: it lands in the summary's
`returncode` field, and batches continue past it. Only configuration
problems, filesystem preconditions, and failed launches surface as
[`Error`].

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — profile store, job composition, subprocess execution.
- [`validate`] — post-OCR validation via the poppler tools.
- [`report`] — line-oriented JSON record writer.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod report;
pub mod types;
pub mod validate;

// Curated public API surface
// Types
pub use core::job::{FIXED_ARGS, JobRequest, OUTPUT_EXTENSION, derive_output_path};
pub use core::profiles::{DEFAULT_PROFILE, DEFAULT_PROFILES_PATH, Profile, ProfileSet};
pub use error::{Error, Result};
pub use types::{
    BatchSummary, CheckResult, JobSummary, ToolStatus, ValidationReport, ValidationTotals,
};

// Execution and reporting
pub use core::exec::{OCRMYPDF_PROGRAM, run_job};
pub use report::Reporter;
pub use validate::validate_pdf;

// High-level API re-exports
pub use api::{collect_pdfs, ocr_directory, ocr_file};
