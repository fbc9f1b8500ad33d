//! Shared record types serialized by the reporter: per-job and per-batch
//! summaries, validation results, and tool preflight status. Field
//! declaration order fixes the JSON field order of every record.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of one ocrmypdf invocation for one input PDF.
///
/// `returncode` is the external tool's exit code; a non-zero value is a
/// recorded failure, not a Rust error. Captured streams are kept only
/// when non-empty so records stay small for clean runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSummary {
    pub input: String,
    pub output: String,
    pub profile: String,
    pub returncode: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl JobSummary {
    pub fn succeeded(&self) -> bool {
        self.returncode == 0
    }
}

/// Aggregate outcome of one batch run. `results` is in enumeration
/// (lexical file name) order; `succeeded + failed` equals its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub profile: String,
    pub input_dir: String,
    pub output_dir: String,
    pub results: Vec<JobSummary>,
    pub failed: usize,
    pub succeeded: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationTotals>,
}

/// Captured outcome of a single validation command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub command: Vec<String>,
    pub returncode: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Per-file validation outcome: tool name mapped to its check result.
/// Serializes as a plain JSON object keyed by tool name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationReport {
    pub checks: BTreeMap<String, CheckResult>,
}

impl ValidationReport {
    /// A file passes validation when every check exited 0.
    pub fn passed(&self) -> bool {
        self.checks.values().all(|check| check.returncode == 0)
    }
}

/// Aggregate validation counters attached to a batch summary. Validation
/// outcomes never alter the batch's OCR succeeded/failed counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationTotals {
    pub checked: usize,
    pub passed: usize,
    pub failed: usize,
}

impl ValidationTotals {
    pub fn record(&mut self, report: &ValidationReport) {
        self.checked += 1;
        if report.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// PATH resolution status for one external tool, as reported by `doctor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolStatus {
    pub tool: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}
