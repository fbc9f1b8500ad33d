//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Provides semantic variants for configuration loading, profile resolution,
//! filesystem preconditions, and subprocess launch failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile configuration not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to parse profile configuration {path:?}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("Invalid profile '{profile}': {reason}")]
    ProfileSchema { profile: String, reason: String },

    #[error("Unknown profile '{profile}'. Available profiles: {available}")]
    UnknownProfile { profile: String, available: String },

    #[error("Input file does not exist: {path:?}")]
    InputNotFound { path: PathBuf },

    #[error("Input directory does not exist or is not a directory: {path:?}")]
    InputDirInvalid { path: PathBuf },

    #[error("Cannot create output directory {path:?}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for fatal failures surfaced by the CLI. Launch
    /// failures use the shell's command-not-found convention so they stay
    /// distinguishable from ocrmypdf's own return codes; everything else
    /// is a setup error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Launch { .. } => 127,
            _ => 2,
        }
    }
}
