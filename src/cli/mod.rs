//! Command Line Interface (CLI) layer for ocrpilot.
//!
//! This module defines argument parsing (`args`) and the dispatch,
//! logging, and exit-code logic (`runner`) for the single-file, batch,
//! and maintenance subcommands. It wires user-provided options to the
//! library functionality exposed via `ocrpilot::api`.
//!
//! If you are embedding ocrpilot into another application, prefer using
//! the high-level `ocrpilot::api` module instead of calling the CLI code.
pub mod args;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
