use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ocrpilot::core::exec::OCRMYPDF_PROGRAM;
use ocrpilot::core::profiles::{DEFAULT_PROFILE, DEFAULT_PROFILES_PATH};

#[derive(Parser)]
#[command(
    name = "ocrpilot",
    version,
    about = "OCR scanned PDFs into searchable PDF/A documents by driving ocrmypdf with named profiles"
)]
pub struct CliArgs {
    /// Path to the YAML profiles document
    #[arg(long, global = true, default_value = DEFAULT_PROFILES_PATH)]
    pub profiles: PathBuf,

    /// Named profile to apply
    #[arg(long, global = true, default_value = DEFAULT_PROFILE)]
    pub profile: String,

    /// ocrmypdf binary to invoke (if not on PATH)
    #[arg(long, global = true, default_value = OCRMYPDF_PROGRAM)]
    pub ocrmypdf_path: PathBuf,

    /// Verbose narration on stderr (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// OCR a single PDF; the exit code mirrors the tool's return code
    File {
        /// Input PDF
        input: PathBuf,

        /// Output path; defaults to the input name with the .ocr.pdf suffix
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Extra token appended to the ocrmypdf arguments (repeatable)
        #[arg(long, value_name = "TOKEN", allow_hyphen_values = true)]
        ocrmypdf_arg: Vec<String>,
    },

    /// OCR every PDF in a directory, continuing past per-file failures
    Batch {
        /// Directory scanned for PDF inputs
        #[arg(long)]
        input_dir: PathBuf,

        /// Directory receiving OCRed outputs (created if missing)
        #[arg(long)]
        output_dir: PathBuf,

        /// Extra token appended to the ocrmypdf arguments (repeatable)
        #[arg(long, value_name = "TOKEN", allow_hyphen_values = true)]
        ocrmypdf_arg: Vec<String>,

        /// Validate each successful output with pdfinfo and pdftotext
        #[arg(long, default_value_t = false)]
        validate: bool,
    },

    /// Run the validation tools against an existing PDF
    Validate {
        /// PDF to check
        pdf: PathBuf,
    },

    /// List the available profiles
    Profiles,

    /// Report whether the external tools are installed
    Doctor,
}
