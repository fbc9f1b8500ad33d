use std::path::Path;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use ocrpilot::api;
use ocrpilot::core::exec;
use ocrpilot::core::profiles::ProfileSet;
use ocrpilot::error::{Error, Result};
use ocrpilot::report::Reporter;
use ocrpilot::types::ToolStatus;
use ocrpilot::validate;

use super::args::{CliArgs, Command};

pub fn run(args: CliArgs) -> ExitCode {
    init_logging(args.verbose);

    match dispatch(args) {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Narration goes to stderr so stdout stays a pure record stream.
/// `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "ocrpilot=debug"
    } else {
        "ocrpilot=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(args: CliArgs) -> Result<ExitCode> {
    let mut reporter = Reporter::stdout();

    match args.command {
        Command::File {
            input,
            output,
            ocrmypdf_arg,
        } => {
            let profiles = ProfileSet::load(&args.profiles)?;
            let profile = profiles.resolve(&args.profile)?;
            let summary = api::ocr_file(
                &args.ocrmypdf_path,
                &input,
                output.as_deref(),
                profile,
                &ocrmypdf_arg,
            )?;
            reporter.emit(&summary)?;
            Ok(exit_from(summary.returncode))
        }

        Command::Batch {
            input_dir,
            output_dir,
            ocrmypdf_arg,
            validate,
        } => {
            let profiles = ProfileSet::load(&args.profiles)?;
            let profile = profiles.resolve(&args.profile)?;
            let summary = api::ocr_directory(
                &args.ocrmypdf_path,
                &input_dir,
                &output_dir,
                profile,
                &ocrmypdf_arg,
                validate,
            )?;
            reporter.emit(&summary)?;
            // Per-file failures are data in the record, not process status.
            Ok(ExitCode::SUCCESS)
        }

        Command::Validate { pdf } => {
            if !pdf.is_file() {
                return Err(Error::InputNotFound { path: pdf });
            }
            let report = validate::validate_pdf(&pdf);
            let passed = report.passed();
            reporter.emit(&report)?;
            Ok(if passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }

        Command::Profiles => {
            let profiles = ProfileSet::load(&args.profiles)?;
            let listing: Vec<_> = profiles.iter().collect();
            reporter.emit(&listing)?;
            Ok(ExitCode::SUCCESS)
        }

        Command::Doctor => {
            let statuses = tool_statuses(&args.ocrmypdf_path);
            let all_found = statuses.iter().all(|status| status.found);
            reporter.emit(&statuses)?;
            Ok(if all_found {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
    }
}

/// Mirror the child's return code as the process exit code. Codes outside
/// the u8 range (signal-terminated children record -1) wrap mod 256.
fn exit_from(returncode: i32) -> ExitCode {
    ExitCode::from(returncode.rem_euclid(256) as u8)
}

fn tool_statuses(ocrmypdf: &Path) -> Vec<ToolStatus> {
    let mut tools = vec![ocrmypdf.as_os_str().to_string_lossy().into_owned()];
    tools.extend(validate::VALIDATION_TOOLS.iter().map(|t| t.to_string()));

    tools
        .into_iter()
        .map(|tool| {
            let path = exec::locate_tool(Path::new(&tool));
            ToolStatus {
                found: path.is_some(),
                path: path.map(|p| p.display().to_string()),
                tool,
            }
        })
        .collect()
}
