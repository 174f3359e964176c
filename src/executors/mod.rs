//! Command executors that handle the actual logic for each command

pub mod compare;
pub mod count;
pub mod verify;

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Render `report` in `format` and print it to stdout.
fn print_report<R>(report: &R, format: OutputFormat, max_cycles: Option<usize>) -> Result<()>
where
    HumanReportGenerator: ReportGenerator<R>,
    JsonReportGenerator: ReportGenerator<R>,
{
    let report_result = match format {
        OutputFormat::Human => HumanReportGenerator::new(max_cycles).generate_report(report),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(report),
    };

    match report_result {
        Ok(output) => {
            print!("{output}");
            if format == OutputFormat::Json {
                println!();
            }
            Ok(())
        }
        Err(e) => Err(e).into_diagnostic().wrap_err("Failed to generate report"),
    }
}
