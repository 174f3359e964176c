//! Verify command executor

use console::style;
use miette::{Result, WrapErr};

use super::print_report;
use crate::config::VerifyConfig;
use crate::executors::CommandExecutor;
use crate::harness::run_verification;
use crate::progress::ProgressReporter;

pub struct VerifyExecutor;

impl CommandExecutor for VerifyExecutor {
    type Config = VerifyConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Verifying cycle finders: {} trials up to {} vertices, p = {} (seed {})\n",
            style("🔍").cyan(),
            config.trials,
            config.max_vertices,
            config.probability,
            style(config.seed).yellow()
        );

        let mut progress = ProgressReporter::for_terminal();
        let report = run_verification(&config.plan(), progress.as_mut())
            .wrap_err("Failed to run verification trials")?;

        print_report(&report, config.format, None)?;

        if config.error_on_mismatch && !report.all_passed() {
            std::process::exit(1);
        }

        Ok(())
    }
}
