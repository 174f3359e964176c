//! Compare command executor

use console::style;
use miette::{Result, WrapErr};

use super::print_report;
use crate::config::CompareConfig;
use crate::executors::CommandExecutor;
use crate::harness::ComparisonHarness;
use crate::progress::ProgressReporter;

pub struct CompareExecutor;

impl CommandExecutor for CompareExecutor {
    type Config = CompareConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Comparing cycle finders on {} (seed {})\n",
            style("🔄").cyan(),
            config.edges,
            style(config.seed).yellow()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = ProgressReporter::for_terminal();
        if let Some(p) = progress.as_mut() {
            p.start_comparison(config.sizes.len());
        }

        let report = ComparisonHarness::new()
            .run(&config.plan(), progress.as_mut())
            .wrap_err("Failed to run cycle finder comparison")?;

        let mismatches = report.mismatches().count();
        if let Some(p) = progress.as_mut() {
            p.finish_comparison(mismatches);
        }

        print_report(&report, config.format, None)?;

        // Exit with error code if the enumerations disagreed and requested
        if config.error_on_mismatch && mismatches > 0 {
            std::process::exit(1);
        }

        Ok(())
    }
}
