//! Count command executor

use console::style;
use miette::{Result, WrapErr};

use super::print_report;
use crate::config::CountConfig;
use crate::executors::CommandExecutor;
use crate::harness::run_count;
use crate::progress::ProgressReporter;

pub struct CountExecutor;

impl CommandExecutor for CountExecutor {
    type Config = CountConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Counting cycles on {} vertices with {} (seed {})",
            style("🔄").cyan(),
            config.vertices,
            config.edges,
            style(config.seed).yellow()
        );

        let mut progress = ProgressReporter::for_terminal();
        let report = run_count(&config.plan(), progress.as_mut())
            .wrap_err("Failed to count cycles")?;

        print_report(&report, config.format, config.max_cycles)
    }
}
