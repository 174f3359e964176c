//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::constants::output::SECONDS_PRECISION;
use crate::error::CensusError;
use crate::harness::{ComparisonReport, CountReport, MethodTiming, VerificationReport};
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

fn seconds(timing: Option<MethodTiming>) -> String {
    match timing {
        Some(timing) => format!("{:.prec$}", timing.seconds, prec = SECONDS_PRECISION),
        None => "-".to_string(),
    }
}

fn count(timing: Option<MethodTiming>) -> String {
    timing.map_or_else(|| "-".to_string(), |timing| timing.cycles.to_string())
}

impl ReportGenerator<ComparisonReport> for HumanReportGenerator {
    fn generate_report(&self, report: &ComparisonReport) -> Result<String, CensusError> {
        let mut output = String::new();
        let plan = &report.plan;

        writeln!(
            output,
            "\n{} Cycle finder timings ({}, seed {})\n",
            style("⏱").cyan().bold(),
            plan.edges,
            style(plan.seed).yellow()
        )?;
        writeln!(
            output,
            "{:>8} {:>7} {:>14} {:>8} {:>14} {:>8} {:>14} {:>8}",
            "vertices", "edges", "permutation s", "cycles", "dfs enum s", "cycles", "existence s",
            "cyclic"
        )?;

        for row in &report.rows {
            if let Some(reason) = &row.skipped {
                writeln!(
                    output,
                    "{:>8} {}",
                    row.vertices,
                    style(format!("skipped: {reason}")).dim()
                )?;
                continue;
            }

            let edges = row.edges.map_or_else(|| "-".to_string(), |e| e.to_string());
            let line = format!(
                "{:>8} {:>7} {:>14} {:>8} {:>14} {:>8} {:>14} {:>8}",
                row.vertices,
                edges,
                seconds(row.permutation),
                count(row.permutation),
                seconds(row.dfs_enumeration),
                count(row.dfs_enumeration),
                seconds(row.dfs_existence),
                count(row.dfs_existence),
            );
            if row.enumerations_agree == Some(false) {
                writeln!(output, "{} {}", style(line).red(), style("✗ mismatch").red().bold())?;
            } else {
                writeln!(output, "{line}")?;
            }
        }

        let mismatches = report.mismatches().count();
        if mismatches == 0 {
            writeln!(
                output,
                "\n{} Both enumerations agree wherever both ran.",
                style("✅").green().bold()
            )?;
        } else {
            writeln!(
                output,
                "\n{} The enumerations disagree on {} {}.",
                style("❌").red().bold(),
                style(mismatches).red().bold(),
                pluralize("size", mismatches)
            )?;
        }

        if report.rows.iter().any(|row| row.permutation.is_none() && row.skipped.is_none()) {
            writeln!(
                output,
                "{} Permutation search only runs up to {} vertices. Use --permutation-limit to \
                 change it.",
                style("ℹ️").blue(),
                style(plan.permutation_limit).yellow()
            )?;
        }

        Ok(output)
    }
}

impl ReportGenerator<VerificationReport> for HumanReportGenerator {
    fn generate_report(&self, report: &VerificationReport) -> Result<String, CensusError> {
        let mut output = String::new();
        let plan = &report.plan;

        if report.all_passed() {
            write!(
                output,
                "\n{} All {} {} passed (up to {} vertices, p = {}, seeds {}..{}).\n",
                style("✅").green().bold(),
                style(plan.trials).yellow(),
                pluralize("trial", plan.trials),
                plan.max_vertices,
                plan.probability,
                plan.seed,
                plan.seed.wrapping_add(plan.trials as u64)
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} {} of {} {} failed:\n\n",
            style("❌").red().bold(),
            style(report.failures.len()).red().bold(),
            plan.trials,
            pluralize("trial", plan.trials)
        )?;

        for failure in &report.failures {
            writeln!(
                output,
                "{} seed {} ({} vertices, {} {})",
                style("🔄").yellow(),
                style(failure.seed).bold(),
                failure.vertices,
                failure.edges,
                pluralize("edge", failure.edges)
            )?;
            writeln!(
                output,
                "  {} permutation: {}, dfs: {}, cyclic components: {} of {}",
                style("→").dim(),
                failure.permutation_cycles,
                failure.dfs_cycles,
                failure.cyclic_components,
                failure.components
            )?;
            for problem in &failure.problems {
                writeln!(output, "    {} {}", style("•").dim(), problem)?;
            }
        }

        writeln!(
            output,
            "\n{} Rerun a single trial with `count --vertices N --probability P --seed S \
             --enumerate --permutation`.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

impl ReportGenerator<CountReport> for HumanReportGenerator {
    fn generate_report(&self, report: &CountReport) -> Result<String, CensusError> {
        let mut output = String::new();

        writeln!(
            output,
            "\n{} Graph: {} vertices, {} {} ({} storage, seed {})",
            style("📦").blue(),
            style(report.vertices).bold(),
            style(report.edges).bold(),
            pluralize("edge", report.edges),
            report.storage,
            style(report.seed).yellow()
        )?;
        writeln!(
            output,
            "  {} {} connected {}, {}",
            style("→").dim(),
            report.components,
            pluralize("component", report.components),
            if report.is_forest {
                style("forest").green()
            } else {
                style("not a forest").yellow()
            }
        )?;

        let cyclic = report.dfs_existence.cycles;
        writeln!(
            output,
            "\n{} {} {} with a cycle ({}s)",
            style("🔄").yellow(),
            style(cyclic).bold(),
            pluralize("component", cyclic),
            seconds(Some(report.dfs_existence))
        )?;

        if let Some(timing) = report.dfs_enumeration {
            writeln!(
                output,
                "{} {} simple {} by dfs ({}s)",
                style("🔗").cyan(),
                style(timing.cycles).bold(),
                pluralize("cycle", timing.cycles),
                seconds(Some(timing))
            )?;
        }
        if let Some(timing) = report.permutation {
            writeln!(
                output,
                "{} {} simple {} by permutation search ({}s)",
                style("🔗").cyan(),
                style(timing.cycles).bold(),
                pluralize("cycle", timing.cycles),
                seconds(Some(timing))
            )?;
        }
        if let Some(hamiltonian) = report.hamiltonian_cycles {
            writeln!(
                output,
                "{} {} Hamiltonian {}",
                style("🔗").cyan(),
                style(hamiltonian).bold(),
                pluralize("cycle", hamiltonian as usize)
            )?;
        }

        if let Some(cycles) = &report.cycles {
            let shown = self.max_cycles.unwrap_or(cycles.len()).min(cycles.len());
            if shown > 0 {
                writeln!(output)?;
            }
            for cycle in cycles.iter().take(shown) {
                writeln!(output, "  {} {}", style("•").dim(), cycle)?;
            }
            if shown < cycles.len() {
                writeln!(
                    output,
                    "\n{} Showing {} of {} cycles. Use --max-cycles to see more.",
                    style("ℹ️").blue(),
                    style(shown).yellow(),
                    style(cycles.len()).yellow()
                )?;
            }
        }

        Ok(output)
    }
}
