use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::output::SECONDS_PRECISION;
use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::harness::TimingRow;
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Status lines and progress bars on stderr for the interactive terminal.
pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        let term = Term::stderr();
        Self {
            term,
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// A reporter when stderr is an interactive terminal, `None` otherwise.
    pub fn for_terminal() -> Option<Self> {
        if Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    pub fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        let bar_style = ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏ ");
        pb.set_style(bar_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        let mut ticks: Vec<&str> = SPINNER_FRAMES.to_vec();
        ticks.push("✓ ");
        let spinner_style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&ticks);
        pb.set_style(spinner_style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_comparison(&mut self, sizes: usize) {
        eprintln!(
            "{} Comparing cycle finders over {} graph {}...",
            style("⏱").cyan(),
            style(sizes).yellow().bold(),
            pluralize("size", sizes)
        );
        let pb = self.create_progress_bar(sizes as u64, "Timing finders");
        self.current_bar = Some(pb);
    }

    pub fn comparison_size_started(&mut self, vertices: usize) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("{vertices} vertices"));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Timing {} vertices... ",
                style(self.next_frame()).cyan(),
                style(vertices).green()
            );
        }
    }

    pub fn comparison_size_finished(&mut self, row: &TimingRow) {
        let line = match (&row.skipped, row.dfs_existence) {
            (Some(reason), _) => format!(
                "  {} n = {}: {}",
                style("↷").yellow(),
                row.vertices,
                style(reason).dim()
            ),
            (None, Some(existence)) => format!(
                "  {} n = {}: existence check in {:.prec$}s",
                style("✓").green(),
                row.vertices,
                existence.seconds,
                prec = SECONDS_PRECISION
            ),
            (None, None) => format!("  {} n = {}", style("✓").green(), row.vertices),
        };

        match self.current_bar {
            Some(ref pb) => {
                pb.println(line);
                pb.inc(1);
            }
            None => {
                let _ = self.term.clear_line();
                eprintln!("\r{line}");
            }
        }
    }

    pub fn finish_comparison(&mut self, mismatches: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        if mismatches == 0 {
            eprintln!("{} Comparison complete", style("✓").green().bold());
        } else {
            eprintln!(
                "{} {} {} where the enumerations disagree",
                style("⚠").yellow().bold(),
                style(mismatches).red().bold(),
                pluralize("size", mismatches)
            );
        }
    }

    pub fn start_verification(&mut self, trials: usize) -> ProgressBar {
        eprintln!(
            "{} Cross-checking finders on {} random {}...",
            style("🔍").cyan(),
            style(trials).yellow().bold(),
            pluralize("graph", trials)
        );
        let pb = self.create_progress_bar(trials as u64, "Verifying");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn finish_verification(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_with_message("Verification complete");
        }
    }

    /// Show the current phase of a `count` run on a spinner.
    pub fn count_step(&mut self, message: &str) {
        match self.current_bar {
            Some(ref pb) => pb.set_message(message.to_string()),
            None => {
                let spinner = self.create_spinner(message);
                self.current_bar = Some(spinner);
            }
        }
    }

    pub fn finish_count(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!("{} Count complete", style("✓").green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_steps_reuse_one_spinner() {
        let mut progress = ProgressReporter::new();
        progress.count_step("first");
        assert!(progress.current_bar.is_some());
        progress.count_step("second");
        progress.finish_count();
        assert!(progress.current_bar.is_none());
    }

    #[test]
    fn test_verification_bar_is_released() {
        let mut progress = ProgressReporter::new();
        let bar = progress.start_verification(3);
        assert_eq!(bar.length(), Some(3));
        progress.finish_verification();
        assert!(progress.current_bar.is_none());
    }
}
