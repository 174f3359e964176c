//! Configuration constants for cycle-census
//!
//! This module contains the defaults used throughout the application. Most of
//! them can be overridden through command-line flags, environment variables or
//! a plan file.

use std::time::Duration;

/// Graph storage thresholds
pub mod graph {
    /// Graphs up to this many vertices default to adjacency lists
    pub const LIST_MAX_VERTICES: usize = 64;

    /// Graphs above this many vertices fall back to adjacency lists, since the
    /// bit matrix grows with the square of the vertex count
    pub const MATRIX_MAX_VERTICES: usize = 16_384;
}

/// Harness defaults
pub mod harness {
    /// Vertex counts compared when no sizes are given
    pub const DEFAULT_SIZES: &[usize] = &[5, 6, 7, 8, 10, 12];

    /// Edge count per generated graph in edge-count mode
    pub const DEFAULT_EDGES: usize = 10;

    /// Edge probability in probability mode
    pub const DEFAULT_PROBABILITY: f64 = 0.4;

    /// Largest graph the permutation finder is run on
    pub const DEFAULT_PERMUTATION_LIMIT: usize = 12;

    /// Number of random graphs checked by `verify`
    pub const DEFAULT_TRIALS: usize = 64;

    /// Largest graph generated by `verify`
    pub const DEFAULT_VERIFY_MAX_VERTICES: usize = 8;

    /// Vertex count for `count` when none is given
    pub const DEFAULT_COUNT_VERTICES: usize = 10_000;
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames, a cycle being traced around its vertices
    pub const SPINNER_FRAMES: &[&str] = &["◜ ", "◝ ", "◞ ", "◟ "];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Decimal places for elapsed seconds in human reports
    pub const SECONDS_PRECISION: usize = 6;
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding the tracing filter directive
    pub const FILTER_ENV: &str = "CYCLE_CENSUS_LOG";

    /// Environment variable selecting `json` log lines
    pub const FORMAT_ENV: &str = "CYCLE_CENSUS_LOG_FORMAT";

    /// Filter used when no directive is configured
    pub const DEFAULT_FILTER: &str = "cycle_census=warn";

    /// Filter used when `DEBUG` is set
    pub const DEBUG_FILTER: &str = "cycle_census=debug";
}
