//! Report generation modules for different output formats
//!
//! This module contains report generators for the harness results:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::CensusError;

/// Common trait for all report generators, one impl per report type
pub trait ReportGenerator<R> {
    /// Render `report` in this generator's format
    fn generate_report(&self, report: &R) -> Result<String, CensusError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
