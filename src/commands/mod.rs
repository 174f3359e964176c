//! Command implementations for cycle-census CLI
//!
//! This module contains the implementations for each CLI command:
//! - compare: Time the permutation oracle against both DFS operations
//! - verify: Cross-check the finders on many small random graphs
//! - count: Count cyclic components of a single random graph

pub mod compare;
pub mod count;
pub mod verify;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Compare { .. } => compare::execute_compare_command(command),
        Commands::Verify { .. } => verify::execute_verify_command(command),
        Commands::Count { .. } => count::execute_count_command(command),
    }
}
