//! Terminal output formatting
//!
//! Display utilities for the CLI and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_simulation_result};
