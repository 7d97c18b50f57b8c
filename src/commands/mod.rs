//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{SimpleCommand, next_command, parse_input, run_simple};
pub use simulate::{SimulationConfig, SimulationResult, run_simulation};
