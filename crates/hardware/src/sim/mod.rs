//! Simulation driver and stimulus utilities.
//!
//! Provides the two-phase clock stepping interface around the datapath and
//! gate, plus loading of JSON stimulus vector files.

/// Two-phase clock driver owning the datapath, gate, and statistics.
pub mod simulator;

/// Stimulus vector loading and validation.
pub mod vectors;

pub use simulator::{ClockLevel, Simulator};
