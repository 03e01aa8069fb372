//! Power-aware 16-bit ALU behavioral model.
//!
//! This crate implements a cycle-accurate model of a clock-gated ALU datapath with the following:
//! 1. **Core:** Eight-operation 16-bit datapath, register state, and the lagged flag unit.
//! 2. **Gating:** Level-sensitive clock-gate controller evaluated as two explicit phases per period.
//! 3. **Isolation:** Combinational operand isolation that zeroes the datapath inputs when disabled.
//! 4. **Simulation:** Explicit clock/reset/enable stepping, stimulus vector loading, and activity statistics.
//!
//! The model is a deterministic step function over explicit clock edges: nothing advances
//! unless the host raises or lowers the raw clock, and every register update observes
//! pre-edge state only.

/// Common types and constants (word widths, masks, boundary errors).
pub mod common;
/// Model configuration (defaults, power-feature switches).
pub mod config;
/// Datapath core (ALU, registers, clock gate, operand isolation, signals).
pub mod core;
/// Simulation driver and stimulus vector loading.
pub mod sim;
/// Activity statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Operation selector for the eight datapath operations.
pub use crate::core::signals::Opcode;
/// Registered output surface (`result`, `zero`, `carry`).
pub use crate::core::signals::Outputs;
/// Per-cycle input surface (clock-independent pins).
pub use crate::core::signals::PinState;
/// Top-level stepped state machine; construct with `Simulator::new`.
pub use crate::sim::Simulator;
