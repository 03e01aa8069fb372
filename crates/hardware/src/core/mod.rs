//! Datapath core: combinational logic and register state.
//!
//! This module contains the synthesizable heart of the model:
//! 1. **ALU:** The eight-operation combinational function over 16-bit operands.
//! 2. **Registers:** The result/zero/carry register bank, written only on active edges.
//! 3. **Gate:** The level-sensitive clock-gate latch.
//! 4. **Isolation:** The combinational operand-isolation layer.
//! 5. **Signals:** Operation selectors and the per-cycle pin surface.
//!
//! Each stateful element is owned by exactly one component; all cross-component
//! interaction goes through the edge-driven step interface in [`crate::sim`].

/// Arithmetic/logic unit (combinational operation evaluation).
pub mod alu;

/// Registered datapath: edge-driven result and flag updates.
pub mod datapath;

/// Level-sensitive clock-gate controller.
pub mod gate;

/// Combinational operand isolation.
pub mod isolation;

/// Register bank for the datapath state.
pub mod regs;

/// Operation selectors, pin surface, and output surface.
pub mod signals;

pub use datapath::Datapath;
pub use gate::ClockGate;
pub use regs::AluRegisters;
pub use signals::{Opcode, Outputs, PinState};
