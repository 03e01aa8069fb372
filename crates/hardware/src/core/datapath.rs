//! Registered datapath and flag unit.
//!
//! This module applies gated clock edges to the register bank. It performs:
//! 1. **Edge Commit:** Evaluates the selected operation and latches result and carry.
//! 2. **Flag Derivation:** Registers the zero flag from the pre-edge result value.
//! 3. **Decode Clamp:** Maps widened selectors onto the defined default branch.
//!
//! The zero flag is computed on the same edge as the result register but from
//! the register content as sampled at the start of that edge. The flag
//! observed after cycle N therefore reports whether the result was zero
//! *before* cycle N's operation, one cycle behind the naive expectation. This
//! staleness is part of the modeled contract and must not be collapsed into a
//! same-cycle combinational zero check.

use crate::core::alu::{Alu, AluOutput};
use crate::core::regs::AluRegisters;
use crate::core::signals::{Opcode, Outputs};

/// Registered ALU core: the only writer of the register bank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Datapath {
    regs: AluRegisters,
}

impl Datapath {
    /// Creates a datapath with all registers cleared.
    pub const fn new() -> Self {
        Self {
            regs: AluRegisters::new(),
        }
    }

    /// Read-only view of the register bank.
    pub const fn registers(&self) -> &AluRegisters {
        &self.regs
    }

    /// Snapshot of the registered output surface.
    pub const fn outputs(&self) -> Outputs {
        self.regs.outputs()
    }

    /// Applies one active clock edge.
    ///
    /// `op` is the decoded selector; `None` is the clamped default branch
    /// (result forced to zero, carry cleared). Operands must already have
    /// passed the isolation layer if it is configured.
    ///
    /// Driven by the simulator only on gated rising edges; reset precedence
    /// is resolved before this is reached.
    pub fn clock_edge(&mut self, op: Option<Opcode>, a: u16, b: u16) {
        // Flag unit: samples the result register before this edge's update.
        let zero_next = self.regs.result() == 0;
        let out = match op {
            Some(op) => Alu::execute(op, a, b),
            None => AluOutput::default(),
        };
        self.regs.commit(out.value, out.carry, zero_next);
    }

    /// Forces all registers to zero (asynchronous reset).
    pub fn reset(&mut self) {
        self.regs.reset();
    }
}
