//! Operation selectors and signal surfaces.
//!
//! This module defines the value types crossing the model boundary. It performs:
//! 1. **Operation Classification:** The closed set of eight datapath operations.
//! 2. **Selector Decoding:** Mapping the 3-bit `op_select` input onto that set.
//! 3. **Pin Surface:** The per-cycle input frame sampled by the simulator.
//! 4. **Output Surface:** The registered result and flag outputs.

use serde::Deserialize;

use crate::common::constants::OP_SELECT_MAX;

/// Datapath operation, encoded as a 3-bit selector on the input surface.
///
/// The set is closed: exactly eight operations exist, one per selector value.
/// A host that widens the selector past 3 bits is clamped at decode time (see
/// [`Opcode::decode`]); the widened encodings map to a defined default branch
/// in the datapath, not to an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Opcode {
    /// Addition with carry-out (`0b000`).
    #[default]
    Add,

    /// Subtraction with borrow-out (`0b001`).
    Sub,

    /// Bitwise AND (`0b010`).
    And,

    /// Bitwise OR (`0b011`).
    Or,

    /// Bitwise XOR (`0b100`).
    Xor,

    /// Logical shift left by the low 4 bits of operand B (`0b101`).
    Shl,

    /// Logical shift right by the low 4 bits of operand B (`0b110`).
    Shr,

    /// Multiplication retaining the low 16 product bits (`0b111`).
    Mul,
}

impl Opcode {
    /// Decodes a raw selector value.
    ///
    /// Returns `None` for encodings above `0b111`; the datapath treats `None`
    /// as the default branch (result forced to zero, carry cleared).
    pub const fn decode(sel: u8) -> Option<Self> {
        match sel {
            0b000 => Some(Self::Add),
            0b001 => Some(Self::Sub),
            0b010 => Some(Self::And),
            0b011 => Some(Self::Or),
            0b100 => Some(Self::Xor),
            0b101 => Some(Self::Shl),
            0b110 => Some(Self::Shr),
            0b111 => Some(Self::Mul),
            _ => None,
        }
    }

    /// The 3-bit selector encoding of this operation.
    pub const fn encode(self) -> u8 {
        self as u8
    }

    /// Whether a raw selector value fits the 3-bit `op_select` input.
    pub const fn fits(sel: u8) -> bool {
        sel <= OP_SELECT_MAX
    }
}

/// Per-cycle input surface of the model.
///
/// All pins are sampled combinationally: the simulator reads whatever frame is
/// currently driven when it evaluates a clock phase. `reset_n` is asynchronous
/// and active-low; the remaining pins only take architectural effect on a
/// gated rising edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PinState {
    /// Active-low asynchronous reset (`false` forces all state to zero).
    pub reset_n: bool,
    /// Enable request: gates the clock and isolates the operands when `false`.
    pub enable: bool,
    /// 3-bit operation selector (wider values hit the decode clamp).
    pub op_select: u8,
    /// Operand A.
    pub a: u16,
    /// Operand B.
    pub b: u16,
}

impl Default for PinState {
    /// An idle frame: reset released, unit enabled, ADD over zero operands.
    fn default() -> Self {
        Self {
            reset_n: true,
            enable: true,
            op_select: Opcode::Add.encode(),
            a: 0,
            b: 0,
        }
    }
}

/// Registered output surface of the model.
///
/// `result` and `carry` reflect the operation latched on the most recent gated
/// edge. `zero` is registered from the result value as sampled at the *start*
/// of that edge, so it trails the result by one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outputs {
    /// 16-bit result register.
    pub result: u16,
    /// Zero flag (lagged one cycle behind `result`).
    pub zero: bool,
    /// Carry flag (carry-out for ADD, borrow for SUB, otherwise cleared).
    pub carry: bool,
}
