//! Simulator: owns the datapath, the gate latch, and the clock phase.
//!
//! The raw clock period is modeled as two explicit evaluation points — the
//! low phase and the high phase — rather than a single on-edge callback.
//! This is what lets the level-sensitive gate latch behave like hardware:
//! its pass/suppress decision is frozen on the rising edge and can only
//! change while the raw clock sits low. Collapsing the period into one
//! evaluation point would reintroduce exactly the glitches the gate exists
//! to prevent.

use tracing::trace;

use crate::config::Config;
use crate::core::datapath::Datapath;
use crate::core::gate::ClockGate;
use crate::core::isolation::isolate;
use crate::core::signals::{Opcode, Outputs, PinState};
use crate::stats::SimStats;

/// Raw clock level, driven externally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockLevel {
    /// Clock low: the gate latch is transparent.
    #[default]
    Low,
    /// Clock high: the gate latch holds.
    High,
}

/// Top-level stepped state machine: datapath + gate + clock phase.
///
/// All state mutation goes through the three phase methods ([`Self::drive`],
/// [`Self::rise`], [`Self::fall`]) or the full-period convenience wrapper
/// [`Self::tick`]. The datapath registers and the gate latch are private;
/// hosts observe them through the read-only accessors.
///
/// # Examples
///
/// ```
/// use alusim_core::config::Config;
/// use alusim_core::core::signals::PinState;
/// use alusim_core::sim::Simulator;
///
/// let mut sim = Simulator::new(Config::default());
///
/// // Power-on reset pulse.
/// sim.tick(PinState { reset_n: false, ..PinState::default() });
///
/// // ADD 1000 + 500.
/// sim.tick(PinState { op_select: 0b000, a: 1000, b: 500, ..PinState::default() });
/// assert_eq!(sim.outputs().result, 1500);
/// assert!(!sim.outputs().carry);
///
/// // ADD with carry-out.
/// sim.tick(PinState { op_select: 0b000, a: 65000, b: 1000, ..PinState::default() });
/// assert_eq!(sim.outputs().result, 464);
/// assert!(sim.outputs().carry);
/// ```
#[derive(Debug)]
pub struct Simulator {
    config: Config,
    pins: PinState,
    clock: ClockLevel,
    gate: ClockGate,
    datapath: Datapath,
    /// Activity counters for the run.
    pub stats: SimStats,
}

impl Simulator {
    /// Creates a simulator in the power-on state: clock low, reset released,
    /// registers and gate latch undefined-as-zero until the first reset pulse.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pins: PinState::default(),
            clock: ClockLevel::Low,
            gate: ClockGate::new(),
            datapath: Datapath::new(),
            stats: SimStats::new(),
        }
    }

    /// Drives the combinational input surface.
    ///
    /// Takes effect immediately, before any clock transition: an asserted
    /// reset zeroes all state on the spot, and while the clock is low the
    /// gate latch follows the enable request. While the clock is high the
    /// latch holds regardless of what this call changes.
    pub fn drive(&mut self, pins: PinState) {
        self.pins = pins;
        if !pins.reset_n {
            // Asynchronous: does not wait for an edge.
            self.datapath.reset();
            self.gate.reset();
        } else if self.clock == ClockLevel::Low && self.config.power.clock_gating {
            self.gate.sample(pins.enable);
        }
    }

    /// Raises the raw clock (low phase → high phase).
    ///
    /// A gated rising edge clocks the datapath with the decoded selector and
    /// the (possibly isolated) operands. Reset wins over a concurrent edge:
    /// no compute happens while it is asserted. Calling this while the clock
    /// is already high is a no-op.
    pub fn rise(&mut self) {
        if self.clock == ClockLevel::High {
            return;
        }
        self.clock = ClockLevel::High;
        self.stats.periods += 1;

        if !self.pins.reset_n {
            self.datapath.reset();
            self.stats.reset_edges += 1;
            trace!("rising edge under reset");
            return;
        }

        let clocked = !self.config.power.clock_gating || self.gate.passes();
        if !clocked {
            self.stats.gated_edges += 1;
            trace!(enable = self.pins.enable, "rising edge suppressed by gate");
            return;
        }

        let (a, b) = self.isolated_operands();
        let op = Opcode::decode(self.pins.op_select);
        trace!(op = ?op, a, b, "gated rising edge");
        self.datapath.clock_edge(op, a, b);
        self.stats.active_edges += 1;
        self.stats.record_op(op);
    }

    /// Lowers the raw clock (high phase → low phase).
    ///
    /// The gate latch becomes transparent again and immediately samples the
    /// current enable request; the next pulse's pass/suppress decision starts
    /// here. Calling this while the clock is already low is a no-op.
    pub fn fall(&mut self) {
        if self.clock == ClockLevel::Low {
            return;
        }
        self.clock = ClockLevel::Low;
        if !self.pins.reset_n {
            self.gate.reset();
        } else if self.config.power.clock_gating {
            self.gate.sample(self.pins.enable);
        }
        trace!("falling edge");
    }

    /// Runs one full clock period: drive the pins, rise, fall.
    pub fn tick(&mut self, pins: PinState) {
        self.drive(pins);
        self.rise();
        self.fall();
    }

    /// Snapshot of the registered output surface.
    pub const fn outputs(&self) -> Outputs {
        self.datapath.outputs()
    }

    /// The 16-bit result register.
    pub const fn result(&self) -> u16 {
        self.datapath.registers().result()
    }

    /// The zero flag register (lagged one cycle behind `result`).
    pub const fn zero_flag(&self) -> bool {
        self.datapath.registers().zero()
    }

    /// The carry flag register.
    pub const fn carry_flag(&self) -> bool {
        self.datapath.registers().carry()
    }

    /// Current raw clock level.
    pub const fn clock(&self) -> ClockLevel {
        self.clock
    }

    /// The gated clock line as it would appear on the wire right now.
    ///
    /// With gating disabled this is simply the raw clock level.
    pub const fn gated_clock(&self) -> bool {
        let high = matches!(self.clock, ClockLevel::High);
        if self.config.power.clock_gating {
            self.gate.output(high)
        } else {
            high
        }
    }

    /// The operand pair the datapath would see on the next gated edge.
    ///
    /// Re-evaluated continuously from the raw enable request, independent of
    /// the gate latch and the clock phase.
    pub const fn isolated_operands(&self) -> (u16, u16) {
        if self.config.power.operand_isolation {
            isolate(self.pins.enable, self.pins.a, self.pins.b)
        } else {
            (self.pins.a, self.pins.b)
        }
    }

    /// The input frame currently driven.
    pub const fn pins(&self) -> PinState {
        self.pins
    }

    /// The configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
