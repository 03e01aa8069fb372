//! Activity statistics collection and reporting.
//!
//! This module tracks switching activity for the model. It provides:
//! 1. **Edge Accounting:** Raw periods, active (passed) edges, gated (suppressed) edges, reset edges.
//! 2. **Operation Mix:** Counts by category (arithmetic, logic, shift, multiply, decode clamp).
//! 3. **Duty Cycle:** The fraction of rising edges that reached the datapath.
//!
//! The counters are informational only — they support power reasoning about a
//! run but carry no functional behavior.

use std::time::Instant;

use crate::core::signals::Opcode;

/// Activity statistics for one simulation run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Raw clock periods driven (rising edges seen, gated or not).
    pub periods: u64,
    /// Rising edges that passed the gate and clocked the datapath.
    pub active_edges: u64,
    /// Rising edges suppressed by the gate latch.
    pub gated_edges: u64,
    /// Rising edges that arrived while reset was asserted.
    pub reset_edges: u64,

    /// ADD/SUB operations committed.
    pub ops_arithmetic: u64,
    /// AND/OR/XOR operations committed.
    pub ops_logic: u64,
    /// SHL/SHR operations committed.
    pub ops_shift: u64,
    /// MUL operations committed.
    pub ops_multiply: u64,
    /// Edges that hit the widened-selector decode clamp.
    pub ops_clamped: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SimStats {
    /// Creates a zeroed statistics block stamped with the current host time.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            periods: 0,
            active_edges: 0,
            gated_edges: 0,
            reset_edges: 0,
            ops_arithmetic: 0,
            ops_logic: 0,
            ops_shift: 0,
            ops_multiply: 0,
            ops_clamped: 0,
        }
    }

    /// Records one committed operation by category.
    ///
    /// `None` is the decode clamp for widened selectors.
    pub fn record_op(&mut self, op: Option<Opcode>) {
        match op {
            Some(Opcode::Add | Opcode::Sub) => self.ops_arithmetic += 1,
            Some(Opcode::And | Opcode::Or | Opcode::Xor) => self.ops_logic += 1,
            Some(Opcode::Shl | Opcode::Shr) => self.ops_shift += 1,
            Some(Opcode::Mul) => self.ops_multiply += 1,
            None => self.ops_clamped += 1,
        }
    }

    /// Fraction of rising edges that clocked the datapath, in `0.0..=1.0`.
    pub fn duty_cycle(&self) -> f64 {
        if self.periods == 0 {
            return 0.0;
        }
        self.active_edges as f64 / self.periods as f64
    }

    /// Prints the activity report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let per = if self.periods == 0 { 1 } else { self.periods };

        println!("\n==========================================================");
        println!("ALU MODEL ACTIVITY STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_periods              {}", self.periods);
        println!(
            "edges.active             {} ({:.2}%)",
            self.active_edges,
            (self.active_edges as f64 / per as f64) * 100.0
        );
        println!(
            "edges.gated              {} ({:.2}%)",
            self.gated_edges,
            (self.gated_edges as f64 / per as f64) * 100.0
        );
        println!(
            "edges.reset              {} ({:.2}%)",
            self.reset_edges,
            (self.reset_edges as f64 / per as f64) * 100.0
        );
        println!("duty_cycle               {:.4}", self.duty_cycle());
        println!("----------------------------------------------------------");
        println!("OPERATION MIX");
        println!("  ops.arithmetic         {}", self.ops_arithmetic);
        println!("  ops.logic              {}", self.ops_logic);
        println!("  ops.shift              {}", self.ops_shift);
        println!("  ops.multiply           {}", self.ops_multiply);
        println!("  ops.clamped            {}", self.ops_clamped);
        println!("==========================================================");
    }
}
