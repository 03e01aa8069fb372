//! Configuration system for the ALU model.
//!
//! This module defines the configuration structures used to parameterize the
//! model. It provides:
//! 1. **Defaults:** The power-aware baseline (gating and isolation both on).
//! 2. **Structures:** Hierarchical config for general behavior and power features.
//! 3. **Baseline:** The ungated "basic" configuration used as a power/behavior reference.
//!
//! Configuration is supplied via JSON (missing fields fall back to defaults) or
//! constructed directly with `Config::default()`.

use serde::Deserialize;

/// Default configuration constants for the model.
mod defaults {
    /// Clock gating is part of the power-aware configuration.
    pub const CLOCK_GATING: bool = true;

    /// Operand isolation is part of the power-aware configuration.
    pub const OPERAND_ISOLATION: bool = true;

    /// Per-edge trace output is off unless a host asks for it.
    pub const TRACE_EDGES: bool = false;
}

/// General model configuration.
///
/// Contains high-level behavior switches that do not alter the datapath
/// contract, such as per-edge trace output.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Emit a trace line for every clock phase transition.
    pub trace_edges: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_edges: defaults::TRACE_EDGES,
        }
    }
}

/// Power-feature configuration.
///
/// Both features default to on; turning both off yields the "basic" ALU
/// variant that has no disabled state at all.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PowerConfig {
    /// Route the raw clock through the glitch-free gate latch.
    ///
    /// When off, every raw rising edge clocks the datapath and the enable
    /// request never suppresses a pulse.
    pub clock_gating: bool,

    /// Force the datapath operands to zero while the unit is disabled.
    ///
    /// When off, raw operands feed the combinational logic regardless of the
    /// enable request.
    pub operand_isolation: bool,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            clock_gating: defaults::CLOCK_GATING,
            operand_isolation: defaults::OPERAND_ISOLATION,
        }
    }
}

/// Root configuration for the model.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General behavior switches.
    pub general: GeneralConfig,
    /// Power-feature switches.
    pub power: PowerConfig,
}

impl Config {
    /// The "basic" ALU configuration: no clock gating, no operand isolation.
    ///
    /// In this variant the enable request is ignored entirely; the unit has no
    /// disabled state. Provided as a power and behavior baseline only.
    pub fn baseline() -> Self {
        Self {
            general: GeneralConfig::default(),
            power: PowerConfig {
                clock_gating: false,
                operand_isolation: false,
            },
        }
    }
}
