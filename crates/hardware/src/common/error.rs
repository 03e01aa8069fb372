//! Boundary error definitions.
//!
//! The model itself is total: every defined input combination produces a defined
//! output, and an out-of-range selector is clamped at decode time rather than
//! raised as an error. Errors exist only at the host boundary, where stimulus
//! files are read, parsed, and validated before they reach the model.

use thiserror::Error;

/// Errors produced while loading and validating host-side stimulus.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A stimulus frame carried a selector wider than the 3-bit `op_select` input.
    ///
    /// The model clamps widened selectors to the defined default branch, but a
    /// vector file requesting one is almost always a typo, so the loader
    /// rejects it instead of silently clamping.
    #[error("vector {index}: operation selector {selector:#05b} does not fit in 3 bits")]
    SelectorOutOfRange {
        /// Zero-based index of the offending frame in the stimulus file.
        index: usize,
        /// The rejected selector value.
        selector: u8,
    },

    /// The stimulus file could not be read from disk.
    #[error("failed to read stimulus file: {0}")]
    Io(#[from] std::io::Error),

    /// The stimulus file was read but is not a valid JSON frame array.
    #[error("failed to parse stimulus file: {0}")]
    Parse(#[from] serde_json::Error),
}
