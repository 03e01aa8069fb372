//! Stimulus vector loading and validation.
//!
//! A stimulus file is a JSON array of per-cycle input frames. Control pins
//! omitted from a frame fall back to the idle defaults (`reset_n` and
//! `enable` asserted high, ADD over zero operands), so a minimal frame only
//! names the pins it drives:
//!
//! ```json
//! [
//!   { "op_select": 0, "a": 65000, "b": 1000 },
//!   { "reset_n": false }
//! ]
//! ```
//!
//! The selector range is validated here, at the host boundary; the model
//! itself clamps widened selectors rather than erroring.

use std::fs;
use std::path::Path;

use crate::common::error::ModelError;
use crate::core::signals::{Opcode, PinState};

/// Loads stimulus vectors from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the stimulus file.
///
/// # Returns
///
/// One [`PinState`] per clock period, in file order.
///
/// # Errors
///
/// Returns [`ModelError::Io`] if the file cannot be read,
/// [`ModelError::Parse`] if it is not a valid frame array, and
/// [`ModelError::SelectorOutOfRange`] if any frame drives a selector wider
/// than the 3-bit `op_select` input.
pub fn load(path: &Path) -> Result<Vec<PinState>, ModelError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parses stimulus vectors from a JSON string.
///
/// # Errors
///
/// Returns [`ModelError::Parse`] for malformed JSON and
/// [`ModelError::SelectorOutOfRange`] for a frame whose selector does not fit
/// the 3-bit input.
pub fn parse(text: &str) -> Result<Vec<PinState>, ModelError> {
    let frames: Vec<PinState> = serde_json::from_str(text)?;
    for (index, frame) in frames.iter().enumerate() {
        if !Opcode::fits(frame.op_select) {
            return Err(ModelError::SelectorOutOfRange {
                index,
                selector: frame.op_select,
            });
        }
    }
    Ok(frames)
}
