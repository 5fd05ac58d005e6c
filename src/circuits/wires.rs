//! This module implements the wiring of generic gates.

use serde::{Deserialize, Serialize};

/// Number of registers of a generic gate (left, right and output).
pub const GENERIC_REGISTERS: usize = 3;

/// Wire documents the other cell that is wired to this one.
/// If the cell is the only one holding its variable, the cell references itself.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
pub struct Wire {
    pub row: usize,
    pub col: usize,
}

impl Wire {
    /// Creates a new set of wires for a given row.
    pub fn new(row: usize) -> GateWires {
        core::array::from_fn(|col| Self { row, col })
    }
}

/// GateWires document the wiring of a gate. Each value either
/// represents the same cell (row and column) or a different cell in another row.
pub type GateWires = [Wire; GENERIC_REGISTERS];
