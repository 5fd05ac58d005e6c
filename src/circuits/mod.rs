//! The gate layer: generic gate coefficients, compiled gates and their wiring.

pub mod gate;
pub mod wires;
