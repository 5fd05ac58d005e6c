//! Running a circuit in either mode.
//!
//! A [Circuit] describes its constraints once, against any [Cs].
//! [compile] runs it at setup time, [generate_witness] at proving time,
//! and both produce the same gates.

use crate::{
    error::GadgetResult,
    writer::{Cs, System, WitnessConfig, WitnessGenerator},
};
use ark_ff::PrimeField;
use log::debug;

/// A circuit, described by the gadgets it calls.
///
/// The public and private inputs of the circuit live in the implementing type:
/// witness values are only read from inside witness closures,
/// so they can be left empty at setup time.
pub trait Circuit<F: PrimeField> {
    fn synthesize<C: Cs<F>>(&self, cs: &mut C) -> GadgetResult<()>;
}

/// Records the gates of a circuit. No witness closure is run.
pub fn compile<F: PrimeField, Circ: Circuit<F>>(circuit: &Circ) -> GadgetResult<System<F>> {
    let mut sys = System::new();
    circuit.synthesize(&mut sys)?;
    debug!(
        "circuit compiled: {} gates, {} variables",
        sys.curr_gate_count(),
        sys.num_vars()
    );
    Ok(sys)
}

/// Runs a circuit and computes its witness.
///
/// The witness is not checked here, see [WitnessGenerator::verify].
pub fn generate_witness<F: PrimeField, Circ: Circuit<F>>(
    circuit: &Circ,
    config: WitnessConfig,
) -> GadgetResult<WitnessGenerator<F>> {
    let mut wit = WitnessGenerator::new(config);
    circuit.synthesize(&mut wit)?;
    debug!(
        "witness generated: {} gates, {} variables",
        wit.curr_gate_count(),
        wit.num_vars()
    );
    Ok(wit)
}
