//! Test Framework

use crate::{
    circuit::{compile, generate_witness, Circuit},
    circuits::gate::CircuitGate,
    error::GadgetResult,
    writer::{System, WitnessConfig, WitnessGenerator},
};
use ark_ff::PrimeField;
use std::time::Instant;

pub(crate) struct TestFramework<F, Circ> {
    circuit: Option<Circ>,
    config: WitnessConfig,

    system: Option<System<F>>,
}

impl<F, Circ> Default for TestFramework<F, Circ> {
    fn default() -> Self {
        Self {
            circuit: None,
            config: WitnessConfig::default(),
            system: None,
        }
    }
}

pub(crate) struct TestRunner<F, Circ>(TestFramework<F, Circ>);

impl<F: PrimeField, Circ: Circuit<F>> TestFramework<F, Circ> {
    #[must_use]
    pub(crate) fn circuit(mut self, circuit: Circ) -> Self {
        self.circuit = Some(circuit);
        self
    }

    #[must_use]
    pub(crate) fn eval_constraints(mut self, eval_constraints: bool) -> Self {
        self.config = self.config.eval_constraints(eval_constraints);
        self
    }

    /// compiles the circuit
    pub(crate) fn setup(mut self) -> GadgetResult<TestRunner<F, Circ>> {
        let start = Instant::now();

        let circuit = self.circuit.as_ref().unwrap();
        self.system = Some(compile(circuit)?);
        println!("- time to compile: {}ms", start.elapsed().as_millis());

        Ok(TestRunner(self))
    }
}

impl<F: PrimeField, Circ: Circuit<F>> TestRunner<F, Circ> {
    pub(crate) fn system(&self) -> &System<F> {
        self.0.system.as_ref().unwrap()
    }

    pub(crate) fn gates(&self) -> Vec<CircuitGate<F>> {
        self.system().gates()
    }

    /// Generate the witness and check it against the compiled circuit
    pub(crate) fn prove_and_verify(self) -> GadgetResult<WitnessGenerator<F>> {
        let start = Instant::now();
        let circuit = self.0.circuit.as_ref().unwrap();
        let witness = generate_witness(circuit, self.0.config)?;
        println!("- time to generate witness: {}ms", start.elapsed().as_millis());

        // both modes must agree on the circuit
        let gates = self.gates();
        assert_eq!(gates, witness.gates(), "setup and proving circuits differ");

        // check the recorded gates (reports annotations)
        witness.verify()?;

        // check the compiled gates, wiring included
        let columns = witness.columns();
        for (row, gate) in gates.iter().enumerate() {
            gate.verify_generic(row, &columns)?;
            gate.verify_wiring(row, &columns)?;
        }

        Ok(witness)
    }
}
