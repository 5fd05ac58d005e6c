//! The circuit-construction context: variables, recorded gates,
//! and the two builders that gadgets are written against.
//!
//! [System] is used at setup time: it records the gates of a circuit and never runs witness closures.
//! [WitnessGenerator] is used at proving time: it runs the witness closures and records the same gates,
//! so that the witness can be checked against them.

use crate::{
    circuits::{
        gate::{unsatisfied, CircuitGate, GenericCoeffs},
        wires::{GateWires, Wire, GENERIC_REGISTERS},
    },
    error::{GadgetRuntimeError, GadgetRuntimeResult},
};
use ark_ff::PrimeField;
use log::{debug, warn};
use std::collections::HashMap;

/// A variable of the circuit, backed by a witness slot.
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy)]
pub struct Var<F> {
    pub index: usize,
    /// Only set while generating a witness.
    pub value: Option<F>,
}

impl<F: Copy> Var<F> {
    /// Returns the witness value of the variable.
    ///
    /// Only call this from a witness closure (see [Cs::var]):
    /// variables created at setup time carry no value.
    pub fn val(&self) -> F {
        self.value
            .expect("witness value read outside of witness generation")
    }
}

/// A field value, either known at construction time or backed by a witness slot.
#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy)]
pub enum FieldVar<F> {
    Constant(F),
    Var(Var<F>),
}

impl<F: Copy> FieldVar<F> {
    /// Returns the value behind the field value (see [Var::val]).
    pub fn val(&self) -> F {
        match self {
            FieldVar::Constant(c) => *c,
            FieldVar::Var(v) => v.val(),
        }
    }
}

impl<F> From<Var<F>> for FieldVar<F> {
    fn from(var: Var<F>) -> Self {
        FieldVar::Var(var)
    }
}

/// A generic gate as recorded by a builder, before wiring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateSpec<F> {
    /// A label used when reporting an unsatisfied gate.
    pub annotation: Option<&'static str>,
    /// The left, right and output cells.
    pub wires: [Var<F>; GENERIC_REGISTERS],
    pub coeffs: GenericCoeffs<F>,
}

impl<F: PrimeField> GateSpec<F> {
    pub fn get_var_idx(&self, col: usize) -> Option<usize> {
        self.wires.get(col).map(|var| var.index)
    }

    /// Checks the gate against the witness values carried by its cells.
    pub fn check(&self, row: usize) -> GadgetRuntimeResult<()> {
        let mut values = [F::zero(); GENERIC_REGISTERS];
        for (value, var) in values.iter_mut().zip(&self.wires) {
            *value = var.value.ok_or(GadgetRuntimeError::MissingWitness(row))?;
        }
        let [x, y, z] = values;

        if self.coeffs.eval(x, y, z).is_zero() {
            Ok(())
        } else {
            let annotation = self.annotation.unwrap_or("<unknown>");
            Err(unsatisfied(row, annotation, &self.coeffs, values))
        }
    }
}

pub trait Cs<F: PrimeField> {
    /// In cases where you want to create a free variable in the circuit,
    /// as in the variable is not constrained _yet_
    /// and can be anything that the prover wants.
    /// For example, division can be implemented as:
    ///
    /// ```ignore
    /// let a = sys.constant(5u32.into());
    /// let b = sys.constant(10u32.into());
    /// let c = sys.var(|| {
    ///    b.val() * a.val().inverse().unwrap_or_else(F::zero)
    /// });
    /// assert_bilinear(sys, a, c, Coefficients::mul(), Some(b));
    /// ```
    ///
    /// The closure only runs when generating a witness.
    fn var<G>(&mut self, g: G) -> Var<F>
    where
        G: FnOnce() -> F;

    /// Same as [Cs::var], for `n` variables computed by a single closure.
    /// The closure must return exactly `n` values.
    fn vars<G>(&mut self, n: usize, g: G) -> Vec<Var<F>>
    where
        G: FnOnce() -> Vec<F>;

    /// Adds a gate to the circuit.
    fn gate(&mut self, g: GateSpec<F>);

    /// The gates added so far, in order.
    fn gate_specs(&self) -> &[GateSpec<F>];

    /// The number of variables allocated so far.
    fn num_vars(&self) -> usize;

    fn curr_gate_count(&self) -> usize {
        self.gate_specs().len()
    }

    /// Adds a generic gate over three cells.
    fn generic(
        &mut self,
        annotation: Option<&'static str>,
        coeffs: GenericCoeffs<F>,
        wires: [Var<F>; GENERIC_REGISTERS],
    ) {
        self.gate(GateSpec {
            annotation,
            wires,
            coeffs,
        });
    }

    /// Creates a variable pinned to the constant `x`.
    fn constant(&mut self, x: F) -> Var<F> {
        let v = self.var(|| x);

        // constrain `v - x = 0`
        let coeffs = GenericCoeffs {
            left: F::one(),
            constant: -x,
            ..GenericCoeffs::zero()
        };
        self.generic(Some("constant"), coeffs, [v, v, v]);

        v
    }
}

//
// Setup
//

/// The builder used at setup time. Witness closures are never run.
#[derive(Debug)]
pub struct System<F> {
    next_variable: usize,
    gates: Vec<GateSpec<F>>,
}

impl<F: PrimeField> Default for System<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PrimeField> System<F> {
    pub fn new() -> Self {
        Self {
            next_variable: 0,
            gates: vec![],
        }
    }

    /// Compiles our intermediate representation into a circuit.
    pub fn gates(&self) -> Vec<CircuitGate<F>> {
        let gates = compile_gates(&self.gates);
        debug!(
            "compiled {} gates over {} variables",
            gates.len(),
            self.next_variable
        );
        gates
    }
}

impl<F: PrimeField> Cs<F> for System<F> {
    fn var<G>(&mut self, _: G) -> Var<F> {
        let v = self.next_variable;
        self.next_variable += 1;
        Var {
            index: v,
            value: None,
        }
    }

    fn vars<G>(&mut self, n: usize, _: G) -> Vec<Var<F>> {
        (0..n).map(|_| self.var(|| F::zero())).collect()
    }

    fn gate(&mut self, g: GateSpec<F>) {
        self.gates.push(g);
    }

    fn gate_specs(&self) -> &[GateSpec<F>] {
        &self.gates
    }

    fn num_vars(&self) -> usize {
        self.next_variable
    }
}

//
// Witness generation
//

/// Options of the [WitnessGenerator].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WitnessConfig {
    /// If set, every gate is checked against the witness as soon as it is added,
    /// and unsatisfied gates are logged.
    /// This is useful to find the gadget that produced a bad witness;
    /// it does not change the gates.
    pub eval_constraints: bool,
}

impl WitnessConfig {
    #[must_use]
    pub fn eval_constraints(mut self, eval_constraints: bool) -> Self {
        self.eval_constraints = eval_constraints;
        self
    }
}

/// The builder used at proving time. Witness closures run as soon as variables are created.
#[derive(Debug)]
pub struct WitnessGenerator<F> {
    config: WitnessConfig,
    next_variable: usize,
    gates: Vec<GateSpec<F>>,
}

impl<F: PrimeField> Default for WitnessGenerator<F> {
    fn default() -> Self {
        Self::new(WitnessConfig::default())
    }
}

impl<F: PrimeField> WitnessGenerator<F> {
    pub fn new(config: WitnessConfig) -> Self {
        Self {
            config,
            next_variable: 0,
            gates: vec![],
        }
    }

    /// Checks every gate against the witness, and returns the first unsatisfied one.
    pub fn verify(&self) -> GadgetRuntimeResult<()> {
        self.gates
            .iter()
            .enumerate()
            .try_for_each(|(row, gate)| gate.check(row))
    }

    /// Returns the columns of the witness.
    pub fn columns(&self) -> [Vec<F>; GENERIC_REGISTERS] {
        core::array::from_fn(|col| {
            self.gates
                .iter()
                .map(|gate| gate.wires[col].value.unwrap_or_else(F::zero))
                .collect()
        })
    }

    /// Compiles the recorded gates, exactly as [System::gates] does.
    pub fn gates(&self) -> Vec<CircuitGate<F>> {
        compile_gates(&self.gates)
    }

    fn alloc(&mut self, value: F) -> Var<F> {
        let v = self.next_variable;
        self.next_variable += 1;
        Var {
            index: v,
            value: Some(value),
        }
    }
}

impl<F: PrimeField> Cs<F> for WitnessGenerator<F> {
    fn var<G>(&mut self, g: G) -> Var<F>
    where
        G: FnOnce() -> F,
    {
        let value = g();
        self.alloc(value)
    }

    fn vars<G>(&mut self, n: usize, g: G) -> Vec<Var<F>>
    where
        G: FnOnce() -> Vec<F>,
    {
        let values = g();
        assert_eq!(
            values.len(),
            n,
            "witness closure returned the wrong number of values"
        );
        values.into_iter().map(|value| self.alloc(value)).collect()
    }

    fn gate(&mut self, g: GateSpec<F>) {
        if self.config.eval_constraints {
            if let Err(err) = g.check(self.gates.len()) {
                warn!("{err}");
            }
        }
        self.gates.push(g);
    }

    fn gate_specs(&self) -> &[GateSpec<F>] {
        &self.gates
    }

    fn num_vars(&self) -> usize {
        self.next_variable
    }
}

/// Converts recorded gates into circuit gates,
/// wiring together all the cells that hold the same variable.
fn compile_gates<F: PrimeField>(specs: &[GateSpec<F>]) -> Vec<CircuitGate<F>> {
    let mut first_cell: HashMap<usize, Wire> = HashMap::new();
    let mut most_recent_cell: HashMap<usize, Wire> = HashMap::new();
    let mut gates = Vec::with_capacity(specs.len());

    for (row, spec) in specs.iter().enumerate() {
        // while tracking the wiring
        let mut wires: GateWires = Wire::new(row);
        for (col, wire) in wires.iter_mut().enumerate() {
            let Some(index) = spec.get_var_idx(col) else {
                continue;
            };
            // wire this cell to the previous one
            match most_recent_cell.insert(index, *wire) {
                Some(prev) => *wire = prev,
                // unless it is the first cell,
                // in which case we just save it for the very end
                // (to complete the cycle)
                None => {
                    first_cell.insert(index, *wire);
                }
            }
        }

        gates.push(CircuitGate::create_generic(wires, spec.coeffs));
    }

    // finish the permutation cycle
    for (var, first) in first_cell.iter() {
        if let Some(last) = most_recent_cell.get(var) {
            gates[first.row].wires[first.col] = *last;
        }
    }

    gates
}
