//! This module implements the generic gate primitive.
//!
//! A generic gate constrains three cells `x`, `y` and `z` of a row:
//!
//! <pre>
//! left * x + right * y + out * z + mul * x * y + constant = 0
//! </pre>
//!
//! Compiled gates store the coefficients in that order.

use crate::{
    circuits::wires::{GateWires, GENERIC_REGISTERS},
    error::{GadgetRuntimeError, GadgetRuntimeResult},
};
use ark_ff::{Field, PrimeField};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// Number of coefficients of a generic gate.
pub const GENERIC_COEFFS: usize = GENERIC_REGISTERS + 1 /* mul */ + 1 /* cst */;

/// The coefficients of a generic gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GenericCoeffs<F> {
    /// Multiplies the left cell.
    pub left: F,
    /// Multiplies the right cell.
    pub right: F,
    /// Multiplies the output cell.
    pub out: F,
    /// Multiplies the product of the left and right cells.
    pub mul: F,
    /// Constant term.
    pub constant: F,
}

impl<F: Field> GenericCoeffs<F> {
    /// All coefficients set to zero (a gate that is always satisfied).
    pub fn zero() -> Self {
        Self {
            left: F::zero(),
            right: F::zero(),
            out: F::zero(),
            mul: F::zero(),
            constant: F::zero(),
        }
    }

    /// Evaluates the left-hand side of the gate equation.
    pub fn eval(&self, x: F, y: F, z: F) -> F {
        self.left * x + self.right * y + self.out * z + self.mul * x * y + self.constant
    }

    pub fn to_vec(&self) -> Vec<F> {
        vec![self.left, self.right, self.out, self.mul, self.constant]
    }

    pub fn from_slice(coeffs: &[F]) -> Option<Self> {
        match coeffs {
            [left, right, out, mul, constant] => Some(Self {
                left: *left,
                right: *right,
                out: *out,
                mul: *mul,
                constant: *constant,
            }),
            _ => None,
        }
    }
}

#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A single generic gate in a circuit.
pub struct CircuitGate<F: PrimeField> {
    /// gate wiring (for each cell, what cell it is wired to)
    pub wires: GateWires,
    /// coefficients, in the order left, right, out, mul, constant
    #[serde_as(as = "Vec<crate::serialization::SerdeAs>")]
    pub coeffs: Vec<F>,
}

impl<F: PrimeField> CircuitGate<F> {
    pub fn create_generic(wires: GateWires, coeffs: GenericCoeffs<F>) -> Self {
        CircuitGate {
            wires,
            coeffs: coeffs.to_vec(),
        }
    }

    /// verifies that the generic gate constraint is solved by the witness
    pub fn verify_generic(
        &self,
        row: usize,
        witness: &[Vec<F>; GENERIC_REGISTERS],
    ) -> GadgetRuntimeResult<()> {
        let coeffs =
            GenericCoeffs::from_slice(&self.coeffs).ok_or(GadgetRuntimeError::MalformedGate {
                row,
                len: self.coeffs.len(),
            })?;

        let cell = |col: usize| {
            witness[col]
                .get(row)
                .copied()
                .ok_or(GadgetRuntimeError::MissingWitness(row))
        };
        let (x, y, z) = (cell(0)?, cell(1)?, cell(2)?);

        if coeffs.eval(x, y, z).is_zero() {
            Ok(())
        } else {
            Err(unsatisfied(row, "<unknown>", &coeffs, [x, y, z]))
        }
    }

    /// verifies that every cell holds the same value as the cell it is wired to
    pub fn verify_wiring(
        &self,
        row: usize,
        witness: &[Vec<F>; GENERIC_REGISTERS],
    ) -> GadgetRuntimeResult<()> {
        for (col, wire) in self.wires.iter().enumerate() {
            let this = witness[col].get(row);
            let other = witness
                .get(wire.col)
                .and_then(|column| column.get(wire.row));
            match (this, other) {
                (Some(this), Some(other)) if this == other => continue,
                (Some(this), Some(other)) => {
                    return Err(GadgetRuntimeError::UnsatisfiedWiring {
                        row,
                        col,
                        value: this.to_string(),
                        wired_row: wire.row,
                        wired_col: wire.col,
                        wired_value: other.to_string(),
                    })
                }
                _ => return Err(GadgetRuntimeError::MissingWitness(row)),
            }
        }
        Ok(())
    }
}

pub(crate) fn unsatisfied<F: Field>(
    row: usize,
    annotation: &'static str,
    coeffs: &GenericCoeffs<F>,
    [x, y, z]: [F; GENERIC_REGISTERS],
) -> GadgetRuntimeError {
    GadgetRuntimeError::UnsatisfiedGenericConstraint {
        row,
        annotation,
        left: coeffs.left.to_string(),
        right: coeffs.right.to_string(),
        out: coeffs.out.to_string(),
        mul: coeffs.mul.to_string(),
        constant: coeffs.constant.to_string(),
        x: x.to_string(),
        y: y.to_string(),
        z: z.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::wires::Wire;
    use ark_bn254::Fr;
    use ark_ff::{One, UniformRand as _};
    use proptest::prelude::*;
    use rand::SeedableRng as _;

    prop_compose! {
        fn arb_fr()(seed: [u8; 32]) -> Fr {
            let rng = &mut rand::rngs::StdRng::from_seed(seed);
            Fr::rand(rng)
        }
    }

    prop_compose! {
        fn arb_circuit_gate()(
            rows in prop::array::uniform3(0usize..1000),
            cols in prop::array::uniform3(0usize..GENERIC_REGISTERS),
            left in arb_fr(),
            right in arb_fr(),
            out in arb_fr(),
            mul in arb_fr(),
            constant in arb_fr(),
        ) -> CircuitGate<Fr> {
            let wires = core::array::from_fn(|i| Wire { row: rows[i], col: cols[i] });
            CircuitGate::create_generic(wires, GenericCoeffs { left, right, out, mul, constant })
        }
    }

    proptest! {
        #[test]
        fn test_gate_serialization(cg in arb_circuit_gate()) {
            let encoded = rmp_serde::to_vec(&cg).unwrap();
            let decoded: CircuitGate<Fr> = rmp_serde::from_slice(&encoded).unwrap();
            prop_assert_eq!(cg.wires, decoded.wires);
            prop_assert_eq!(cg.coeffs, decoded.coeffs);
        }
    }

    #[test]
    fn test_verify_generic() {
        // x * y = z
        let coeffs = GenericCoeffs {
            out: -Fr::one(),
            mul: Fr::one(),
            ..GenericCoeffs::zero()
        };
        let gate = CircuitGate::create_generic(Wire::new(0), coeffs);

        let good = [vec![Fr::from(3u64)], vec![Fr::from(5u64)], vec![Fr::from(15u64)]];
        gate.verify_generic(0, &good).unwrap();
        gate.verify_wiring(0, &good).unwrap();

        let bad = [vec![Fr::from(3u64)], vec![Fr::from(5u64)], vec![Fr::from(16u64)]];
        assert!(matches!(
            gate.verify_generic(0, &bad),
            Err(GadgetRuntimeError::UnsatisfiedGenericConstraint { row: 0, .. })
        ));

        assert_eq!(
            gate.verify_generic(1, &good),
            Err(GadgetRuntimeError::MissingWitness(1))
        );
    }

    #[test]
    fn test_malformed_gate() {
        let gate = CircuitGate {
            wires: Wire::new(0),
            coeffs: vec![Fr::one(); 3],
        };
        let witness = [vec![Fr::one()], vec![Fr::one()], vec![Fr::one()]];
        assert_eq!(
            gate.verify_generic(0, &witness),
            Err(GadgetRuntimeError::MalformedGate { row: 0, len: 3 })
        );
    }
}
