//! The bilinear gate primitive.
//!
//! A single generic gate can express any bilinear form `a * x * y + b * x + c * y + d`,
//! either computing it into a fresh variable ([bilinear]) or asserting its value ([assert_bilinear]).

use crate::{
    circuits::gate::GenericCoeffs,
    writer::{Cs, FieldVar, Var},
};
use ark_ff::{Field, PrimeField};

/// The coefficients of the bilinear form `a * x * y + b * x + c * y + d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coefficients<F> {
    pub a: F,
    pub b: F,
    pub c: F,
    pub d: F,
}

impl<F: Field> Coefficients<F> {
    pub fn new(a: F, b: F, c: F, d: F) -> Self {
        Self { a, b, c, d }
    }

    /// `x * y`
    pub fn mul() -> Self {
        Self::new(F::one(), F::zero(), F::zero(), F::zero())
    }

    /// `x + y`
    pub fn add() -> Self {
        Self::new(F::zero(), F::one(), F::one(), F::zero())
    }

    /// `x - y`
    pub fn sub() -> Self {
        Self::new(F::zero(), F::one(), -F::one(), F::zero())
    }

    pub fn eval(&self, x: F, y: F) -> F {
        self.a * x * y + self.b * x + self.c * y + self.d
    }
}

/// Computes `z = a * x * y + b * x + c * y + d` with a single gate, and returns `z`.
pub fn bilinear<F: PrimeField, C: Cs<F>>(
    cs: &mut C,
    x: Var<F>,
    y: Var<F>,
    coeffs: Coefficients<F>,
) -> Var<F> {
    bilinear_labeled(cs, "bilinear", x, y, coeffs)
}

/// Asserts `a * x * y + b * x + c * y + d = target` with a single gate.
/// If `target` is `None`, the form is asserted to be zero.
pub fn assert_bilinear<F: PrimeField, C: Cs<F>>(
    cs: &mut C,
    x: Var<F>,
    y: Var<F>,
    coeffs: Coefficients<F>,
    target: Option<Var<F>>,
) {
    assert_bilinear_labeled(cs, "assert_bilinear", x, y, coeffs, target)
}

/// Returns a variable holding the given field value.
/// Constants are pinned with one gate, variables are returned as is.
pub fn to_var<F: PrimeField, C: Cs<F>>(cs: &mut C, x: &FieldVar<F>) -> Var<F> {
    match x {
        FieldVar::Var(v) => *v,
        FieldVar::Constant(c) => cs.constant(*c),
    }
}

pub(crate) fn bilinear_labeled<F: PrimeField, C: Cs<F>>(
    cs: &mut C,
    label: &'static str,
    x: Var<F>,
    y: Var<F>,
    coeffs: Coefficients<F>,
) -> Var<F> {
    let z = cs.var(|| coeffs.eval(x.val(), y.val()));

    // b * x + c * y - z + a * x * y + d = 0
    let gate = GenericCoeffs {
        left: coeffs.b,
        right: coeffs.c,
        out: -F::one(),
        mul: coeffs.a,
        constant: coeffs.d,
    };
    cs.generic(Some(label), gate, [x, y, z]);

    z
}

pub(crate) fn assert_bilinear_labeled<F: PrimeField, C: Cs<F>>(
    cs: &mut C,
    label: &'static str,
    x: Var<F>,
    y: Var<F>,
    coeffs: Coefficients<F>,
    target: Option<Var<F>>,
) {
    // b * x + c * y - target + a * x * y + d = 0
    // without a target, the output cell is unused and simply holds x again
    let (out, z) = match target {
        Some(z) => (-F::one(), z),
        None => (F::zero(), x),
    };
    let gate = GenericCoeffs {
        left: coeffs.b,
        right: coeffs.c,
        out,
        mul: coeffs.a,
        constant: coeffs.d,
    };
    cs.generic(Some(label), gate, [x, y, z]);
}
