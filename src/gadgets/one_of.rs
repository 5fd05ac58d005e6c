//! Set membership: proving that a value is one of a few constants.
//!
//! `x` belongs to `{c1, ..., cm}` iff `(x - c1) * ... * (x - cm) = 0`.
//! The first two factors fit in a single gate, since
//! `(x - c1) * (x - c2) = x * x - (c1 + c2) * x + c1 * c2`,
//! and every other factor is folded in with one more gate.

use crate::{
    error::{GadgetCompilationError, GadgetResult},
    gadgets::bilinear::{assert_bilinear_labeled, bilinear_labeled, to_var, Coefficients},
    writer::{Cs, FieldVar},
};
use ark_ff::PrimeField;
use log::trace;

/// Asserts that `x` is equal to one of the `allowed` constants.
///
/// Needs at least two allowed values, and uses `allowed.len() - 1` gates
/// (plus one if `x` is a constant).
pub fn assert_one_of<F: PrimeField, C: Cs<F>>(
    cs: &mut C,
    x: &FieldVar<F>,
    allowed: &[F],
) -> GadgetResult<()> {
    let (c1, c2, rest) = match allowed {
        [c1, c2, rest @ ..] => (*c1, *c2, rest),
        _ => return Err(GadgetCompilationError::AllowedSetTooSmall(allowed.len()).into()),
    };
    trace!("assert_one_of over {} values", allowed.len());

    let x = to_var(cs, x);

    // (x - c1) * (x - c2)
    let first_two = Coefficients::new(F::one(), -(c1 + c2), F::zero(), c1 * c2);

    let Some((last, middle)) = rest.split_last() else {
        assert_bilinear_labeled(cs, "assert_one_of", x, x, first_two, None);
        return Ok(());
    };

    let mut z = bilinear_labeled(cs, "assert_one_of", x, x, first_two);
    for c in middle {
        // z * (x - c)
        let coeffs = Coefficients::new(F::one(), -*c, F::zero(), F::zero());
        z = bilinear_labeled(cs, "assert_one_of", z, x, coeffs);
    }

    // z * (x - c) = 0
    let coeffs = Coefficients::new(F::one(), -*last, F::zero(), F::zero());
    assert_bilinear_labeled(cs, "assert_one_of", z, x, coeffs, None);

    Ok(())
}
