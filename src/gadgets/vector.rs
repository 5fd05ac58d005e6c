//! Vector inequality: proving that a vector differs from a constant vector,
//! without revealing where.
//!
//! The prover witnesses a vector `z` and we check that
//!
//! <pre>
//! sum_k (x_k - c_k) * z_k = 1
//! </pre>
//!
//! If `x` differs from `c` at some index `i`, setting `z_i = 1 / (x_i - c_i)`
//! and every other entry to zero satisfies the equation.
//! If `x = c`, every term vanishes and the sum can't be one.
//!
//! The sum is accumulated negated, so that the last term can be folded into the final assertion:
//! `n - 1` gates for the other terms, `n - 2` gates to add them up, and one last gate,
//! for a total of `2n - 2` gates.

use crate::{
    error::{GadgetCompilationError, GadgetResult},
    gadgets::bilinear::{assert_bilinear_labeled, bilinear_labeled, to_var, Coefficients},
    writer::{Cs, FieldVar, Var},
};
use ark_ff::PrimeField;
use itertools::Itertools;
use log::trace;

/// Asserts that the vector `x` is not equal to the constant vector `c`,
/// i.e. that they differ in at least one entry.
///
/// Both vectors must have the same length, of at least two.
/// Uses `2n - 2` gates (plus one per constant entry of `x`).
pub fn assert_not_vector_equals<F: PrimeField, C: Cs<F>>(
    cs: &mut C,
    x: &[FieldVar<F>],
    c: &[F],
) -> GadgetResult<()> {
    let n = c.len();
    if x.len() != n {
        return Err(GadgetCompilationError::VectorLengthMismatch(x.len(), n).into());
    }
    if n < 2 {
        return Err(GadgetCompilationError::VectorTooShort(n).into());
    }
    trace!("assert_not_vector_equals over {} entries", n);

    let xs: Vec<Var<F>> = x.iter().map(|xi| to_var(cs, xi)).collect();

    // only one non-zero entry is needed
    let z = cs.vars(n, || {
        let mut z = vec![F::zero(); n];
        let first_diff = xs
            .iter()
            .zip_eq(c)
            .map(|(xi, ci)| xi.val() - ci)
            .find_position(|diff| !diff.is_zero());
        if let Some((i, diff)) = first_diff {
            z[i] = diff.inverse().unwrap_or_else(F::zero);
        }
        z
    });

    // -(x_k - c_k) * z_k = -x_k * z_k + c_k * z_k
    let mut negated_terms = Vec::with_capacity(n - 1);
    for k in 0..n - 1 {
        let coeffs = Coefficients::new(-F::one(), F::zero(), c[k], F::zero());
        negated_terms.push(bilinear_labeled(
            cs,
            "assert_not_vector_equals",
            xs[k],
            z[k],
            coeffs,
        ));
    }

    let mut sum = negated_terms[0];
    for term in &negated_terms[1..] {
        sum = bilinear_labeled(
            cs,
            "assert_not_vector_equals",
            sum,
            *term,
            Coefficients::add(),
        );
    }

    // (x_last - c_last) * z_last - 1 = -(sum of the other terms)
    let last = n - 1;
    let coeffs = Coefficients::new(F::one(), F::zero(), -c[last], -F::one());
    assert_bilinear_labeled(
        cs,
        "assert_not_vector_equals",
        xs[last],
        z[last],
        coeffs,
        Some(sum),
    );

    Ok(())
}
