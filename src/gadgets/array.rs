//! Reading an entry of an array at a witnessed index.
//!
//! To prove that `a = array[i]` we witness, for every position `j`,
//! a value `z_j` such that
//!
//! <pre>
//! z_j * (i - j) = a - array[j]
//! </pre>
//!
//! For `j != i` the prover picks `z_j = (a - array[j]) / (i - j)` and the equation holds for any `a`.
//! For `j = i` the left-hand side vanishes, which forces `a = array[i]`.
//!
//! The index is assumed to be an integer in `[0, n)`: this gadget does not check it.
//! With any other index the equations for `j = i` never show up,
//! and `a` is left unconstrained. Callers must range-check the index themselves.

use crate::{
    error::{GadgetCompilationError, GadgetResult},
    field_helpers::FieldHelpers,
    gadgets::bilinear::{assert_bilinear_labeled, bilinear_labeled, to_var, Coefficients},
    writer::{Cs, FieldVar, Var},
};
use ark_ff::PrimeField;
use log::trace;

/// Returns a variable constrained to `array[index]`, using one gate per entry.
///
/// Each entry that is a variable (not a constant) costs one more gate,
/// and so does a constant index.
///
/// The index must be an integer in `[0, array.len())`. This is the caller's responsibility.
/// With an out-of-range index the witnessed result falls back to zero.
pub fn array_get<F: PrimeField, C: Cs<F>>(
    cs: &mut C,
    array: &[FieldVar<F>],
    index: &FieldVar<F>,
) -> GadgetResult<Var<F>> {
    if array.is_empty() {
        return Err(GadgetCompilationError::EmptyArray.into());
    }
    trace!("array_get over {} entries", array.len());

    let i = to_var(cs, index);

    // witness the result
    let a = cs.var(|| {
        i.val()
            .to_index()
            .and_then(|i| array.get(i))
            .map(FieldVar::val)
            .unwrap_or_else(F::zero)
    });

    for (j, entry) in array.iter().enumerate() {
        let j = F::from_index(j);

        // undefined at j = i
        let zj = cs.var(|| {
            (a.val() - entry.val())
                .checked_div(i.val() - j)
                .unwrap_or_else(F::zero)
        });

        match entry {
            FieldVar::Constant(aj) => {
                // zj * i - j * zj + array[j] = a
                let coeffs = Coefficients::new(F::one(), -j, F::zero(), *aj);
                assert_bilinear_labeled(cs, "array_get", zj, i, coeffs, Some(a));
            }
            FieldVar::Var(aj) => {
                // zj * i - j * zj = a - array[j]
                let a_minus_aj = bilinear_labeled(cs, "array_get", a, *aj, Coefficients::sub());
                let coeffs = Coefficients::new(F::one(), -j, F::zero(), F::zero());
                assert_bilinear_labeled(cs, "array_get", zj, i, coeffs, Some(a_minus_aj));
            }
        }
    }

    Ok(a)
}

/// Returns the row at `index` of a table whose rows all hold the same number of field values.
///
/// Each column is read with [array_get], sharing the same index.
/// The same precondition on the index applies.
pub fn array_get_rows<F: PrimeField, C: Cs<F>>(
    cs: &mut C,
    rows: &[Vec<FieldVar<F>>],
    index: &FieldVar<F>,
) -> GadgetResult<Vec<Var<F>>> {
    let width = match rows.first() {
        Some(row) => row.len(),
        None => return Err(GadgetCompilationError::EmptyArray.into()),
    };
    if let Some(row) = rows.iter().find(|row| row.len() != width) {
        return Err(GadgetCompilationError::RowWidthMismatch(width, row.len()).into());
    }
    trace!("array_get_rows over {} rows of width {}", rows.len(), width);

    // only pin a constant index once
    let index = FieldVar::Var(to_var(cs, index));

    (0..width)
        .map(|col| {
            let column: Vec<_> = rows.iter().map(|row| row[col]).collect();
            array_get(cs, &column, &index)
        })
        .collect()
}
