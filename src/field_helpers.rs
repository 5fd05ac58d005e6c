//! Field element helpers used when computing witness values.

use ark_ff::{BigInteger, PrimeField};

/// Field element helpers
pub trait FieldHelpers<F> {
    /// Divides `self` by `other`, or returns `None` when `other` is zero.
    fn checked_div(self, other: F) -> Option<F>;

    /// Interprets the field element as an index.
    /// Returns `None` if the canonical representative does not fit in a `usize`.
    fn to_index(self) -> Option<usize>;

    /// Embeds an index into the field.
    fn from_index(index: usize) -> F;
}

impl<F: PrimeField> FieldHelpers<F> for F {
    fn checked_div(self, other: F) -> Option<F> {
        other.inverse().map(|inv| self * inv)
    }

    fn to_index(self) -> Option<usize> {
        let repr = self.into_bigint();
        if repr.num_bits() > 64 {
            return None;
        }
        repr.as_ref()
            .first()
            .and_then(|low| usize::try_from(*low).ok())
    }

    fn from_index(index: usize) -> F {
        F::from(index as u64)
    }
}
