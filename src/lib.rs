#![doc = include_str!("../README.md")]

pub mod circuit;
pub mod circuits;
pub mod error;
pub mod field_helpers;
pub mod gadgets;
pub mod serialization;
pub mod writer;

#[cfg(test)]
mod tests;

/// A handy module that you can import the content of to easily write circuits.
pub mod prelude {
    pub use crate::{
        circuit::{compile, generate_witness, Circuit},
        error::{GadgetError, GadgetResult},
        gadgets::{
            array_get, array_get_rows, assert_bilinear, assert_not_vector_equals,
            assert_one_of, bilinear, to_var, Coefficients,
        },
        writer::{Cs, FieldVar, System, Var, WitnessConfig, WitnessGenerator},
    };
    pub use ark_ff::PrimeField;
}
