//! Gadgets built out of generic gates.
//!
//! Every gadget takes the builder explicitly, and emits the same gates
//! whether it runs at setup time ([crate::writer::System])
//! or while generating a witness ([crate::writer::WitnessGenerator]).

pub mod array;
pub mod bilinear;
pub mod one_of;
pub mod vector;

pub use array::{array_get, array_get_rows};
pub use bilinear::{assert_bilinear, bilinear, to_var, Coefficients};
pub use one_of::assert_one_of;
pub use vector::assert_not_vector_equals;
