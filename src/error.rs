//! This module implements the [`GadgetError`] type.

use thiserror::Error;

/// A result type for gadget errors.
pub type GadgetResult<T> = std::result::Result<T, GadgetError>;

/// A result type for errors raised while constructing a circuit.
pub type GadgetCompileResult<T> = std::result::Result<T, GadgetCompilationError>;

/// A result type for errors raised while checking a witness.
pub type GadgetRuntimeResult<T> = std::result::Result<T, GadgetRuntimeError>;

/// Gadget errors can come from either a compilation or a runtime error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GadgetError {
    #[error("a compilation error occurred: {0}")]
    CompilationError(GadgetCompilationError),

    #[error("a runtime error occurred: {0}")]
    RuntimeError(GadgetRuntimeError),
}

impl From<GadgetCompilationError> for GadgetError {
    fn from(err: GadgetCompilationError) -> Self {
        GadgetError::CompilationError(err)
    }
}

impl From<GadgetRuntimeError> for GadgetError {
    fn from(err: GadgetRuntimeError) -> Self {
        GadgetError::RuntimeError(err)
    }
}

/// Errors that can occur while a gadget is building its constraints.
/// These do not depend on witness data, and no gate is emitted by the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GadgetCompilationError {
    #[error("cannot read an entry out of an empty array")]
    EmptyArray,

    #[error("the rows of the array do not have the same width (expected {0}, got {1})")]
    RowWidthMismatch(usize, usize),

    #[error("at least two allowed values are needed, got {0}")]
    AllowedSetTooSmall(usize),

    #[error("vector lengths must match (got {0} and {1})")]
    VectorLengthMismatch(usize, usize),

    #[error("vectors must contain at least two entries, got {0}")]
    VectorTooShort(usize),
}

/// Errors that can occur when checking a witness against the constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GadgetRuntimeError {
    #[error(
        "unsatisfied generic constraint at row {row} ({annotation}): `{left} * {x} + {right} * {y} + {out} * {z} + {mul} * {x} * {y} + {constant} != 0`"
    )]
    UnsatisfiedGenericConstraint {
        row: usize,
        annotation: &'static str,
        left: String,
        right: String,
        out: String,
        mul: String,
        constant: String,
        x: String,
        y: String,
        z: String,
    },

    #[error("unsatisfied wiring: cell ({row}, {col}) holds {value} but is wired to cell ({wired_row}, {wired_col}) holding {wired_value}")]
    UnsatisfiedWiring {
        row: usize,
        col: usize,
        value: String,
        wired_row: usize,
        wired_col: usize,
        wired_value: String,
    },

    #[error("a cell of row {0} has no witness value")]
    MissingWitness(usize),

    #[error("the gate at row {row} has {len} coefficients")]
    MalformedGate { row: usize, len: usize },
}
