//! Error types for shape validation and index bounds.
//!
//! Every failure is reported before an output tensor is allocated, so a
//! caller never observes a partially written result.

use thiserror::Error;

/// Errors raised while validating the shapes of `Ref`, `Index` and `Updates`.
///
/// Variants are listed in the order the validator checks them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Index must be rank 1, got rank {rank}")]
    IndexRank { rank: usize },

    #[error("Ref has rank {reference} but Updates has rank {updates}; ranks must match")]
    RankMismatch { reference: usize, updates: usize },

    #[error("Ref and Updates must have at least one axis")]
    ScalarRef,

    #[error("Updates batch size {updates} does not match Index length {index}")]
    BatchMismatch { updates: usize, index: usize },

    #[error("axis {axis} mismatch: Ref has size {reference} but Updates has size {updates}")]
    AxisMismatch {
        axis: usize,
        reference: usize,
        updates: usize,
    },

    #[error("gradient for {port} has shape {actual:?}, expected {expected:?}")]
    GradShape {
        port: &'static str,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
}

/// Errors surfaced by the forward and backward scatter-add entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScatterError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Index[{position}] = {index} is out of range for a first axis of length {bound}")]
    IndexOutOfRange {
        position: usize,
        index: i64,
        bound: usize,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = ScatterError> = core::result::Result<T, E>;
