//! # Operation Dispatch Layer
//!
//! This module defines the scatter-add kernels and dispatches them across
//! execution backends.
//!
//! ## Submodules
//!
//! - [`cpu`] — Sequential kernels (default backend)
//! - [`parallel`] — Multi-threaded kernels using `rayon`
//! - [`dispatch`] — Shape validation, bounds checks and backend switching
//!
//! ## Backend Selection
//!
//! Kernels implement [`ScatterKernel`] and only ever see validated, flat
//! row-major buffers. Everything shape-related happens in [`dispatch`]
//! before a kernel runs, so a kernel cannot fail.
//!
//! Example:
//! ```rust
//! use scatter_op::ops::{cpu::CpuKernel, dispatch::scatter_add_with};
//! use scatter_op::{tensor, tensors::IndexTensor};
//!
//! let reference = tensor!([[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
//! let index: IndexTensor = tensor!([2]);
//! let updates = tensor!([[5.0, 5.0]]);
//! let out = scatter_add_with(&CpuKernel, &reference, &index, &updates).unwrap();
//! assert_eq!(out, tensor!([[1.0, 1.0], [2.0, 2.0], [8.0, 8.0]]));
//! ```
//!
//! ## Extending the Backend
//!
//! To add a backend:
//!
//! 1. Implement [`ScatterKernel`] for it
//! 2. Add a [`crate::backend::Backend`] variant and map it in `dispatch`

pub mod dispatch;

pub mod cpu;
pub mod parallel;

use crate::tensors::Element;

/// A scatter-add execution strategy.
///
/// `rows` holds bounds-checked first-axis coordinates, one per `Updates`
/// row, and `row_len` is the element count of a single row.
pub trait ScatterKernel<T: Element>: Sync {
    /// Returns `reference` with `updates` row `j` added into row `rows[j]`
    /// for every `j`, in ascending `j`.
    fn forward(&self, reference: &[T], rows: &[usize], updates: &[T], row_len: usize) -> Vec<T>;

    /// Returns `(dRef, dUpdates)` for an incoming `d_out`.
    ///
    /// `dRef` is a copy of `d_out`; `dUpdates` row `j` is `d_out` row `rows[j]`.
    fn backward(&self, d_out: &[T], rows: &[usize], row_len: usize) -> (Vec<T>, Vec<T>);
}

/// Adds `src` into `dst` element-wise.
#[inline]
fn add_row<T: Element>(dst: &mut [T], src: &[T]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d += s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::{cpu::CpuKernel, parallel::RayonKernel};

    fn both() -> [&'static dyn ScatterKernel<f64>; 2] {
        [&CpuKernel, &RayonKernel]
    }

    #[test]
    fn forward_accumulates_duplicates() {
        for k in both() {
            let out = k.forward(&[0.0; 4], &[0, 0], &[1.0, 1.0, 2.0, 2.0], 2);
            assert_eq!(out, vec![3.0, 3.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn forward_without_updates_copies_reference() {
        for k in both() {
            assert_eq!(k.forward(&[1.0, 2.0, 3.0], &[], &[], 1), vec![1.0, 2.0, 3.0]);
        }
    }

    #[test]
    fn zero_width_rows_are_a_no_op() {
        for k in both() {
            assert!(k.forward(&[], &[1, 0], &[], 0).is_empty());
            let (d_ref, d_updates) = k.backward(&[], &[1, 0], 0);
            assert!(d_ref.is_empty());
            assert!(d_updates.is_empty());
        }
    }

    #[test]
    fn backward_gathers_without_splitting() {
        for k in both() {
            let (d_ref, d_updates) = k.backward(&[1.0, 1.0, 9.0, 9.0], &[0, 0], 2);
            assert_eq!(d_ref, vec![1.0, 1.0, 9.0, 9.0]);
            assert_eq!(d_updates, vec![1.0, 1.0, 1.0, 1.0]);
        }
    }
}
