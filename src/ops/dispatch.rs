//! Operation Dispatch Layer
//!
//! This module validates inputs and selects the kernel for each scatter
//! operation, based on the global [`Backend`].
//!
//! Every entry point runs in the same order:
//! 1. Shape inference ([`crate::shape::infer_shape`])
//! 2. Index bounds checks ([`crate::shape::check_indices`])
//! 3. Kernel execution into freshly allocated outputs
//!
//! Steps 1 and 2 happen before any output exists, so a failure never leaves
//! partial results behind.
//!
//! # Example
//! ```rust
//! use scatter_op::ops::dispatch::{scatter_add, scatter_add_grad};
//! use scatter_op::{tensor, tensors::IndexTensor};
//!
//! let reference = tensor!([[0.0, 0.0], [0.0, 0.0]]);
//! let index: IndexTensor = tensor!([0, 0]);
//! let updates = tensor!([[1.0, 1.0], [2.0, 2.0]]);
//!
//! let out = scatter_add(&reference, &index, &updates).unwrap();
//! assert_eq!(out, tensor!([[3.0, 3.0], [0.0, 0.0]]));
//!
//! let d_out = tensor!([[1.0, 1.0], [9.0, 9.0]]);
//! let (d_ref, d_updates) = scatter_add_grad(&d_out, &index, &reference.shape, &updates.shape).unwrap();
//! assert_eq!(d_ref, d_out);
//! assert_eq!(d_updates, tensor!([[1.0, 1.0], [1.0, 1.0]]));
//! ```

use crate::backend::{get_backend, Backend};
use crate::error::Result;
use crate::ops::{cpu::CpuKernel, parallel::RayonKernel, ScatterKernel};
use crate::shape::{check_grad_shape, check_indices, infer_grad_shapes, infer_shape};
use crate::tensors::{Element, IndexTensor, Tensor};

/// Kernel implementing `backend`.
pub fn kernel<T: Element>(backend: Backend) -> &'static dyn ScatterKernel<T> {
    match backend {
        Backend::Cpu => &CpuKernel,
        Backend::Rayon => &RayonKernel,
    }
}

/// Computes `Out = Ref` with `Out[Index[j]] += Updates[j]` on the active backend.
///
/// # Errors
/// - [`crate::ScatterError::Shape`] if the shapes violate the operator's invariants
/// - [`crate::ScatterError::IndexOutOfRange`] if an index is outside `[0, dim0(Ref))`
pub fn scatter_add<T: Element>(
    reference: &Tensor<T>,
    index: &IndexTensor,
    updates: &Tensor<T>,
) -> Result<Tensor<T>> {
    scatter_add_with(kernel(get_backend()), reference, index, updates)
}

/// Same as [`scatter_add`], on an explicitly chosen kernel.
///
/// # Errors
/// See [`scatter_add`].
pub fn scatter_add_with<T: Element>(
    kernel: &dyn ScatterKernel<T>,
    reference: &Tensor<T>,
    index: &IndexTensor,
    updates: &Tensor<T>,
) -> Result<Tensor<T>> {
    let out_shape = infer_shape(&reference.shape, &index.shape, &updates.shape)
        .inspect_err(|e| log::debug!("scatter rejected shapes: {e}"))?;
    let rows = check_indices(&index.data, out_shape[0])
        .inspect_err(|e| log::debug!("scatter rejected index: {e}"))?;

    let row_len = reference.row_len();
    log::trace!(
        "scatter forward: ref {:?}, {} update rows of {} elements",
        reference.shape,
        rows.len(),
        row_len
    );

    let data = kernel.forward(&reference.data, &rows, &updates.data, row_len);
    Ok(Tensor::new(out_shape, data))
}

/// Computes `(dRef, dUpdates)` from the gradient of `Out` on the active backend.
///
/// `ref_shape` and `updates_shape` are the shapes seen by the forward pass
/// and `index` must be the same tensor it used.
///
/// # Errors
/// - [`crate::ScatterError::Shape`] if the primal shapes are invalid or
///   `d_out` does not have `ref_shape`
/// - [`crate::ScatterError::IndexOutOfRange`] if an index is outside `[0, ref_shape[0])`
pub fn scatter_add_grad<T: Element>(
    d_out: &Tensor<T>,
    index: &IndexTensor,
    ref_shape: &[usize],
    updates_shape: &[usize],
) -> Result<(Tensor<T>, Tensor<T>)> {
    scatter_add_grad_with(kernel(get_backend()), d_out, index, ref_shape, updates_shape)
}

/// Same as [`scatter_add_grad`], on an explicitly chosen kernel.
///
/// # Errors
/// See [`scatter_add_grad`].
pub fn scatter_add_grad_with<T: Element>(
    kernel: &dyn ScatterKernel<T>,
    d_out: &Tensor<T>,
    index: &IndexTensor,
    ref_shape: &[usize],
    updates_shape: &[usize],
) -> Result<(Tensor<T>, Tensor<T>)> {
    infer_shape(ref_shape, &index.shape, updates_shape)
        .and_then(|_| check_grad_shape(&d_out.shape, ref_shape))
        .inspect_err(|e| log::debug!("scatter_grad rejected shapes: {e}"))?;
    let rows = check_indices(&index.data, ref_shape[0])
        .inspect_err(|e| log::debug!("scatter_grad rejected index: {e}"))?;

    let (d_ref_shape, d_updates_shape) = infer_grad_shapes(ref_shape, updates_shape);
    let row_len = d_out.row_len();
    log::trace!(
        "scatter backward: dOut {:?}, gathering {} rows of {} elements",
        d_out.shape,
        rows.len(),
        row_len
    );

    let (d_ref, d_updates) = kernel.backward(&d_out.data, &rows, row_len);
    Ok((
        Tensor::new(d_ref_shape, d_ref),
        Tensor::new(d_updates_shape, d_updates),
    ))
}
