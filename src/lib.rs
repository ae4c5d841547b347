//! scatter_op: the scatter-add tensor operator and its gradient.
//!
//! Given a reference tensor `Ref`, a rank-1 index tensor `Index` and an
//! updates tensor `Updates`, scatter-add produces
//!
//! ```text
//! Out = Ref
//! Out[Index[j]] += Updates[j]     for every j, in ascending order
//! ```
//!
//! Repeated indices accumulate. The gradient passes `dOut` through to `Ref`
//! unchanged and gathers `dOut[Index[j]]` for every `Updates` row.
//!
//! # Features
//!
//! - Shape inference for tensors of any rank ≥ 1, with deterministic errors.
//! - Bounds-checked indices; a bad index is an error, never a wrap or clamp.
//! - Sequential and `rayon` kernels with bit-identical results.
//! - Autograd-style forward/backward closures over `WithGrad` values.
//!
//! # Modules
//!
//! - [`tensors`] — Tensor, index tensor and gradient wrapper types.
//! - [`shape`] — Shape inference and index bounds checks.
//! - [`ops`] — Kernels and backend dispatch.
//! - [`backprop`] — Differentiable scatter-add.
//! - [`backend`] — Runtime backend selection.
//! - [`ports`] — Port and operator names used by dispatch layers.
//! - [`error`] — Error types.
//!
//! # Example
//!
//! ```rust
//! use scatter_op::{scatter_add, scatter_add_grad, tensor, tensors::IndexTensor};
//!
//! let reference = tensor!([[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
//! let index: IndexTensor = tensor!([2]);
//! let updates = tensor!([[5.0, 5.0]]);
//!
//! let out = scatter_add(&reference, &index, &updates)?;
//! assert_eq!(out, tensor!([[1.0, 1.0], [2.0, 2.0], [8.0, 8.0]]));
//!
//! let (d_ref, d_updates) = scatter_add_grad(&reference, &index, &[3, 2], &[1, 2])?;
//! assert_eq!(d_ref, reference);
//! assert_eq!(d_updates, tensor!([[3.0, 3.0]]));
//! # Ok::<(), scatter_op::ScatterError>(())
//! ```

pub mod backend;
pub mod backprop;
pub mod error;
pub mod ops;
pub mod ports;
pub mod shape;
pub mod tensors;

pub use error::{Result, ScatterError, ShapeError};
pub use ops::dispatch::{scatter_add, scatter_add_grad};
