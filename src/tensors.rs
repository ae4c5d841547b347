//! Core tensor data structures.
//!
//! # Core Tensor Utilities
//!
//! This module defines the minimal N-dimensional array the scatter operator
//! reads and produces.
//!
//! It supports:
//! - Construction of N-dimensional tensors with shape and row-major data layout
//! - Row views along the first axis, which is the axis scatter-add indexes
//! - `WithGrad` wrappers pairing a value with its gradient for autograd
//! - The `tensor!` macro for ergonomic literals in tests and docs
//!
//! ## Design Highlights
//! - Tensors are strongly typed: `Tensor<T>` for any element type (usually `f32` or `f64`)
//! - Shape is stored as a `Vec<usize>` and enforced at runtime
//! - Index tensors are plain `Tensor<i64>`, see [`IndexTensor`]
//!
//! ## Limitations
//! - Row-major only
//! - No broadcasting or slicing beyond first-axis rows
//!
//! ## Example
//!
//! ```rust
//! use scatter_op::tensors::Tensor;
//! let t = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
//! assert_eq!(t.shape, vec![2, 3]);
//! assert_eq!(t.row(1), &[4.0, 5.0, 6.0]);
//! ```

use core::fmt::Debug;
use core::ops::AddAssign;

/// Represents an N-dimensional tensor with a shape and flat row-major data.
///
/// - All elements must be the same type (`T`).
/// - `shape` defines the structure, e.g., `[2, 3]` for a 2×3 matrix.
/// - `data` holds the flattened content in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

/// A rank-1 tensor of first-axis coordinates.
pub type IndexTensor = Tensor<i64>;

impl<T> Tensor<T> {
    /// Creates a new tensor with the given shape and flat data.
    ///
    /// # Panics
    /// Panics if the number of elements in `data` does not match the shape product.
    pub fn new(shape: impl Into<Vec<usize>>, data: Vec<T>) -> Self {
        let shape = shape.into();
        assert_eq!(
            shape.iter().product::<usize>(),
            data.len(),
            "shape {:?} is incompatible with {} data elements",
            shape,
            data.len()
        );
        Self { shape, data }
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Length of the first axis, or `None` for a rank-0 tensor.
    pub fn dim0(&self) -> Option<usize> {
        self.shape.first().copied()
    }

    /// Number of elements in one first-axis row.
    ///
    /// This is the product of every dimension after the first; a rank-1
    /// tensor has rows of a single element.
    pub fn row_len(&self) -> usize {
        row_len(&self.shape)
    }

    /// Borrows row `i` of the first axis.
    ///
    /// # Panics
    /// Panics if `i` is not a valid row.
    pub fn row(&self, i: usize) -> &[T] {
        let n = self.row_len();
        &self.data[i * n..(i + 1) * n]
    }
}

impl<T: Element> Tensor<T> {
    /// Creates a zero-filled tensor of the given shape.
    pub fn zeros(shape: impl Into<Vec<usize>>) -> Self {
        let shape = shape.into();
        let len = shape.iter().product();
        Self {
            shape,
            data: vec![T::default(); len],
        }
    }
}

/// Product of the trailing dimensions of `shape`.
pub(crate) fn row_len(shape: &[usize]) -> usize {
    shape.iter().skip(1).product()
}

/// Numeric payload accepted by the scatter kernels.
///
/// Only floating point element types are supported; `Default` is the
/// additive identity.
pub trait Element: Copy + Default + AddAssign + PartialEq + Debug + Send + Sync + 'static {}

impl Element for f32 {}
impl Element for f64 {}

/// A container for tracking gradients of values (used in autograd).
///
/// Typically used as `WithGrad<Tensor<f32>>`.
#[derive(Debug, Clone, PartialEq)]
pub struct WithGrad<T> {
    pub value: T,
    pub grad: T,
}

impl<T: Element> WithGrad<Tensor<T>> {
    /// Wraps `value` with a zeroed gradient of the same shape.
    pub fn new(value: Tensor<T>) -> Self {
        let grad = Tensor::zeros(value.shape.clone());
        Self { value, grad }
    }
}

/// Defines a tensor from nested literal arrays.
///
/// Supports arbitrary dimensionality as long as sublists are uniform in shape.
///
/// # Example
/// ```
/// use scatter_op::tensor;
/// let t = tensor!([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(t.shape, vec![2, 2]);
///
/// let idx: scatter_op::tensors::IndexTensor = tensor!([0, 0, 1]);
/// assert_eq!(idx.shape, vec![3]);
/// ```
#[macro_export]
macro_rules! tensor {
    ($lit:literal) => {
        $crate::tensors::Tensor::new(Vec::<usize>::new(), vec![$lit])
    };

    ([ $( $inner:tt ),+ $(,)? ]) => {{
        let children = vec![ $( $crate::tensor!($inner) ),+ ];
        let first_shape = &children[0].shape;
        assert!(children.iter().all(|c| c.shape == *first_shape),
            "ragged tensor literal (rows have mismatched shapes)");
        let mut shape = vec![children.len()];
        shape.extend_from_slice(first_shape);
        let mut data = Vec::with_capacity(children.len() * children[0].data.len());
        for c in children { data.extend(c.data); }
        $crate::tensors::Tensor::new(shape, data)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_first_axis() {
        let t = Tensor::new(vec![3, 2], vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
        assert_eq!(t.rank(), 2);
        assert_eq!(t.dim0(), Some(3));
        assert_eq!(t.row_len(), 2);
        assert_eq!(t.row(2), &[3.0, 3.0]);
    }

    #[test]
    fn rank_one_rows_are_single_elements() {
        let t: Tensor<f32> = tensor!([4.0, 5.0]);
        assert_eq!(t.row_len(), 1);
        assert_eq!(t.row(1), &[5.0]);
    }

    #[test]
    fn scalar_has_no_first_axis() {
        let t: Tensor<f64> = tensor!(1.5);
        assert_eq!(t.rank(), 0);
        assert_eq!(t.dim0(), None);
    }

    #[test]
    fn with_grad_starts_at_zero() {
        let w = WithGrad::new(tensor!([[1.0f32, 2.0], [3.0, 4.0]]));
        assert_eq!(w.grad.shape, vec![2, 2]);
        assert!(w.grad.data.iter().all(|&g| g == 0.0));
    }

    #[test]
    #[should_panic(expected = "ragged tensor literal")]
    fn ragged_literal_panics() {
        let _: Tensor<f64> = tensor!([[1.0, 2.0], [3.0]]);
    }
}
