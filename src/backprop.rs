//! Differentiable scatter-add.
//!
//! # Autograd Pattern
//!
//! Follows the same pattern as every differentiable op in this crate:
//! 1. **Inputs** are references to `WithGrad<Tensor<T>>` for the differentiable operands.
//! 2. **Forward Pass** computes an output `Tensor<T>`.
//! 3. **Backward Pass** returns a closure capturing minimal cloned data to compute gradients.
//! 4. **Gradient Application** uses [`accumulate`] to add results into `WithGrad` wrappers.
//!
//! The backward closure of [`scatter_add`] captures only the index and the
//! primal shapes; the gradient does not depend on the forward values.

use crate::error::Result;
use crate::ops::dispatch;
use crate::tensors::{Element, IndexTensor, Tensor, WithGrad};

/// Scatter-adds `updates` into `reference` along the first axis.
///
/// # Returns
/// - `out`: `reference` with `updates` row `j` added into row `index[j]`.
/// - `back`: Closure mapping `dL/d(out)` to `(dL/d(reference), dL/d(updates))`.
///
/// # Errors
/// Fails with a shape or index error before anything is computed. The
/// closure fails only if it is given a gradient whose shape differs from `out`.
///
/// # Example
/// ```rust
/// use scatter_op::{backprop, tensor, tensors::{IndexTensor, WithGrad}};
///
/// let reference = WithGrad::new(tensor!([[1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]));
/// let updates = WithGrad::new(tensor!([[5.0, 5.0]]));
/// let index: IndexTensor = tensor!([2]);
///
/// let (out, back) = backprop::scatter_add(&reference, &index, &updates).unwrap();
/// assert_eq!(out, tensor!([[1.0, 1.0], [2.0, 2.0], [8.0, 8.0]]));
///
/// let (d_ref, d_updates) = back(&out).unwrap();
/// assert_eq!(d_ref, out);
/// assert_eq!(d_updates, tensor!([[8.0, 8.0]]));
/// ```
pub fn scatter_add<T: Element>(
    reference: &WithGrad<Tensor<T>>,
    index: &IndexTensor,
    updates: &WithGrad<Tensor<T>>,
) -> Result<(
    Tensor<T>,
    impl Fn(&Tensor<T>) -> Result<(Tensor<T>, Tensor<T>)> + use<T>,
)> {
    let out = dispatch::scatter_add(&reference.value, index, &updates.value)?;

    let index = index.clone();
    let ref_shape = reference.value.shape.clone();
    let updates_shape = updates.value.shape.clone();

    let back = move |grad_output: &Tensor<T>| {
        dispatch::scatter_add_grad(grad_output, &index, &ref_shape, &updates_shape)
    };

    Ok((out, back))
}

/// Adds `grad` into the gradient buffer of `target`.
///
/// # Panics
/// Panics if `grad` does not have the shape of `target.grad`.
pub fn accumulate<T: Element>(target: &mut WithGrad<Tensor<T>>, grad: &Tensor<T>) {
    assert_eq!(target.grad.shape, grad.shape, "gradient shape mismatch");
    for (g, &dg) in target.grad.data.iter_mut().zip(&grad.data) {
        *g += dg;
    }
}
