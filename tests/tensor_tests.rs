use scatter_op::{tensor, tensors::{IndexTensor, Tensor, WithGrad}};

#[test]
fn test_tensor_creation() {
    let t = Tensor::new(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(t.shape, vec![2, 2]);
    assert_eq!(t.data, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_tensor_shape_mismatch_panics() {
    let result = std::panic::catch_unwind(|| {
        Tensor::new(vec![2, 2], vec![1.0, 2.0, 3.0]);
    });
    assert!(result.is_err());
}

#[test]
fn test_tensor_macro() {
    let t = tensor!([[[1.0, 2.0]], [[3.0, 4.0]]]);
    assert_eq!(t.shape, vec![2, 1, 2]);
    assert_eq!(t.row_len(), 2);
    assert_eq!(t.row(1), &[3.0, 4.0]);
}

#[test]
fn test_index_macro() {
    let idx: IndexTensor = Tensor::new(vec![3], vec![3, -1, 0]);
    assert_eq!(idx.rank(), 1);
    assert_eq!(idx.data, vec![3, -1, 0]);
}

#[test]
fn test_zero_sized_axes() {
    let t = Tensor::<f32>::zeros(vec![3, 0]);
    assert_eq!(t.row_len(), 0);
    assert!(t.data.is_empty());
    assert_eq!(t.dim0(), Some(3));
}

#[test]
fn test_with_grad_shape() {
    let w = WithGrad::new(Tensor::new(vec![3], vec![1.0f64, 2.0, 3.0]));
    assert_eq!(w.grad, Tensor::new(vec![3], vec![0.0; 3]));
}
