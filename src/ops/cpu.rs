//! Sequential CPU backend.
//!
//! The reference implementation of scatter-add: one pass over `Updates` in
//! the order the rows are given. The other backends are tested against it.

use super::{add_row, ScatterKernel};
use crate::tensors::Element;

/// Single-threaded scatter-add kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuKernel;

impl<T: Element> ScatterKernel<T> for CpuKernel {
    fn forward(&self, reference: &[T], rows: &[usize], updates: &[T], row_len: usize) -> Vec<T> {
        let mut out = reference.to_vec();
        if row_len == 0 {
            return out;
        }

        for (&row, src) in rows.iter().zip(updates.chunks_exact(row_len)) {
            let start = row * row_len;
            add_row(&mut out[start..start + row_len], src);
        }

        out
    }

    fn backward(&self, d_out: &[T], rows: &[usize], row_len: usize) -> (Vec<T>, Vec<T>) {
        let d_ref = d_out.to_vec();

        let mut d_updates = Vec::with_capacity(rows.len() * row_len);
        for &row in rows {
            let start = row * row_len;
            d_updates.extend_from_slice(&d_out[start..start + row_len]);
        }

        (d_ref, d_updates)
    }
}
