//! Parallel CPU backend.
//!
//! # Rayon Backend
//!
//! Multi-threaded scatter-add on the global `rayon` pool.
//!
//! ## Determinism
//!
//! Colliding indices would race if `Updates` rows were split across threads,
//! so the forward pass splits `Out` rows instead. Each target row is owned
//! by exactly one task, which applies its contributions in ascending `j`.
//! Float sums therefore come out bit-identical to [`super::cpu::CpuKernel`].
//!
//! The backward pass has no write hazard: every `dRef` and `dUpdates` row is
//! written by exactly one task.

use rayon::prelude::*;

use super::{add_row, ScatterKernel};
use crate::tensors::Element;

/// Multi-threaded scatter-add kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct RayonKernel;

/// Groups update rows by the output row they target, keeping `j` ascending.
fn bucket_by_target(rows: &[usize], n_rows: usize) -> Vec<Vec<usize>> {
    let mut buckets = vec![Vec::new(); n_rows];
    for (j, &row) in rows.iter().enumerate() {
        buckets[row].push(j);
    }
    buckets
}

/// Copies `src` into a fresh buffer, one row per task.
fn par_copy<T: Element>(src: &[T], row_len: usize) -> Vec<T> {
    let mut dst = vec![T::default(); src.len()];
    dst.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(|(d, s)| d.copy_from_slice(s));
    dst
}

impl<T: Element> ScatterKernel<T> for RayonKernel {
    fn forward(&self, reference: &[T], rows: &[usize], updates: &[T], row_len: usize) -> Vec<T> {
        if row_len == 0 {
            return reference.to_vec();
        }

        let mut out = par_copy(reference, row_len);
        if rows.is_empty() {
            return out;
        }

        let buckets = bucket_by_target(rows, reference.len() / row_len);
        out.par_chunks_mut(row_len)
            .zip(buckets.par_iter())
            .filter(|(_, js)| !js.is_empty())
            .for_each(|(dst, js)| {
                for &j in js {
                    add_row(dst, &updates[j * row_len..(j + 1) * row_len]);
                }
            });

        out
    }

    fn backward(&self, d_out: &[T], rows: &[usize], row_len: usize) -> (Vec<T>, Vec<T>) {
        if row_len == 0 {
            return (d_out.to_vec(), Vec::new());
        }

        let d_ref = par_copy(d_out, row_len);

        let mut d_updates = vec![T::default(); rows.len() * row_len];
        d_updates
            .par_chunks_mut(row_len)
            .zip(rows.par_iter())
            .for_each(|(dst, &row)| {
                dst.copy_from_slice(&d_out[row * row_len..(row + 1) * row_len]);
            });

        (d_ref, d_updates)
    }
}
