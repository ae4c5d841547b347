//! Shape inference for scatter-add and its gradient.
//!
//! Checks run in a fixed order so that a given set of bad shapes always
//! produces the same error:
//!
//! 1. `Index` is rank 1
//! 2. `Ref` and `Updates` have equal rank (and that rank is not 0)
//! 3. `Updates` has one row per `Index` entry
//! 4. every trailing axis of `Updates` matches `Ref`

use crate::error::{Result, ScatterError, ShapeError};
use crate::ports;

/// Validates the forward shapes and returns the shape to allocate for `Out`.
///
/// # Errors
/// Returns the first [`ShapeError`] in check order.
///
/// # Example
/// ```
/// use scatter_op::shape::infer_shape;
/// let out = infer_shape(&[5, 3], &[2], &[2, 3]).unwrap();
/// assert_eq!(out, vec![5, 3]);
/// ```
pub fn infer_shape(
    ref_shape: &[usize],
    index_shape: &[usize],
    updates_shape: &[usize],
) -> Result<Vec<usize>, ShapeError> {
    if index_shape.len() != 1 {
        return Err(ShapeError::IndexRank {
            rank: index_shape.len(),
        });
    }
    if ref_shape.len() != updates_shape.len() {
        return Err(ShapeError::RankMismatch {
            reference: ref_shape.len(),
            updates: updates_shape.len(),
        });
    }
    if ref_shape.is_empty() {
        return Err(ShapeError::ScalarRef);
    }
    if updates_shape[0] != index_shape[0] {
        return Err(ShapeError::BatchMismatch {
            updates: updates_shape[0],
            index: index_shape[0],
        });
    }
    for (axis, (&r, &u)) in ref_shape.iter().zip(updates_shape).enumerate().skip(1) {
        if r != u {
            return Err(ShapeError::AxisMismatch {
                axis,
                reference: r,
                updates: u,
            });
        }
    }

    Ok(ref_shape.to_vec())
}

/// Shapes of `(dRef, dUpdates)`: each gradient mirrors its primal tensor.
pub fn infer_grad_shapes(ref_shape: &[usize], updates_shape: &[usize]) -> (Vec<usize>, Vec<usize>) {
    (ref_shape.to_vec(), updates_shape.to_vec())
}

/// Checks that the incoming gradient has exactly `Out`'s (i.e. `Ref`'s) shape.
pub(crate) fn check_grad_shape(d_out_shape: &[usize], ref_shape: &[usize]) -> Result<(), ShapeError> {
    if d_out_shape != ref_shape {
        return Err(ShapeError::GradShape {
            port: ports::OUT,
            expected: ref_shape.to_vec(),
            actual: d_out_shape.to_vec(),
        });
    }
    Ok(())
}

/// Bounds-checks every index against `[0, bound)` and converts it to a row number.
///
/// Entries are checked in ascending position; the first offender is reported.
///
/// # Errors
/// [`ScatterError::IndexOutOfRange`] for negative entries or entries `>= bound`.
pub fn check_indices(index: &[i64], bound: usize) -> Result<Vec<usize>> {
    index
        .iter()
        .enumerate()
        .map(|(position, &i)| match usize::try_from(i) {
            Ok(row) if row < bound => Ok(row),
            _ => Err(ScatterError::IndexOutOfRange {
                position,
                index: i,
                bound,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_takes_ref_shape() {
        assert_eq!(infer_shape(&[4, 2, 3], &[7], &[7, 2, 3]), Ok(vec![4, 2, 3]));
        assert_eq!(infer_shape(&[4], &[0], &[0]), Ok(vec![4]));
    }

    #[test]
    fn index_rank_is_checked_first() {
        // every other invariant is broken too
        let err = infer_shape(&[4, 2], &[1, 1], &[3]).unwrap_err();
        assert_eq!(err, ShapeError::IndexRank { rank: 2 });
    }

    #[test]
    fn rank_mismatch_before_batch() {
        let err = infer_shape(&[4, 2], &[3], &[2]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RankMismatch {
                reference: 2,
                updates: 1
            }
        );
    }

    #[test]
    fn scalar_ref_is_rejected() {
        assert_eq!(infer_shape(&[], &[0], &[]), Err(ShapeError::ScalarRef));
    }

    #[test]
    fn batch_before_axes() {
        let err = infer_shape(&[4, 2], &[3], &[2, 5]).unwrap_err();
        assert_eq!(err, ShapeError::BatchMismatch { updates: 2, index: 3 });
    }

    #[test]
    fn first_mismatched_axis_is_reported() {
        let err = infer_shape(&[4, 2, 3, 5], &[1], &[1, 2, 9, 8]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::AxisMismatch {
                axis: 2,
                reference: 3,
                updates: 9
            }
        );
        assert_eq!(
            err.to_string(),
            "axis 2 mismatch: Ref has size 3 but Updates has size 9"
        );
    }

    #[test]
    fn grad_shapes_mirror_primals() {
        let (d_ref, d_updates) = infer_grad_shapes(&[5, 2], &[3, 2]);
        assert_eq!(d_ref, vec![5, 2]);
        assert_eq!(d_updates, vec![3, 2]);
    }

    #[test]
    fn grad_shape_must_match_ref() {
        let err = check_grad_shape(&[2, 2], &[3, 2]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::GradShape {
                port: "Out",
                expected: vec![3, 2],
                actual: vec![2, 2]
            }
        );
    }

    #[test]
    fn indices_are_bounds_checked_in_order() {
        assert_eq!(check_indices(&[0, 1, 1], 2).unwrap(), vec![0, 1, 1]);
        assert_eq!(
            check_indices(&[1, 5, -1], 2),
            Err(ScatterError::IndexOutOfRange {
                position: 1,
                index: 5,
                bound: 2
            })
        );
        assert_eq!(
            check_indices(&[-1], 2),
            Err(ScatterError::IndexOutOfRange {
                position: 0,
                index: -1,
                bound: 2
            })
        );
    }

    #[test]
    fn empty_first_axis_accepts_no_index() {
        assert!(check_indices(&[], 0).unwrap().is_empty());
        assert!(check_indices(&[0], 0).is_err());
    }
}
