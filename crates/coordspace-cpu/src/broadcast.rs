//! Broadcasting utilities for the CPU backend
//!
//! Shape reconciliation follows the standard N-dimensional rule
//! (implemented once in `coordspace_core::broadcast_shapes`); the
//! expansion itself goes through ndarray's zero-cost broadcast views.

use ndarray::{ArrayD, IxDyn};

use coordspace_core::{broadcast_shapes, CoordError, Result};

/// Broadcast an ndarray to a target shape.
///
/// The target shape must be compatible with the input shape according to
/// broadcasting rules.
pub fn broadcast_to(arr: &ArrayD<f64>, target_shape: &[usize]) -> Result<ArrayD<f64>> {
    // Fast path: already the right shape
    if arr.shape() == target_shape {
        return Ok(arr.clone());
    }

    // ndarray's broadcasting creates a zero-cost view;
    // .to_owned() converts the view into a new, contiguous array
    arr.broadcast(IxDyn(target_shape))
        .map(|view| view.to_owned())
        .ok_or_else(|| {
            CoordError::InvalidShape(format!(
                "Cannot broadcast shape {:?} to {:?}",
                arr.shape(),
                target_shape
            ))
        })
}

/// Apply a binary operation with broadcasting.
///
/// Uses zero-cost broadcasting views; no intermediate arrays are
/// allocated.
pub fn broadcast_binary_op<F>(a: &ArrayD<f64>, b: &ArrayD<f64>, op: F) -> Result<ArrayD<f64>>
where
    F: Fn(f64, f64) -> f64,
{
    let shape_a = a.shape();
    let shape_b = b.shape();

    // Fast path: same shape, no broadcasting needed
    if shape_a == shape_b {
        let result = ndarray::Zip::from(a).and(b).map_collect(|&x, &y| op(x, y));
        return Ok(result);
    }

    let output_shape = broadcast_shapes(shape_a, shape_b)?;
    let output_dim = IxDyn(&output_shape);

    // .unwrap() is safe because broadcast_shapes already validated compatibility
    let a_view = a.broadcast(output_dim.clone()).unwrap();
    let b_view = b.broadcast(output_dim).unwrap();

    let result = ndarray::Zip::from(a_view)
        .and(b_view)
        .map_collect(|&x, &y| op(x, y));

    Ok(result)
}

/// Apply a binary comparison operation with broadcasting.
///
/// Returns an array of 1.0 (true) or 0.0 (false).
pub fn broadcast_compare_op<F>(a: &ArrayD<f64>, b: &ArrayD<f64>, op: F) -> Result<ArrayD<f64>>
where
    F: Fn(f64, f64) -> bool,
{
    broadcast_binary_op(a, b, |x, y| if op(x, y) { 1.0 } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_to_same_shape() {
        let arr =
            ArrayD::from_shape_vec(IxDyn(&[2, 3]), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let result = broadcast_to(&arr, &[2, 3]).unwrap();
        assert_eq!(result.shape(), &[2, 3]);
        assert_eq!(result, arr);
    }

    #[test]
    fn test_broadcast_to_expand_rows() {
        // (1, 3) -> (2, 3)
        let arr = ArrayD::from_shape_vec(IxDyn(&[1, 3]), vec![1.0, 2.0, 3.0]).unwrap();
        let result = broadcast_to(&arr, &[2, 3]).unwrap();
        assert_eq!(result.shape(), &[2, 3]);
        assert_eq!(
            result.iter().cloned().collect::<Vec<_>>(),
            vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_broadcast_to_add_dims() {
        // (3,) -> (2, 3)
        let arr = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, 2.0, 3.0]).unwrap();
        let result = broadcast_to(&arr, &[2, 3]).unwrap();
        assert_eq!(result.shape(), &[2, 3]);
        assert_eq!(
            result.iter().cloned().collect::<Vec<_>>(),
            vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn test_broadcast_to_incompatible() {
        let arr = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, 2.0, 3.0]).unwrap();
        assert!(broadcast_to(&arr, &[4]).is_err());
    }

    #[test]
    fn test_broadcast_binary_op_col_plus_row() {
        // (2, 1) + (1, 3) => (2, 3)
        let col = ArrayD::from_shape_vec(IxDyn(&[2, 1]), vec![1.0, 2.0]).unwrap();
        let row = ArrayD::from_shape_vec(IxDyn(&[1, 3]), vec![10.0, 20.0, 30.0]).unwrap();

        let result = broadcast_binary_op(&col, &row, |x, y| x + y).unwrap();
        assert_eq!(result.shape(), &[2, 3]);
        assert_eq!(
            result.iter().cloned().collect::<Vec<_>>(),
            vec![11.0, 21.0, 31.0, 12.0, 22.0, 32.0]
        );
    }

    #[test]
    fn test_broadcast_compare_op() {
        let a = ArrayD::from_shape_vec(IxDyn(&[3]), vec![1.0, 2.0, 3.0]).unwrap();
        let b = ArrayD::from_shape_vec(IxDyn(&[3]), vec![2.0, 2.0, 2.0]).unwrap();

        let result = broadcast_compare_op(&a, &b, |x, y| x == y).unwrap();
        assert_eq!(
            result.iter().cloned().collect::<Vec<_>>(),
            vec![0.0, 1.0, 0.0]
        );
    }
}
