//! Broadcasting and selection ops for the CPU backend

use ndarray::{Axis, Slice};

use coordspace_core::{
    broadcast_shapes, Array, AxisIndex, CoordError, ManipulationOps, Result,
};

use crate::broadcast;
use crate::{CpuArray, CpuBackend};

impl ManipulationOps for CpuBackend {
    type Array = CpuArray;

    fn broadcast_to(arr: &CpuArray, shape: &[usize]) -> Result<CpuArray> {
        Ok(CpuArray::from_ndarray(broadcast::broadcast_to(
            arr.as_ndarray(),
            shape,
        )?))
    }

    fn broadcast_arrays(arrays: &[&CpuArray]) -> Result<Vec<CpuArray>> {
        let mut shape: Vec<usize> = Vec::new();
        for arr in arrays {
            shape = broadcast_shapes(&shape, arr.shape())?;
        }
        arrays
            .iter()
            .map(|arr| Self::broadcast_to(arr, &shape))
            .collect()
    }

    fn take(arr: &CpuArray, index: &AxisIndex) -> Result<CpuArray> {
        let size = arr.shape().first().copied().unwrap_or(0);
        match index {
            AxisIndex::At(i) => {
                if arr.ndim() == 0 || *i >= size {
                    return Err(CoordError::IndexOutOfBounds { index: *i, size });
                }
                Ok(CpuArray::from_ndarray(
                    arr.as_ndarray().index_axis(Axis(0), *i).to_owned(),
                ))
            }
            AxisIndex::Slice(range) => {
                if arr.ndim() == 0 {
                    return Err(CoordError::IndexOutOfBounds {
                        index: range.start,
                        size,
                    });
                }
                // out-of-range slice bounds clamp, as in NumPy
                let end = range.end.min(size);
                let start = range.start.min(end);
                Ok(CpuArray::from_ndarray(
                    arr.as_ndarray()
                        .slice_axis(Axis(0), Slice::new(start as isize, Some(end as isize), 1))
                        .to_owned(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_arrays_joint_shape() {
        let a = CpuArray::from_vec(vec![1.0, 2.0, 3.0]);
        let b = CpuArray::scalar(5.0);
        let out = CpuBackend::broadcast_arrays(&[&a, &b]).unwrap();
        assert_eq!(out[0].shape(), &[3]);
        assert_eq!(out[1].shape(), &[3]);
        assert_eq!(out[1].as_f64_slice(), vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_broadcast_arrays_incompatible() {
        let a = CpuArray::from_vec(vec![1.0, 2.0, 3.0]);
        let b = CpuArray::from_vec(vec![1.0, 2.0]);
        assert!(CpuBackend::broadcast_arrays(&[&a, &b]).is_err());
    }

    #[test]
    fn test_take_at_drops_axis() {
        let arr = CpuArray::from_vec(vec![1.0, 2.0, 3.0]);
        let taken = CpuBackend::take(&arr, &AxisIndex::At(1)).unwrap();
        assert_eq!(taken.shape(), &[] as &[usize]);
        assert_eq!(taken.as_f64_slice(), vec![2.0]);
    }

    #[test]
    fn test_take_at_out_of_bounds() {
        let arr = CpuArray::from_vec(vec![1.0, 2.0, 3.0]);
        let result = CpuBackend::take(&arr, &AxisIndex::At(3));
        assert!(matches!(
            result,
            Err(CoordError::IndexOutOfBounds { index: 3, size: 3 })
        ));
    }

    #[test]
    fn test_take_slice_keeps_axis() {
        let arr = CpuArray::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let taken = CpuBackend::take(&arr, &AxisIndex::Slice(1..3)).unwrap();
        assert_eq!(taken.shape(), &[2]);
        assert_eq!(taken.as_f64_slice(), vec![2.0, 3.0]);
    }

    #[test]
    fn test_take_slice_clamps() {
        let arr = CpuArray::from_vec(vec![1.0, 2.0]);
        let taken = CpuBackend::take(&arr, &AxisIndex::Slice(1..10)).unwrap();
        assert_eq!(taken.as_f64_slice(), vec![2.0]);
    }

    #[test]
    fn test_take_on_matrix_row() {
        let arr = CpuArray::from_f64_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap();
        let row = CpuBackend::take(&arr, &AxisIndex::At(1)).unwrap();
        assert_eq!(row.shape(), &[3]);
        assert_eq!(row.as_f64_slice(), vec![4.0, 5.0, 6.0]);
    }
}
