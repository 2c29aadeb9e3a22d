//! Comparison operations for the CPU backend

use coordspace_core::{CompareOps, Result};

use crate::broadcast::{broadcast_binary_op, broadcast_compare_op};
use crate::{CpuArray, CpuBackend};

macro_rules! impl_compare_op {
    ($name:ident, $op:tt) => {
        fn $name(a: &CpuArray, b: &CpuArray) -> Result<CpuArray> {
            Ok(CpuArray::from_ndarray(broadcast_compare_op(
                a.as_ndarray(),
                b.as_ndarray(),
                |x, y| x $op y,
            )?))
        }
    };
}

impl CompareOps for CpuBackend {
    type Array = CpuArray;

    impl_compare_op!(equal, ==);
    impl_compare_op!(not_equal, !=);

    fn logical_and(a: &CpuArray, b: &CpuArray) -> Result<CpuArray> {
        Ok(CpuArray::from_ndarray(broadcast_binary_op(
            a.as_ndarray(),
            b.as_ndarray(),
            |x, y| {
                if x != 0.0 && y != 0.0 {
                    1.0
                } else {
                    0.0
                }
            },
        )?))
    }

    fn logical_not(a: &CpuArray) -> CpuArray {
        CpuArray::from_ndarray(a.as_ndarray().mapv(|x| if x == 0.0 { 1.0 } else { 0.0 }))
    }

    fn all(arr: &CpuArray) -> bool {
        arr.as_ndarray().iter().all(|&x| x != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coordspace_core::Array;

    fn arr(data: Vec<f64>) -> CpuArray {
        CpuArray::from_vec(data)
    }

    #[test]
    fn test_equal() {
        let a = arr(vec![1.0, 2.0, 3.0]);
        let b = arr(vec![1.0, 5.0, 3.0]);
        let result = CpuBackend::equal(&a, &b).unwrap();
        assert_eq!(result.as_f64_slice(), vec![1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_not_equal() {
        let a = arr(vec![1.0, 2.0, 3.0]);
        let b = arr(vec![1.0, 5.0, 3.0]);
        let result = CpuBackend::not_equal(&a, &b).unwrap();
        assert_eq!(result.as_f64_slice(), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_equal_broadcasts() {
        let a = arr(vec![2.0, 2.0, 3.0]);
        let b = CpuArray::scalar(2.0);
        let result = CpuBackend::equal(&a, &b).unwrap();
        assert_eq!(result.shape(), &[3]);
        assert_eq!(result.as_f64_slice(), vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_equal_incompatible_shapes() {
        let a = arr(vec![1.0, 2.0, 3.0]);
        let b = arr(vec![1.0, 2.0]);
        assert!(CpuBackend::equal(&a, &b).is_err());
    }

    #[test]
    fn test_logical_and() {
        let a = arr(vec![1.0, 0.0, 1.0, 0.0]);
        let b = arr(vec![1.0, 1.0, 0.0, 0.0]);
        let result = CpuBackend::logical_and(&a, &b).unwrap();
        assert_eq!(result.as_f64_slice(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_logical_not() {
        let a = arr(vec![1.0, 0.0, 5.0]);
        let result = CpuBackend::logical_not(&a);
        assert_eq!(result.as_f64_slice(), vec![0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_all() {
        assert!(CpuBackend::all(&arr(vec![1.0, 1.0, 1.0])));
        assert!(!CpuBackend::all(&arr(vec![1.0, 0.0, 1.0])));
    }
}
