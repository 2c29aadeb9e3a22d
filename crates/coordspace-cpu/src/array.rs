//! CPU array implementation backed by ndarray

use ndarray::{ArrayD, IxDyn};

use coordspace_core::{Array, ArrayMeta, Backend, CoordError, DType, Namespace, Result};

use crate::CpuBackend;

/// CPU-backed N-dimensional coordinate field
#[derive(Debug, Clone)]
pub struct CpuArray {
    data: ArrayD<f64>,
    meta: ArrayMeta,
}

impl CpuArray {
    /// Create from ndarray
    pub fn from_ndarray(data: ArrayD<f64>) -> Self {
        let meta = ArrayMeta::new(data.shape().to_vec(), DType::Float64);
        Self { data, meta }
    }

    /// Create a 1-d array from data
    pub fn from_vec(data: Vec<f64>) -> Self {
        let len = data.len();
        // a 1-d shape of the data's length always matches
        Self::from_ndarray(ArrayD::from_shape_vec(IxDyn(&[len]), data).unwrap())
    }

    /// Create a zero-dimensional array holding one value
    pub fn scalar(value: f64) -> Self {
        Self::from_ndarray(ArrayD::from_elem(IxDyn(&[]), value))
    }

    /// Get underlying ndarray reference
    pub fn as_ndarray(&self) -> &ArrayD<f64> {
        &self.data
    }

    /// Consume and return ndarray
    pub fn into_ndarray(self) -> ArrayD<f64> {
        self.data
    }
}

impl Array for CpuArray {
    fn meta(&self) -> &ArrayMeta {
        &self.meta
    }

    fn namespace(&self) -> Namespace {
        CpuBackend::namespace()
    }

    fn as_f64_slice(&self) -> Vec<f64> {
        self.data.iter().cloned().collect()
    }

    fn from_f64_vec(data: Vec<f64>, shape: Vec<usize>) -> Result<Self> {
        let expected_size: usize = shape.iter().product();
        if data.len() != expected_size {
            return Err(CoordError::InvalidShape(format!(
                "Data length {} doesn't match shape {:?} (expected {})",
                data.len(),
                shape,
                expected_size
            )));
        }

        let arr = ArrayD::from_shape_vec(IxDyn(&shape), data)
            .map_err(|e| CoordError::InvalidShape(e.to_string()))?;
        Ok(Self::from_ndarray(arr))
    }
}

// Value comparison, used throughout the test suites
impl PartialEq for CpuArray {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.as_f64_slice() == other.as_f64_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let arr = CpuArray::from_vec(vec![1.0, 2.0, 3.0]);
        assert_eq!(arr.shape(), &[3]);
        assert_eq!(arr.ndim(), 1);
        assert_eq!(arr.size(), 3);
        assert_eq!(arr.dtype(), DType::Float64);
    }

    #[test]
    fn test_scalar() {
        let arr = CpuArray::scalar(7.5);
        assert_eq!(arr.shape(), &[] as &[usize]);
        assert_eq!(arr.ndim(), 0);
        assert_eq!(arr.size(), 1);
        assert_eq!(arr.as_f64_slice(), vec![7.5]);
    }

    #[test]
    fn test_namespace() {
        let arr = CpuArray::scalar(0.0);
        assert_eq!(arr.namespace().name(), "cpu");
    }

    #[test]
    fn test_from_f64_vec_shape_mismatch() {
        let result = CpuArray::from_f64_vec(vec![1.0, 2.0, 3.0], vec![2, 2]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_f64_vec_2d() {
        let arr = CpuArray::from_f64_vec(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]).unwrap();
        assert_eq!(arr.shape(), &[2, 2]);
        assert_eq!(arr.as_f64_slice(), vec![1.0, 2.0, 3.0, 4.0]);
    }
}
