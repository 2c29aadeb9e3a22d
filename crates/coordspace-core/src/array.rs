//! Abstract array type that backends implement

use serde::{Deserialize, Serialize};

use crate::dtype::DType;
use crate::namespace::Namespace;
use crate::Result;

/// Metadata about an array (backend-agnostic)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayMeta {
    pub shape: Vec<usize>,
    pub dtype: DType,
}

impl ArrayMeta {
    pub fn new(shape: Vec<usize>, dtype: DType) -> Self {
        Self { shape, dtype }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }
}

/// Capability contract for a coordinate field value.
///
/// This is the minimal surface the core asks of an array: metadata, the
/// namespace of the backend that produced it, and raw data access for
/// structured export. Broadcasting, comparison, and math live on the
/// backend ops traits ([`crate::ops`]), keyed by a backend marker type.
pub trait Array: Clone + std::fmt::Debug {
    /// Get array metadata
    fn meta(&self) -> &ArrayMeta;

    /// Identify the backend that produced this value
    fn namespace(&self) -> Namespace;

    /// Get shape
    fn shape(&self) -> &[usize] {
        &self.meta().shape
    }

    /// Get number of dimensions
    fn ndim(&self) -> usize {
        self.meta().ndim()
    }

    /// Get total number of elements
    fn size(&self) -> usize {
        self.meta().size()
    }

    /// Get data type
    fn dtype(&self) -> DType {
        self.meta().dtype
    }

    /// Get raw data as f64, row-major (for export and tests)
    fn as_f64_slice(&self) -> Vec<f64>;

    /// Create from f64 data and shape
    fn from_f64_vec(data: Vec<f64>, shape: Vec<usize>) -> Result<Self>
    where
        Self: Sized;
}
