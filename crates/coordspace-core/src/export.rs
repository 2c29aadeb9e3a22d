//! Structured export of coordinate records
//!
//! Materializes a representation's declared fields into one named-field
//! record under one shape, for interop with host numeric ecosystems.

use serde::{Deserialize, Serialize};

use crate::dtype::DType;

/// One exported field: name, dtype, and row-major data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuredField {
    pub name: String,
    pub dtype: DType,
    pub data: Vec<f64>,
}

/// A named-field record combining all fields of a coordinate under one shape
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StructuredArray {
    pub shape: Vec<usize>,
    pub fields: Vec<StructuredField>,
}

impl StructuredArray {
    /// The exported field named `name`, if present
    pub fn field(&self, name: &str) -> Option<&StructuredField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Total payload size in bytes, per the declared dtypes
    pub fn nbytes(&self) -> usize {
        self.fields
            .iter()
            .map(|f| f.data.len() * f.dtype.size())
            .sum()
    }
}
