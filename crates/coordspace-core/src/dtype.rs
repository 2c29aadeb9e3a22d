//! Data types carried by structured exports

use serde::{Deserialize, Serialize};

/// Supported field data types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    Float32,
    Float64,
    Int32,
    Int64,
    UInt32,
    UInt64,
    Bool,
}

impl DType {
    /// Size in bytes
    pub fn size(&self) -> usize {
        match self {
            DType::Bool => 1,
            DType::Float32 | DType::Int32 | DType::UInt32 => 4,
            DType::Float64 | DType::Int64 | DType::UInt64 => 8,
        }
    }

    /// String representation (NumPy compatible)
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Float32 => "float32",
            DType::Float64 => "float64",
            DType::Int32 => "int32",
            DType::Int64 => "int64",
            DType::UInt32 => "uint32",
            DType::UInt64 => "uint64",
            DType::Bool => "bool",
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for DType {
    fn default() -> Self {
        DType::Float64
    }
}
