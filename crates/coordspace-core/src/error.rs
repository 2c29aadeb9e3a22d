//! Error types for coordspace

use thiserror::Error;

use crate::namespace::Namespace;
use crate::representation::RepKind;

#[derive(Error, Debug, Clone)]
pub enum CoordError {
    #[error("coordinate fields resolve to multiple array namespaces: {0:?}")]
    AmbiguousNamespace(Vec<Namespace>),

    #[error("no coordinate field exposes an array namespace")]
    NoNamespace,

    #[error("Incompatible shapes for operation: {0:?} and {1:?}")]
    IncompatibleShapes(Vec<usize>, Vec<usize>),

    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    #[error("Index out of bounds: index {index} for axis of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    #[error("expected {expected} coordinate fields, got {got}")]
    FieldCount { expected: usize, got: usize },

    #[error("there is no registered transform from {from} to {to}")]
    UnsupportedTransform { from: RepKind, to: RepKind },

    #[error("expected a {expected} coordinate, got {got}")]
    KindMismatch { expected: RepKind, got: RepKind },

    #[error("not supported: {0}")]
    NotSupported(&'static str),

    #[error("duplicate key in coordinate space: {0}")]
    DuplicateKey(String),
}

pub type Result<T> = std::result::Result<T, CoordError>;
