//! coordspace core - backend traits and coordinate machinery
//!
//! This crate defines the array capability contract that numeric backends
//! implement, the coordinate representation types built on top of it, the
//! (source, destination)-keyed transform registry, and keyed coordinate
//! spaces sharing one broadcast shape. It owns no array storage itself;
//! backends (CPU, or anything else satisfying the ops traits) supply that.

pub mod array;
pub mod builtin;
pub mod dtype;
pub mod error;
pub mod export;
pub mod frame;
pub mod functions;
pub mod namespace;
pub mod ops;
pub mod registry;
pub mod representation;
pub mod space;

pub use array::{Array, ArrayMeta};
pub use builtin::{AnyCoordinate, Cartesian1D, Cartesian2D, LogPolar, Polar, Redshift};
pub use dtype::DType;
pub use error::{CoordError, Result};
pub use export::{StructuredArray, StructuredField};
pub use functions::{broadcast_to, equal, not_equal, Dispatch, ElementwiseDispatch};
pub use namespace::{resolve_namespace, Namespace};
pub use ops::{broadcast_shapes, AxisIndex, Backend, CompareOps, Field, ManipulationOps, MathOps};
pub use registry::TransformRegistry;
pub use representation::{RepKind, Representation};
pub use space::{CoordinateSpace, SpaceEntry};
