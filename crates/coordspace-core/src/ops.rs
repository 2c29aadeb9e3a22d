//! Operation traits that backends implement
//!
//! A backend is a marker type implementing the ops traits over one concrete
//! [`Array`] type. The core never touches array storage directly; everything
//! it needs is expressed through these traits.

use std::fmt;
use std::ops::Range;

use crate::array::Array;
use crate::error::{CoordError, Result};
use crate::namespace::Namespace;

/// Selection along the leading axis of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisIndex {
    /// Single position: drops the leading axis
    At(usize),
    /// Half-open range: keeps the leading axis
    Slice(Range<usize>),
}

/// Compute the broadcast shape of two input shapes.
///
/// Standard N-dimensional rule: compare dimensions from the trailing edge;
/// each pair must be equal or contain a 1, and missing leading dimensions
/// count as 1.
///
/// # Examples
///
/// - `[3, 1] + [1, 4] → [3, 4]`
/// - `[3, 4] + [4] → [3, 4]`
/// - `[3, 4] + [2, 4] → Error (incompatible)`
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>> {
    let ndim_a = shape_a.len();
    let ndim_b = shape_b.len();
    let ndim_out = ndim_a.max(ndim_b);

    let mut result = vec![0; ndim_out];

    // Iterate from right to left (trailing dimensions)
    for i in 0..ndim_out {
        let dim_a = if i < ndim_a {
            shape_a[ndim_a - 1 - i]
        } else {
            1
        };
        let dim_b = if i < ndim_b {
            shape_b[ndim_b - 1 - i]
        } else {
            1
        };

        if dim_a == dim_b || dim_a == 1 || dim_b == 1 {
            result[ndim_out - 1 - i] = dim_a.max(dim_b);
        } else {
            return Err(CoordError::IncompatibleShapes(
                shape_a.to_vec(),
                shape_b.to_vec(),
            ));
        }
    }

    Ok(result)
}

/// Broadcasting and leading-axis selection
pub trait ManipulationOps {
    type Array: Array;

    /// Broadcast an array to a target shape; error if incompatible
    fn broadcast_to(arr: &Self::Array, shape: &[usize]) -> Result<Self::Array>;

    /// Joint broadcast of all inputs to the smallest common shape
    fn broadcast_arrays(arrays: &[&Self::Array]) -> Result<Vec<Self::Array>>;

    /// Select along the leading axis
    fn take(arr: &Self::Array, index: &AxisIndex) -> Result<Self::Array>;
}

/// Elementwise comparison; masks use 1.0 (true) / 0.0 (false)
pub trait CompareOps {
    type Array: Array;

    fn equal(a: &Self::Array, b: &Self::Array) -> Result<Self::Array>;
    fn not_equal(a: &Self::Array, b: &Self::Array) -> Result<Self::Array>;
    fn logical_and(a: &Self::Array, b: &Self::Array) -> Result<Self::Array>;
    fn logical_not(a: &Self::Array) -> Self::Array;

    /// True when every element of the mask is truthy
    fn all(arr: &Self::Array) -> bool;
}

/// Element-wise math needed by the builtin transforms
pub trait MathOps {
    type Array: Array;

    // Unary operations
    fn sin(arr: &Self::Array) -> Self::Array;
    fn cos(arr: &Self::Array) -> Self::Array;
    fn exp(arr: &Self::Array) -> Self::Array;
    fn log(arr: &Self::Array) -> Self::Array;
    fn sqrt(arr: &Self::Array) -> Self::Array;
    fn square(arr: &Self::Array) -> Self::Array;

    // Binary operations (element-wise, broadcasting)
    fn atan2(y: &Self::Array, x: &Self::Array) -> Result<Self::Array>;
    fn hypot(a: &Self::Array, b: &Self::Array) -> Result<Self::Array>;
    fn add(a: &Self::Array, b: &Self::Array) -> Result<Self::Array>;
    fn mul(a: &Self::Array, b: &Self::Array) -> Result<Self::Array>;
}

/// A complete backend implementation
///
/// Implemented for marker types that provide all the required operation
/// traits over one array type. Markers stay plain unit structs; the
/// `Clone + Debug` supertraits keep derived impls on generic containers
/// simple.
pub trait Backend:
    Clone
    + fmt::Debug
    + 'static
    + ManipulationOps
    + CompareOps<Array = <Self as ManipulationOps>::Array>
    + MathOps<Array = <Self as ManipulationOps>::Array>
{
    /// Backend name for identification
    fn name() -> &'static str;

    /// Backend version
    fn version() -> &'static str;

    /// The namespace stamped on this backend's arrays
    fn namespace() -> Namespace {
        Namespace::new(Self::name(), Self::version())
    }
}

/// The array type of a backend
pub type Field<B> = <B as ManipulationOps>::Array;
