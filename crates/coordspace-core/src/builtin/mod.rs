//! Builtin coordinate representations

mod d1;
mod d2;
mod redshift;
mod transforms;

pub use d1::Cartesian1D;
pub use d2::{Cartesian2D, LogPolar, Polar};
pub use redshift::Redshift;
pub use transforms::register_builtin_transforms;

use crate::dtype::DType;
use crate::error::{CoordError, Result};
use crate::export::StructuredArray;
use crate::namespace::Namespace;
use crate::ops::{AxisIndex, Backend, Field};
use crate::registry::TransformRegistry;
use crate::representation::{RepKind, Representation};

/// Any builtin coordinate: the uniform value that flows through the
/// transform registry, coordinate spaces, and generic dispatch.
#[derive(Clone, Debug)]
pub enum AnyCoordinate<B: Backend> {
    Cartesian1D(Cartesian1D<B>),
    Cartesian2D(Cartesian2D<B>),
    Polar(Polar<B>),
    LogPolar(LogPolar<B>),
    Redshift(Redshift<B>),
}

macro_rules! for_each_kind {
    ($any:expr, $c:ident => $body:expr) => {
        match $any {
            AnyCoordinate::Cartesian1D($c) => $body,
            AnyCoordinate::Cartesian2D($c) => $body,
            AnyCoordinate::Polar($c) => $body,
            AnyCoordinate::LogPolar($c) => $body,
            AnyCoordinate::Redshift($c) => $body,
        }
    };
}

macro_rules! map_each_kind {
    ($any:expr, $c:ident => $body:expr) => {
        match $any {
            AnyCoordinate::Cartesian1D($c) => AnyCoordinate::Cartesian1D($body),
            AnyCoordinate::Cartesian2D($c) => AnyCoordinate::Cartesian2D($body),
            AnyCoordinate::Polar($c) => AnyCoordinate::Polar($body),
            AnyCoordinate::LogPolar($c) => AnyCoordinate::LogPolar($body),
            AnyCoordinate::Redshift($c) => AnyCoordinate::Redshift($body),
        }
    };
}

impl<B: Backend> AnyCoordinate<B> {
    pub fn kind(&self) -> RepKind {
        match self {
            AnyCoordinate::Cartesian1D(_) => RepKind::Cartesian1D,
            AnyCoordinate::Cartesian2D(_) => RepKind::Cartesian2D,
            AnyCoordinate::Polar(_) => RepKind::Polar,
            AnyCoordinate::LogPolar(_) => RepKind::LogPolar,
            AnyCoordinate::Redshift(_) => RepKind::Redshift,
        }
    }

    pub fn namespace(&self) -> Result<Namespace> {
        for_each_kind!(self, c => c.namespace())
    }

    pub fn shape(&self) -> Vec<usize> {
        for_each_kind!(self, c => c.shape())
    }

    pub fn ndim(&self) -> usize {
        for_each_kind!(self, c => c.ndim())
    }

    pub fn size(&self) -> usize {
        for_each_kind!(self, c => c.size())
    }

    pub fn len(&self) -> Result<usize> {
        for_each_kind!(self, c => c.len())
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn index(&self, index: &AxisIndex) -> Result<Self> {
        Ok(map_each_kind!(self, c => c.index(index)?))
    }

    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        Ok(map_each_kind!(self, c => c.broadcast_to(shape)?))
    }

    pub fn represent_as(&self, to: RepKind, registry: &TransformRegistry<B>) -> Result<Self> {
        registry.lookup_and_apply(self, to)
    }

    pub fn to_structured(&self) -> StructuredArray {
        for_each_kind!(self, c => c.to_structured())
    }

    pub fn to_structured_as(&self, dtype: DType) -> StructuredArray {
        for_each_kind!(self, c => c.to_structured_as(dtype))
    }

    /// Elementwise equality when both sides are the same kind; `None`
    /// signals a cross-kind pair (callers map that to the dispatch
    /// sentinel).
    pub(crate) fn eq_mask_same_kind(&self, other: &Self) -> Result<Option<Field<B>>> {
        let mask = match (self, other) {
            (AnyCoordinate::Cartesian1D(a), AnyCoordinate::Cartesian1D(b)) => a.eq_mask(b)?,
            (AnyCoordinate::Cartesian2D(a), AnyCoordinate::Cartesian2D(b)) => a.eq_mask(b)?,
            (AnyCoordinate::Polar(a), AnyCoordinate::Polar(b)) => a.eq_mask(b)?,
            (AnyCoordinate::LogPolar(a), AnyCoordinate::LogPolar(b)) => a.eq_mask(b)?,
            (AnyCoordinate::Redshift(a), AnyCoordinate::Redshift(b)) => a.eq_mask(b)?,
            _ => return Ok(None),
        };
        Ok(Some(mask))
    }
}

macro_rules! impl_any_conversions {
    ($variant:ident, $ty:ident) => {
        impl<B: Backend> From<$ty<B>> for AnyCoordinate<B> {
            fn from(c: $ty<B>) -> Self {
                AnyCoordinate::$variant(c)
            }
        }

        impl<B: Backend> TryFrom<AnyCoordinate<B>> for $ty<B> {
            type Error = CoordError;

            fn try_from(any: AnyCoordinate<B>) -> Result<Self> {
                match any {
                    AnyCoordinate::$variant(c) => Ok(c),
                    other => Err(CoordError::KindMismatch {
                        expected: RepKind::$variant,
                        got: other.kind(),
                    }),
                }
            }
        }
    };
}

impl_any_conversions!(Cartesian1D, Cartesian1D);
impl_any_conversions!(Cartesian2D, Cartesian2D);
impl_any_conversions!(Polar, Polar);
impl_any_conversions!(LogPolar, LogPolar);
impl_any_conversions!(Redshift, Redshift);
