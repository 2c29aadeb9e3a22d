//! Coordinate representation machinery
//!
//! A representation is an immutable record of named array fields describing
//! a coordinate in one mathematical parametrization. Construction resolves
//! the fields' shared backend namespace and broadcasts them to one uniform
//! shape; after that, every field has identical shape, ndim, and size.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::array::Array;
use crate::builtin::AnyCoordinate;
use crate::dtype::DType;
use crate::error::{CoordError, Result};
use crate::export::{StructuredArray, StructuredField};
use crate::namespace::{resolve_namespace, Namespace};
use crate::ops::{AxisIndex, Backend, Field};
use crate::registry::TransformRegistry;

/// Tag identifying a representation kind.
///
/// The transform registry is keyed by pairs of these tags. Keeping the set
/// closed makes the dispatch table exhaustively checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepKind {
    Cartesian1D,
    Cartesian2D,
    Polar,
    LogPolar,
    Redshift,
}

impl RepKind {
    pub const ALL: [RepKind; 5] = [
        RepKind::Cartesian1D,
        RepKind::Cartesian2D,
        RepKind::Polar,
        RepKind::LogPolar,
        RepKind::Redshift,
    ];
}

impl fmt::Display for RepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RepKind::Cartesian1D => "Cartesian1D",
            RepKind::Cartesian2D => "Cartesian2D",
            RepKind::Polar => "Polar",
            RepKind::LogPolar => "LogPolar",
            RepKind::Redshift => "Redshift",
        })
    }
}

/// A coordinate in one mathematical parametrization.
///
/// Implementors are immutable; indexing and broadcasting return new
/// instances of the same concrete type, re-invoking the constructor (and
/// therefore re-broadcasting).
pub trait Representation<B: Backend>: Sized + Clone {
    /// Registry tag for this type
    fn kind() -> RepKind;

    /// Names of the coordinate fields, in declaration order
    fn field_names() -> &'static [&'static str];

    /// The coordinate fields, in declaration order
    fn fields(&self) -> Vec<&Field<B>>;

    /// Rebuild from fields in declaration order, re-running construction
    fn from_fields(fields: Vec<Field<B>>) -> Result<Self>;

    // ---------------------------------------------------------------
    // Provided methods

    /// The namespace shared by the coordinate fields
    fn namespace(&self) -> Result<Namespace> {
        resolve_namespace(self.fields())
    }

    /// The uniform broadcast shape of the coordinate fields
    fn shape(&self) -> Vec<usize> {
        self.fields()
            .first()
            .map(|f| f.shape().to_vec())
            .unwrap_or_default()
    }

    fn ndim(&self) -> usize {
        self.fields().first().map(|f| f.ndim()).unwrap_or(0)
    }

    fn size(&self) -> usize {
        self.fields().first().map(|f| f.size()).unwrap_or(0)
    }

    /// Size of the leading dimension; fails on zero-dimensional coordinates
    fn len(&self) -> Result<usize> {
        self.shape()
            .first()
            .copied()
            .ok_or(CoordError::NotSupported(
                "len() of a zero-dimensional coordinate",
            ))
    }

    /// Select along the leading axis; every field is indexed identically
    fn index(&self, index: &AxisIndex) -> Result<Self> {
        let taken = self
            .fields()
            .into_iter()
            .map(|f| B::take(f, index))
            .collect::<Result<Vec<_>>>()?;
        Self::from_fields(taken)
    }

    /// Broadcast every coordinate field to `shape`
    fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        let fields = self
            .fields()
            .into_iter()
            .map(|f| B::broadcast_to(f, shape))
            .collect::<Result<Vec<_>>>()?;
        Self::from_fields(fields)
    }

    /// Iterate single-element instances along the leading axis.
    ///
    /// The sequence is lazy and finite; calling `iter` again restarts it.
    fn iter(&self) -> RepIter<'_, B, Self> {
        RepIter {
            rep: self,
            next: 0,
            len: self.shape().first().copied().unwrap_or(0),
            _backend: PhantomData,
        }
    }

    /// Elementwise equality against another instance of the same type.
    ///
    /// The result is the AND, across coordinate fields, of per-field
    /// elementwise equality: an array mask, not a single bool.
    fn eq_mask(&self, other: &Self) -> Result<Field<B>> {
        let mut masks = self
            .fields()
            .into_iter()
            .zip(other.fields())
            .map(|(a, b)| B::equal(a, b));
        let mut mask = match masks.next() {
            Some(first) => first?,
            None => return Err(CoordError::NoNamespace),
        };
        for m in masks {
            mask = B::logical_and(&mask, &m?)?;
        }
        Ok(mask)
    }

    /// Elementwise inequality: the negation of [`Representation::eq_mask`]
    fn ne_mask(&self, other: &Self) -> Result<Field<B>> {
        Ok(B::logical_not(&self.eq_mask(other)?))
    }

    /// Ordering has no meaning for array-valued coordinates
    fn lt(&self, _other: &Self) -> Result<Field<B>> {
        Err(CoordError::NotSupported("ordering comparison `<` on coordinates"))
    }

    fn le(&self, _other: &Self) -> Result<Field<B>> {
        Err(CoordError::NotSupported("ordering comparison `<=` on coordinates"))
    }

    fn gt(&self, _other: &Self) -> Result<Field<B>> {
        Err(CoordError::NotSupported("ordering comparison `>` on coordinates"))
    }

    fn ge(&self, _other: &Self) -> Result<Field<B>> {
        Err(CoordError::NotSupported("ordering comparison `>=` on coordinates"))
    }

    /// Re-represent through the transform registry
    fn represent_as(
        &self,
        to: RepKind,
        registry: &TransformRegistry<B>,
    ) -> Result<AnyCoordinate<B>>
    where
        Self: Into<AnyCoordinate<B>>,
    {
        registry.lookup_and_apply(&self.clone().into(), to)
    }

    /// Materialize all declared fields into one named-field record.
    ///
    /// Per-field dtype is inferred from the field content.
    fn to_structured(&self) -> StructuredArray {
        self.structured(None)
    }

    /// Like [`Representation::to_structured`] with every field forced to `dtype`
    fn to_structured_as(&self, dtype: DType) -> StructuredArray {
        self.structured(Some(dtype))
    }

    #[doc(hidden)]
    fn structured(&self, dtype: Option<DType>) -> StructuredArray {
        let fields = Self::field_names()
            .iter()
            .zip(self.fields())
            .map(|(name, f)| StructuredField {
                name: (*name).to_string(),
                dtype: dtype.unwrap_or_else(|| f.dtype()),
                data: f.as_f64_slice(),
            })
            .collect();
        StructuredArray {
            shape: self.shape(),
            fields,
        }
    }
}

/// Restartable iterator of single-element coordinate instances
pub struct RepIter<'a, B: Backend, R: Representation<B>> {
    rep: &'a R,
    next: usize,
    len: usize,
    _backend: PhantomData<B>,
}

impl<B: Backend, R: Representation<B>> Iterator for RepIter<'_, B, R> {
    type Item = Result<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.len {
            return None;
        }
        let i = self.next;
        self.next += 1;
        Some(self.rep.index(&AxisIndex::At(i)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.next;
        (remaining, Some(remaining))
    }
}

impl<B: Backend, R: Representation<B>> ExactSizeIterator for RepIter<'_, B, R> {}

/// Resolve the shared namespace of `fields` and broadcast them jointly to
/// one shape. Every representation constructor funnels through here, which
/// is what establishes the uniform-shape invariant.
pub fn broadcast_uniform<B: Backend, const N: usize>(
    fields: [Field<B>; N],
) -> Result<[Field<B>; N]> {
    resolve_namespace(fields.iter())?;
    let refs: Vec<&Field<B>> = fields.iter().collect();
    let broadcast = B::broadcast_arrays(&refs)?;
    exact_fields::<B, N>(broadcast)
}

/// Convert a field vector back into a fixed arity, checking the count
pub(crate) fn exact_fields<B: Backend, const N: usize>(
    fields: Vec<Field<B>>,
) -> Result<[Field<B>; N]> {
    let got = fields.len();
    <[Field<B>; N]>::try_from(fields).map_err(|_| CoordError::FieldCount { expected: N, got })
}
