//! Keyed coordinate spaces sharing one broadcast shape
//!
//! A space maps keys to coordinates (or nested spaces). At construction the
//! joint broadcast shape across all values is computed and every value is
//! stored broadcast to it, so keyed lookup can hand back the stored value
//! unchanged. Positional access and `represent_as` build new spaces.

use std::fmt;
use std::ops::Range;

use log::trace;

use crate::builtin::AnyCoordinate;
use crate::error::{CoordError, Result};
use crate::functions::{Dispatch, ElementwiseDispatch};
use crate::ops::{broadcast_shapes, AxisIndex, Backend, Field};
use crate::registry::TransformRegistry;
use crate::representation::RepKind;

/// A value stored in a coordinate space
#[derive(Clone, Debug)]
pub enum SpaceEntry<K, B: Backend> {
    Coordinate(AnyCoordinate<B>),
    Space(CoordinateSpace<K, B>),
}

impl<K, B> SpaceEntry<K, B>
where
    K: Clone + Eq + fmt::Debug,
    B: Backend,
{
    pub fn shape(&self) -> Vec<usize> {
        match self {
            SpaceEntry::Coordinate(c) => c.shape(),
            SpaceEntry::Space(s) => s.shape().to_vec(),
        }
    }

    /// The coordinate held by this entry, unless it is a nested space
    pub fn as_coordinate(&self) -> Option<&AnyCoordinate<B>> {
        match self {
            SpaceEntry::Coordinate(c) => Some(c),
            SpaceEntry::Space(_) => None,
        }
    }

    pub fn as_space(&self) -> Option<&CoordinateSpace<K, B>> {
        match self {
            SpaceEntry::Coordinate(_) => None,
            SpaceEntry::Space(s) => Some(s),
        }
    }

    fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        Ok(match self {
            SpaceEntry::Coordinate(c) => SpaceEntry::Coordinate(c.broadcast_to(shape)?),
            SpaceEntry::Space(s) => SpaceEntry::Space(s.broadcast_to(shape)?),
        })
    }

    fn index(&self, index: &AxisIndex) -> Result<Self> {
        Ok(match self {
            SpaceEntry::Coordinate(c) => SpaceEntry::Coordinate(c.index(index)?),
            SpaceEntry::Space(s) => SpaceEntry::Space(s.index(index)?),
        })
    }

    fn represent_as(&self, to: RepKind, registry: &TransformRegistry<B>) -> Result<Self> {
        Ok(match self {
            SpaceEntry::Coordinate(c) => SpaceEntry::Coordinate(c.represent_as(to, registry)?),
            SpaceEntry::Space(s) => SpaceEntry::Space(s.represent_as(to, registry)?),
        })
    }

    fn eq_entry(&self, other: &Self) -> Result<Dispatch<Field<B>>> {
        match (self, other) {
            (SpaceEntry::Coordinate(a), SpaceEntry::Coordinate(b)) => a.dispatch_equal(b),
            (SpaceEntry::Space(a), SpaceEntry::Space(b)) => a.eq_space(b),
            _ => Ok(Dispatch::NotImplemented),
        }
    }
}

impl<K, B: Backend> From<AnyCoordinate<B>> for SpaceEntry<K, B> {
    fn from(c: AnyCoordinate<B>) -> Self {
        SpaceEntry::Coordinate(c)
    }
}

/// An insertion-ordered mapping from keys to coordinate values, broadcast
/// to one common shape at construction
#[derive(Clone, Debug)]
pub struct CoordinateSpace<K, B: Backend> {
    entries: Vec<(K, SpaceEntry<K, B>)>,
    shape: Vec<usize>,
}

impl<K, B> CoordinateSpace<K, B>
where
    K: Clone + Eq + fmt::Debug,
    B: Backend,
{
    /// Build from (key, value) pairs, broadcasting every value to the
    /// joint shape. Duplicate keys are rejected.
    pub fn new(entries: Vec<(K, SpaceEntry<K, B>)>) -> Result<Self> {
        for (i, (key, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(prev, _)| prev == key) {
                return Err(CoordError::DuplicateKey(format!("{key:?}")));
            }
        }

        let mut shape: Vec<usize> = Vec::new();
        for (_, entry) in &entries {
            shape = broadcast_shapes(&shape, &entry.shape())?;
        }

        let entries = entries
            .into_iter()
            .map(|(key, entry)| Ok((key, entry.broadcast_to(&shape)?)))
            .collect::<Result<Vec<_>>>()?;
        trace!(
            "coordinate space constructed: {} entries, shape {shape:?}",
            entries.len()
        );
        Ok(Self { entries, shape })
    }

    /// Build from (key, coordinate) pairs, the common case
    pub fn from_coordinates(pairs: Vec<(K, AnyCoordinate<B>)>) -> Result<Self> {
        Self::new(
            pairs
                .into_iter()
                .map(|(key, c)| (key, SpaceEntry::Coordinate(c)))
                .collect(),
        )
    }

    /// The stored value for `key`, unchanged (broadcasting already
    /// happened at construction)
    pub fn get(&self, key: &K) -> Option<&SpaceEntry<K, B>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, entry)| entry)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// New space with every value selected at position `i` along the
    /// leading axis
    pub fn at(&self, i: usize) -> Result<Self> {
        let len = self.len();
        if i >= len {
            return Err(CoordError::IndexOutOfBounds { index: i, size: len });
        }
        self.index(&AxisIndex::At(i))
    }

    /// New space with every value sliced along the leading axis
    pub fn slice(&self, range: Range<usize>) -> Result<Self> {
        self.index(&AxisIndex::Slice(range))
    }

    fn index(&self, index: &AxisIndex) -> Result<Self> {
        let entries = self
            .entries
            .iter()
            .map(|(key, entry)| Ok((key.clone(), entry.index(index)?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Length of the shared leading dimension
    pub fn len(&self) -> usize {
        self.shape.first().copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The shared broadcast shape
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &SpaceEntry<K, B>> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    /// (key, value) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &SpaceEntry<K, B>)> {
        self.entries.iter().map(|(key, entry)| (key, entry))
    }

    /// Positional selections `at(0), at(1), ..., at(len - 1)`
    pub fn iter_at(&self) -> impl Iterator<Item = Result<Self>> + '_ {
        (0..self.len()).map(|i| self.at(i))
    }

    /// New space with every value re-represented as `to`, same keys
    pub fn represent_as(&self, to: RepKind, registry: &TransformRegistry<B>) -> Result<Self> {
        let entries = self
            .entries
            .iter()
            .map(|(key, entry)| Ok((key.clone(), entry.represent_as(to, registry)?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// New space with every value broadcast to `shape` (used when this
    /// space is nested inside another)
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        let entries = self
            .entries
            .iter()
            .map(|(key, entry)| Ok((key.clone(), entry.broadcast_to(shape)?)))
            .collect::<Result<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Elementwise equality across matching keys.
    ///
    /// Key sets must match exactly and every pair of values must be
    /// comparable; otherwise the cooperative sentinel is returned. The
    /// result is the AND across per-key masks.
    pub fn eq_space(&self, other: &Self) -> Result<Dispatch<Field<B>>> {
        if self.entries.len() != other.entries.len()
            || self.keys().any(|key| !other.contains_key(key))
        {
            return Ok(Dispatch::NotImplemented);
        }

        let mut mask: Option<Field<B>> = None;
        for (key, mine) in self.iter() {
            let Some(theirs) = other.get(key) else {
                return Ok(Dispatch::NotImplemented);
            };
            match mine.eq_entry(theirs)? {
                Dispatch::Resolved(m) => {
                    mask = Some(match mask {
                        None => m,
                        Some(acc) => B::logical_and(&acc, &m)?,
                    });
                }
                Dispatch::NotImplemented => return Ok(Dispatch::NotImplemented),
            }
        }

        Ok(match mask {
            Some(m) => Dispatch::Resolved(m),
            // nothing to compare in an empty space
            None => Dispatch::NotImplemented,
        })
    }
}

impl<K, B> ElementwiseDispatch<B> for CoordinateSpace<K, B>
where
    K: Clone + Eq + fmt::Debug,
    B: Backend,
{
    fn dispatch_equal(&self, other: &Self) -> Result<Dispatch<Field<B>>> {
        self.eq_space(other)
    }

    fn dispatch_not_equal(&self, other: &Self) -> Result<Dispatch<Field<B>>> {
        Ok(match self.eq_space(other)? {
            Dispatch::Resolved(mask) => Dispatch::Resolved(B::logical_not(&mask)),
            Dispatch::NotImplemented => Dispatch::NotImplemented,
        })
    }

    fn dispatch_broadcast_to(&self, shape: &[usize]) -> Result<Dispatch<Self>> {
        Ok(Dispatch::Resolved(self.broadcast_to(shape)?))
    }
}
