//! Transform registry keyed by (source, destination) representation kinds
//!
//! The registry holds only directly registered edges: there is no
//! transitive closure, and identity entries must be registered explicitly.
//! It is an explicit object with a controlled lifetime, built once at
//! startup and passed by reference to whatever needs lookups; the interior
//! lock makes concurrent registration and lookup safe.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, trace};

use crate::builtin::{register_builtin_transforms, AnyCoordinate};
use crate::error::{CoordError, Result};
use crate::ops::Backend;
use crate::representation::{RepKind, Representation};

/// A registered conversion between two representation kinds
pub type TransformFn<B> =
    Arc<dyn Fn(&AnyCoordinate<B>) -> Result<AnyCoordinate<B>> + Send + Sync>;

type Table<B> = HashMap<(RepKind, RepKind), TransformFn<B>>;

/// Mapping from (source, destination) kind pairs to conversion functions
pub struct TransformRegistry<B: Backend> {
    table: RwLock<Table<B>>,
}

impl<B: Backend> TransformRegistry<B> {
    /// An empty registry. Even `(T, T)` lookups fail until registered.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(HashMap::new()),
        }
    }

    /// A registry preloaded with the builtin transforms, identities included
    pub fn with_builtin() -> Self {
        let registry = Self::new();
        register_builtin_transforms(&registry);
        registry
    }

    /// Insert or overwrite the entry for the exact `(from, to)` pair.
    ///
    /// The function's output kind is not validated against `to`; that is
    /// the registrant's contract.
    pub fn register<F>(&self, from: RepKind, to: RepKind, transform: F)
    where
        F: Fn(&AnyCoordinate<B>) -> Result<AnyCoordinate<B>> + Send + Sync + 'static,
    {
        debug!("registering coordinate transform {from} -> {to}");
        self.write_table().insert((from, to), Arc::new(transform));
    }

    /// Whether an edge is registered for the exact pair
    pub fn contains(&self, from: RepKind, to: RepKind) -> bool {
        self.read_table().contains_key(&(from, to))
    }

    /// Number of registered edges
    pub fn len(&self) -> usize {
        self.read_table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_table().is_empty()
    }

    /// Look up the `(kind(coordinate), to)` edge and apply it.
    ///
    /// A miss fails with [`CoordError::UnsupportedTransform`] naming both
    /// kinds and leaves the table untouched.
    pub fn lookup_and_apply(
        &self,
        coordinate: &AnyCoordinate<B>,
        to: RepKind,
    ) -> Result<AnyCoordinate<B>> {
        let from = coordinate.kind();
        let transform = self
            .read_table()
            .get(&(from, to))
            .cloned()
            .ok_or(CoordError::UnsupportedTransform { from, to })?;
        trace!("applying coordinate transform {from} -> {to}");
        transform(coordinate)
    }

    /// Typed conversion: look up, apply, and downcast to the target type.
    ///
    /// A registered function that returns the wrong kind surfaces here as
    /// [`CoordError::KindMismatch`].
    pub fn convert<S, T>(&self, coordinate: &S) -> Result<T>
    where
        S: Representation<B> + Into<AnyCoordinate<B>>,
        T: Representation<B> + TryFrom<AnyCoordinate<B>, Error = CoordError>,
    {
        let any: AnyCoordinate<B> = coordinate.clone().into();
        T::try_from(self.lookup_and_apply(&any, T::kind())?)
    }

    fn read_table(&self) -> RwLockReadGuard<'_, Table<B>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_table(&self) -> RwLockWriteGuard<'_, Table<B>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<B: Backend> Default for TransformRegistry<B> {
    fn default() -> Self {
        Self::new()
    }
}
