//! Backend namespace identification
//!
//! Every coordinate field carries the namespace of the backend that produced
//! it. All fields composing one entity must resolve to exactly one
//! namespace; zero or several distinct namespaces is an error.

use std::fmt;

use serde::Serialize;

use crate::array::Array;
use crate::error::{CoordError, Result};

/// Opaque handle identifying the numeric backend behind an array value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Namespace {
    name: &'static str,
    version: &'static str,
}

impl Namespace {
    pub fn new(name: &'static str, version: &'static str) -> Self {
        Self { name, version }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn version(&self) -> &'static str {
        self.version
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.version)
    }
}

/// Resolve the single namespace shared by a set of coordinate fields.
///
/// Fails with [`CoordError::NoNamespace`] when the set is empty and
/// [`CoordError::AmbiguousNamespace`] when the fields come from more than
/// one backend.
pub fn resolve_namespace<'a, A, I>(fields: I) -> Result<Namespace>
where
    A: Array + 'a,
    I: IntoIterator<Item = &'a A>,
{
    let mut found: Vec<Namespace> = Vec::new();
    for field in fields {
        let ns = field.namespace();
        if !found.contains(&ns) {
            found.push(ns);
        }
    }
    match found.as_slice() {
        [] => Err(CoordError::NoNamespace),
        [ns] => Ok(*ns),
        _ => Err(CoordError::AmbiguousNamespace(found)),
    }
}
