//! Generic elementwise and manipulation functions over coordinates
//!
//! Free functions that dispatch on the runtime kind of their first
//! argument, each coordinate type supplying its own implementation through
//! [`ElementwiseDispatch`]. Argument combinations no implementation claims
//! return the cooperative [`Dispatch::NotImplemented`] sentinel instead of
//! raising, mirroring reflected-operator protocols: the caller decides the
//! fallback (e.g. treat cross-kind equality as inequality).

use crate::builtin::{AnyCoordinate, Cartesian1D, Cartesian2D, LogPolar, Polar, Redshift};
use crate::error::Result;
use crate::ops::{Backend, Field};
use crate::representation::Representation;

/// Result of a cooperative dispatch
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch<T> {
    /// A definite value
    Resolved(T),
    /// No implementation claimed the argument combination
    NotImplemented,
}

impl<T> Dispatch<T> {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Dispatch::NotImplemented)
    }

    /// The resolved value, if any
    pub fn resolved(self) -> Option<T> {
        match self {
            Dispatch::Resolved(value) => Some(value),
            Dispatch::NotImplemented => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Dispatch<U> {
        match self {
            Dispatch::Resolved(value) => Dispatch::Resolved(f(value)),
            Dispatch::NotImplemented => Dispatch::NotImplemented,
        }
    }
}

/// Types whose elementwise operations participate in generic dispatch
pub trait ElementwiseDispatch<B: Backend>: Sized {
    /// Elementwise equality mask, or the sentinel
    fn dispatch_equal(&self, other: &Self) -> Result<Dispatch<Field<B>>>;

    /// Elementwise inequality mask, or the sentinel
    fn dispatch_not_equal(&self, other: &Self) -> Result<Dispatch<Field<B>>>;

    /// A new value broadcast to `shape`, or the sentinel
    fn dispatch_broadcast_to(&self, shape: &[usize]) -> Result<Dispatch<Self>>;
}

/// Elementwise equality, dispatching on the runtime kind of `x1`
pub fn equal<B, T>(x1: &T, x2: &T) -> Result<Dispatch<Field<B>>>
where
    B: Backend,
    T: ElementwiseDispatch<B>,
{
    x1.dispatch_equal(x2)
}

/// Elementwise inequality, dispatching on the runtime kind of `x1`
pub fn not_equal<B, T>(x1: &T, x2: &T) -> Result<Dispatch<Field<B>>>
where
    B: Backend,
    T: ElementwiseDispatch<B>,
{
    x1.dispatch_not_equal(x2)
}

/// Broadcast a coordinate value to `shape`, dispatching on its runtime kind
pub fn broadcast_to<B, T>(x: &T, shape: &[usize]) -> Result<Dispatch<T>>
where
    B: Backend,
    T: ElementwiseDispatch<B>,
{
    x.dispatch_broadcast_to(shape)
}

macro_rules! impl_rep_dispatch {
    ($ty:ident) => {
        impl<B: Backend> ElementwiseDispatch<B> for $ty<B> {
            fn dispatch_equal(&self, other: &Self) -> Result<Dispatch<Field<B>>> {
                Ok(Dispatch::Resolved(self.eq_mask(other)?))
            }

            fn dispatch_not_equal(&self, other: &Self) -> Result<Dispatch<Field<B>>> {
                Ok(Dispatch::Resolved(self.ne_mask(other)?))
            }

            fn dispatch_broadcast_to(&self, shape: &[usize]) -> Result<Dispatch<Self>> {
                Ok(Dispatch::Resolved(self.broadcast_to(shape)?))
            }
        }
    };
}

impl_rep_dispatch!(Cartesian1D);
impl_rep_dispatch!(Cartesian2D);
impl_rep_dispatch!(Polar);
impl_rep_dispatch!(LogPolar);
impl_rep_dispatch!(Redshift);

impl<B: Backend> ElementwiseDispatch<B> for AnyCoordinate<B> {
    fn dispatch_equal(&self, other: &Self) -> Result<Dispatch<Field<B>>> {
        Ok(match self.eq_mask_same_kind(other)? {
            Some(mask) => Dispatch::Resolved(mask),
            None => Dispatch::NotImplemented,
        })
    }

    fn dispatch_not_equal(&self, other: &Self) -> Result<Dispatch<Field<B>>> {
        Ok(match self.eq_mask_same_kind(other)? {
            Some(mask) => Dispatch::Resolved(B::logical_not(&mask)),
            None => Dispatch::NotImplemented,
        })
    }

    fn dispatch_broadcast_to(&self, shape: &[usize]) -> Result<Dispatch<Self>> {
        Ok(Dispatch::Resolved(self.broadcast_to(shape)?))
    }
}
