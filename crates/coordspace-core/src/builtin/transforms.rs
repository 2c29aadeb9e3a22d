//! Builtin representation transforms
//!
//! Each conversion is registered for its exact (source, destination) pair.
//! Identity entries are ordinary registrations, never implicit: a registry
//! without them fails even same-kind lookups.

use super::{AnyCoordinate, Cartesian2D, LogPolar, Polar};
use crate::error::{CoordError, Result};
use crate::ops::Backend;
use crate::registry::TransformRegistry;
use crate::representation::RepKind;

/// Register identity entries for every builtin kind plus the 2-D
/// Cartesian / Polar / LogPolar cross transforms.
pub fn register_builtin_transforms<B: Backend>(registry: &TransformRegistry<B>) {
    for kind in RepKind::ALL {
        registry.register(kind, kind, identity);
    }

    registry.register(RepKind::Cartesian2D, RepKind::Polar, cartesian_to_polar);
    registry.register(RepKind::Cartesian2D, RepKind::LogPolar, cartesian_to_log_polar);
    registry.register(RepKind::Polar, RepKind::Cartesian2D, polar_to_cartesian);
    registry.register(RepKind::Polar, RepKind::LogPolar, polar_to_log_polar);
    registry.register(RepKind::LogPolar, RepKind::Cartesian2D, log_polar_to_cartesian);
    registry.register(RepKind::LogPolar, RepKind::Polar, log_polar_to_polar);
}

fn identity<B: Backend>(c: &AnyCoordinate<B>) -> Result<AnyCoordinate<B>> {
    Ok(c.clone())
}

fn as_cartesian<B: Backend>(any: &AnyCoordinate<B>) -> Result<&Cartesian2D<B>> {
    match any {
        AnyCoordinate::Cartesian2D(c) => Ok(c),
        other => Err(CoordError::KindMismatch {
            expected: RepKind::Cartesian2D,
            got: other.kind(),
        }),
    }
}

fn as_polar<B: Backend>(any: &AnyCoordinate<B>) -> Result<&Polar<B>> {
    match any {
        AnyCoordinate::Polar(c) => Ok(c),
        other => Err(CoordError::KindMismatch {
            expected: RepKind::Polar,
            got: other.kind(),
        }),
    }
}

fn as_log_polar<B: Backend>(any: &AnyCoordinate<B>) -> Result<&LogPolar<B>> {
    match any {
        AnyCoordinate::LogPolar(c) => Ok(c),
        other => Err(CoordError::KindMismatch {
            expected: RepKind::LogPolar,
            got: other.kind(),
        }),
    }
}

// -- Cartesian -> X ------------------------------------------------

fn cartesian_to_polar<B: Backend>(any: &AnyCoordinate<B>) -> Result<AnyCoordinate<B>> {
    let c = as_cartesian(any)?;
    let rho = B::hypot(c.x(), c.y())?;
    let phi = B::atan2(c.y(), c.x())?;
    Ok(Polar::new(rho, phi)?.into())
}

fn cartesian_to_log_polar<B: Backend>(any: &AnyCoordinate<B>) -> Result<AnyCoordinate<B>> {
    let c = as_cartesian(any)?;
    let rho = B::log(&B::hypot(c.x(), c.y())?);
    let phi = B::atan2(c.y(), c.x())?;
    Ok(LogPolar::new(rho, phi)?.into())
}

// -- Polar -> X ----------------------------------------------------

fn polar_to_cartesian<B: Backend>(any: &AnyCoordinate<B>) -> Result<AnyCoordinate<B>> {
    let c = as_polar(any)?;
    let x = B::mul(c.rho(), &B::cos(c.phi()))?;
    let y = B::mul(c.rho(), &B::sin(c.phi()))?;
    Ok(Cartesian2D::new(x, y)?.into())
}

fn polar_to_log_polar<B: Backend>(any: &AnyCoordinate<B>) -> Result<AnyCoordinate<B>> {
    let c = as_polar(any)?;
    Ok(LogPolar::new(B::log(c.rho()), c.phi().clone())?.into())
}

// -- LogPolar -> X -------------------------------------------------

fn log_polar_to_cartesian<B: Backend>(any: &AnyCoordinate<B>) -> Result<AnyCoordinate<B>> {
    let c = as_log_polar(any)?;
    let r = B::exp(c.rho());
    let x = B::mul(&r, &B::cos(c.phi()))?;
    let y = B::mul(&r, &B::sin(c.phi()))?;
    Ok(Cartesian2D::new(x, y)?.into())
}

fn log_polar_to_polar<B: Backend>(any: &AnyCoordinate<B>) -> Result<AnyCoordinate<B>> {
    let c = as_log_polar(any)?;
    Ok(Polar::new(B::exp(c.rho()), c.phi().clone())?.into())
}
