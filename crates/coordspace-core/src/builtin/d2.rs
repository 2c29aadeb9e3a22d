//! Two-dimensional builtin representations

use crate::ops::{Backend, Field};
use crate::representation::{broadcast_uniform, exact_fields, RepKind, Representation};
use crate::Result;

/// Two-dimensional Cartesian coordinates
#[derive(Clone, Debug)]
pub struct Cartesian2D<B: Backend> {
    x: Field<B>,
    y: Field<B>,
}

impl<B: Backend> Cartesian2D<B> {
    /// Build from raw fields, broadcasting them to one shape
    pub fn new(x: Field<B>, y: Field<B>) -> Result<Self> {
        let [x, y] = broadcast_uniform::<B, 2>([x, y])?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &Field<B> {
        &self.x
    }

    pub fn y(&self) -> &Field<B> {
        &self.y
    }
}

impl<B: Backend> Representation<B> for Cartesian2D<B> {
    fn kind() -> RepKind {
        RepKind::Cartesian2D
    }

    fn field_names() -> &'static [&'static str] {
        &["x", "y"]
    }

    fn fields(&self) -> Vec<&Field<B>> {
        vec![&self.x, &self.y]
    }

    fn from_fields(fields: Vec<Field<B>>) -> Result<Self> {
        let [x, y] = exact_fields::<B, 2>(fields)?;
        Self::new(x, y)
    }
}

/// Two-dimensional polar coordinates: radius `rho`, azimuth `phi`
#[derive(Clone, Debug)]
pub struct Polar<B: Backend> {
    rho: Field<B>,
    phi: Field<B>,
}

impl<B: Backend> Polar<B> {
    pub fn new(rho: Field<B>, phi: Field<B>) -> Result<Self> {
        let [rho, phi] = broadcast_uniform::<B, 2>([rho, phi])?;
        Ok(Self { rho, phi })
    }

    pub fn rho(&self) -> &Field<B> {
        &self.rho
    }

    pub fn phi(&self) -> &Field<B> {
        &self.phi
    }
}

impl<B: Backend> Representation<B> for Polar<B> {
    fn kind() -> RepKind {
        RepKind::Polar
    }

    fn field_names() -> &'static [&'static str] {
        &["rho", "phi"]
    }

    fn fields(&self) -> Vec<&Field<B>> {
        vec![&self.rho, &self.phi]
    }

    fn from_fields(fields: Vec<Field<B>>) -> Result<Self> {
        let [rho, phi] = exact_fields::<B, 2>(fields)?;
        Self::new(rho, phi)
    }
}

/// Two-dimensional log-polar coordinates: `rho` is the log of the radius
#[derive(Clone, Debug)]
pub struct LogPolar<B: Backend> {
    rho: Field<B>,
    phi: Field<B>,
}

impl<B: Backend> LogPolar<B> {
    pub fn new(rho: Field<B>, phi: Field<B>) -> Result<Self> {
        let [rho, phi] = broadcast_uniform::<B, 2>([rho, phi])?;
        Ok(Self { rho, phi })
    }

    pub fn rho(&self) -> &Field<B> {
        &self.rho
    }

    pub fn phi(&self) -> &Field<B> {
        &self.phi
    }
}

impl<B: Backend> Representation<B> for LogPolar<B> {
    fn kind() -> RepKind {
        RepKind::LogPolar
    }

    fn field_names() -> &'static [&'static str] {
        &["rho", "phi"]
    }

    fn fields(&self) -> Vec<&Field<B>> {
        vec![&self.rho, &self.phi]
    }

    fn from_fields(fields: Vec<Field<B>>) -> Result<Self> {
        let [rho, phi] = exact_fields::<B, 2>(fields)?;
        Self::new(rho, phi)
    }
}
