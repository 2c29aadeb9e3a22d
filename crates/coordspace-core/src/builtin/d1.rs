//! One-dimensional builtin representations

use crate::ops::{Backend, Field};
use crate::representation::{broadcast_uniform, exact_fields, RepKind, Representation};
use crate::Result;

/// One-dimensional Cartesian coordinates
#[derive(Clone, Debug)]
pub struct Cartesian1D<B: Backend> {
    x: Field<B>,
}

impl<B: Backend> Cartesian1D<B> {
    pub fn new(x: Field<B>) -> Result<Self> {
        let [x] = broadcast_uniform::<B, 1>([x])?;
        Ok(Self { x })
    }

    pub fn x(&self) -> &Field<B> {
        &self.x
    }
}

impl<B: Backend> Representation<B> for Cartesian1D<B> {
    fn kind() -> RepKind {
        RepKind::Cartesian1D
    }

    fn field_names() -> &'static [&'static str] {
        &["x"]
    }

    fn fields(&self) -> Vec<&Field<B>> {
        vec![&self.x]
    }

    fn from_fields(fields: Vec<Field<B>>) -> Result<Self> {
        let [x] = exact_fields::<B, 1>(fields)?;
        Self::new(x)
    }
}
