//! Redshift representation

use crate::ops::{Backend, Field};
use crate::representation::{broadcast_uniform, exact_fields, RepKind, Representation};
use crate::Result;

/// Redshift coordinates: a single `redshift` field
#[derive(Clone, Debug)]
pub struct Redshift<B: Backend> {
    redshift: Field<B>,
}

impl<B: Backend> Redshift<B> {
    pub fn new(redshift: Field<B>) -> Result<Self> {
        let [redshift] = broadcast_uniform::<B, 1>([redshift])?;
        Ok(Self { redshift })
    }

    pub fn redshift(&self) -> &Field<B> {
        &self.redshift
    }
}

impl<B: Backend> Representation<B> for Redshift<B> {
    fn kind() -> RepKind {
        RepKind::Redshift
    }

    fn field_names() -> &'static [&'static str] {
        &["redshift"]
    }

    fn fields(&self) -> Vec<&Field<B>> {
        vec![&self.redshift]
    }

    fn from_fields(fields: Vec<Field<B>>) -> Result<Self> {
        let [redshift] = exact_fields::<B, 1>(fields)?;
        Self::new(redshift)
    }
}
