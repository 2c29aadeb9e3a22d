//! CPU backend for coordspace
//!
//! Uses ndarray for array storage and broadcasting.

mod array;
mod broadcast;
mod compare;
mod manipulation;
mod math;

pub use array::CpuArray;
pub use broadcast::{broadcast_binary_op, broadcast_compare_op};

use coordspace_core::Backend;

/// CPU backend marker
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuBackend;

impl Backend for CpuBackend {
    fn name() -> &'static str {
        "cpu"
    }

    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
