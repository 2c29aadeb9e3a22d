//! Shared behavioral test suite for coordspace
//!
//! Exercises the core machinery through the CPU backend: construction and
//! broadcasting, registry transforms, coordinate spaces, and the generic
//! dispatch functions. Tests are written against the trait surface so other
//! backends can reuse the same expectations.

pub mod construction;
pub mod functions;
pub mod space;
pub mod transforms;

/// Test utilities
pub mod utils {
    use coordspace_core::Array;
    use coordspace_cpu::CpuArray;

    /// Check if two f64 values are approximately equal
    pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        if a.is_nan() && b.is_nan() {
            return true;
        }
        if a.is_infinite() && b.is_infinite() {
            return a.signum() == b.signum();
        }
        (a - b).abs() < tol
    }

    /// Check if two arrays are approximately equal
    pub fn arrays_approx_eq<A: Array>(a: &A, b: &A, tol: f64) -> bool {
        if a.shape() != b.shape() {
            return false;
        }
        let a_data = a.as_f64_slice();
        let b_data = b.as_f64_slice();
        a_data
            .iter()
            .zip(b_data.iter())
            .all(|(&x, &y)| approx_eq(x, y, tol))
    }

    /// Default tolerance for floating point comparisons
    pub const DEFAULT_TOL: f64 = 1e-10;

    /// Relaxed tolerance for operations with accumulated error
    pub const RELAXED_TOL: f64 = 1e-6;

    /// 1-d CPU array from data
    pub fn arr(data: Vec<f64>) -> CpuArray {
        CpuArray::from_vec(data)
    }

    /// 0-d CPU array holding one value
    pub fn scalar(value: f64) -> CpuArray {
        CpuArray::scalar(value)
    }
}
