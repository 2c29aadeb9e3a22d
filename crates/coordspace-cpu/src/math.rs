//! Element-wise math operations for the CPU backend

use coordspace_core::{MathOps, Result};

use crate::broadcast::broadcast_binary_op;
use crate::{CpuArray, CpuBackend};

macro_rules! impl_unary_op {
    ($name:ident, $op:expr) => {
        fn $name(arr: &CpuArray) -> CpuArray {
            CpuArray::from_ndarray(arr.as_ndarray().mapv($op))
        }
    };
}

macro_rules! impl_binary_op {
    ($name:ident, $op:expr) => {
        fn $name(a: &CpuArray, b: &CpuArray) -> Result<CpuArray> {
            Ok(CpuArray::from_ndarray(broadcast_binary_op(
                a.as_ndarray(),
                b.as_ndarray(),
                $op,
            )?))
        }
    };
}

impl MathOps for CpuBackend {
    type Array = CpuArray;

    impl_unary_op!(sin, |x: f64| x.sin());
    impl_unary_op!(cos, |x: f64| x.cos());
    impl_unary_op!(exp, |x: f64| x.exp());
    impl_unary_op!(log, |x: f64| x.ln());
    impl_unary_op!(sqrt, |x: f64| x.sqrt());
    impl_unary_op!(square, |x: f64| x * x);

    impl_binary_op!(atan2, |y: f64, x: f64| y.atan2(x));
    impl_binary_op!(hypot, |a: f64, b: f64| a.hypot(b));
    impl_binary_op!(add, |a, b| a + b);
    impl_binary_op!(mul, |a, b| a * b);
}
