//! Construction and broadcasting tests
//!
//! Verifies the construction-time invariant: after `new`, every coordinate
//! field of a representation has identical shape, ndim, and size.
