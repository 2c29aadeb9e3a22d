//! Generic dispatch function tests
//!
//! The free functions `equal`, `not_equal`, and `broadcast_to` dispatch on
//! the runtime kind of their first argument and fall back to the
//! cooperative sentinel for combinations nothing claims.
