//! Coordinate space tests
