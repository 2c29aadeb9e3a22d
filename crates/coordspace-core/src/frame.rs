//! Coordinate frame protocol stubs
//!
//! Frame transforms (distinct from representation transforms) are expected
//! to consume a coordinate plus a frame tag and return another coordinate,
//! using the same two-type dispatch pattern as the representation registry:
//! a sibling table keyed by (source frame, destination frame). Only the
//! seam is specified here; no frames are implemented.

use crate::builtin::AnyCoordinate;
use crate::error::Result;
use crate::ops::Backend;

/// A coordinate frame: a named context representation data is expressed in
pub trait CoordinateFrame {
    /// The name of the frame
    fn name(&self) -> &str;

    /// The names of the fields the frame expects of its representations
    fn frame_fields(&self) -> &[&'static str];
}

/// Signature of a frame-to-frame transform
pub type FrameTransformFn<B, F> = fn(&AnyCoordinate<B>, &F) -> Result<AnyCoordinate<B>>;

/// Lookup contract for a frame transform table, keyed by (source,
/// destination) frame identifiers like the representation registry
pub trait FrameTransformLookup<B: Backend, F: CoordinateFrame> {
    /// Tag type identifying a frame in the table
    type FrameId: Copy + Eq;

    fn lookup(&self, from: Self::FrameId, to: Self::FrameId) -> Option<FrameTransformFn<B, F>>;

    fn contains(&self, from: Self::FrameId, to: Self::FrameId) -> bool {
        self.lookup(from, to).is_some()
    }
}
