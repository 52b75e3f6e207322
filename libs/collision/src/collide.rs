//! Collision and overlap of geometric objects.

use crate::error::Result;

/// Trait for testing whether this shape collides with another geometric object.
pub trait Collide<T: ?Sized = Self> {
    /// Returns `true` if this shape and `other` overlap with nonzero extent.
    ///
    /// Shapes that merely touch along a shared boundary do not collide.
    fn collide(&self, other: &T) -> bool;
}

/// Trait for calculating the exact overlap region with another geometric object.
pub trait Overlap<T: ?Sized = Self>: Collide<T> {
    /// The type of the output shape representing the overlap.
    type Output;

    /// Calculates the overlap of this shape with `other`.
    ///
    /// Returns [`Error::NoCollision`](crate::error::Error::NoCollision)
    /// if the shapes do not collide.
    fn overlap(&self, other: &T) -> Result<Self::Output>;

    /// Calculates the overlap of this shape with `other`.
    ///
    /// If the shapes do not collide, returns [`None`].
    fn try_overlap(&self, other: &T) -> Option<Self::Output> {
        self.overlap(other).ok()
    }
}
