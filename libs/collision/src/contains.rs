//! Traits for checking whether a shape contains a point.

/// Provides information on whether a shape contains a point.
pub trait Contains<P> {
    /// Returns `true` if `point` lies strictly inside this shape.
    ///
    /// Points on the boundary are not contained.
    fn contains(&self, point: &P) -> bool;
}
