//! Axis-aligned cuboids.

use serde::{Deserialize, Serialize};

use crate::axis::{Axes, Axis};
use crate::collide::{Collide, Overlap};
use crate::contains::Contains;
use crate::error::{Error, Result, ShapeKind};
use crate::range::Range;

/// An axis-aligned cuboid, specified by an origin and extents.
///
/// The cuboid spans the [`Range`]s `(x, x + width)`, `(y, y + height)`,
/// and `(z, z + depth)`.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cuboid {
    /// The x-coordinate of the origin.
    pub x: f64,
    /// The y-coordinate of the origin.
    pub y: f64,
    /// The z-coordinate of the origin.
    pub z: f64,
    /// The extent along the x-axis.
    pub width: f64,
    /// The extent along the y-axis.
    pub height: f64,
    /// The extent along the z-axis.
    pub depth: f64,
}

impl Cuboid {
    /// Creates a cuboid from an origin and extents.
    pub const fn new(x: f64, y: f64, z: f64, width: f64, height: f64, depth: f64) -> Self {
        Self {
            x,
            y,
            z,
            width,
            height,
            depth,
        }
    }

    /// Creates a cuboid covering the given x, y, and z [`Range`]s.
    ///
    /// The origin is placed at the minimum of each range.
    pub fn from_ranges(x: Range, y: Range, z: Range) -> Self {
        Self::new(
            x.min(),
            y.min(),
            z.min(),
            x.length(),
            y.length(),
            z.length(),
        )
    }

    /// Returns the [`Range`] covered along the x-axis.
    #[inline]
    pub fn x_range(&self) -> Range {
        Range::new(self.x, self.x + self.width)
    }

    /// Returns the [`Range`] covered along the y-axis.
    #[inline]
    pub fn y_range(&self) -> Range {
        Range::new(self.y, self.y + self.height)
    }

    /// Returns the [`Range`] covered along the z-axis.
    #[inline]
    pub fn z_range(&self) -> Range {
        Range::new(self.z, self.z + self.depth)
    }

    /// Returns the [`Range`] covered along `axis`.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let cuboid = Cuboid::new(1., 2., 3., 10., 20., 30.);
    /// assert_eq!(cuboid.range(Axis::Z), Range::new(3., 33.));
    /// ```
    pub fn range(&self, axis: Axis) -> Range {
        match axis {
            Axis::X => self.x_range(),
            Axis::Y => self.y_range(),
            Axis::Z => self.z_range(),
        }
    }

    /// Returns the [`Range`]s covered along every axis.
    pub fn ranges(&self) -> Axes<Range> {
        Axes::new(self.x_range(), self.y_range(), self.z_range())
    }

    /// Returns the first axis along which this cuboid and `other` do not collide.
    ///
    /// Returns [`None`] if the cuboids collide.
    pub fn separating_axis(&self, other: &Self) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|&axis| !self.range(axis).collide(&other.range(axis)))
    }

    /// Checks if this cuboid collides with `other`.
    ///
    /// Cuboids collide when their ranges collide along all three axes.
    pub fn collide(&self, other: &Self) -> bool {
        self.separating_axis(other).is_none()
    }

    /// Returns `true` if the point `(x, y, z)` lies strictly inside this cuboid.
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        self.x_range().contains(x) && self.y_range().contains(y) && self.z_range().contains(z)
    }

    /// Calculates the region shared by this cuboid and `other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let a = Cuboid::new(0., 0., 0., 100., 200., 300.);
    /// let b = Cuboid::new(50., 40., 30., 10., 200., 300.);
    /// assert_eq!(a.overlap(&b)?, Cuboid::new(50., 40., 30., 10., 160., 270.));
    /// # Ok::<(), collision::error::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCollision`] if the cuboids do not collide.
    pub fn overlap(&self, other: &Self) -> Result<Self> {
        if let Some(axis) = self.separating_axis(other) {
            tracing::debug!(%axis, cuboid = ?self, other = ?other, "cuboids do not collide");
            return Err(Error::NoCollision(ShapeKind::Cuboid));
        }

        let x_overlap = self.x_range().overlap(&other.x_range())?;
        let y_overlap = self.y_range().overlap(&other.y_range())?;
        let z_overlap = self.z_range().overlap(&other.z_range())?;

        let overlap = Self::from_ranges(x_overlap, y_overlap, z_overlap);
        tracing::trace!(?overlap, "computed cuboid overlap");
        Ok(overlap)
    }
}

impl Collide for Cuboid {
    #[inline]
    fn collide(&self, other: &Cuboid) -> bool {
        Cuboid::collide(self, other)
    }
}

impl Overlap for Cuboid {
    type Output = Self;
    fn overlap(&self, other: &Cuboid) -> Result<Self::Output> {
        Cuboid::overlap(self, other)
    }
}

impl Contains<(f64, f64, f64)> for Cuboid {
    fn contains(&self, point: &(f64, f64, f64)) -> bool {
        Cuboid::contains(self, point.0, point.1, point.2)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::prelude::*;

    #[test]
    fn overlap_of_colliding_cuboids() {
        let cuboid = Cuboid::new(0., 0., 0., 100., 200., 300.);
        let overlap = cuboid
            .overlap(&Cuboid::new(50., 40., 30., 10., 200., 300.))
            .unwrap();

        assert_eq!(overlap.x, 50.);
        assert_eq!(overlap.y, 40.);
        assert_eq!(overlap.z, 30.);

        assert_eq!(overlap.width, 10.);
        assert_eq!(overlap.height, 160.);
        assert_eq!(overlap.depth, 270.);
    }

    #[test]
    fn separation_on_any_axis_prevents_collision() {
        let a = Cuboid::new(0., 0., 0., 10., 10., 10.);
        let apart_x = Cuboid::new(20., 0., 0., 10., 10., 10.);
        let apart_y = Cuboid::new(0., 20., 0., 10., 10., 10.);
        let apart_z = Cuboid::new(0., 0., 10., 10., 10., 10.);

        assert_eq!(a.separating_axis(&apart_x), Some(Axis::X));
        assert_eq!(a.separating_axis(&apart_y), Some(Axis::Y));
        assert_eq!(a.separating_axis(&apart_z), Some(Axis::Z));
        for other in [apart_x, apart_y, apart_z] {
            assert!(!a.collide(&other));
            assert!(!other.collide(&a));
            assert_eq!(
                a.overlap(&other),
                Err(Error::NoCollision(ShapeKind::Cuboid))
            );
        }
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Cuboid::new(0., 0., 0., 100., 200., 300.);
        let b = Cuboid::new(60., 240., 330., -10., -200., -300.);
        assert!(a.collide(&b));
        assert_eq!(a.overlap(&b).unwrap(), b.overlap(&a).unwrap());
        assert_eq!(
            a.overlap(&b).unwrap(),
            Cuboid::new(50., 40., 30., 10., 160., 270.)
        );
    }

    #[test]
    fn ranges_by_axis() {
        let cuboid = Cuboid::new(1., 2., 3., 4., 5., 6.);
        let ranges = cuboid.ranges();
        for axis in Axis::ALL {
            assert_eq!(ranges[axis], cuboid.range(axis));
        }
        assert_eq!(ranges[Axis::Y], Range::new(2., 7.));
    }

    #[test]
    fn contains_points_strictly_inside() {
        let cuboid = Cuboid::new(0., 0., 0., 10., 10., 10.);
        assert!(cuboid.contains(5., 5., 5.));
        assert!(!cuboid.contains(5., 5., 10.));
        assert!(!cuboid.contains(0., 5., 5.));
        assert!(Contains::contains(&cuboid, &(1., 1., 1.)));
    }

    #[test]
    fn generic_callers_see_the_same_result() {
        fn overlap_of<S: Overlap<Output = S>>(a: &S, b: &S) -> Option<S> {
            a.try_overlap(b)
        }
        let a = Cuboid::new(0., 0., 0., 2., 2., 2.);
        let b = Cuboid::new(1., 1., 1., 2., 2., 2.);
        assert_eq!(overlap_of(&a, &b), Some(Cuboid::new(1., 1., 1., 1., 1., 1.)));
        assert_eq!(
            overlap_of(&Range::new(0., 1.), &Range::new(2., 3.)),
            None
        );
    }
}
