//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::collide::{Collide, Overlap};
use crate::contains::Contains;
use crate::error::{Error, Result, ShapeKind};
use crate::range::Range;

/// An axis-aligned rectangle, specified by an origin and extents.
///
/// The rectangle spans the [`Range`]s `(x, x + width)` and `(y, y + height)`.
/// Negative extents are allowed and flip the corresponding range.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rectangle {
    /// The x-coordinate of the origin.
    pub x: f64,
    /// The y-coordinate of the origin.
    pub y: f64,
    /// The extent along the x-axis.
    pub width: f64,
    /// The extent along the y-axis.
    pub height: f64,
}

impl Rectangle {
    /// Creates a rectangle from an origin and extents.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let rect = Rectangle::new(4., 5., 6., 7.);
    /// assert_eq!(rect.x, 4.);
    /// assert_eq!(rect.y, 5.);
    /// assert_eq!(rect.width, 6.);
    /// assert_eq!(rect.height, 7.);
    /// ```
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle covering the given x and y [`Range`]s.
    ///
    /// The origin is placed at the minimum of each range.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let rect = Rectangle::from_ranges(Range::new(30., 10.), Range::new(5., 15.));
    /// assert_eq!(rect, Rectangle::new(10., 5., 20., 10.));
    /// ```
    pub fn from_ranges(x: Range, y: Range) -> Self {
        Self::new(x.min(), y.min(), x.length(), y.length())
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

    fn axis_ranges(&self) -> [(Axis, Range); 2] {
        [(Axis::X, self.x_range()), (Axis::Y, self.y_range())]
    }

    /// Returns the first axis along which this rectangle and `other` do not collide.
    ///
    /// Returns [`None`] if the rectangles collide.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let a = Rectangle::new(0., 0., 100., 20.);
    /// let b = Rectangle::new(0., 40., 20., 20.);
    /// assert_eq!(a.separating_axis(&b), Some(Axis::Y));
    /// ```
    pub fn separating_axis(&self, other: &Self) -> Option<Axis> {
        self.axis_ranges()
            .into_iter()
            .zip(other.axis_ranges())
            .find(|((_, a), (_, b))| !a.collide(b))
            .map(|((axis, _), _)| axis)
    }

    /// Checks if this rectangle collides with `other`.
    ///
    /// Rectangles collide when their ranges collide along both axes.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let a = Rectangle::new(0., 0., 100., 20.);
    /// assert!(a.collide(&Rectangle::new(10., 10., 20., 20.)));
    /// assert!(!a.collide(&Rectangle::new(0., 40., 20., 20.)));
    /// ```
    pub fn collide(&self, other: &Self) -> bool {
        self.separating_axis(other).is_none()
    }

    /// Returns `true` if the point `(x, y)` lies strictly inside this rectangle.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let rect = Rectangle::new(1., 1., 10., 20.);
    /// assert!(rect.contains(2., 2.));
    /// assert!(!rect.contains(50., 2.));
    /// ```
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x_range().contains(x) && self.y_range().contains(y)
    }

    /// Calculates the region shared by this rectangle and `other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let a = Rectangle::new(0., 0., 50., 20.);
    /// let b = Rectangle::new(30., 10., 30., 40.);
    /// assert_eq!(a.overlap(&b)?, Rectangle::new(30., 10., 20., 10.));
    /// # Ok::<(), collision::error::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCollision`] if the rectangles do not collide.
    pub fn overlap(&self, other: &Self) -> Result<Self> {
        if let Some(axis) = self.separating_axis(other) {
            tracing::debug!(%axis, rect = ?self, other = ?other, "rectangles do not collide");
            return Err(Error::NoCollision(ShapeKind::Rectangle));
        }

        let x_overlap = self.x_range().overlap(&other.x_range())?;
        let y_overlap = self.y_range().overlap(&other.y_range())?;

        let overlap = Self::from_ranges(x_overlap, y_overlap);
        tracing::trace!(?overlap, "computed rectangle overlap");
        Ok(overlap)
    }
}

impl Collide for Rectangle {
    #[inline]
    fn collide(&self, other: &Rectangle) -> bool {
        Rectangle::collide(self, other)
    }
}

impl Overlap for Rectangle {
    type Output = Self;
    fn overlap(&self, other: &Rectangle) -> Result<Self::Output> {
        Rectangle::overlap(self, other)
    }
}

impl Contains<(f64, f64)> for Rectangle {
    fn contains(&self, point: &(f64, f64)) -> bool {
        Rectangle::contains(self, point.0, point.1)
    }
}
