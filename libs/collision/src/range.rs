//! A one-dimensional range.
//!
//! A range is bounded by `from` and `to`, which may be given in either order.
//! Every operation normalizes its operands first, so `Range::new(7., 3.)` and
//! `Range::new(3., 7.)` behave identically.
//!
//! Both bounds are exclusive: ranges that only share an endpoint do not collide,
//! and a value equal to either bound is not contained.
use serde::{Deserialize, Serialize};

use crate::collide::{Collide, Overlap};
use crate::contains::Contains;
use crate::error::{Error, Result, ShapeKind};

/// An interval of coordinates in one dimension.
///
/// The bounds are not required to be ordered.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Range {
    /// The first bound.
    pub from: f64,
    /// The second bound.
    pub to: f64,
}

/// Orders two bounds so that the smaller one comes first.
#[inline]
fn minmax(one: f64, two: f64) -> (f64, f64) {
    if one > two {
        (two, one)
    } else {
        (one, two)
    }
}

impl Range {
    /// Creates a new [`Range`] between two bounds.
    ///
    /// The bounds are stored as given; no ordering is enforced.
    pub const fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    /// Gets the length of the range.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// assert_eq!(Range::new(3., 7.).length(), 4.);
    /// assert_eq!(Range::new(7., 3.).length(), 4.);
    /// ```
    #[inline]
    pub fn length(&self) -> f64 {
        (self.to - self.from).abs()
    }

    /// Gets the smaller of the two bounds.
    #[inline]
    pub fn min(&self) -> f64 {
        minmax(self.from, self.to).0
    }

    /// Gets the larger of the two bounds.
    #[inline]
    pub fn max(&self) -> f64 {
        minmax(self.from, self.to).1
    }

    /// Returns a copy of this range with `from <= to`.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// assert_eq!(Range::new(7., 3.).normalized(), Range::new(3., 7.));
    /// ```
    pub fn normalized(&self) -> Self {
        let (from, to) = minmax(self.from, self.to);
        Self { from, to }
    }

    /// Returns `true` if `value` lies strictly between the bounds of this range.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let range = Range::new(10., 0.);
    /// assert!(range.contains(5.));
    /// assert!(!range.contains(0.));
    /// assert!(!range.contains(10.));
    /// ```
    pub fn contains(&self, value: f64) -> bool {
        let (min, max) = minmax(self.from, self.to);
        value > min && value < max
    }

    /// Checks if this range overlaps `other` with nonzero length.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// assert!(Range::new(0., 5.).collide(&Range::new(4., 11.)));
    /// assert!(!Range::new(1., 4.).collide(&Range::new(4., 7.)));
    /// ```
    pub fn collide(&self, other: &Self) -> bool {
        let norm_self = self.normalized();
        let norm_other = other.normalized();
        norm_self.to > norm_other.from && norm_other.to > norm_self.from
    }

    /// Calculates the region shared by this range and `other`.
    ///
    /// The returned range is normalized.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// let overlap = Range::new(7., 3.).overlap(&Range::new(5., 0.))?;
    /// assert_eq!(overlap, Range::new(3., 5.));
    /// # Ok::<(), collision::error::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCollision`] if the ranges do not collide.
    pub fn overlap(&self, other: &Self) -> Result<Self> {
        if !self.collide(other) {
            tracing::debug!(range = ?self, other = ?other, "ranges do not collide");
            return Err(Error::NoCollision(ShapeKind::Range));
        }

        let norm_self = self.normalized();
        let norm_other = other.normalized();

        Ok(Self::new(
            norm_self.from.max(norm_other.from),
            norm_self.to.min(norm_other.to),
        ))
    }
}

impl Collide for Range {
    #[inline]
    fn collide(&self, other: &Range) -> bool {
        Range::collide(self, other)
    }
}

impl Overlap for Range {
    type Output = Self;
    fn overlap(&self, other: &Range) -> Result<Self::Output> {
        Range::overlap(self, other)
    }
}

impl Contains<f64> for Range {
    fn contains(&self, point: &f64) -> bool {
        Range::contains(self, *point)
    }
}

impl From<(f64, f64)> for Range {
    #[inline]
    fn from(tup: (f64, f64)) -> Self {
        Self::new(tup.0, tup.1)
    }
}

impl From<Range> for (f64, f64) {
    #[inline]
    fn from(r: Range) -> Self {
        (r.from, r.to)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use crate::prelude::*;

    #[test]
    fn disjoint_ranges_do_not_collide() {
        assert!(!Range::new(0., 5.).collide(&Range::new(7., 10.)));
        assert!(!Range::new(5., 3.).collide(&Range::new(1., 2.)));
    }

    #[test]
    fn intersecting_ranges_collide() {
        assert!(Range::new(0., 5.).collide(&Range::new(4., 11.)));
    }

    #[test]
    fn covering_range_collides_either_way() {
        assert!(Range::new(0., 20.).collide(&Range::new(4., 11.)));
        assert!(Range::new(4., 11.).collide(&Range::new(0., 20.)));
    }

    #[test]
    fn touching_ranges_do_not_collide() {
        assert!(!Range::new(1., 4.).collide(&Range::new(4., 7.)));
        assert!(!Range::new(4., 7.).collide(&Range::new(1., 4.)));
        assert!(!Range::new(4., 1.).collide(&Range::new(7., 4.)));
    }

    #[test]
    fn reversed_bounds_do_not_change_collision() {
        assert!(Range::new(4., 1.).collide(&Range::new(3., 5.)));
        assert!(Range::new(1., 4.).collide(&Range::new(5., 3.)));
    }

    #[test]
    fn collision_is_symmetric() {
        let ranges = [
            Range::new(0., 5.),
            Range::new(4., 11.),
            Range::new(5., 0.),
            Range::new(5., 9.),
            Range::new(-3., -1.),
            Range::new(2., 2.),
        ];
        for a in ranges {
            for b in ranges {
                assert_eq!(a.collide(&b), b.collide(&a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn overlap_is_independent_of_operand_order() {
        for (a, b) in [
            (Range::new(0., 5.), Range::new(3., 7.)),
            (Range::new(3., 7.), Range::new(0., 5.)),
            (Range::new(7., 3.), Range::new(0., 5.)),
            (Range::new(7., 3.), Range::new(5., 0.)),
        ] {
            assert_eq!(a.overlap(&b).unwrap(), Range::new(3., 5.));
            assert_eq!(b.overlap(&a).unwrap(), Range::new(3., 5.));
        }
    }

    #[test]
    fn overlap_of_nested_ranges_is_inner_range() {
        let overlap = Range::new(20., 0.).overlap(&Range::new(4., 11.)).unwrap();
        assert_eq!(overlap, Range::new(4., 11.));
        assert_eq!(overlap.length(), 7.);
    }

    #[test]
    fn overlap_fails_without_collision() {
        assert_eq!(
            Range::new(0., 7.).overlap(&Range::new(10., 12.)),
            Err(Error::NoCollision(ShapeKind::Range))
        );
        assert!(Range::new(1., 4.).overlap(&Range::new(4., 7.)).is_err());
        assert_eq!(Range::new(0., 7.).try_overlap(&Range::new(10., 12.)), None);
    }

    #[test]
    fn contains_excludes_bounds() {
        let range = Range::new(1., 4.);
        assert!(range.contains(2.5));
        assert!(!range.contains(1.));
        assert!(!range.contains(4.));
        assert!(!range.contains(0.));
        assert!(Range::new(4., 1.).contains(2.5));
        assert!(Contains::contains(&range, &3.));
    }

    #[test]
    fn normalized_bounds() {
        let range = Range::from((9., -1.));
        assert_eq!(range.min(), -1.);
        assert_eq!(range.max(), 9.);
        assert_eq!(range.length(), 10.);
        assert_eq!(<(f64, f64)>::from(range.normalized()), (-1., 9.));
    }
}
