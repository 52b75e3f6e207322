//! Coordinate axes: x, y, or z.

use std::fmt::Display;

use array_map::{ArrayMap, Indexable};
use serde::{Deserialize, Serialize};

/// An enumeration of coordinate axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[repr(u8)]
#[derive(Indexable)]
pub enum Axis {
    /// The x-axis, along which width is measured.
    X,
    /// The y-axis, along which height is measured.
    Y,
    /// The z-axis, along which depth is measured.
    Z,
}

impl Axis {
    /// All axes, in the order they are tested for separation.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl Display for Axis {
    /// Displays the axis name in lowercase.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::prelude::*;
    /// assert_eq!(format!("{}", Axis::X), "x");
    /// assert_eq!(format!("{}", Axis::Z), "z");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// An association of a value with type `T` to each of the three [`Axis`] values.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct Axes<T> {
    inner: ArrayMap<Axis, T, 3>,
}

impl<T> Axes<T>
where
    T: Copy,
{
    /// Creates a new [`Axes`] with `value` associated with every axis.
    pub const fn uniform(value: T) -> Self {
        Self {
            inner: ArrayMap::new([value; 3]),
        }
    }
}

impl<T> Axes<T> {
    /// Creates a new [`Axes`] with the provided values for each axis.
    pub const fn new(x: T, y: T, z: T) -> Self {
        // The ordering of array elements must match the ordering of variants in [`Axis`].
        Self {
            inner: ArrayMap::new([x, y, z]),
        }
    }

    /// Maps a function over each axis, returning a new [`Axes`].
    pub fn map<B>(self, f: impl FnMut(&Axis, T) -> B) -> Axes<B> {
        Axes {
            inner: self.inner.map(f),
        }
    }
}

impl<T> std::ops::Index<Axis> for Axes<T> {
    type Output = T;
    fn index(&self, index: Axis) -> &Self::Output {
        self.inner.index(index)
    }
}

impl<T> std::ops::IndexMut<Axis> for Axes<T> {
    fn index_mut(&mut self, index: Axis) -> &mut Self::Output {
        self.inner.index_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_index_matches_constructor_order() {
        let axes = Axes::new(1, 2, 3);
        assert_eq!(axes[Axis::X], 1);
        assert_eq!(axes[Axis::Y], 2);
        assert_eq!(axes[Axis::Z], 3);
    }

    #[test]
    fn axes_map_and_mutate() {
        let mut axes = Axes::uniform(2).map(|axis, v| v * (*axis as i32 + 1));
        assert_eq!(axes, Axes::new(2, 4, 6));
        axes[Axis::Y] = 0;
        assert_eq!(axes[Axis::Y], 0);
    }
}
