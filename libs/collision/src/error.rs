//! Collision error types.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The kinds of shapes provided by this crate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum ShapeKind {
    /// A one-dimensional [`Range`](crate::range::Range).
    Range,
    /// A two-dimensional [`Rectangle`](crate::rectangle::Rectangle).
    Rectangle,
    /// A three-dimensional [`Cuboid`](crate::cuboid::Cuboid).
    Cuboid,
}

impl Display for ShapeKind {
    /// Displays the plural, lowercase name of the shape kind.
    ///
    /// # Example
    ///
    /// ```
    /// # use collision::error::ShapeKind;
    /// assert_eq!(format!("{}", ShapeKind::Cuboid), "cuboids");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Range => write!(f, "ranges"),
            Self::Rectangle => write!(f, "rectangles"),
            Self::Cuboid => write!(f, "cuboids"),
        }
    }
}

/// An error produced by a collision query.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An overlap was requested between two shapes that do not collide.
    ///
    /// Callers are expected to check [`Collide::collide`](crate::collide::Collide::collide)
    /// first, or use [`Overlap::try_overlap`](crate::collide::Overlap::try_overlap).
    #[error("{0} do not collide")]
    NoCollision(ShapeKind),
}

/// A [`Result`](std::result::Result) whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
