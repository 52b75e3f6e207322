//! Axis-aligned collision and overlap predicates.
//!
//! Shapes are built from independent one-dimensional [ranges](crate::range::Range).
//! Two shapes collide when their ranges collide along every axis, and their
//! overlap is the shape assembled from the per-axis range overlaps.
//!
//! # Examples
//!
//! Find the overlap of two [rectangles](crate::rectangle::Rectangle):
//!
//! ```
//! # use collision::prelude::*;
//! let a = Rectangle::new(0., 0., 50., 20.);
//! let b = Rectangle::new(30., 10., 30., 40.);
//! if a.collide(&b) {
//!     assert_eq!(a.overlap(&b)?, Rectangle::new(30., 10., 20., 10.));
//! }
//! # Ok::<(), collision::error::Error>(())
//! ```
#![warn(missing_docs)]

pub mod axis;
pub mod collide;
pub mod contains;
pub mod cuboid;
pub mod error;
pub mod prelude;
pub mod range;
pub mod rectangle;
