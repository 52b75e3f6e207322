//! An import prelude that re-exports commonly used items.

pub use crate::axis::{Axes, Axis};
pub use crate::collide::{Collide, Overlap};
pub use crate::contains::Contains;
pub use crate::cuboid::Cuboid;
pub use crate::error::{Error, ShapeKind};
pub use crate::range::Range;
pub use crate::rectangle::Rectangle;
