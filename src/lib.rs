//! Inset outlines of closed polygons.
//!
//! [`InsetPath2D`] displaces every edge of a polygon by a padding distance
//! and intersects neighbouring displaced edges to find the inset vertices.
//! [`BorderOutline2D`] pairs the boundary with its inset as path data for a
//! bordered shape.

pub mod error;
pub mod export;
pub mod math;
pub mod operations;

pub use error::{GeometryError, InsetError, OperationError, Result};
pub use export::{to_path_data, PathClose};
pub use math::{Point2, Vector2, Vector2D};
pub use operations::offset::{
    BorderOutline2D, BorderPaths, InsetMethod, InsetOrientation, InsetPath2D,
};
