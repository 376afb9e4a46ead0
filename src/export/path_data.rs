//! Serialization of vertex sequences into vector-path data strings.

use crate::math::Point2;

/// Whether a closing segment is appended to the path data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathClose {
    /// The contour is left implicitly closed.
    #[default]
    Open,
    /// A trailing `Z` closes the contour explicitly.
    Closed,
}

/// Serializes points as `M{x} {y}` followed by one `L {x} {y}` per later point.
///
/// An empty slice yields an empty string.
#[must_use]
pub fn to_path_data(points: &[Point2], close: PathClose) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    let mut path = format!("M{} {}", first.x, first.y);
    for p in rest {
        path.push_str(&format!("L {} {}", p.x, p.y));
    }
    if close == PathClose::Closed {
        path.push('Z');
    }
    path
}
