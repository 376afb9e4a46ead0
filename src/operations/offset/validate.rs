use tracing::trace;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::angle_2d::try_angle_between;
use crate::math::polygon_2d::{next_index, previous_index};
use crate::math::{Point2, Vector2D, TOLERANCE};

/// Checks that a polygon and padding can be inset without producing
/// non-finite vertices.
///
/// Checks run in order and the first failure is reported: vertex count,
/// padding, finite coordinates, zero-length edges, then parallel edges at
/// each vertex.
///
/// # Errors
///
/// - `OperationError::InvalidInput` for fewer than 3 vertices, a negative or
///   non-finite padding, or non-finite coordinates
/// - `GeometryError::ZeroLengthEdge` with the index of the first vertex of
///   the collapsed edge
/// - `GeometryError::DegenerateRay` if a corner's rays have zero length
/// - `GeometryError::ParallelEdges` with the index of the vertex whose
///   incoming and outgoing edges are parallel
pub fn validate_polygon(points: &[Point2], padding: f64) -> Result<()> {
    let n = points.len();
    if n < 3 {
        return Err(OperationError::InvalidInput(format!(
            "at least 3 vertices are required for an inset, got {n}"
        ))
        .into());
    }

    if !padding.is_finite() || padding < 0.0 {
        return Err(OperationError::InvalidInput(format!(
            "padding must be finite and non-negative, got {padding}"
        ))
        .into());
    }

    if let Some(i) = points
        .iter()
        .position(|p| !p.x.is_finite() || !p.y.is_finite())
    {
        return Err(OperationError::InvalidInput(format!(
            "vertex {i} has non-finite coordinates ({}, {})",
            points[i].x, points[i].y
        ))
        .into());
    }

    for i in 0..n {
        let j = next_index(i, n);
        if (points[j] - points[i]).norm() < TOLERANCE {
            return Err(GeometryError::ZeroLengthEdge { index: i }.into());
        }
    }

    for i in 0..n {
        let prev = points[previous_index(i, n)];
        let curr = points[i];
        let next = points[next_index(i, n)];
        let corner = try_angle_between(&prev, &curr, &next)?;
        trace!(index = i, corner, "validated corner angle");
        let incoming = (curr - prev).try_unit()?;
        let outgoing = (next - curr).try_unit()?;
        if incoming.perp(&outgoing).abs() < TOLERANCE {
            return Err(GeometryError::ParallelEdges { index: i }.into());
        }
    }

    Ok(())
}
