use super::{Point2, TOLERANCE};

/// Rotational order in which a polygon's vertices are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Positive signed area.
    CounterClockwise,
    /// Negative signed area.
    Clockwise,
    /// Zero area (collinear or fewer than 3 points).
    Degenerate,
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = next_index(i, n);
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Classifies the winding of a polygon from its signed area.
#[must_use]
pub fn winding(points: &[Point2]) -> Winding {
    let area = signed_area_2d(points);
    if area > TOLERANCE {
        Winding::CounterClockwise
    } else if area < -TOLERANCE {
        Winding::Clockwise
    } else {
        Winding::Degenerate
    }
}

/// Index of the vertex after `i` in a cyclic sequence of length `n`.
#[must_use]
pub fn next_index(i: usize, n: usize) -> usize {
    if i + 1 >= n {
        0
    } else {
        i + 1
    }
}

/// Index of the vertex before `i` in a cyclic sequence of length `n`.
#[must_use]
pub fn previous_index(i: usize, n: usize) -> usize {
    if i == 0 {
        n - 1
    } else {
        i - 1
    }
}
