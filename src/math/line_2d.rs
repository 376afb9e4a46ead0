//! Lines in slope/intercept form.
//!
//! A line is carried as a point on it, its slope `m` and a coefficient `c`.
//! For finite slopes `c` is the y-intercept of `y = m * x + c`. For vertical
//! lines (infinite or NaN slope) `c` is `y - x` of the anchoring point, which
//! [`line_intersection`] decodes with the matching convention.

use super::{Point2, Vector2};

/// Slope of the line through `p1` and `p2`.
///
/// Infinite for a vertical pair and NaN when `p1 == p2`.
#[must_use]
pub fn slope(p1: &Point2, p2: &Point2) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}

/// Coefficient `c` of the line through `(x, y)` with the given slope.
///
/// Returns `y - x * slope` for a finite slope and `y - x` otherwise.
#[must_use]
pub fn y_intercept(x: f64, y: f64, slope: f64) -> f64 {
    if slope.is_finite() {
        y - x * slope
    } else {
        y - x
    }
}

/// Intersects two lines given as `(position, slope, coefficient)` triples.
///
/// Cases are tried in order: vertical against horizontal (either way round),
/// vertical against a sloped line (either way round), then two finite slopes.
/// Equal finite slopes divide by zero and produce non-finite coordinates.
#[must_use]
pub fn line_intersection(
    first_position: &Point2,
    first_slope: f64,
    second_position: &Point2,
    second_slope: f64,
    first_c: f64,
    second_c: f64,
) -> Point2 {
    let first_vertical = !first_slope.is_finite();
    let second_vertical = !second_slope.is_finite();

    if first_vertical && second_slope == 0.0 {
        Point2::new(first_position.x, second_c)
    } else if second_vertical && first_slope == 0.0 {
        Point2::new(second_position.x, first_c)
    } else if first_vertical {
        let x = (first_position.x + first_c - second_c) / second_slope;
        Point2::new(x, first_c)
    } else if second_vertical {
        let x = (second_position.x + second_c - first_c) / first_slope;
        Point2::new(x, second_c)
    } else {
        let x = (second_c - first_c) / (first_slope - second_slope);
        Point2::new(x, first_slope * x + first_c)
    }
}

/// Intersection of the lines `p1 + t * d1` and `p2 + u * d2`.
///
/// No parallel check is made: parallel directions produce non-finite
/// coordinates.
#[must_use]
pub fn parametric_intersection(p1: &Point2, d1: &Vector2, p2: &Point2, d2: &Vector2) -> Point2 {
    let cross = d1.x * d2.y - d1.y * d2.x;
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    p1 + d1 * t
}
