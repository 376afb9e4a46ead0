use tracing::{debug, trace, warn};

use super::validate::validate_polygon;
use crate::error::{OperationError, Result};
use crate::math::angle_2d::{angle_between, degrees_to_radians, match_sign, sign_of};
use crate::math::line_2d::{line_intersection, parametric_intersection, slope, y_intercept};
use crate::math::polygon_2d::{next_index, previous_index, winding, Winding};
use crate::math::{Point2, Vector2, Vector2D, TOLERANCE};

/// How each inset vertex is derived from its two adjacent edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsetMethod {
    /// Per-axis offsets from the edge angle (cos/sin), sign-matched against the
    /// rotated edge direction, then slope/intercept line intersection.
    ///
    /// Where a vertical edge meets a sloped (neither horizontal nor vertical)
    /// edge, the intercept encoding of vertical lines only resolves the exact
    /// corner when the vertex lies on `x = 0`.
    #[default]
    Trigonometric,
    /// Shift each edge line along its unit normal and intersect consecutive
    /// shifted lines in parametric form.
    EdgeNormal,
}

/// Which side of each edge the padding is applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsetOrientation {
    /// Always push along the edge direction rotated with
    /// [`Vector2D::rotate_anticlockwise_90`]. Inward only for clockwise
    /// polygons (negative signed area); outward otherwise.
    #[default]
    AntiClockwiseNormal,
    /// Pick the rotation from the polygon's winding so the offset is inward
    /// for either vertex order.
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RotationSense {
    AntiClockwise,
    Clockwise,
}

impl RotationSense {
    fn rotate(self, v: &Vector2) -> Vector2 {
        match self {
            Self::AntiClockwise => v.rotate_anticlockwise_90(),
            Self::Clockwise => v.rotate_clockwise_90(),
        }
    }
}

/// Computes the inset outline of a closed polygon.
///
/// Every output vertex corresponds by index to an input vertex and lies on
/// the intersection of the two adjacent edge lines, each displaced by
/// `padding` to one side.
///
/// # Sign Convention
///
/// The side is fixed by [`InsetOrientation`]. With the default, the sample
/// rectangle `(0,0) (0,1000) (800,1000) (800,0)` is inset.
#[derive(Debug, Clone)]
pub struct InsetPath2D {
    points: Vec<Point2>,
    padding: f64,
    method: InsetMethod,
    orientation: InsetOrientation,
}

impl InsetPath2D {
    /// Creates a new inset operation with the default method and orientation.
    #[must_use]
    pub fn new(points: Vec<Point2>, padding: f64) -> Self {
        Self {
            points,
            padding,
            method: InsetMethod::default(),
            orientation: InsetOrientation::default(),
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: InsetMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: InsetOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Executes the inset without validating the input.
    ///
    /// Degenerate input (coincident consecutive vertices, parallel adjacent
    /// edges) is not rejected: the affected output vertices come out as NaN
    /// or infinite coordinates. Fewer than 3 points are returned unchanged,
    /// as is any polygon when `padding` is zero. The sign of `padding` is
    /// ignored; the side is chosen by the orientation alone.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        self.compute(false)
    }

    /// Validates the input, then executes the inset.
    ///
    /// With [`InsetMethod::Trigonometric`], vertices where a vertical edge
    /// meets a sloped edge are computed with the edge-normal construction,
    /// since the slope/intercept route does not place them on both shifted
    /// edge lines.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` for fewer than 3 vertices, non-finite
    ///   coordinates, or a negative or non-finite padding
    /// - `GeometryError::ZeroLengthEdge` if two consecutive vertices coincide
    /// - `GeometryError::ParallelEdges` if the edges at a vertex are parallel
    /// - `OperationError::NonFiniteVertex` if a computed vertex is still not finite
    pub fn try_execute(&self) -> Result<Vec<Point2>> {
        validate_polygon(&self.points, self.padding)
            .inspect_err(|err| debug!(%err, "inset input rejected"))?;

        let inset = self.compute(true);
        if let Some(index) = inset.iter().position(|p| !is_finite(p)) {
            return Err(OperationError::NonFiniteVertex { index }.into());
        }
        Ok(inset)
    }

    fn compute(&self, exact_vertical_corners: bool) -> Vec<Point2> {
        let n = self.points.len();
        if n < 3 {
            warn!(vertices = n, "inset needs at least 3 vertices, returning input");
            return self.points.clone();
        }

        let padding = self.padding.abs();
        if padding < TOLERANCE {
            return self.points.clone();
        }

        let sense = self.rotation_sense();
        debug!(
            vertices = n,
            padding,
            method = ?self.method,
            ?sense,
            "computing inset path"
        );

        (0..n)
            .map(|i| {
                let prev = &self.points[previous_index(i, n)];
                let curr = &self.points[i];
                let next = &self.points[next_index(i, n)];
                let vertex = match self.method {
                    InsetMethod::Trigonometric
                        if exact_vertical_corners
                            && vertical_meets_sloped(prev, curr, next) =>
                    {
                        debug!(index = i, "vertical edge meets sloped edge, using edge normals");
                        edge_normal_vertex(prev, curr, next, padding, sense)
                    }
                    InsetMethod::Trigonometric => {
                        trigonometric_vertex(prev, curr, next, padding, sense)
                    }
                    InsetMethod::EdgeNormal => edge_normal_vertex(prev, curr, next, padding, sense),
                };
                if is_finite(&vertex) {
                    trace!(index = i, x = vertex.x, y = vertex.y, "inset vertex");
                } else {
                    warn!(index = i, x = vertex.x, y = vertex.y, "non-finite inset vertex");
                }
                vertex
            })
            .collect()
    }

    fn rotation_sense(&self) -> RotationSense {
        match self.orientation {
            InsetOrientation::AntiClockwiseNormal => RotationSense::AntiClockwise,
            InsetOrientation::Auto => match winding(&self.points) {
                Winding::CounterClockwise => RotationSense::Clockwise,
                Winding::Clockwise | Winding::Degenerate => RotationSense::AntiClockwise,
            },
        }
    }
}

fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// True when one edge at `curr` is vertical and the other is neither
/// vertical nor horizontal.
fn vertical_meets_sloped(prev: &Point2, curr: &Point2, next: &Point2) -> bool {
    let first = slope(prev, curr);
    let second = slope(next, curr);
    let sloped = |m: f64| m.is_finite() && m != 0.0;
    (!first.is_finite() && sloped(second)) || (!second.is_finite() && sloped(first))
}

/// Inset vertex at `curr` by the angle / sign-match / slope-intercept route.
fn trigonometric_vertex(
    prev: &Point2,
    curr: &Point2,
    next: &Point2,
    padding: f64,
    sense: RotationSense,
) -> Point2 {
    let first_dir = curr.coords.subtract_components(prev.x, prev.y);
    let first_position = projected_point(curr, prev, &first_dir, padding, sense);
    let first_slope = slope(prev, curr);

    let second_dir = next.coords.subtract_components(curr.x, curr.y);
    let second_position = projected_point(curr, next, &second_dir, padding, sense);
    let second_slope = slope(next, curr);

    let first_c = y_intercept(first_position.x, first_position.y, first_slope);
    let second_c = y_intercept(second_position.x, second_position.y, second_slope);

    line_intersection(
        &first_position,
        first_slope,
        &second_position,
        second_slope,
        first_c,
        second_c,
    )
}

/// Shifts `curr` onto the offset line of the edge between `curr` and `other`.
///
/// The per-axis magnitudes come from the edge's angle to the horizontal, and
/// their signs from the rotated edge direction. An axis whose direction sign
/// is zero is not shifted.
fn projected_point(
    curr: &Point2,
    other: &Point2,
    edge_dir: &Vector2,
    padding: f64,
    sense: RotationSense,
) -> Point2 {
    let rotated = sense.rotate(edge_dir).normalize();
    let dir = Vector2::new(sign_of(rotated.x), sign_of(rotated.y));

    let right = Point2::from(curr.coords.add_components(1.0, 0.0));
    let line_angle = degrees_to_radians(90.0 - angle_between(other, curr, &right));

    let dx = match_sign(line_angle.cos() * padding, dir.x);
    let dy = match_sign(line_angle.sin() * padding, dir.y);
    Point2::from(curr.coords.add_components(dx * dir.x.abs(), dy * dir.y.abs()))
}

/// Inset vertex at `curr` from the two edge lines shifted along their normals.
fn edge_normal_vertex(
    prev: &Point2,
    curr: &Point2,
    next: &Point2,
    padding: f64,
    sense: RotationSense,
) -> Point2 {
    let first_dir = (curr - prev).normalize();
    let second_dir = (next - curr).normalize();
    let first_anchor = curr + sense.rotate(&first_dir) * padding;
    let second_anchor = curr + sense.rotate(&second_dir) * padding;
    parametric_intersection(&first_anchor, &first_dir, &second_anchor, &second_dir)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, InsetError};
    use approx::assert_relative_eq;

    /// Helper: asserts two points are approximately equal.
    fn assert_point_near(a: &Point2, b: &Point2, tol: f64, msg: &str) {
        let d = (a - b).norm();
        assert!(
            d < tol,
            "{msg}: expected ({}, {}), got ({}, {}), dist={d}",
            b.x,
            b.y,
            a.x,
            a.y
        );
    }

    /// Clockwise square matching the sample shape's vertex order.
    fn cw_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 0.0),
        ]
    }

    fn ccw_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    }

    #[test]
    fn square_inset_trigonometric() {
        let result = InsetPath2D::new(cw_square(), 2.0).execute();

        assert_eq!(result.len(), 4);
        assert_point_near(&result[0], &Point2::new(2.0, 2.0), 1e-9, "v0");
        assert_point_near(&result[1], &Point2::new(2.0, 8.0), 1e-9, "v1");
        assert_point_near(&result[2], &Point2::new(8.0, 8.0), 1e-9, "v2");
        assert_point_near(&result[3], &Point2::new(8.0, 2.0), 1e-9, "v3");
    }

    #[test]
    fn square_inset_edge_normal() {
        let result = InsetPath2D::new(cw_square(), 2.0)
            .with_method(InsetMethod::EdgeNormal)
            .execute();

        assert_eq!(result.len(), 4);
        assert_point_near(&result[0], &Point2::new(2.0, 2.0), 1e-9, "v0");
        assert_point_near(&result[1], &Point2::new(2.0, 8.0), 1e-9, "v1");
        assert_point_near(&result[2], &Point2::new(8.0, 8.0), 1e-9, "v2");
        assert_point_near(&result[3], &Point2::new(8.0, 2.0), 1e-9, "v3");
    }

    #[test]
    fn zero_padding_returns_input() {
        let pts = vec![
            Point2::new(1.0, 1.0),
            Point2::new(3.0, 7.0),
            Point2::new(9.0, 4.0),
        ];
        let result = InsetPath2D::new(pts.clone(), 0.0).execute();
        assert_eq!(result, pts);
    }

    #[test]
    fn ccw_square_default_orientation_goes_outward() {
        let result = InsetPath2D::new(ccw_square(), 2.0).execute();
        assert_point_near(&result[0], &Point2::new(-2.0, -2.0), 1e-9, "v0");
        assert_point_near(&result[1], &Point2::new(12.0, -2.0), 1e-9, "v1");
        assert_point_near(&result[2], &Point2::new(12.0, 12.0), 1e-9, "v2");
        assert_point_near(&result[3], &Point2::new(-2.0, 12.0), 1e-9, "v3");
    }

    #[test]
    fn ccw_square_auto_orientation_goes_inward() {
        for method in [InsetMethod::Trigonometric, InsetMethod::EdgeNormal] {
            let result = InsetPath2D::new(ccw_square(), 2.0)
                .with_method(method)
                .with_orientation(InsetOrientation::Auto)
                .execute();
            assert_point_near(&result[0], &Point2::new(2.0, 2.0), 1e-9, "v0");
            assert_point_near(&result[1], &Point2::new(8.0, 2.0), 1e-9, "v1");
            assert_point_near(&result[2], &Point2::new(8.0, 8.0), 1e-9, "v2");
            assert_point_near(&result[3], &Point2::new(2.0, 8.0), 1e-9, "v3");
        }
    }

    #[test]
    fn auto_orientation_keeps_cw_input_unchanged() {
        let fixed = InsetPath2D::new(cw_square(), 1.5).execute();
        let auto = InsetPath2D::new(cw_square(), 1.5)
            .with_orientation(InsetOrientation::Auto)
            .execute();
        assert_eq!(fixed, auto);
    }

    #[test]
    fn sloped_triangle_methods_agree() {
        let tri = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 10.0),
            Point2::new(10.0, 0.0),
        ];
        let trig = InsetPath2D::new(tri.clone(), 1.0).execute();
        let normal = InsetPath2D::new(tri, 1.0)
            .with_method(InsetMethod::EdgeNormal)
            .execute();
        for (a, b) in trig.iter().zip(&normal) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
        // Bottom edge lies on y = 0, so its inset is on y = 1.
        assert_relative_eq!(trig[0].y, 1.0, epsilon = 1e-9);
        assert_relative_eq!(trig[2].y, 1.0, epsilon = 1e-9);
        // Symmetric about x = 5.
        assert_relative_eq!(trig[1].x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(trig[0].x + trig[2].x, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn duplicate_vertex_propagates_nan() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 10.0),
            Point2::new(5.0, 10.0),
            Point2::new(10.0, 0.0),
        ];
        for method in [InsetMethod::Trigonometric, InsetMethod::EdgeNormal] {
            let result = InsetPath2D::new(pts.clone(), 1.0)
                .with_method(method)
                .execute();
            assert_eq!(result.len(), 4);
            assert!(is_finite(&result[0]), "{method:?}");
            assert!(!is_finite(&result[1]), "{method:?}");
            assert!(!is_finite(&result[2]), "{method:?}");
            assert!(is_finite(&result[3]), "{method:?}");
        }
    }

    #[test]
    fn try_execute_reports_zero_length_edge() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 10.0),
            Point2::new(5.0, 10.0),
            Point2::new(10.0, 0.0),
        ];
        let err = InsetPath2D::new(pts, 1.0).try_execute().unwrap_err();
        assert!(matches!(
            err,
            InsetError::Geometry(GeometryError::ZeroLengthEdge { index: 1 })
        ));
    }

    #[test]
    fn try_execute_accepts_square() {
        let result = InsetPath2D::new(cw_square(), 2.0).try_execute().unwrap();
        assert_point_near(&result[2], &Point2::new(8.0, 8.0), 1e-9, "v2");
    }

    #[test]
    fn too_few_points_returned_unchanged() {
        let pts = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert_eq!(InsetPath2D::new(pts.clone(), 1.0).execute(), pts);
        assert!(InsetPath2D::new(Vec::new(), 1.0).execute().is_empty());
        assert!(InsetPath2D::new(pts, 1.0).try_execute().is_err());
    }

    /// Clockwise right triangle with a vertical edge at `x = 5` meeting a
    /// slope of `-1` at `(5, 10)`.
    fn vertical_sloped_triangle() -> Vec<Point2> {
        vec![
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 10.0),
            Point2::new(15.0, 0.0),
        ]
    }

    #[test]
    fn try_execute_places_vertical_sloped_corner_on_both_edges() {
        let expected_apex = Point2::new(6.0, 9.0 - 2f64.sqrt());
        let result = InsetPath2D::new(vertical_sloped_triangle(), 1.0)
            .try_execute()
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_point_near(&result[0], &Point2::new(6.0, 1.0), 1e-9, "v0");
        assert_point_near(&result[1], &expected_apex, 1e-9, "v1");
        assert_point_near(&result[2], &Point2::new(14.0 - 2f64.sqrt(), 1.0), 1e-9, "v2");

        let normal = InsetPath2D::new(vertical_sloped_triangle(), 1.0)
            .with_method(InsetMethod::EdgeNormal)
            .try_execute()
            .unwrap();
        for (a, b) in result.iter().zip(&normal) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }
    }

    #[test]
    fn execute_keeps_intercept_encoding_at_vertical_sloped_corner() {
        let result = InsetPath2D::new(vertical_sloped_triangle(), 1.0).execute();
        // The vertical-line branch leaves the apex off the shifted vertical edge.
        assert!((result[1].x - 6.0).abs() > 1e-3);
        assert_point_near(&result[0], &Point2::new(6.0, 1.0), 1e-9, "v0");
    }

    #[test]
    fn collinear_vertex_propagates_non_finite() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 6.0),
            Point2::new(6.0, 12.0),
            Point2::new(12.0, 0.0),
        ];
        for method in [InsetMethod::Trigonometric, InsetMethod::EdgeNormal] {
            let result = InsetPath2D::new(pts.clone(), 1.0)
                .with_method(method)
                .execute();
            assert_eq!(result.len(), 4);
            assert!(!is_finite(&result[1]), "{method:?}: {:?}", result[1]);
        }
    }

    #[test]
    fn negative_padding_matches_positive() {
        for method in [InsetMethod::Trigonometric, InsetMethod::EdgeNormal] {
            let negative = InsetPath2D::new(cw_square(), -1.0)
                .with_method(method)
                .execute();
            let positive = InsetPath2D::new(cw_square(), 1.0)
                .with_method(method)
                .execute();
            assert_eq!(negative, positive, "{method:?}");
            assert_point_near(&negative[0], &Point2::new(1.0, 1.0), 1e-9, "v0");
        }
    }
}
