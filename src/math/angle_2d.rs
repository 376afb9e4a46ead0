use super::{Point2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Returns `-1.0`, `0.0` or `1.0` according to the sign of `value`.
///
/// Unlike [`f64::signum`], both zeros map to `0.0` and NaN stays NaN.
#[must_use]
pub fn sign_of(value: f64) -> f64 {
    if value < 0.0 {
        -1.0
    } else if value > 0.0 {
        1.0
    } else if value.is_nan() {
        f64::NAN
    } else {
        0.0
    }
}

/// Returns `|value|` with the sign of `target`.
///
/// Yields exactly `0.0` when `target` is zero, and NaN when `target` is NaN.
#[must_use]
pub fn match_sign(value: f64, target: f64) -> f64 {
    if target < 0.0 {
        -value.abs()
    } else if target > 0.0 {
        value.abs()
    } else if target.is_nan() {
        f64::NAN
    } else {
        0.0
    }
}

/// Angle in degrees at `p2` between the rays towards `p1` and `p3`, in `[0, 180]`.
///
/// NaN when either ray has zero length.
#[must_use]
pub fn angle_between(p1: &Point2, p2: &Point2, p3: &Point2) -> f64 {
    let a = p1 - p2;
    let b = p3 - p2;
    let cos = a.dot(&b) / (a.norm() * b.norm());
    radians_to_degrees(cos.clamp(-1.0, 1.0).acos())
}

/// Checked variant of [`angle_between`].
///
/// # Errors
///
/// Returns `GeometryError::DegenerateRay` if `p2` coincides with `p1` or `p3`.
pub(crate) fn try_angle_between(p1: &Point2, p2: &Point2, p3: &Point2) -> Result<f64> {
    if (p1 - p2).norm() < TOLERANCE || (p3 - p2).norm() < TOLERANCE {
        return Err(GeometryError::DegenerateRay.into());
    }
    Ok(angle_between(p1, p2, p3))
}

#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}
