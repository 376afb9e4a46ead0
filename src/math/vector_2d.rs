//! Planar vector operations on top of [`Vector2`].
//!
//! Componentwise addition, magnitude and the permissive `normalize` come
//! straight from nalgebra (`a + b`, [`Vector2::norm`], [`Vector2::normalize`]);
//! normalizing a zero vector that way yields NaN components. This trait adds
//! the remaining operations the inset builder needs.

use super::{Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Extra operations on 2D vectors. Every method returns a new value.
pub trait Vector2D: Sized {
    /// Adds raw scalars to each component.
    #[must_use]
    fn add_components(&self, dx: f64, dy: f64) -> Self;

    /// Subtracts raw scalars from each component.
    #[must_use]
    fn subtract_components(&self, dx: f64, dy: f64) -> Self;

    /// Maps `(x, y)` to `(-y, x)`.
    #[must_use]
    fn rotate_clockwise_90(&self) -> Self;

    /// Maps `(x, y)` to `(y, -x)`.
    #[must_use]
    fn rotate_anticlockwise_90(&self) -> Self;

    /// Scales the vector to unit length.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the magnitude is below [`TOLERANCE`].
    fn try_unit(&self) -> Result<Self>;
}

impl Vector2D for Vector2 {
    fn add_components(&self, dx: f64, dy: f64) -> Self {
        Vector2::new(self.x + dx, self.y + dy)
    }

    fn subtract_components(&self, dx: f64, dy: f64) -> Self {
        Vector2::new(self.x - dx, self.y - dy)
    }

    fn rotate_clockwise_90(&self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    fn rotate_anticlockwise_90(&self) -> Self {
        Vector2::new(self.y, -self.x)
    }

    fn try_unit(&self) -> Result<Self> {
        let len = self.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(self / len)
    }
}
