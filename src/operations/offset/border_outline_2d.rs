use tracing::debug;

use super::{InsetMethod, InsetOrientation, InsetPath2D};
use crate::error::Result;
use crate::export::{to_path_data, PathClose};
use crate::math::Point2;

/// Path data for a bordered shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderPaths {
    /// The polygon boundary itself.
    pub outer: String,
    /// The boundary inset by the border width.
    pub inner: String,
}

/// Builds the outer boundary and inner cut-off boundary of a bordered shape.
///
/// Both paths come from [`InsetPath2D`], the outer one with zero padding and
/// the inner one with `border_width`, so the band between them is the border.
#[derive(Debug, Clone)]
pub struct BorderOutline2D {
    points: Vec<Point2>,
    border_width: f64,
    method: InsetMethod,
    orientation: InsetOrientation,
    close: PathClose,
}

impl BorderOutline2D {
    #[must_use]
    pub fn new(points: Vec<Point2>, border_width: f64) -> Self {
        Self {
            points,
            border_width,
            method: InsetMethod::default(),
            orientation: InsetOrientation::default(),
            close: PathClose::default(),
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

    #[must_use]
    pub fn with_close(mut self, close: PathClose) -> Self {
        self.close = close;
        self
    }

    /// Builds both paths without validating the input.
    #[must_use]
    pub fn execute(&self) -> BorderPaths {
        let outer = self.inset(0.0).execute();
        let inner = self.inset(self.border_width).execute();
        self.paths(&outer, &inner)
    }

    /// Builds both paths, rejecting degenerate input.
    ///
    /// # Errors
    ///
    /// Returns any error reported by [`InsetPath2D::try_execute`].
    pub fn try_execute(&self) -> Result<BorderPaths> {
        let outer = self.inset(0.0).try_execute()?;
        let inner = self.inset(self.border_width).try_execute()?;
        Ok(self.paths(&outer, &inner))
    }

    fn inset(&self, padding: f64) -> InsetPath2D {
        InsetPath2D::new(self.points.clone(), padding)
            .with_method(self.method)
            .with_orientation(self.orientation)
    }

    fn paths(&self, outer: &[Point2], inner: &[Point2]) -> BorderPaths {
        debug!(
            vertices = outer.len(),
            border_width = self.border_width,
            "built border paths"
        );
        BorderPaths {
            outer: to_path_data(outer, self.close),
            inner: to_path_data(inner, self.close),
        }
    }
}
