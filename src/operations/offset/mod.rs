mod border_outline_2d;
mod inset_path_2d;
pub mod validate;

pub use border_outline_2d::{BorderOutline2D, BorderPaths};
pub use inset_path_2d::{InsetMethod, InsetOrientation, InsetPath2D};
pub use validate::validate_polygon;
