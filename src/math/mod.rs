pub mod angle_2d;
pub mod line_2d;
pub mod polygon_2d;
pub mod vector_2d;

pub use vector_2d::Vector2D;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
