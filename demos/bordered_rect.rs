//! Prints the outer and inner path data of a bordered rectangle.
//!
//! Usage:
//! ```text
//! cargo run --example bordered_rect            # border width 4
//! cargo run --example bordered_rect -- 12.5    # custom border width
//! RUST_LOG=polyinset=trace cargo run --example bordered_rect
//! ```

use polyinset::{BorderOutline2D, InsetError, Point2};

fn main() -> Result<(), InsetError> {
    // Default: WARN for everything, INFO for polyinset.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyinset=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polyinset=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let border_width = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<f64>().ok())
        .unwrap_or(4.0);

    let points = vec![
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1000.0),
        Point2::new(800.0, 1000.0),
        Point2::new(800.0, 0.0),
    ];

    let paths = BorderOutline2D::new(points, border_width).try_execute()?;
    println!("outer: {}", paths.outer);
    println!("inner: {}", paths.inner);
    Ok(())
}
