pub mod complex;
pub mod config;
pub mod error;
pub mod fractal;
pub mod mandelbrot;
pub mod mapper;
pub mod view;

// Re-export primary types for convenience.
pub use complex::Complex;
pub use config::{ColorMode, RenderConfig};
pub use error::CoreError;
pub use fractal::{Fractal, IterationResult};
pub use mandelbrot::{evaluate, Mandelbrot, ESCAPE_RADIUS_SQ};
pub use mapper::{map_pixel, PlaneBounds, PlaneMapper};
pub use view::{AnimationRate, AspectScale, ViewState};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
