use thiserror::Error;

/// Errors originating from the core evaluator and view configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid max iterations: {0} (must be >= 1)")]
    InvalidMaxIterations(u32),

    #[error("invalid canvas: {width}×{height} (both dimensions must be > 0)")]
    InvalidCanvas { width: u32, height: u32 },

    #[error("invalid zoom factor: {0} (must be positive and finite)")]
    InvalidZoom(f64),

    #[error("invalid {name}: {value} (must be finite and >= 0)")]
    InvalidStep { name: &'static str, value: f64 },
}
