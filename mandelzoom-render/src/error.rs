use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid framebuffer dimensions: {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid pitch: {pitch} pixels is narrower than width {width}")]
    InvalidPitch { pitch: u32, width: u32 },

    #[error("failed to present frame: {0}")]
    Presentation(String),

    #[error("failed to export frame: {0}")]
    Export(String),

    #[error(transparent)]
    Core(#[from] mandelzoom_core::CoreError),
}
