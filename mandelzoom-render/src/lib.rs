pub mod buffer;
pub mod driver;
pub mod error;
pub mod export;
pub mod palette;
pub mod renderer;
pub mod tile;

pub use buffer::FrameBuffer;
pub use driver::{run_animated_loop, run_static_frame, FrameInfo, FrameSink, RunSummary, Session};
pub use error::RenderError;
pub use export::{export_png, ExportMetadata};
pub use palette::{sinusoid_color, Colorizer, Palette, INSIDE_COLOR};
pub use renderer::{render_frame, FrameStats};
pub use tile::TILE_SIZE;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
