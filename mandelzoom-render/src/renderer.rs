use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use mandelzoom_core::{Fractal, PlaneMapper, ViewState};

use crate::buffer::FrameBuffer;
use crate::palette::Colorizer;
use crate::tile::{build_tile_grid, Tile};

/// Timing and content summary of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub elapsed: Duration,
    pub pixels: usize,
    /// Pixels whose orbit never escaped.
    pub interior: usize,
    /// Zero for the sequential path.
    pub tiles: usize,
}

// ---------------------------------------------------------------------------
// Per-tile rendering
// ---------------------------------------------------------------------------

/// Colour one tile into a private row-major buffer.
///
/// Returns the colours and the number of interior pixels.
fn render_tile<F: Fractal>(
    fractal: &F,
    mapper: &PlaneMapper,
    colorizer: &Colorizer,
    tile: &Tile,
) -> (Vec<u32>, usize) {
    let max = fractal.max_iteration();
    let mut colors = Vec::with_capacity(tile.pixel_count());
    let mut interior = 0;
    for py in tile.y..tile.y + tile.height {
        for px in tile.x..tile.x + tile.width {
            let count = fractal.iterate(mapper.map(px, py));
            if count > max {
                interior += 1;
            }
            colors.push(colorizer.color(count));
        }
    }
    (colors, interior)
}

// ---------------------------------------------------------------------------
// Full-frame render
// ---------------------------------------------------------------------------

/// Render one frame of `view` into `buffer`.
///
/// With `parallel` off, pixels are visited column by column and written one
/// at a time. With it on, tiles are evaluated on the rayon pool into private
/// buffers and copied in once every tile has finished, so the framebuffer is
/// never shared between threads. Both paths produce identical pixels.
pub fn render_frame<F: Fractal + Sync>(
    fractal: &F,
    view: &ViewState,
    colorizer: &Colorizer,
    buffer: &mut FrameBuffer,
    parallel: bool,
) -> FrameStats {
    let start = Instant::now();
    let (width, height) = (buffer.width(), buffer.height());
    let mapper = PlaneMapper::for_view(view, width, height);
    debug!(
        width,
        height,
        zoom = view.zoom,
        offset = view.offset,
        parallel,
        "Starting frame"
    );

    let (interior, tiles) = if parallel {
        render_tiles(fractal, &mapper, colorizer, buffer)
    } else {
        (render_columns(fractal, &mapper, colorizer, buffer), 0)
    };

    let stats = FrameStats {
        elapsed: start.elapsed(),
        pixels: width as usize * height as usize,
        interior,
        tiles,
    };
    info!(
        elapsed_ms = stats.elapsed.as_millis() as u64,
        interior, tiles, "Frame complete"
    );
    stats
}

fn render_columns<F: Fractal>(
    fractal: &F,
    mapper: &PlaneMapper,
    colorizer: &Colorizer,
    buffer: &mut FrameBuffer,
) -> usize {
    let max = fractal.max_iteration();
    let mut interior = 0;
    for xp in 0..buffer.width() {
        for yp in 0..buffer.height() {
            let count = fractal.iterate(mapper.map(xp, yp));
            if count > max {
                interior += 1;
            }
            buffer.set_pixel(xp, yp, colorizer.color(count));
        }
    }
    interior
}

fn render_tiles<F: Fractal + Sync>(
    fractal: &F,
    mapper: &PlaneMapper,
    colorizer: &Colorizer,
    buffer: &mut FrameBuffer,
) -> (usize, usize) {
    let tiles = build_tile_grid(buffer.width(), buffer.height());
    let rendered: Vec<(Vec<u32>, usize)> = tiles
        .par_iter()
        .map(|tile| render_tile(fractal, mapper, colorizer, tile))
        .collect();

    let mut interior = 0;
    for (tile, (colors, n)) in tiles.iter().zip(&rendered) {
        buffer.blit_tile(tile, colors);
        interior += n;
    }
    (interior, tiles.len())
}
