/// Tile edge in pixels. 64×64 × 4 bytes = 16 KB of colour per tile.
pub const TILE_SIZE: u32 = 64;

/// A rectangular region of the canvas rendered as one unit of parallel work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Pixel x of the top-left corner.
    pub x: u32,
    /// Pixel y of the top-left corner.
    pub y: u32,
    /// Narrower than `TILE_SIZE` along the right edge.
    pub width: u32,
    /// Shorter than `TILE_SIZE` along the bottom edge.
    pub height: u32,
}

impl Tile {
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Cover a `width × height` canvas with non-overlapping tiles, row by row.
pub fn build_tile_grid(width: u32, height: u32) -> Vec<Tile> {
    let cols = width.div_ceil(TILE_SIZE);
    let rows = height.div_ceil(TILE_SIZE);
    (0..rows)
        .flat_map(|row| {
            (0..cols).map(move |col| {
                let x = col * TILE_SIZE;
                let y = row * TILE_SIZE;
                Tile {
                    x,
                    y,
                    width: TILE_SIZE.min(width - x),
                    height: TILE_SIZE.min(height - y),
                }
            })
        })
        .collect()
}
