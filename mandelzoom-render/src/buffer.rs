use crate::error::RenderError;
use crate::tile::Tile;

/// A 32-bit `0x00RRGGBB` framebuffer with a row pitch.
///
/// `pitch` is counted in pixels and may exceed `width` when the display
/// surface pads its rows; the padding is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pitch: u32,
    pixels: Vec<u32>,
}

impl FrameBuffer {
    /// Create a tightly packed buffer filled with black.
    pub fn new(width: u32, height: u32) -> crate::Result<Self> {
        Self::with_pitch(width, height, width)
    }

    pub fn with_pitch(width: u32, height: u32, pitch: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        if pitch < width {
            return Err(RenderError::InvalidPitch { pitch, width });
        }
        Ok(Self {
            width,
            height,
            pitch,
            pixels: vec![0; pitch as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pitch(&self) -> u32 {
        self.pitch
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        y as usize * self.pitch as usize + x as usize
    }

    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: u32) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }

    /// The visible part of row `y`, without pitch padding.
    pub fn row(&self, y: u32) -> &[u32] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    pub fn fill(&mut self, color: u32) {
        for y in 0..self.height {
            let start = self.index(0, y);
            self.pixels[start..start + self.width as usize].fill(color);
        }
    }

    /// Copy a tile's row-major colours into place.
    pub fn blit_tile(&mut self, tile: &Tile, colors: &[u32]) {
        debug_assert_eq!(colors.len(), tile.pixel_count());
        let tw = tile.width as usize;
        for (row, src) in colors.chunks_exact(tw).enumerate() {
            let start = self.index(tile.x, tile.y + row as u32);
            self.pixels[start..start + tw].copy_from_slice(src);
        }
    }

    /// Tightly packed RGBA bytes with opaque alpha, for textures and PNGs.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height {
            for &c in self.row(y) {
                out.extend_from_slice(&[(c >> 16) as u8, (c >> 8) as u8, c as u8, 255]);
            }
        }
        out
    }
}
