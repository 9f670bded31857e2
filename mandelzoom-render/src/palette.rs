use mandelzoom_core::{ColorMode, CoreError};

/// Colour of points that never escape.
pub const INSIDE_COLOR: u32 = 0x000000;

/// Frequency of the sine waves driving each channel.
const FREQUENCY: f64 = 0.2;
/// Phase of the red, green and blue waves.
const PHASES: [f64; 3] = [0.0, 2.0, 4.0];

/// Pack three channels into `0xRRGGBB`.
#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// The palette colour for escape count `index` under an iteration cap of
/// `max_iteration`.
///
/// The count is first rescaled into `0..=255` with integer division, so
/// neighbouring counts can share a colour when the cap exceeds 255.
#[inline]
pub fn sinusoid_color(index: u32, max_iteration: u32) -> u32 {
    let t = (index as u64 * 255 / max_iteration.max(1) as u64) as f64;
    let channel = |phase: f64| ((FREQUENCY * t + phase).sin() * 127.0 + 128.0).round() as u8;
    pack_rgb(channel(PHASES[0]), channel(PHASES[1]), channel(PHASES[2]))
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// One precomputed colour per escape count in `0..max_iteration`.
///
/// Built once per session and shared read-only by every pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<u32>,
}

impl Palette {
    pub fn sinusoidal(max_iteration: u32) -> crate::Result<Self> {
        if max_iteration == 0 {
            return Err(CoreError::InvalidMaxIterations(max_iteration).into());
        }
        let colors = (0..max_iteration)
            .map(|i| sinusoid_color(i, max_iteration))
            .collect();
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    /// Colour for a raw escape count.
    ///
    /// Counts past the cap are interior. A point escaping on the very last
    /// permitted step shares the final entry.
    #[inline]
    pub fn color(&self, count: u32) -> u32 {
        let last = self.colors.len() - 1;
        match count as usize {
            n if n > self.colors.len() => INSIDE_COLOR,
            n => self.colors[n.min(last)],
        }
    }
}

// ---------------------------------------------------------------------------
// Colorizer
// ---------------------------------------------------------------------------

/// Escape-count-to-colour mapping in either of the two [`ColorMode`]s.
///
/// Both variants produce the same colour for every count; `Table` trades a
/// little memory for skipping three `sin` calls per pixel.
#[derive(Debug, Clone)]
pub enum Colorizer {
    Table(Palette),
    Inline { max_iteration: u32 },
}

impl Colorizer {
    pub fn new(mode: ColorMode, max_iteration: u32) -> crate::Result<Self> {
        match mode {
            ColorMode::Table => Ok(Self::Table(Palette::sinusoidal(max_iteration)?)),
            ColorMode::Inline => {
                if max_iteration == 0 {
                    return Err(CoreError::InvalidMaxIterations(max_iteration).into());
                }
                Ok(Self::Inline { max_iteration })
            }
        }
    }

    pub fn mode(&self) -> ColorMode {
        match self {
            Self::Table(_) => ColorMode::Table,
            Self::Inline { .. } => ColorMode::Inline,
        }
    }

    #[inline]
    pub fn color(&self, count: u32) -> u32 {
        match self {
            Self::Table(palette) => palette.color(count),
            Self::Inline { max_iteration } => {
                let max = *max_iteration;
                if count > max {
                    INSIDE_COLOR
                } else {
                    sinusoid_color(count.min(max - 1), max)
                }
            }
        }
    }
}
