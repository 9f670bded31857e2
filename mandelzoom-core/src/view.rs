use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Per-axis stretch applied to the plane window so pixels stay square.
///
/// The longer canvas side gets the ratio of the two sides; the shorter side
/// stays at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectScale {
    pub x: f64,
    pub y: f64,
}

impl AspectScale {
    pub const UNIT: Self = Self { x: 1.0, y: 1.0 };

    pub fn from_canvas(width: u32, height: u32) -> crate::Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidCanvas { width, height });
        }
        let (w, h) = (width as f64, height as f64);
        Ok(if width > height {
            Self { x: w / h, y: 1.0 }
        } else if width < height {
            Self { x: 1.0, y: h / w }
        } else {
            Self::UNIT
        })
    }
}

/// How fast the continuous zoom moves, as per-frame increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationRate {
    /// `+0.5` zoom and `+0.28` offset per frame.
    #[default]
    Gentle,
    /// `+1.0` zoom and `+0.54` offset per frame.
    Fast,
}

impl AnimationRate {
    pub const ALL: [Self; 2] = [Self::Gentle, Self::Fast];

    /// `(zoom_step, offset_step)` for this rate.
    pub fn steps(self) -> (f64, f64) {
        match self {
            Self::Gentle => (0.5, 0.28),
            Self::Fast => (1.0, 0.54),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Gentle => "Gentle",
            Self::Fast => "Fast",
        }
    }
}

/// The view parameters carried from one frame to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Zoom factor. Starts at 1 and only grows during an animation.
    pub zoom: f64,
    /// Pan offset subtracted from every plane bound before zooming.
    pub offset: f64,
    /// Fixed for the whole session.
    pub scale: AspectScale,
}

impl ViewState {
    /// The unzoomed view for a canvas of the given size.
    pub fn initial(width: u32, height: u32) -> crate::Result<Self> {
        Ok(Self {
            zoom: 1.0,
            offset: 0.0,
            scale: AspectScale::from_canvas(width, height)?,
        })
    }

    pub fn new(zoom: f64, offset: f64, scale: AspectScale) -> crate::Result<Self> {
        if zoom <= 0.0 || !zoom.is_finite() {
            return Err(CoreError::InvalidZoom(zoom));
        }
        Ok(Self {
            zoom,
            offset,
            scale,
        })
    }

    /// Step the animation forward by one frame.
    pub fn advance(&mut self, zoom_step: f64, offset_step: f64) {
        self.zoom += zoom_step;
        self.offset += offset_step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn landscape_scales_x() {
        let s = AspectScale::from_canvas(1280, 800).unwrap();
        assert!((s.x - 1.6).abs() < EPSILON);
        assert_eq!(s.y, 1.0);
    }

    #[test]
    fn portrait_scales_y() {
        let s = AspectScale::from_canvas(600, 900).unwrap();
        assert_eq!(s.x, 1.0);
        assert!((s.y - 1.5).abs() < EPSILON);
    }

    #[test]
    fn square_is_unit() {
        assert_eq!(AspectScale::from_canvas(512, 512).unwrap(), AspectScale::UNIT);
    }

    #[test]
    fn zero_canvas_rejected() {
        assert!(AspectScale::from_canvas(0, 600).is_err());
        assert!(AspectScale::from_canvas(800, 0).is_err());
    }

    #[test]
    fn initial_view_is_unzoomed() {
        let v = ViewState::initial(800, 600).unwrap();
        assert_eq!(v.zoom, 1.0);
        assert_eq!(v.offset, 0.0);
    }

    #[test]
    fn advance_accumulates() {
        let mut v = ViewState::initial(800, 600).unwrap();
        let (dz, doff) = AnimationRate::Gentle.steps();
        for _ in 0..4 {
            v.advance(dz, doff);
        }
        assert!((v.zoom - 3.0).abs() < EPSILON);
        assert!((v.offset - 1.12).abs() < EPSILON);
    }

    #[test]
    fn invalid_zoom_rejected() {
        assert!(ViewState::new(0.0, 0.0, AspectScale::UNIT).is_err());
        assert!(ViewState::new(-2.0, 0.0, AspectScale::UNIT).is_err());
        assert!(ViewState::new(f64::NAN, 0.0, AspectScale::UNIT).is_err());
    }
}
