use crate::complex::Complex;
use crate::view::ViewState;

// Framing of the unzoomed view. The real window is deliberately off-centre
// so the whole silhouette of the set fits.
const RE_MAX: f64 = 1.25;
const RE_MIN: f64 = -1.75;
const IM_MAX: f64 = 1.5;
const IM_MIN: f64 = -1.5;

/// The visible window of the complex plane for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneBounds {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
}

impl PlaneBounds {
    pub fn for_view(zoom: f64, offset: f64, scale_x: f64, scale_y: f64) -> Self {
        Self {
            re_max: (RE_MAX * scale_x - offset) / zoom,
            re_min: (RE_MIN * scale_x - offset) / zoom,
            im_max: (IM_MAX * scale_y - offset) / zoom,
            im_min: (IM_MIN * scale_y - offset) / zoom,
        }
    }

    pub fn re_span(&self) -> f64 {
        self.re_max - self.re_min
    }

    pub fn im_span(&self) -> f64 {
        self.im_max - self.im_min
    }
}

/// Map pixel `(xp, yp)` of a `canvas_width × canvas_height` canvas onto the
/// plane window selected by `zoom`, `offset` and the aspect scale.
///
/// Pixel `(0, 0)` lands on `(re_min, im_min)`.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn map_pixel(
    xp: u32,
    yp: u32,
    canvas_width: u32,
    canvas_height: u32,
    zoom: f64,
    offset: f64,
    scale_x: f64,
    scale_y: f64,
) -> Complex {
    PlaneMapper::new(
        PlaneBounds::for_view(zoom, offset, scale_x, scale_y),
        canvas_width,
        canvas_height,
    )
    .map(xp, yp)
}

/// Pixel-to-plane mapping with the bounds computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMapper {
    bounds: PlaneBounds,
    width: f64,
    height: f64,
}

impl PlaneMapper {
    pub fn new(bounds: PlaneBounds, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            bounds,
            width: canvas_width as f64,
            height: canvas_height as f64,
        }
    }

    pub fn for_view(view: &ViewState, canvas_width: u32, canvas_height: u32) -> Self {
        Self::new(
            PlaneBounds::for_view(view.zoom, view.offset, view.scale.x, view.scale.y),
            canvas_width,
            canvas_height,
        )
    }

    pub fn bounds(&self) -> &PlaneBounds {
        &self.bounds
    }

    #[inline]
    pub fn map(&self, xp: u32, yp: u32) -> Complex {
        let b = &self.bounds;
        Complex::new(
            (b.re_max - b.re_min) * xp as f64 / self.width + b.re_min,
            (b.im_max - b.im_min) * yp as f64 / self.height + b.im_min,
        )
    }
}
