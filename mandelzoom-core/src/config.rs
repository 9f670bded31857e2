use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::view::{AnimationRate, ViewState};

/// How escape counts are turned into colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Look the colour up in a palette built once per session.
    #[default]
    Table,
    /// Evaluate the sine terms for every pixel.
    Inline,
}

impl ColorMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Inline => "inline",
        }
    }
}

/// Everything a render session needs, passed explicitly to the frame driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Iteration cap. Higher values resolve more detail near the boundary.
    #[serde(default = "default_max_iteration")]
    pub max_iteration: u32,
    /// Added to the zoom factor after every animated frame.
    #[serde(default = "default_zoom_step")]
    pub zoom_step: f64,
    /// Added to the pan offset after every animated frame.
    #[serde(default = "default_offset_step")]
    pub offset_step: f64,
    #[serde(default)]
    pub color_mode: ColorMode,
    /// Split frames across the rayon pool instead of one column-major pass.
    #[serde(default = "default_true")]
    pub parallel: bool,
}

fn default_width() -> u32 {
    1280
}
fn default_height() -> u32 {
    800
}
fn default_max_iteration() -> u32 {
    500
}
fn default_zoom_step() -> f64 {
    AnimationRate::Gentle.steps().0
}
fn default_offset_step() -> f64 {
    AnimationRate::Gentle.steps().1
}
fn default_true() -> bool {
    true
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_iteration: default_max_iteration(),
            zoom_step: default_zoom_step(),
            offset_step: default_offset_step(),
            color_mode: ColorMode::default(),
            parallel: true,
        }
    }
}

impl RenderConfig {
    /// The smaller 800×600, 100-iteration setup.
    pub fn classic() -> Self {
        Self {
            width: 800,
            height: 600,
            max_iteration: 100,
            ..Self::default()
        }
    }

    /// Return a copy animating at `rate`.
    pub fn with_rate(self, rate: AnimationRate) -> Self {
        let (zoom_step, offset_step) = rate.steps();
        Self {
            zoom_step,
            offset_step,
            ..self
        }
    }

    /// Reject configurations that would divide by zero or never terminate.
    pub fn validate(&self) -> crate::Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_iteration == 0 {
            return Err(CoreError::InvalidMaxIterations(self.max_iteration));
        }
        // Zoom never shrinks across frames; the offset may drift either way.
        if !self.zoom_step.is_finite() || self.zoom_step < 0.0 {
            return Err(CoreError::InvalidStep {
                name: "zoom step",
                value: self.zoom_step,
            });
        }
        if !self.offset_step.is_finite() {
            return Err(CoreError::InvalidStep {
                name: "offset step",
                value: self.offset_step,
            });
        }
        Ok(())
    }

    /// The unzoomed starting view for this canvas.
    pub fn initial_view(&self) -> crate::Result<ViewState> {
        ViewState::initial(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = RenderConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!((cfg.width, cfg.height, cfg.max_iteration), (1280, 800, 500));
        assert_eq!(cfg.color_mode, ColorMode::Table);
    }

    #[test]
    fn classic_is_valid() {
        let cfg = RenderConfig::classic();
        assert!(cfg.validate().is_ok());
        assert_eq!((cfg.width, cfg.height, cfg.max_iteration), (800, 600, 100));
    }

    #[test]
    fn zero_dimensions_rejected() {
        let cfg = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::InvalidCanvas { .. })));
    }

    #[test]
    fn zero_iterations_rejected() {
        let cfg = RenderConfig {
            max_iteration: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::InvalidMaxIterations(0))
        ));
    }

    #[test]
    fn bad_steps_rejected() {
        let cfg = RenderConfig {
            zoom_step: -0.5,
            ..RenderConfig::default()
        };
        assert!(cfg.validate().is_err());
        let cfg = RenderConfig {
            offset_step: f64::INFINITY,
            ..RenderConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn negative_offset_step_is_valid() {
        let cfg = RenderConfig {
            offset_step: -0.28,
            ..RenderConfig::default()
        };
        assert!(cfg.validate().is_ok());

        let mut view = cfg.initial_view().unwrap();
        view.advance(cfg.zoom_step, cfg.offset_step);
        assert_eq!(view.offset, -0.28);
    }

    #[test]
    fn with_rate_sets_both_steps() {
        let cfg = RenderConfig::default().with_rate(AnimationRate::Fast);
        assert_eq!(cfg.zoom_step, 1.0);
        assert_eq!(cfg.offset_step, 0.54);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let cfg: RenderConfig =
            serde_json::from_str(r#"{ "max_iteration": 250, "color_mode": "inline" }"#).unwrap();
        assert_eq!(cfg.max_iteration, 250);
        assert_eq!(cfg.color_mode, ColorMode::Inline);
        assert_eq!(cfg.width, 1280);
        assert!(cfg.parallel);
    }
}
