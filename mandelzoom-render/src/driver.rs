//! Frame loop: owns the per-session state and hands finished frames to a
//! display through [`FrameSink`].

use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use mandelzoom_core::{Mandelbrot, RenderConfig, ViewState};

use crate::buffer::FrameBuffer;
use crate::palette::Colorizer;
use crate::renderer::{render_frame, FrameStats};

/// How often a static frame checks for a quit request.
pub const STATIC_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Describes a frame handed to [`FrameSink::present`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Zero-based frame number within the session.
    pub index: u64,
    /// The view the frame was rendered with.
    pub view: ViewState,
    pub stats: FrameStats,
}

/// The display side of the render loop.
pub trait FrameSink {
    /// Show a finished frame.
    fn present(&mut self, frame: &FrameBuffer, info: &FrameInfo) -> crate::Result<()>;

    /// Polled between frames; `true` ends the loop.
    fn should_quit(&mut self) -> bool;
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    /// The view the next frame would have used.
    pub view: ViewState,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Per-session render state: evaluator, colours, framebuffer and view.
pub struct Session {
    config: RenderConfig,
    fractal: Mandelbrot,
    colorizer: Colorizer,
    view: ViewState,
    buffer: FrameBuffer,
    frames: u64,
}

impl Session {
    /// Validate `config` and allocate everything a frame needs.
    pub fn new(config: &RenderConfig) -> crate::Result<Self> {
        config.validate()?;
        let session = Self {
            config: config.clone(),
            fractal: Mandelbrot::new(config.max_iteration)?,
            colorizer: Colorizer::new(config.color_mode, config.max_iteration)?,
            view: config.initial_view()?,
            buffer: FrameBuffer::new(config.width, config.height)?,
            frames: 0,
        };
        info!(
            width = config.width,
            height = config.height,
            max_iteration = config.max_iteration,
            color_mode = config.color_mode.label(),
            parallel = config.parallel,
            "Render session started"
        );
        Ok(session)
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Render the current view into the framebuffer.
    pub fn render(&mut self) -> FrameInfo {
        let stats = render_frame(
            &self.fractal,
            &self.view,
            &self.colorizer,
            &mut self.buffer,
            self.config.parallel,
        );
        let info = FrameInfo {
            index: self.frames,
            view: self.view,
            stats,
        };
        self.frames += 1;
        info
    }

    /// Move the view forward by the configured per-frame increments.
    pub fn advance(&mut self) {
        self.view.advance(self.config.zoom_step, self.config.offset_step);
        debug!(zoom = self.view.zoom, offset = self.view.offset, "View advanced");
    }

    fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            view: self.view,
        }
    }
}

// ---------------------------------------------------------------------------
// Run loops
// ---------------------------------------------------------------------------

/// Render a single frame and keep it on screen until the sink asks to quit.
pub fn run_static_frame<S: FrameSink>(
    config: &RenderConfig,
    sink: &mut S,
) -> crate::Result<RunSummary> {
    let mut session = Session::new(config)?;
    let info = session.render();
    sink.present(session.buffer(), &info)?;

    while !sink.should_quit() {
        thread::sleep(STATIC_POLL_INTERVAL);
    }

    info!("Static view closed");
    Ok(session.summary())
}

/// Render, present and zoom in, frame after frame, until the sink asks to
/// quit. A frame in progress always completes.
pub fn run_animated_loop<S: FrameSink>(
    config: &RenderConfig,
    sink: &mut S,
) -> crate::Result<RunSummary> {
    let mut session = Session::new(config)?;
    loop {
        let info = session.render();
        sink.present(session.buffer(), &info)?;
        session.advance();
        if sink.should_quit() {
            break;
        }
    }

    let summary = session.summary();
    info!(
        frames = summary.frames,
        zoom = summary.view.zoom,
        "Zoom animation stopped"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;

    /// Records presented frames and quits after a fixed number of polls.
    struct CountingSink {
        presented: Vec<FrameInfo>,
        polls_before_quit: usize,
        polls: usize,
    }

    impl CountingSink {
        fn new(polls_before_quit: usize) -> Self {
            Self {
                presented: Vec::new(),
                polls_before_quit,
                polls: 0,
            }
        }
    }

    impl FrameSink for CountingSink {
        fn present(&mut self, _frame: &FrameBuffer, info: &FrameInfo) -> crate::Result<()> {
            self.presented.push(*info);
            Ok(())
        }

        fn should_quit(&mut self) -> bool {
            self.polls += 1;
            self.polls > self.polls_before_quit
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 48,
            height: 32,
            max_iteration: 40,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn static_frame_presents_once() {
        let mut sink = CountingSink::new(3);
        let summary = run_static_frame(&small_config(), &mut sink).unwrap();
        assert_eq!(sink.presented.len(), 1);
        assert_eq!(summary.frames, 1);
        assert_eq!(summary.view.zoom, 1.0);
    }

    #[test]
    fn animated_loop_advances_each_frame() {
        let mut sink = CountingSink::new(4);
        let summary = run_animated_loop(&small_config(), &mut sink).unwrap();
        assert_eq!(sink.presented.len(), 5);
        let zooms: Vec<f64> = sink.presented.iter().map(|i| i.view.zoom).collect();
        assert_eq!(zooms, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
        assert!(sink.presented.windows(2).all(|w| w[1].index == w[0].index + 1));
        assert_eq!(summary.view.zoom, 3.5);
    }

    #[test]
    fn invalid_config_fails_before_rendering() {
        let cfg = RenderConfig {
            height: 0,
            ..small_config()
        };
        let mut sink = CountingSink::new(0);
        assert!(matches!(
            run_animated_loop(&cfg, &mut sink),
            Err(RenderError::Core(_))
        ));
        assert!(sink.presented.is_empty());
    }

    #[test]
    fn presentation_error_stops_the_loop() {
        struct Broken;
        impl FrameSink for Broken {
            fn present(&mut self, _: &FrameBuffer, _: &FrameInfo) -> crate::Result<()> {
                Err(RenderError::Presentation("surface lost".into()))
            }
            fn should_quit(&mut self) -> bool {
                false
            }
        }
        assert!(run_animated_loop(&small_config(), &mut Broken).is_err());
    }
}
