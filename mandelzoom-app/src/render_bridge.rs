use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use eframe::egui;
use tracing::{debug, error, info};

use mandelzoom_core::RenderConfig;
use mandelzoom_render::{
    run_animated_loop, run_static_frame, FrameBuffer, FrameInfo, FrameSink, RenderError,
};

use crate::app::MandelZoomApp;
use crate::app_state::{AppScreen, ViewMode};

/// Frames allowed in flight before the worker waits for the UI.
const FRAME_QUEUE_DEPTH: usize = 2;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

pub(crate) enum WorkerEvent {
    Frame { info: FrameInfo, frame: FrameBuffer },
    Failed(String),
}

/// A running render worker and the handles the UI keeps on it.
pub(crate) struct WorkerHandle {
    pub(crate) mode: ViewMode,
    pub(crate) config: RenderConfig,
    rx: mpsc::Receiver<WorkerEvent>,
    quit: Arc<AtomicBool>,
}

impl WorkerHandle {
    /// Ask the worker to stop after its current frame.
    pub(crate) fn stop(&self) {
        self.quit.store(true, Ordering::SeqCst);
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// [`FrameSink`] that ships frames to the UI thread.
///
/// A full queue blocks `present`, which paces the animation to the display.
struct ChannelSink {
    ctx: egui::Context,
    tx: mpsc::SyncSender<WorkerEvent>,
    quit: Arc<AtomicBool>,
}

impl FrameSink for ChannelSink {
    fn present(&mut self, frame: &FrameBuffer, info: &FrameInfo) -> mandelzoom_render::Result<()> {
        self.tx
            .send(WorkerEvent::Frame {
                info: *info,
                frame: frame.clone(),
            })
            .map_err(|_| RenderError::Presentation("viewer closed".into()))?;
        self.ctx.request_repaint();
        Ok(())
    }

    fn should_quit(&mut self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }
}

// ---------------------------------------------------------------------------
// impl MandelZoomApp: worker lifecycle and polling
// ---------------------------------------------------------------------------

impl MandelZoomApp {
    pub(crate) fn start_worker(&mut self, ctx: &egui::Context, mode: ViewMode) {
        self.stop_worker();

        let config = self.preferences.session_config();
        let (tx, rx) = mpsc::sync_channel(FRAME_QUEUE_DEPTH);
        let quit = Arc::new(AtomicBool::new(false));
        let sink = ChannelSink {
            ctx: ctx.clone(),
            tx,
            quit: Arc::clone(&quit),
        };
        let worker_config = config.clone();
        thread::spawn(move || render_worker(mode, worker_config, sink));

        info!(mode = mode.label(), "Render worker started");
        self.worker = Some(WorkerHandle {
            mode,
            config,
            rx,
            quit,
        });
        self.latest = None;
        self.texture = None;
        self.status = None;
        self.screen = AppScreen::Viewer;
    }

    pub(crate) fn stop_worker(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.stop();
            debug!(mode = worker.mode.label(), "Render worker stopping");
        }
    }

    /// Drain finished frames and upload the newest one as the view texture.
    pub(crate) fn poll_frames(&mut self, ctx: &egui::Context) {
        let Some(worker) = self.worker.as_ref() else {
            return;
        };

        let mut newest = None;
        while let Ok(event) = worker.rx.try_recv() {
            match event {
                WorkerEvent::Frame { info, frame } => newest = Some((info, frame)),
                WorkerEvent::Failed(msg) => self.status = Some(msg),
            }
        }

        if let Some((info, frame)) = newest {
            let image = egui::ColorImage::from_rgba_unmultiplied(
                [frame.width() as usize, frame.height() as usize],
                &frame.to_rgba(),
            );
            match self.texture.as_mut() {
                Some(tex) => tex.set(image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture =
                        Some(ctx.load_texture("mandelbrot", image, egui::TextureOptions::LINEAR))
                }
            }
            self.latest = Some((info, frame));
        }
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn render_worker(mode: ViewMode, config: RenderConfig, mut sink: ChannelSink) {
    let result = match mode {
        ViewMode::Static => run_static_frame(&config, &mut sink),
        ViewMode::Animated => run_animated_loop(&config, &mut sink),
    };
    match result {
        Ok(summary) => debug!(frames = summary.frames, "Render worker finished"),
        // The viewer went away first; nothing left to report to.
        Err(RenderError::Presentation(msg)) => debug!("Render worker detached: {msg}"),
        Err(e) => {
            error!("Render worker failed: {e}");
            let _ = sink.tx.send(WorkerEvent::Failed(e.to_string()));
            sink.ctx.request_repaint();
        }
    }
}
