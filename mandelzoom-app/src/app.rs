use std::fs;

use eframe::egui;
use tracing::{error, info};

use mandelzoom_render::{export_png, ExportMetadata, FrameBuffer, FrameInfo};

use crate::app_state::AppScreen;
use crate::preferences::AppPreferences;
use crate::render_bridge::WorkerHandle;

pub(crate) const HUD_MARGIN: f32 = 8.0;
pub(crate) const HUD_CORNER_RADIUS: f32 = 6.0;

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct MandelZoomApp {
    pub(crate) screen: AppScreen,
    pub(crate) preferences: AppPreferences,

    // Render worker
    pub(crate) worker: Option<WorkerHandle>,
    /// Newest frame received, kept for snapshot export.
    pub(crate) latest: Option<(FrameInfo, FrameBuffer)>,
    pub(crate) texture: Option<egui::TextureHandle>,

    /// Last worker failure or export result, shown in the HUD.
    pub(crate) status: Option<String>,
}

impl MandelZoomApp {
    pub(crate) fn new(preferences: AppPreferences) -> Self {
        Self {
            screen: AppScreen::MainMenu,
            preferences,
            worker: None,
            latest: None,
            texture: None,
            status: None,
        }
    }

    /// Save the newest frame as a PNG in the images directory.
    pub(crate) fn export_snapshot(&mut self) {
        let (Some(worker), Some((info, frame))) = (self.worker.as_ref(), self.latest.as_ref())
        else {
            return;
        };
        let dir = crate::app_dir::images_directory();
        if let Err(e) = fs::create_dir_all(&dir) {
            error!("Failed to create images directory: {e}");
            self.status = Some(format!("Export failed: {e}"));
            return;
        }
        let path = dir.join(format!(
            "mandelzoom_{}x{}_frame{:05}.png",
            frame.width(),
            frame.height(),
            info.index
        ));
        let metadata = ExportMetadata {
            view: info.view,
            max_iteration: worker.config.max_iteration,
            color_mode: worker.config.color_mode,
            frame_index: info.index,
        };
        self.status = Some(match export_png(frame, &path, &metadata) {
            Ok(()) => {
                info!("Saved snapshot to {}", path.display());
                format!("Saved {}", path.display())
            }
            Err(e) => {
                error!("{e}");
                e.to_string()
            }
        });
    }

    fn update_viewer(&mut self, ctx: &egui::Context) {
        self.poll_frames(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                if let Some(ref tex) = self.texture {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    let rect = fit_rect(response.rect, tex.size_vec2());
                    painter.image(tex.id(), rect, uv, egui::Color32::WHITE);
                } else {
                    painter.text(
                        response.rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Rendering\u{2026}",
                        egui::FontId::proportional(16.0),
                        egui::Color32::from_gray(140),
                    );
                }
            });

        self.show_hud(ctx);

        let (escape, back, save, hud) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::H),
            )
        });
        if escape {
            self.stop_worker();
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        } else if back {
            self.stop_worker();
            self.screen = AppScreen::MainMenu;
        }
        if save {
            self.export_snapshot();
        }
        if hud {
            self.preferences.show_hud = !self.preferences.show_hud;
        }
    }
}

/// Largest rect with the texture's aspect ratio centred inside `outer`.
fn fit_rect(outer: egui::Rect, size: egui::Vec2) -> egui::Rect {
    if size.x <= 0.0 || size.y <= 0.0 {
        return outer;
    }
    let scale = (outer.width() / size.x).min(outer.height() / size.y);
    egui::Rect::from_center_size(outer.center(), size * scale)
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for MandelZoomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        match self.screen {
            AppScreen::MainMenu => self.draw_main_menu(ctx),
            AppScreen::Viewer => self.update_viewer(ctx),
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.stop_worker();
        self.preferences.save();
        info!("Saved preferences on exit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_rect_letterboxes_wide_texture() {
        let outer = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 800.0));
        let r = fit_rect(outer, egui::vec2(1280.0, 800.0));
        assert!((r.width() - 800.0).abs() < 1e-3);
        assert!((r.height() - 500.0).abs() < 1e-3);
        assert_eq!(r.center(), outer.center());
    }

    #[test]
    fn fit_rect_ignores_empty_texture() {
        let outer = egui::Rect::from_min_size(egui::pos2(5.0, 5.0), egui::vec2(10.0, 10.0));
        assert_eq!(fit_rect(outer, egui::Vec2::ZERO), outer);
    }
}
