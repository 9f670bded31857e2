use eframe::egui;

use crate::app::{MandelZoomApp, HUD_CORNER_RADIUS, HUD_MARGIN};

const KEY_HINTS: &str = "S save \u{00b7} H hud \u{00b7} Backspace menu \u{00b7} Esc quit";

impl MandelZoomApp {
    pub(crate) fn show_hud(&self, ctx: &egui::Context) {
        if !self.preferences.show_hud {
            return;
        }
        let Some(ref worker) = self.worker else {
            return;
        };

        egui::Area::new(egui::Id::new("hud_frame"))
            .anchor(egui::Align2::LEFT_TOP, [HUD_MARGIN, HUD_MARGIN])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(170))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(220, 220, 220));
                        ui.style_mut().spacing.item_spacing.y = 2.0;

                        ui.label(format!("Mode: {}", worker.mode.label()));
                        ui.label(format!(
                            "Iterations: {}  ({})",
                            worker.config.max_iteration,
                            worker.config.color_mode.label()
                        ));

                        match self.latest {
                            Some((ref info, _)) => {
                                ui.label(format!("Frame: {}", info.index));
                                ui.label(format!("Zoom: {:.2}", info.view.zoom));
                                ui.label(format!("Offset: {:.2}", info.view.offset));
                                let ms = info.stats.elapsed.as_secs_f64() * 1000.0;
                                let tiles = if info.stats.tiles > 0 {
                                    format!(", {} tiles", info.stats.tiles)
                                } else {
                                    String::new()
                                };
                                ui.label(format!("Render: {ms:.1} ms{tiles}"));
                            }
                            None => {
                                ui.label("Frame: \u{2013}");
                            }
                        }

                        if let Some(ref status) = self.status {
                            ui.colored_label(egui::Color32::from_rgb(255, 180, 50), status);
                        }

                        ui.add_space(4.0);
                        ui.label(
                            egui::RichText::new(KEY_HINTS)
                                .small()
                                .color(egui::Color32::from_gray(140)),
                        );
                    });
            });
    }
}
