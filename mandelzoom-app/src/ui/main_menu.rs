use eframe::egui;

use mandelzoom_core::{AnimationRate, ColorMode};

use crate::app::MandelZoomApp;
use crate::app_state::ViewMode;

const TILE_CORNER_RADIUS: f32 = 4.0;
const CYAN: egui::Color32 = egui::Color32::from_rgb(80, 200, 255);

enum MenuAction {
    None,
    Start(ViewMode),
    Exit,
}

impl MandelZoomApp {
    pub(crate) fn draw_main_menu(&mut self, ctx: &egui::Context) {
        let static_desc = self.format_static_details();
        let zoom_desc = self.format_zoom_details();

        let mut action = MenuAction::None;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let available = ui.available_size();

                let outer_margin = 32.0_f32;
                let tile_gap = 16.0_f32;

                let tile_width =
                    ((available.x - outer_margin * 2.0 - tile_gap * 2.0) / 3.0).clamp(140.0, 320.0);
                let tile_height = (available.y * 0.55).clamp(220.0, 420.0);

                let total_width = tile_width * 3.0 + tile_gap * 2.0;
                let x_offset = (available.x - total_width).max(0.0) / 2.0;
                let y_offset = (available.y - tile_height - 60.0).max(0.0) / 2.0;

                ui.add_space(y_offset);

                ui.horizontal(|ui| {
                    ui.add_space(x_offset);

                    if draw_tile(ui, tile_width, tile_height, "Single Set", &static_desc).clicked()
                    {
                        action = MenuAction::Start(ViewMode::Static);
                    }
                    ui.add_space(tile_gap);

                    if draw_tile(ui, tile_width, tile_height, "Continuous Zoom", &zoom_desc)
                        .clicked()
                    {
                        action = MenuAction::Start(ViewMode::Animated);
                    }
                    ui.add_space(tile_gap);

                    let exit_desc = "Close the window.\n\nEsc quits from\nany screen.";
                    if draw_tile(ui, tile_width, tile_height, "Exit", exit_desc).clicked() {
                        action = MenuAction::Exit;
                    }
                });

                ui.add_space(20.0);
                ui.horizontal(|ui| {
                    ui.add_space(x_offset);
                    self.draw_run_options(ui);
                });
            });

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            action = MenuAction::Exit;
        }

        match action {
            MenuAction::Start(mode) => self.start_worker(ctx, mode),
            MenuAction::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            MenuAction::None => {}
        }
    }

    fn draw_run_options(&mut self, ui: &mut egui::Ui) {
        ui.style_mut().visuals.override_text_color = Some(egui::Color32::from_gray(180));

        ui.label("Zoom rate:");
        let custom = self.preferences.animation_rate.is_none();
        if ui.selectable_label(custom, "Custom").clicked() {
            self.preferences.animation_rate = None;
        }
        for rate in AnimationRate::ALL {
            let selected = self.preferences.animation_rate == Some(rate);
            if ui.selectable_label(selected, rate.label()).clicked() {
                self.preferences.animation_rate = Some(rate);
            }
        }

        ui.add_space(24.0);
        ui.label("Colouring:");
        for mode in [ColorMode::Table, ColorMode::Inline] {
            ui.selectable_value(&mut self.preferences.render.color_mode, mode, mode.label());
        }

        ui.add_space(24.0);
        ui.checkbox(&mut self.preferences.render.parallel, "Tiled (parallel)");
    }

    fn format_static_details(&self) -> String {
        let r = &self.preferences.render;
        format!(
            "Render the whole set once\nand hold it on screen.\n\n\
             {}\u{00d7}{}\nIterations: {}",
            r.width, r.height, r.max_iteration
        )
    }

    fn format_zoom_details(&self) -> String {
        let cfg = self.preferences.session_config();
        format!(
            "Zoom in towards the left\nedge of the set, frame\nafter frame.\n\n\
             Zoom +{} / frame\nOffset +{} / frame",
            cfg.zoom_step, cfg.offset_step
        )
    }
}

fn draw_tile(
    ui: &mut egui::Ui,
    width: f32,
    height: f32,
    title: &str,
    details: &str,
) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        let bg = if response.hovered() {
            egui::Color32::from_rgb(32, 32, 40)
        } else {
            egui::Color32::from_rgb(20, 20, 26)
        };
        painter.rect_filled(rect, TILE_CORNER_RADIUS, bg);

        let border_color = if response.hovered() {
            egui::Color32::from_gray(70)
        } else {
            egui::Color32::from_gray(42)
        };
        painter.rect_stroke(
            rect,
            TILE_CORNER_RADIUS,
            egui::Stroke::new(0.5, border_color),
            egui::StrokeKind::Inside,
        );

        let inner = rect.shrink(16.0);
        let title_y = inner.min.y + 12.0;
        painter.text(
            egui::pos2(inner.center().x, title_y),
            egui::Align2::CENTER_TOP,
            title,
            egui::FontId::proportional(17.0),
            CYAN,
        );

        let details_y = title_y + 36.0;
        for (i, line) in details.lines().enumerate() {
            painter.text(
                egui::pos2(inner.center().x, details_y + i as f32 * 16.0),
                egui::Align2::CENTER_TOP,
                line,
                egui::FontId::proportional(12.0),
                egui::Color32::from_gray(150),
            );
        }
    }

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    response
}
