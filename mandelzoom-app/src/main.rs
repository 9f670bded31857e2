mod app;
mod app_dir;
mod app_state;
mod preferences;
mod render_bridge;
mod ui;

use eframe::egui;
use tracing::{error, info};

use app::MandelZoomApp;
use preferences::AppPreferences;

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting MandelZoom");

    let prefs = AppPreferences::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MandelZoom")
            .with_inner_size([prefs.render.width as f32, prefs.render.height as f32]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "MandelZoom",
        options,
        Box::new(move |_cc| Ok(Box::new(MandelZoomApp::new(prefs)))),
    );
    if let Err(ref e) = result {
        error!("Display initialisation failed: {e}");
    }
    result
}
