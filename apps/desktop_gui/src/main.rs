//! Student roster desktop window.

mod config;
mod controller;
mod ui;

use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = config::load_settings();
    tracing::info!(
        title = %settings.window_title,
        width = settings.window_width,
        height = settings.window_height,
        "starting student roster"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size(settings.inner_size())
            .with_min_inner_size(config::Settings::min_inner_size()),
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(|_cc| Ok(Box::new(ui::RosterApp::new()))),
    )
}
