mod app;

use anyhow::anyhow;
use eframe::{NativeOptions, egui};
use labelflow_core::{AppConfig, CONFIG_FILE_NAME};
use std::path::PathBuf;

use crate::app::UiApp;

const APP_VERSION: &str = env!("LABELFLOW_VERSION");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = match config_path() {
        Some(path) => AppConfig::load_or_default(&path),
        None => AppConfig::default(),
    };
    let title = format!("{} {APP_VERSION}", config.ui.window_title);
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title(title.clone()),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(UiApp::new(config)))),
    )
    .map_err(|e| anyhow!("Application stopped with error: {e}"))
}

fn config_path() -> Option<PathBuf> {
    directories_next::ProjectDirs::from("org", "labelflow", "LabelFlow")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
