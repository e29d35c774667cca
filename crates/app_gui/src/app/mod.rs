//! The four Label Flow screens, drawn as thin views over [`Workflow`].

mod classify;
mod export;
mod folder;
mod labels;

use anyhow::{Context, Result};
use eframe::{App, Frame, egui};
use labelflow_core::{AppConfig, Step, Workflow};
use std::path::{Path, PathBuf};

/// Longest edge of the texture uploaded for the current image.
const MAX_TEXTURE_EDGE: u32 = 1600;

pub struct UiApp {
    config: AppConfig,
    workflow: Workflow,
    status: String,
    label_input: String,
    shortcut_input: String,
    selected_label: Option<char>,
    current_texture: Option<CurrentTexture>,
}

struct CurrentTexture {
    path: PathBuf,
    handle: Option<egui::TextureHandle>,
}

/// Navigation buttons pressed this frame.
#[derive(Default)]
struct NavClicks {
    back: bool,
    next: bool,
}

impl UiApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            workflow: Workflow::new(config.scan),
            config,
            status: String::new(),
            label_input: String::new(),
            shortcut_input: String::new(),
            selected_label: None,
            current_texture: None,
        }
    }

    fn heading(ui: &mut egui::Ui, title: &str) {
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new(title).strong().size(22.0));
        });
        ui.add_space(8.0);
    }

    fn nav_buttons(ui: &mut egui::Ui, show_back: bool, next_text: Option<&str>) -> NavClicks {
        let mut clicks = NavClicks::default();
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if show_back {
                clicks.back = ui.button("← Back").clicked();
            }
            if let Some(text) = next_text {
                clicks.next = ui
                    .add(egui::Button::new(text).min_size(egui::vec2(120.0, 32.0)))
                    .clicked();
            }
        });
        clicks
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// Texture for `path`, loading it on first request. `None` when the file
    /// cannot be decoded.
    fn texture_for(&mut self, ctx: &egui::Context, path: &Path) -> Option<egui::TextureHandle> {
        if let Some(current) = &self.current_texture
            && current.path == path
        {
            return current.handle.clone();
        }
        let handle = match load_texture(ctx, path) {
            Ok(tex) => Some(tex),
            Err(e) => {
                tracing::warn!("Failed to load image {}: {e:#}", path.display());
                None
            }
        };
        self.current_texture = Some(CurrentTexture {
            path: path.to_path_buf(),
            handle: handle.clone(),
        });
        handle
    }
}

fn load_texture(ctx: &egui::Context, path: &Path) -> Result<egui::TextureHandle> {
    let mut img = image::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    if img.width() > MAX_TEXTURE_EDGE || img.height() > MAX_TEXTURE_EDGE {
        img = img.thumbnail(MAX_TEXTURE_EDGE, MAX_TEXTURE_EDGE);
    }
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    let name = format!("image:{}", path.display());
    Ok(ctx.load_texture(name, color, egui::TextureOptions::LINEAR))
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let step = match self.workflow.step() {
                    Step::Folder => "1/4 Folder",
                    Step::Labels => "2/4 Labels",
                    Step::Classify => "3/4 Classify",
                    Step::Export => "4/4 Export",
                };
                ui.weak(step);
                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.workflow.step() {
            Step::Folder => self.render_folder_panel(ui),
            Step::Labels => self.render_labels_panel(ui),
            Step::Classify => self.render_classify_panel(ctx, ui),
            Step::Export => self.render_export_panel(ui),
        });
    }
}
