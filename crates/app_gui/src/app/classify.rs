//! Image classification screen.

use super::UiApp;
use eframe::egui;
use labelflow_core::{SessionState, WorkflowError};

impl UiApp {
    pub(super) fn render_classify_panel(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        for key in pressed_keys(ctx) {
            self.on_key(key);
        }

        Self::heading(ui, "Classify Images");
        let session = self.workflow.session();
        let progress = session.progress();
        let state = session.state();
        let legend = session.labels().legend();
        let current = session.current_image().map(|p| p.to_path_buf());

        ui.vertical_centered(|ui| {
            ui.label(progress.caption());
        });
        ui.add(egui::ProgressBar::new(progress.fraction()).show_percentage());
        ui.add_space(8.0);

        let footer_height = 90.0;
        let avail = egui::vec2(
            ui.available_width(),
            (ui.available_height() - footer_height).max(120.0),
        );
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_size(avail - egui::vec2(16.0, 16.0));
            ui.centered_and_justified(|ui| match &current {
                Some(path) => match self.texture_for(ctx, path) {
                    Some(tex) => {
                        let size = fit_within(tex.size_vec2(), avail - egui::vec2(36.0, 36.0));
                        ui.image((tex.id(), size));
                    }
                    None => {
                        ui.label("Unable to load image");
                    }
                },
                None => {
                    ui.label("All images classified!");
                }
            });
        });

        ui.vertical_centered(|ui| {
            if state == SessionState::Complete {
                ui.label("All images classified. Click 'Next' to continue.");
            } else {
                ui.label("Press the assigned keyboard shortcut to classify the current image.");
                ui.label(legend);
            }
        });

        let clicks = Self::nav_buttons(ui, true, Some("Next →"));
        if clicks.back {
            self.workflow.back();
            self.current_texture = None;
            self.status.clear();
        } else if clicks.next {
            match self.workflow.go_to_export() {
                Ok(()) => self.status.clear(),
                Err(e) => self.set_status(e.to_string()),
            }
        }
    }

    fn on_key(&mut self, key: char) {
        match self.workflow.classify(key) {
            Ok(record) => {
                tracing::debug!("{} -> {}", record.image_path.display(), record.label);
            }
            Err(WorkflowError::Session(e)) => {
                tracing::debug!("key ignored: {e}");
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }
}

/// Characters typed this frame, one per physical key-down.
fn pressed_keys(ctx: &egui::Context) -> Vec<char> {
    ctx.input(|i| typed_keys(&i.events))
}

/// Pairs key-downs with the text they produced.
///
/// The typed text is authoritative, so layouts and symbols without an
/// [`egui::Key`] variant still arrive as the character the user sees. Text
/// that follows an auto-repeat key-down is dropped. When a frame carries
/// key-downs but no text, single-character key names (`A`, `7`) are used.
fn typed_keys(events: &[egui::Event]) -> Vec<char> {
    let mut typed = Vec::new();
    let mut fallback = Vec::new();
    let mut skip_text = false;
    for event in events {
        match event {
            egui::Event::Key {
                key,
                pressed: true,
                repeat,
                modifiers,
                ..
            } => {
                if modifiers.command || modifiers.ctrl || modifiers.alt {
                    skip_text = true;
                    continue;
                }
                skip_text = *repeat;
                if !*repeat {
                    fallback.extend(key_name_char(*key));
                }
            }
            egui::Event::Text(text) => {
                if !std::mem::take(&mut skip_text) {
                    typed.extend(text.chars().filter(|c| !c.is_control()));
                }
            }
            _ => {}
        }
    }
    if typed.is_empty() { fallback } else { typed }
}

fn key_name_char(key: egui::Key) -> Option<char> {
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Some(c),
        _ => None,
    }
}

/// Scale `size` to fit inside `bounds`, keeping aspect ratio.
fn fit_within(size: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = (bounds.x / size.x).min(bounds.y / size.y).max(0.0);
    size * scale
}
