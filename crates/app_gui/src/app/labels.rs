//! Label creation screen.

use super::UiApp;
use eframe::egui;

impl UiApp {
    pub(super) fn render_labels_panel(&mut self, ui: &mut egui::Ui) {
        Self::heading(ui, "Create Classification Labels");
        ui.vertical_centered(|ui| {
            ui.label("Create labels for classification and assign keyboard shortcuts to them.");
            ui.label("For example, create a label 'cat' and assign the shortcut 'C' to it.");
        });
        ui.add_space(12.0);

        let mut submit = false;
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Label Name:");
                let resp = ui.text_edit_singleline(&mut self.label_input);
                submit |= resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            });
            ui.vertical(|ui| {
                ui.label("Keyboard Shortcut:");
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.shortcut_input)
                        .char_limit(1)
                        .desired_width(48.0),
                );
                submit |= resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            });
            ui.vertical(|ui| {
                ui.label(" ");
                submit |= ui.button("Add Label").clicked();
            });
        });
        if submit {
            self.add_label_from_inputs();
        }

        ui.add_space(10.0);
        ui.label("Current Labels:");
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_height(120.0);
            ui.set_width(ui.available_width());
            egui::ScrollArea::vertical()
                .max_height(200.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for label in self.workflow.labels().iter() {
                        let text = format!("{}: {}", label.shortcut, label.text);
                        ui.selectable_value(&mut self.selected_label, Some(label.shortcut), text);
                    }
                });
        });

        if ui
            .add_enabled(
                self.selected_label.is_some(),
                egui::Button::new("Remove Selected Label"),
            )
            .clicked()
            && let Some(key) = self.selected_label.take()
        {
            match self.workflow.remove_label(&key.to_string()) {
                Ok(label) => self.set_status(format!("Removed {}: {}", label.shortcut, label.text)),
                Err(e) => self.set_status(e.to_string()),
            }
        }

        let clicks = Self::nav_buttons(ui, true, Some("Next →"));
        if clicks.back {
            self.workflow.back();
            self.status.clear();
        } else if clicks.next {
            match self.workflow.go_to_classify() {
                Ok(()) => {
                    self.current_texture = None;
                    self.status.clear();
                }
                Err(e) => self.set_status(e.to_string()),
            }
        }
    }

    fn add_label_from_inputs(&mut self) {
        match self
            .workflow
            .add_label(&self.shortcut_input, &self.label_input)
        {
            Ok(key) => {
                tracing::info!("label {key} added");
                self.label_input.clear();
                self.shortcut_input.clear();
                self.status.clear();
            }
            Err(e) => self.set_status(e.to_string()),
        }
    }
}
