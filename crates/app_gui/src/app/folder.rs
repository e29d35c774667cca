//! Folder selection screen.

use super::UiApp;
use eframe::egui;
use rfd::FileDialog;

impl UiApp {
    pub(super) fn render_folder_panel(&mut self, ui: &mut egui::Ui) {
        Self::heading(ui, "Select Image Folder");
        ui.vertical_centered(|ui| {
            ui.label(
                "This application will help you classify images for training machine learning models.",
            );
            ui.add_space(6.0);
            ui.label("Please select a folder containing the images you want to classify.");
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            let mut shown = self
                .workflow
                .folder()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            ui.add(
                egui::TextEdit::singleline(&mut shown)
                    .interactive(false)
                    .desired_width(ui.available_width() - 90.0),
            );
            if ui.button("Browse").clicked()
                && let Some(dir) = FileDialog::new().set_directory(".").pick_folder()
            {
                match self.workflow.choose_folder(dir) {
                    Ok(()) => self.status.clear(),
                    Err(e) => self.set_status(e.to_string()),
                }
            }
        });

        let clicks = Self::nav_buttons(ui, false, Some("Next →"));
        if clicks.next {
            match self.workflow.go_to_labels() {
                Ok(count) => self.set_status(format!("{count} images found")),
                Err(e) => self.set_status(e.to_string()),
            }
        }
    }
}
