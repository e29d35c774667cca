//! Export screen.

use super::UiApp;
use chrono::{DateTime, Local};
use eframe::egui;
use rfd::FileDialog;
use std::path::Path;

/// Results are written as CSV, which spreadsheet programs open directly.
const EXPORT_FILTER_NAME: &str = "Spreadsheet (CSV)";
const EXPORT_EXTENSIONS: [&str; 1] = ["csv"];

impl UiApp {
    pub(super) fn render_export_panel(&mut self, ui: &mut egui::Ui) {
        Self::heading(ui, "Export Results");
        let count = self.workflow.session().records().len();
        ui.vertical_centered(|ui| {
            ui.label(format!("{count} images classified"));
            ui.add_space(8.0);
            ui.label(
                "Click the button below to export your classification results to a CSV spreadsheet.",
            );
            ui.label("The file will contain two columns: 'image_path' and 'label'.");
            ui.add_space(12.0);
            let button = egui::Button::new(format!("Export to {EXPORT_FILTER_NAME}"))
                .min_size(egui::vec2(200.0, 40.0));
            if ui.add(button).clicked() {
                self.export_with_dialog();
            }
        });

        let clicks = Self::nav_buttons(ui, true, None);
        if clicks.back {
            self.workflow.back();
            self.status.clear();
        }
    }

    fn export_with_dialog(&mut self) {
        let suggested = timestamped_file_name(&self.config.export.default_file_name, Local::now());
        let mut dialog = FileDialog::new()
            .add_filter(EXPORT_FILTER_NAME, &EXPORT_EXTENSIONS)
            .set_file_name(&suggested);
        if let Some(root) = self.workflow.manifest().map(|m| m.root().to_path_buf()) {
            dialog = dialog.set_directory(root);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };
        match self.workflow.export(&path) {
            Ok(n) => self.set_status(format!("Results exported to {} ({n} rows)", path.display())),
            Err(e) => {
                tracing::error!("export failed: {e}");
                self.set_status(format!("Failed to export results: {e}"));
            }
        }
    }
}

/// `labels.csv` becomes `labels_2026-10-17_1430.csv`.
fn timestamped_file_name(default_name: &str, now: DateTime<Local>) -> String {
    let path = Path::new(default_name);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "labels".to_string());
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| "csv".to_string());
    format!("{stem}_{}.{ext}", now.format("%Y-%m-%d_%H%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use labelflow_core::AppConfig;
    use rstest::rstest;

    #[rstest]
    #[case("labels.csv", "labels_2026-10-17_1430.csv")]
    #[case("dataset", "dataset_2026-10-17_1430.csv")]
    #[case("run.v2.csv", "run.v2_2026-10-17_1430.csv")]
    fn suggested_names_carry_a_timestamp(#[case] default_name: &str, #[case] expected: &str) {
        let now = Local.with_ymd_and_hms(2026, 10, 17, 14, 30, 0).unwrap();
        assert_eq!(timestamped_file_name(default_name, now), expected);
    }

    #[test]
    fn default_suggestion_matches_the_save_filter() {
        let now = Local.with_ymd_and_hms(2026, 10, 17, 9, 5, 0).unwrap();
        let name = timestamped_file_name(&AppConfig::default().export.default_file_name, now);
        let ext = Path::new(&name).extension().unwrap().to_string_lossy().to_string();
        assert!(EXPORT_EXTENSIONS.contains(&ext.as_str()));
        assert!(EXPORT_FILTER_NAME.contains("CSV"));
    }
}
