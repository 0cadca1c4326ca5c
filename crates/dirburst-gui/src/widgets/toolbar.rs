/// Top action bar -- path entry, scan control, theme toggle and branding.
use crate::state::{AppPhase, AppState};
use crate::theme::DirBurstTheme;
use egui::Ui;
use std::path::PathBuf;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState, theme: &DirBurstTheme) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("☀ DirBurst")
                .size(18.0)
                .strong()
                .color(theme.accent),
        );

        ui.separator();

        let scanning = state.phase == AppPhase::Scanning;
        let path_edit = ui.add_enabled(
            !scanning,
            egui::TextEdit::singleline(&mut state.scan_path)
                .hint_text("Directory to scan")
                .desired_width(360.0),
        );
        let submitted = path_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let can_scan = !scanning && !state.scan_path.trim().is_empty();
        let scan_btn = ui.add_enabled(
            can_scan,
            egui::Button::new("▶ Scan").min_size(egui::vec2(70.0, 28.0)),
        );
        if can_scan && (scan_btn.clicked() || submitted) {
            let path = PathBuf::from(state.scan_path.trim());
            state.start_scan(path);
        }

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // About button.
            if ui.button("ℹ").on_hover_text("About DirBurst").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }

            // Skipped-entry list, only when the last scan skipped something.
            let skipped = state
                .scan_stats
                .as_ref()
                .map_or(0, |s| s.skipped.len());
            if skipped > 0 {
                ui.separator();
                let label =
                    egui::RichText::new(format!("⚠ {skipped} skipped")).color(theme.warning);
                if ui
                    .button(label)
                    .on_hover_text("Entries that could not be read")
                    .clicked()
                {
                    state.show_skipped = !state.show_skipped;
                }
            }
        });
    });
}
