/// Bottom status bar — scan progress and statistics.
use crate::state::{AppPhase, AppState};
use crate::theme::DirBurstTheme;
use dirburst_core::model::size::{format_count, format_size};
use egui::Ui;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState, theme: &DirBurstTheme) {
    ui.horizontal(|ui| match state.phase {
        AppPhase::Idle => {
            ui.label(egui::RichText::new("Ready").size(12.0).color(theme.text_muted));
        }
        AppPhase::Scanning => {
            // Animated spinner.
            ui.spinner();

            let counters = &state.scan_counters;
            let display_path = truncate_path(&counters.current_path, 60);
            ui.label(
                egui::RichText::new(format!("Scanning {display_path}..."))
                    .size(12.0)
                    .color(theme.text_primary),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} files", format_count(counters.files_found)))
                    .size(12.0)
                    .color(theme.text_primary),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} dirs", format_count(counters.dirs_found)))
                    .size(12.0)
                    .color(theme.text_primary),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format_size(counters.total_size))
                    .size(12.0)
                    .color(theme.accent),
            );
        }
        AppPhase::Results => {
            let Some(tree) = state.tree.as_ref() else {
                return;
            };
            ui.label(
                egui::RichText::new("\u{2713} Ready")
                    .size(12.0)
                    .color(theme.success),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format!("{} files", format_count(tree.total_files())))
                    .size(12.0)
                    .color(theme.text_primary),
            );
            ui.separator();
            ui.label(
                egui::RichText::new(format_size(tree.total_size()))
                    .size(12.0)
                    .color(theme.accent),
            );

            if let Some(stats) = state.scan_stats.as_ref() {
                ui.separator();
                ui.label(
                    egui::RichText::new(format!("{:.1}s", stats.duration.as_secs_f64()))
                        .size(12.0)
                        .color(theme.text_muted),
                );
                if stats.excluded > 0 {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} excluded",
                            format_count(stats.excluded)
                        ))
                        .size(12.0)
                        .color(theme.text_muted),
                    );
                }
                if !stats.skipped.is_empty() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!(
                            "{} skipped",
                            format_count(stats.skipped.len() as u64)
                        ))
                        .size(12.0)
                        .color(theme.warning),
                    );
                }
            }
        }
        AppPhase::Failed => {
            let message = state.scan_error.as_deref().unwrap_or("scan failed");
            ui.label(
                egui::RichText::new(format!("\u{2717} {message}"))
                    .size(12.0)
                    .color(theme.error),
            );
        }
    });
}

/// Truncate a path string to fit within `max_len` characters,
/// replacing the middle with "..." if needed.
fn truncate_path(path: &str, max_len: usize) -> String {
    let chars: Vec<char> = path.chars().collect();
    if chars.len() <= max_len {
        return path.to_string();
    }
    let half = (max_len - 3) / 2;
    let head: String = chars[..half].iter().collect();
    let tail: String = chars[chars.len() - half..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::truncate_path;

    #[test]
    fn test_truncate_path_keeps_short_paths() {
        assert_eq!(truncate_path("/tmp/a", 60), "/tmp/a");
    }

    #[test]
    fn test_truncate_path_elides_middle() {
        let long = format!("/{}", "ü".repeat(100));
        let short = truncate_path(&long, 21);
        assert_eq!(short.chars().count(), 21);
        assert!(short.starts_with("/üüüüüüüü"));
        assert!(short.contains("..."));
    }
}
