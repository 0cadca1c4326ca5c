/// Colour scheme and visual theme for DirBurst.
///
/// Arc fills come from the chart engine; everything around them (panels,
/// arc outlines, tooltip, navigation button) is defined here so widgets
/// reference named roles rather than raw hex codes.
use dirburst_core::color::Rgb;
use egui::{Color32, Stroke, Visuals};

/// Semantic colour palette for DirBurst.
pub struct DirBurstTheme {
    pub dark: bool,
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub success: Color32,
    pub separator: Color32,
    /// Outline drawn between neighbouring arcs.
    pub arc_stroke: Color32,
    /// Text drawn on top of arcs.
    pub arc_label: Color32,
    pub tooltip_bg: Color32,
    pub tooltip_text: Color32,
    /// The "Go Back" navigation button.
    pub back_button: Color32,
}

/// Orange of the "Go Back" button, shared by both modes.
const NAV_ORANGE: Color32 = Color32::from_rgb(0xff, 0x98, 0x00);

impl DirBurstTheme {
    /// Dark graphite theme — the default.
    pub fn dark() -> Self {
        Self {
            dark: true,
            background: Color32::from_rgb(0x1b, 0x1d, 0x22),
            surface: Color32::from_rgb(0x25, 0x28, 0x2e),
            surface_hover: Color32::from_rgb(0x31, 0x35, 0x3d),
            text_primary: Color32::from_rgb(0xe8, 0xe6, 0xe3),
            text_muted: Color32::from_rgb(0x8b, 0x8f, 0x98),
            accent: Color32::from_rgb(0xff, 0xb7, 0x4d),
            error: Color32::from_rgb(0xef, 0x6b, 0x6b),
            warning: NAV_ORANGE,
            success: Color32::from_rgb(0x7c, 0xcf, 0x8a),
            separator: Color32::from_rgb(0x3b, 0x3f, 0x48),
            arc_stroke: Color32::from_rgb(0x1b, 0x1d, 0x22),
            arc_label: Color32::WHITE,
            tooltip_bg: Color32::from_black_alpha(0xc0),
            tooltip_text: Color32::WHITE,
            back_button: NAV_ORANGE,
        }
    }

    /// Light theme: white strokes on a paper background.
    pub fn light() -> Self {
        Self {
            dark: false,
            background: Color32::from_rgb(0xfa, 0xf8, 0xf5),
            surface: Color32::WHITE,
            surface_hover: Color32::from_rgb(0xee, 0xeb, 0xe6),
            text_primary: Color32::from_rgb(0x26, 0x28, 0x2d),
            text_muted: Color32::from_rgb(0x80, 0x83, 0x8a),
            accent: Color32::from_rgb(0xd9, 0x6c, 0x00),
            error: Color32::from_rgb(0xc6, 0x28, 0x28),
            warning: Color32::from_rgb(0xe0, 0x7b, 0x00),
            success: Color32::from_rgb(0x2e, 0x8b, 0x3e),
            separator: Color32::from_rgb(0xdd, 0xd9, 0xd2),
            arc_stroke: Color32::WHITE,
            arc_label: Color32::WHITE,
            tooltip_bg: Color32::from_black_alpha(0xb3),
            tooltip_text: Color32::WHITE,
            back_button: NAV_ORANGE,
        }
    }

    /// Get the theme for the given mode.
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Install this palette as the egui style of `ctx`.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = if self.dark {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.background;
        visuals.window_fill = self.surface;
        visuals.faint_bg_color = self.surface;
        visuals.window_stroke = Stroke::new(1.0, self.separator);
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.accent.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        let widgets = &mut visuals.widgets;
        widgets.noninteractive.bg_fill = self.surface;
        widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        widgets.inactive.bg_fill = self.surface_hover;
        widgets.inactive.weak_bg_fill = self.surface_hover;
        widgets.hovered.bg_fill = self.surface_hover;
        widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);
        widgets.active.bg_fill = self.accent;
        widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        ctx.style_mut(|style| {
            style.visuals = visuals;
            style.spacing.item_spacing = egui::vec2(6.0, 4.0);
            style.spacing.button_padding = egui::vec2(10.0, 4.0);
        });
    }

    /// Fill of a hovered arc: its own colour washed towards white.
    pub fn hover_fill(&self, fill: Color32) -> Color32 {
        lerp_color(fill, Color32::WHITE, 0.25)
    }
}

/// Convert an engine colour to egui.
pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_fill_lightens() {
        let theme = DirBurstTheme::dark();
        let hovered = theme.hover_fill(Color32::from_rgb(0, 100, 200));
        assert_eq!(hovered, Color32::from_rgb(64, 139, 214));
    }

    #[test]
    fn test_engine_colour_conversion() {
        assert_eq!(to_color32(Rgb::new(1, 2, 3)), Color32::from_rgb(1, 2, 3));
    }
}
