//! Visual styling for the curva display.

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};

/// Theme colors for the equalizer view.
pub struct Theme {
    /// Main window background color.
    pub background: Color32,
    /// Curve-view background color.
    pub view_bg: Color32,
    /// Response-curve stroke color.
    pub curve: Color32,
    /// Grid line color.
    pub grid: Color32,
    /// Grid label color.
    pub grid_label: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
    /// Knob background track color.
    pub knob_track: Color32,
    /// Knob filled arc color.
    pub knob_fill: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(26, 26, 26),
            view_bg: Color32::from_rgb(18, 18, 18),
            curve: Color32::from_rgb(88, 224, 248),
            grid: Color32::from_rgb(49, 49, 49),
            grid_label: Color32::from_rgb(143, 143, 143),
            text_primary: Color32::from_rgb(220, 220, 225),
            text_secondary: Color32::from_rgb(143, 143, 143),
            knob_track: Color32::from_rgb(49, 49, 49),
            knob_fill: Color32::from_rgb(88, 224, 248),
        }
    }
}

impl Theme {
    /// Applies the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.view_bg;

        visuals.widgets.noninteractive.bg_fill = self.background;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(4);

        visuals.widgets.inactive.bg_fill = Color32::from_rgb(38, 38, 42);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(4);

        visuals.widgets.hovered.bg_fill = Color32::from_rgb(48, 48, 52);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.curve);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(4);

        visuals.widgets.active.bg_fill = Color32::from_rgb(58, 58, 64);
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.curve);
        visuals.widgets.active.corner_radius = CornerRadius::same(4);

        visuals.selection.bg_fill = self.curve.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.curve);
        visuals.override_text_color = Some(self.text_primary);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.window_margin = egui::Margin::same(12);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }
}
