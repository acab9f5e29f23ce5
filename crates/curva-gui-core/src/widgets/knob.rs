//! Descriptor-driven rotary knob.
//!
//! - Drag to adjust, Shift for fine control
//! - Double-click to reset to the descriptor default
//! - Editing happens in normalized space, so logarithmic frequency
//!   ranges feel uniform under the cursor
//! - Choice parameters snap to whole indices and display their label

use curva_core::{ParamDescriptor, ParamKind, ParamUnit};
use egui::{Color32, Pos2, Response, Sense, Stroke, Ui, Widget, pos2, vec2};
use std::f32::consts::PI;

/// Formats a plain value for display under the knob.
pub fn format_value(desc: &ParamDescriptor, value: f32) -> String {
    match desc.kind {
        ParamKind::Choice { labels } => {
            let index = (value.max(0.0) as usize).min(labels.len().saturating_sub(1));
            labels[index].to_owned()
        }
        ParamKind::Float => match desc.unit {
            ParamUnit::Hertz if value >= 1000.0 => format!("{:.2} kHz", value / 1000.0),
            ParamUnit::Hertz => format!("{value:.0} Hz"),
            ParamUnit::Decibels => format!("{value:.1} dB"),
            ParamUnit::None => format!("{value:.2}"),
        },
    }
}

/// Rotary knob bound to a mutable value and described by a
/// [`ParamDescriptor`].
pub struct Knob<'a> {
    value: &'a mut f32,
    descriptor: &'a ParamDescriptor,
    diameter: f32,
    sensitivity: f32,
}

impl<'a> Knob<'a> {
    /// Creates a knob for one parameter.
    pub fn new(value: &'a mut f32, descriptor: &'a ParamDescriptor) -> Self {
        Self {
            value,
            descriptor,
            diameter: 60.0,
            sensitivity: 0.004,
        }
    }

    /// Sets the knob diameter in pixels.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }

    /// Sets the normalized value change per pixel dragged.
    pub fn sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    fn apply_kind(&self, value: f32) -> f32 {
        match self.descriptor.kind {
            ParamKind::Choice { .. } => value.round(),
            ParamKind::Float => value,
        }
    }
}

impl Widget for Knob<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let size = vec2(self.diameter, self.diameter + 35.0); // room for label + value
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let center = pos2(rect.center().x, rect.top() + self.diameter / 2.0);
        let radius = self.diameter / 2.0 - 4.0;

        let mut changed = false;

        if response.double_clicked() {
            *self.value = self.descriptor.default;
            changed = true;
        }

        if response.dragged() {
            let delta = response.drag_delta();
            let sensitivity = if ui.input(|i| i.modifiers.shift) {
                self.sensitivity * 0.1
            } else {
                self.sensitivity
            };

            // Vertical drag in normalized space, up = increase
            let normalized =
                (self.descriptor.normalize(*self.value) - delta.y * sensitivity).clamp(0.0, 1.0);
            let plain = self.apply_kind(self.descriptor.denormalize(normalized));
            *self.value = plain.clamp(self.descriptor.min, self.descriptor.max);
            changed = true;
        }

        let is_active = response.dragged() || response.has_focus();

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            // 270 degree sweep starting from bottom-left
            let start_angle = PI * 0.75;
            let end_angle = PI * 2.25;
            let sweep = end_angle - start_angle;

            let normalized = self.descriptor.normalize(*self.value).clamp(0.0, 1.0);
            let value_angle = start_angle + normalized * sweep;

            let track_color = Color32::from_rgb(49, 49, 49);
            draw_arc(painter, center, radius - 2.0, start_angle, end_angle, track_color, 6.0);

            let fill_color = if is_active {
                Color32::from_rgb(120, 236, 255)
            } else {
                Color32::from_rgb(88, 224, 248)
            };
            if normalized > 0.001 {
                draw_arc(painter, center, radius - 2.0, start_angle, value_angle, fill_color, 6.0);
            }

            let body_color = if is_active {
                Color32::from_rgb(48, 48, 52)
            } else {
                Color32::from_rgb(38, 38, 42)
            };
            painter.circle_filled(center, radius - 8.0, body_color);

            let pointer_len = radius - 14.0;
            let pointer_end = pos2(
                center.x + value_angle.cos() * pointer_len,
                center.y + value_angle.sin() * pointer_len,
            );
            painter.line_segment([center, pointer_end], Stroke::new(3.0, fill_color));
            painter.circle_filled(center, 3.0, fill_color);

            let label_pos = pos2(rect.center().x, center.y + radius + 8.0);
            painter.text(
                label_pos,
                egui::Align2::CENTER_TOP,
                self.descriptor.name,
                egui::FontId::proportional(12.0),
                Color32::from_rgb(200, 200, 205),
            );

            let value_pos = pos2(rect.center().x, center.y + radius + 22.0);
            painter.text(
                value_pos,
                egui::Align2::CENTER_TOP,
                format_value(self.descriptor, *self.value),
                egui::FontId::proportional(11.0),
                Color32::from_rgb(143, 143, 143),
            );
        }

        if changed {
            response.mark_changed();
        }

        response
    }
}

fn draw_arc(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    color: Color32,
    stroke_width: f32,
) {
    let segments = 32;
    let sweep = end_angle - start_angle;

    let points: Vec<Pos2> = (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let angle = start_angle + t * sweep;
            pos2(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
        })
        .collect();

    for window in points.windows(2) {
        painter.line_segment([window[0], window[1]], Stroke::new(stroke_width, color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curva_core::CutSlope;

    #[test]
    fn hertz_values_collapse_to_kilohertz() {
        let desc = ParamDescriptor::frequency("Peak Freq", 20.0, 20000.0, 750.0);
        assert_eq!(format_value(&desc, 750.0), "750 Hz");
        assert_eq!(format_value(&desc, 1000.0), "1.00 kHz");
        assert_eq!(format_value(&desc, 12345.0), "12.35 kHz");
    }

    #[test]
    fn decibels_show_one_decimal() {
        let desc = ParamDescriptor::float("Peak Gain", ParamUnit::Decibels, -24.0, 24.0, 0.0);
        assert_eq!(format_value(&desc, -6.02), "-6.0 dB");
        assert_eq!(format_value(&desc, 0.0), "0.0 dB");
    }

    #[test]
    fn choice_values_display_labels() {
        let desc = ParamDescriptor::choice("LowCut Slope", &CutSlope::LABELS, 0.0);
        assert_eq!(format_value(&desc, 0.0), "12 dB/Oct");
        assert_eq!(format_value(&desc, 3.0), "48 dB/Oct");
        // Out-of-range index clamps to the last label
        assert_eq!(format_value(&desc, 9.0), "48 dB/Oct");
    }

    #[test]
    fn dimensionless_values_show_two_decimals() {
        let desc = ParamDescriptor::float("Peak Quality", ParamUnit::None, 0.1, 10.0, 1.0);
        assert_eq!(format_value(&desc, 0.707), "0.71");
    }
}
