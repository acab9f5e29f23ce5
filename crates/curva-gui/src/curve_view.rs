//! Response-curve painting: background grid plus the magnitude polyline.

use curva_analysis::{
    GRID_FREQS, GRID_GAINS_DB, ResponseCurve, db_to_y, fraction_at_freq,
};
use curva_gui_core::Theme;
use egui::{Pos2, Rect, Stroke, Ui, pos2};

/// Frequencies that get a text label on the grid.
const LABELED_FREQS: [(f32, &str); 6] = [
    (50.0, "50"),
    (100.0, "100"),
    (500.0, "500"),
    (1000.0, "1k"),
    (5000.0, "5k"),
    (10000.0, "10k"),
];

/// Paints the grid into `rect`: vertical lines on the log frequency
/// axis, horizontal lines at the labeled gain steps, the 0 dB line
/// slightly brighter.
fn paint_grid(ui: &Ui, rect: Rect, theme: &Theme) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, egui::CornerRadius::same(2), theme.view_bg);

    for &freq in &GRID_FREQS {
        let x = rect.left() + fraction_at_freq(freq) * rect.width();
        painter.line_segment(
            [pos2(x, rect.top()), pos2(x, rect.bottom())],
            Stroke::new(1.0, theme.grid),
        );
    }

    for &gain in &GRID_GAINS_DB {
        let y = db_to_y(gain, rect.top(), rect.bottom());
        let color = if gain == 0.0 {
            theme.grid_label
        } else {
            theme.grid
        };
        painter.line_segment(
            [pos2(rect.left(), y), pos2(rect.right(), y)],
            Stroke::new(1.0, color),
        );
    }

    for &(freq, label) in &LABELED_FREQS {
        let x = rect.left() + fraction_at_freq(freq) * rect.width();
        painter.text(
            pos2(x, rect.bottom() - 2.0),
            egui::Align2::CENTER_BOTTOM,
            label,
            egui::FontId::proportional(10.0),
            theme.grid_label,
        );
    }

    for &gain in &GRID_GAINS_DB {
        let y = db_to_y(gain, rect.top(), rect.bottom());
        painter.text(
            pos2(rect.right() - 4.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{gain:+.0}"),
            egui::FontId::proportional(10.0),
            theme.grid_label,
        );
    }
}

/// Paints the grid and the response polyline into `rect`.
///
/// Sweep points are spread across the full rect width, so a reduced
/// sweep resolution still spans the view. The curve is clamped
/// vertically so extreme cut slopes don't paint outside it.
pub fn paint(ui: &Ui, rect: Rect, curve: &ResponseCurve, theme: &Theme) {
    paint_grid(ui, rect, theme);

    let mags = curve.mags_db();
    if mags.len() < 2 {
        return;
    }

    let painter = ui.painter_at(rect);
    let x_step = rect.width() / (mags.len() - 1) as f32;
    let points: Vec<Pos2> = mags
        .iter()
        .enumerate()
        .map(|(i, &db)| {
            let y = db_to_y(db, rect.top(), rect.bottom());
            pos2(rect.left() + i as f32 * x_step, y.clamp(rect.top(), rect.bottom()))
        })
        .collect();

    painter.add(egui::Shape::line(points, Stroke::new(2.0, theme.curve)));
}
