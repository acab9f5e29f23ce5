//! Application shell: the update loop, the curve view, and the knob
//! groups.

use crate::curve_view;
use curva_gui_core::{
    AtomicParamStore, BoundKnob, HIGH_CUT_FREQ, HIGH_CUT_SLOPE, LOW_CUT_FREQ, LOW_CUT_SLOPE,
    PEAK_FREQ, PEAK_GAIN, PEAK_QUALITY, ParamStore, ResponseCurveModel, Theme,
};
use eframe::egui;
use std::sync::Arc;
use std::time::Duration;

/// Fraction of the window height given to the response curve.
const CURVE_AREA_FRACTION: f32 = 0.7;

/// The standalone equalizer window.
pub struct CurvaApp {
    store: Arc<dyn ParamStore>,
    model: ResponseCurveModel,
    theme: Theme,
    frame_interval: Duration,
    curve_width: Option<usize>,
}

impl CurvaApp {
    /// Builds the app with a fresh store at the given design rate.
    pub fn new(cc: &eframe::CreationContext<'_>, sample_rate: f32, refresh_hz: f32) -> Self {
        let theme = Theme::default();
        theme.apply(&cc.egui_ctx);

        let store: Arc<dyn ParamStore> = Arc::new(AtomicParamStore::with_eq_parameters());
        let model = ResponseCurveModel::new(store.clone(), sample_rate);
        let frame_interval = Duration::from_secs_f32(1.0 / refresh_hz.max(1.0));

        Self {
            store,
            model,
            theme,
            frame_interval,
            curve_width: None,
        }
    }

    /// Overrides the sweep resolution; `None` sweeps one point per pixel.
    pub fn with_curve_width(mut self, curve_width: Option<usize>) -> Self {
        self.curve_width = curve_width;
        self
    }

    fn knob(&self, ui: &mut egui::Ui, name: &str) {
        if let Some(knob) = BoundKnob::by_name(self.store.clone(), name) {
            ui.add(knob);
        }
    }

    fn knob_groups(&self, ui: &mut egui::Ui) {
        ui.columns(3, |columns| {
            columns[0].vertical_centered(|ui| {
                ui.label("Low Cut");
                ui.horizontal(|ui| {
                    self.knob(ui, LOW_CUT_FREQ);
                    self.knob(ui, LOW_CUT_SLOPE);
                });
            });
            columns[1].vertical_centered(|ui| {
                ui.label("Peak");
                ui.horizontal(|ui| {
                    self.knob(ui, PEAK_FREQ);
                    self.knob(ui, PEAK_GAIN);
                    self.knob(ui, PEAK_QUALITY);
                });
            });
            columns[2].vertical_centered(|ui| {
                ui.label("High Cut");
                ui.horizontal(|ui| {
                    self.knob(ui, HIGH_CUT_FREQ);
                    self.knob(ui, HIGH_CUT_SLOPE);
                });
            });
        });
    }
}

impl eframe::App for CurvaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll the dirty flag at the display rate; a clean tick is one
        // atomic read.
        self.model.tick();
        ctx.request_repaint_after(self.frame_interval);

        egui::CentralPanel::default().show(ctx, |ui| {
            let bounds = ui.available_rect_before_wrap();
            let curve_rect = egui::Rect::from_min_size(
                bounds.min,
                egui::vec2(bounds.width(), bounds.height() * CURVE_AREA_FRACTION),
            );

            let width = match self.curve_width {
                Some(w) => w.max(2),
                None => curve_rect.width().max(2.0) as usize,
            };
            let curve = self.model.curve(width);
            curve_view::paint(ui, curve_rect, &curve, &self.theme);

            ui.allocate_rect(curve_rect, egui::Sense::hover());
            ui.add_space(8.0);
            self.knob_groups(ui);
        });
    }
}
