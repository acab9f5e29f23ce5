//! Curva GUI - the standalone equalizer window.
//!
//! Thin presentation over curva-gui-core: the [`CurvaApp`] shell owns a
//! [`ResponseCurveModel`](curva_gui_core::ResponseCurveModel) and lays
//! out the curve view above three knob groups.

pub mod app;
pub mod curve_view;

pub use app::CurvaApp;
