//! Curva GUI Core - parameter plumbing and shared widgets
//!
//! Everything between the raw chain math and the window: the
//! [`ParamStore`] abstraction with its atomic standalone backing, the
//! coalescing [`DirtyFlag`], the [`ResponseCurveModel`] update loop, and
//! the descriptor-driven knob widgets.
//!
//! # Data Flow
//!
//! ```text
//! BoundKnob ──► AtomicParamStore::set ──► DirtyFlag::mark
//!                                              │
//! display tick ──► ResponseCurveModel::tick ◄──┘
//!                        │ (dirty only)
//!                        ▼
//!              read_chain_settings ──► EqChain::apply ──► curve()
//! ```

pub mod dirty;
pub mod model;
pub mod snapshot;
pub mod store;
pub mod theme;
pub mod widgets;

pub use dirty::DirtyFlag;
pub use model::ResponseCurveModel;
pub use snapshot::read_chain_settings;
pub use store::{
    AtomicParamStore, ChangeListener, HIGH_CUT_FREQ, HIGH_CUT_SLOPE, LOW_CUT_FREQ, LOW_CUT_SLOPE,
    ListenerId, PEAK_FREQ, PEAK_GAIN, PEAK_QUALITY, ParamStore, eq_parameters,
};
pub use theme::Theme;
pub use widgets::{BoundKnob, Knob};
