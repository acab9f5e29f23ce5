//! Curva Analysis - frequency-response evaluation for the display layer
//!
//! Turns a configured [`curva_core::EqChain`] into a drawable magnitude
//! curve: a logarithmic 20 Hz to 20 kHz sweep, one point per horizontal
//! pixel, composed from the closed-form per-stage responses. No FFT, no
//! audio, no allocation beyond the output buffer.
//!
//! The axis-mapping helpers ([`freq_at_fraction`], [`fraction_at_freq`],
//! [`db_to_y`]) and the grid constants live here too so the view layer
//! and the evaluator agree on geometry.

pub mod response;

pub use response::{
    DISPLAY_MAX_DB, DISPLAY_MIN_DB, GRID_FREQS, GRID_GAINS_DB, MAX_FREQ, MIN_FREQ, ResponseCurve,
    db_to_y, fraction_at_freq, freq_at_fraction,
};
