//! Coefficient factory: [`ChainSettings`] in, coefficient sets out.
//!
//! Pure functions, deterministic for a given snapshot and sample rate.
//! Out-of-range inputs are clamped into the valid design region rather
//! than rejected; a momentarily odd curve beats a panic on a path driven
//! by live automation.

use crate::biquad::BiquadCoeffs;
use crate::settings::{ChainSettings, CutSlope};
use libm::cosf;

/// Lowest designable corner frequency in Hz.
pub const MIN_DESIGN_FREQ: f32 = 20.0;

/// Fraction of the sample rate a corner frequency may reach.
///
/// 95% of Nyquist; biquad designs go numerically sour right at the limit.
pub const NYQUIST_MARGIN: f32 = 0.475;

/// Smallest accepted quality factor.
pub const MIN_Q: f32 = 0.05;

fn clamp_freq(freq: f32, sample_rate: f32) -> f32 {
    freq.clamp(MIN_DESIGN_FREQ, sample_rate * NYQUIST_MARGIN)
}

/// Designs the parametric peak section from the snapshot.
pub fn make_peak_filter(settings: &ChainSettings, sample_rate: f32) -> BiquadCoeffs {
    BiquadCoeffs::peaking(
        clamp_freq(settings.peak_freq_hz, sample_rate),
        settings.peak_q.max(MIN_Q),
        settings.peak_gain_db,
        sample_rate,
    )
}

/// Q of the k-th second-order section of an order-`2m` Butterworth filter.
///
/// Butterworth poles sit on the unit circle at angles
/// `theta_k = pi * (2k + 1) / (2N)`; each conjugate pair becomes one
/// section with `Q_k = 1 / (2 * cos(theta_k))`. For N = 2 this gives the
/// familiar 0.7071; for N = 4, 0.5412 and 1.3066.
fn butterworth_section_q(k: usize, sections: usize) -> f32 {
    let order = (2 * sections) as f32;
    let theta = core::f32::consts::PI * (2 * k + 1) as f32 / (2.0 * order);
    1.0 / (2.0 * cosf(theta))
}

fn make_cut_filter(
    freq: f32,
    slope: CutSlope,
    sample_rate: f32,
    design: impl Fn(f32, f32, f32) -> BiquadCoeffs,
) -> [BiquadCoeffs; 4] {
    let freq = clamp_freq(freq, sample_rate);
    let sections = slope.sections();

    let mut coeffs = [BiquadCoeffs::identity(); 4];
    for (k, slot) in coeffs.iter_mut().take(sections).enumerate() {
        *slot = design(freq, butterworth_section_q(k, sections), sample_rate);
    }
    coeffs
}

/// Designs the low-cut (high-pass) cascade from the snapshot.
///
/// Butterworth high-pass of order `2 * (slope ordinal + 1)`, decomposed
/// into up to four second-order sections. Slots past the selected slope
/// are returned as identity; the chain bypasses them rather than running
/// a stale design.
pub fn make_low_cut_filter(settings: &ChainSettings, sample_rate: f32) -> [BiquadCoeffs; 4] {
    make_cut_filter(
        settings.low_cut_freq_hz,
        settings.low_cut_slope,
        sample_rate,
        BiquadCoeffs::highpass,
    )
}

/// Designs the high-cut (low-pass) cascade, mirror of
/// [`make_low_cut_filter`].
pub fn make_high_cut_filter(settings: &ChainSettings, sample_rate: f32) -> [BiquadCoeffs; 4] {
    make_cut_filter(
        settings.high_cut_freq_hz,
        settings.high_cut_slope,
        sample_rate,
        BiquadCoeffs::lowpass,
    )
}
