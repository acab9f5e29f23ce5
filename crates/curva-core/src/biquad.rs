//! Biquad coefficient sets and their frequency response.
//!
//! A [`BiquadCoeffs`] is the value half of a second-order IIR section:
//! five normalized coefficients with no delay-line state attached.
//! Coefficient design uses the RBJ Audio EQ Cookbook formulas; the
//! magnitude response is evaluated in closed form, so a chain of these
//! can be plotted without pushing a single sample through it.

use core::f32::consts::PI;
use libm::{cos, cosf, log10, powf, sinf, sqrt};

/// Normalized coefficients of one second-order filter section.
///
/// The transfer function, with `a0` already divided out:
///
/// ```text
///        b0 + b1*z^-1 + b2*z^-2
/// H(z) = ----------------------
///         1 + a1*z^-1 + a2*z^-2
/// ```
///
/// A `BiquadCoeffs` is plain `Copy` data; replacing a stage's
/// coefficients is a single struct assignment, never a field-by-field
/// mutation, so a half-written set is never observable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoeffs {
    /// Feedforward coefficients.
    pub b0: f32,
    /// Feedforward, one sample delayed.
    pub b1: f32,
    /// Feedforward, two samples delayed.
    pub b2: f32,
    /// Feedback, one sample delayed.
    pub a1: f32,
    /// Feedback, two samples delayed.
    pub a2: f32,
}

impl BiquadCoeffs {
    /// Pass-through coefficients: `y[n] = x[n]`, unity response everywhere.
    pub const fn identity() -> Self {
        Self {
            b0: 1.0,
            b1: 0.0,
            b2: 0.0,
            a1: 0.0,
            a2: 0.0,
        }
    }

    /// Normalizes a raw six-coefficient design by `a0`.
    fn normalized(b0: f32, b1: f32, b2: f32, a0: f32, a1: f32, a2: f32) -> Self {
        let a0_inv = 1.0 / a0;
        Self {
            b0: b0 * a0_inv,
            b1: b1 * a0_inv,
            b2: b2 * a0_inv,
            a1: a1 * a0_inv,
            a2: a2 * a0_inv,
        }
    }

    /// RBJ peaking EQ design.
    ///
    /// Boosts or cuts around `frequency` by exactly `gain_db` at the
    /// center, with `q` controlling the bandwidth.
    pub fn peaking(frequency: f32, q: f32, gain_db: f32, sample_rate: f32) -> Self {
        let a = powf(10.0, gain_db / 40.0);
        let omega = 2.0 * PI * frequency / sample_rate;
        let cos_omega = cosf(omega);
        let alpha = sinf(omega) / (2.0 * q);

        Self::normalized(
            1.0 + alpha * a,
            -2.0 * cos_omega,
            1.0 - alpha * a,
            1.0 + alpha / a,
            -2.0 * cos_omega,
            1.0 - alpha / a,
        )
    }

    /// RBJ low-pass design (cutoff `frequency`, resonance `q`).
    pub fn lowpass(frequency: f32, q: f32, sample_rate: f32) -> Self {
        let omega = 2.0 * PI * frequency / sample_rate;
        let cos_omega = cosf(omega);
        let alpha = sinf(omega) / (2.0 * q);

        Self::normalized(
            (1.0 - cos_omega) / 2.0,
            1.0 - cos_omega,
            (1.0 - cos_omega) / 2.0,
            1.0 + alpha,
            -2.0 * cos_omega,
            1.0 - alpha,
        )
    }

    /// RBJ high-pass design (cutoff `frequency`, resonance `q`).
    pub fn highpass(frequency: f32, q: f32, sample_rate: f32) -> Self {
        let omega = 2.0 * PI * frequency / sample_rate;
        let cos_omega = cosf(omega);
        let alpha = sinf(omega) / (2.0 * q);

        Self::normalized(
            (1.0 + cos_omega) / 2.0,
            -(1.0 + cos_omega),
            (1.0 + cos_omega) / 2.0,
            1.0 + alpha,
            -2.0 * cos_omega,
            1.0 - alpha,
        )
    }

    /// Magnitude of the frequency response at `frequency` Hz.
    ///
    /// Closed-form evaluation of `|H(e^jw)|`:
    ///
    /// ```text
    /// |H|^2 = (b0^2 + b1^2 + b2^2
    ///           + 2*(b0*b1 + b1*b2)*cos(w) + 2*b0*b2*cos(2w))
    ///       / (1 + a1^2 + a2^2
    ///           + 2*(a1 + a1*a2)*cos(w) + 2*a2*cos(2w))
    /// ```
    ///
    /// Intermediates are f64: near DC the numerator of a high-pass
    /// section cancels almost completely, and f32 would wobble by
    /// whole decibels down there.
    pub fn magnitude_at(&self, frequency: f32, sample_rate: f32) -> f32 {
        let omega = 2.0 * core::f64::consts::PI * f64::from(frequency) / f64::from(sample_rate);
        let cos_w = cos(omega);
        let cos_2w = cos(2.0 * omega);

        let (b0, b1, b2) = (f64::from(self.b0), f64::from(self.b1), f64::from(self.b2));
        let (a1, a2) = (f64::from(self.a1), f64::from(self.a2));

        let num =
            b0 * b0 + b1 * b1 + b2 * b2 + 2.0 * (b0 * b1 + b1 * b2) * cos_w + 2.0 * b0 * b2 * cos_2w;
        let den =
            1.0 + a1 * a1 + a2 * a2 + 2.0 * (a1 + a1 * a2) * cos_w + 2.0 * a2 * cos_2w;

        sqrt((num / den.max(1e-30)).max(0.0)) as f32
    }

    /// Magnitude response in decibels at `frequency` Hz.
    pub fn magnitude_db_at(&self, frequency: f32, sample_rate: f32) -> f32 {
        (20.0 * log10(f64::from(self.magnitude_at(frequency, sample_rate)).max(1e-30))) as f32
    }
}

impl Default for BiquadCoeffs {
    fn default() -> Self {
        Self::identity()
    }
}
