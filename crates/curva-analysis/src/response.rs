//! Response-curve evaluation over a logarithmic frequency sweep.
//!
//! One magnitude sample per horizontal pixel: map the pixel fraction to a
//! frequency between 20 Hz and 20 kHz on a log axis, multiply the
//! magnitude responses of every active stage in signal order, convert to
//! decibels, then project into the display's ±24 dB window.

use curva_core::{ChainPosition, CutBank, EqChain};

/// Low end of the swept band in Hz.
pub const MIN_FREQ: f32 = 20.0;

/// High end of the swept band in Hz.
pub const MAX_FREQ: f32 = 20000.0;

/// Display window for the dB axis: values outside are drawn clamped,
/// the raw curve keeps them.
pub const DISPLAY_MIN_DB: f32 = -24.0;

/// Upper edge of the dB display window.
pub const DISPLAY_MAX_DB: f32 = 24.0;

/// Frequencies of the background grid's vertical lines.
///
/// Strictly increasing by construction; a test pins that down.
pub const GRID_FREQS: [f32; 26] = [
    20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0,
    700.0, 800.0, 900.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0, 6000.0, 7000.0, 8000.0, 10000.0,
];

/// Gain values of the background grid's horizontal lines, in dB.
pub const GRID_GAINS_DB: [f32; 5] = [-24.0, -12.0, 0.0, 12.0, 24.0];

/// Maps a linear fraction in \[0, 1) to a frequency on the log axis.
///
/// `freq = 10^(log10(MIN) + t * (log10(MAX) - log10(MIN)))`, strictly
/// increasing in `t`, with `t = 0` landing exactly on [`MIN_FREQ`].
pub fn freq_at_fraction(t: f32) -> f32 {
    let log_min = MIN_FREQ.log10();
    let log_max = MAX_FREQ.log10();
    10.0f32.powf(log_min + t * (log_max - log_min))
}

/// Inverse of [`freq_at_fraction`]: where on the \[0, 1\] axis a
/// frequency sits. Used for placing grid lines.
pub fn fraction_at_freq(freq: f32) -> f32 {
    let log_min = MIN_FREQ.log10();
    let log_max = MAX_FREQ.log10();
    (freq.max(MIN_FREQ).log10() - log_min) / (log_max - log_min)
}

/// Maps a dB value into a vertical pixel range (`top` = +24 dB,
/// `bottom` = −24 dB). Values outside the window extrapolate linearly;
/// the caller decides whether to clip.
pub fn db_to_y(db: f32, top: f32, bottom: f32) -> f32 {
    let t = (db - DISPLAY_MIN_DB) / (DISPLAY_MAX_DB - DISPLAY_MIN_DB);
    bottom + t * (top - bottom)
}

fn bank_magnitude(bank: &CutBank, freq: f32, sample_rate: f32) -> f32 {
    let mut mag = 1.0;
    for stage in bank.stages() {
        if !stage.is_bypassed() {
            mag *= stage.coefficients().magnitude_at(freq, sample_rate);
        }
    }
    mag
}

/// A computed response curve: one dB magnitude per horizontal pixel.
///
/// Stateless and deterministic given the chain snapshot — recompute on
/// demand, nothing here caches.
#[derive(Debug, Clone)]
pub struct ResponseCurve {
    mags_db: Vec<f32>,
}

impl ResponseCurve {
    /// Sweeps the chain's combined magnitude response at `width` points.
    ///
    /// Composition order follows the signal path contribution: the peak
    /// stage, then the low-cut bank's stages in order, then the
    /// high-cut bank's. A group-level bypass skips the whole bank,
    /// whatever its sub-stage flags say.
    pub fn sweep(chain: &EqChain, sample_rate: f32, width: usize) -> Self {
        let mut mags_db = Vec::with_capacity(width);

        for i in 0..width {
            let freq = freq_at_fraction(i as f32 / width as f32);
            let mut mag = 1.0f32;

            if !chain.is_bypassed(ChainPosition::Peak) {
                mag *= chain.peak().coefficients().magnitude_at(freq, sample_rate);
            }
            if !chain.is_bypassed(ChainPosition::LowCut) {
                mag *= bank_magnitude(chain.low_cut(), freq, sample_rate);
            }
            if !chain.is_bypassed(ChainPosition::HighCut) {
                mag *= bank_magnitude(chain.high_cut(), freq, sample_rate);
            }

            mags_db.push(curva_core::linear_to_db(mag));
        }

        Self { mags_db }
    }

    /// The raw dB values, one per pixel, left to right.
    pub fn mags_db(&self) -> &[f32] {
        &self.mags_db
    }

    /// Number of swept points.
    pub fn width(&self) -> usize {
        self.mags_db.len()
    }

    /// Projects the curve into a pixel rectangle as a connected polyline.
    ///
    /// `x0` is the left edge; `top`/`bottom` bound the ±24 dB window.
    /// One point per swept pixel, x advancing by exactly one.
    pub fn to_polyline(&self, x0: f32, top: f32, bottom: f32) -> Vec<(f32, f32)> {
        self.mags_db
            .iter()
            .enumerate()
            .map(|(i, &db)| (x0 + i as f32, db_to_y(db, top, bottom)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curva_core::{ChainSettings, CutSlope};

    const SR: f32 = 48000.0;

    fn flat_chain() -> EqChain {
        // Flat peak, both cut groups bypassed
        let mut chain = EqChain::new();
        chain.apply(&ChainSettings::default(), SR);
        chain.set_bypassed(ChainPosition::LowCut, true);
        chain.set_bypassed(ChainPosition::HighCut, true);
        chain
    }

    #[test]
    fn frequency_mapping_endpoints_and_monotonicity() {
        let w = 500;
        let first = freq_at_fraction(0.0);
        assert!((first - 20.0).abs() < 1e-3, "index 0 should map to 20 Hz");

        let last = freq_at_fraction(499.0 / w as f32);
        assert!(last > 19000.0 && last < 20000.0, "last sample approaches 20 kHz, got {}", last);

        let mut previous = 0.0;
        for i in 0..w {
            let freq = freq_at_fraction(i as f32 / w as f32);
            assert!(freq > previous, "mapping must be strictly increasing at index {}", i);
            previous = freq;
        }
    }

    #[test]
    fn fraction_inverts_frequency() {
        for &freq in &[20.0, 100.0, 1000.0, 10000.0, 20000.0] {
            let rt = freq_at_fraction(fraction_at_freq(freq));
            assert!((rt - freq).abs() / freq < 1e-4, "round trip failed for {} Hz", freq);
        }
    }

    #[test]
    fn grid_freqs_strictly_increasing() {
        for pair in GRID_FREQS.windows(2) {
            assert!(pair[0] < pair[1], "grid ticks out of order: {:?}", pair);
        }
    }

    #[test]
    fn passthrough_sweep_is_flat() {
        let chain = flat_chain();
        let curve = ResponseCurve::sweep(&chain, SR, 500);

        assert_eq!(curve.width(), 500);
        for (i, &db) in curve.mags_db().iter().enumerate() {
            assert!(
                db.abs() < 0.01,
                "flat chain should sweep at 0 dB, got {} dB at pixel {}",
                db,
                i
            );
        }
    }

    #[test]
    fn peak_boost_shows_at_center_and_decays() {
        let mut chain = flat_chain();
        let settings = ChainSettings {
            peak_freq_hz: 1000.0,
            peak_gain_db: 6.0,
            peak_q: 1.0,
            ..ChainSettings::default()
        };
        chain.apply(&settings, SR);

        let width = 1000;
        let curve = ResponseCurve::sweep(&chain, SR, width);

        // Pixel closest to 1 kHz
        let center = (fraction_at_freq(1000.0) * width as f32).round() as usize;
        let center_db = curve.mags_db()[center];
        assert!(
            (center_db - 6.0).abs() < 0.05,
            "expected ~+6 dB at 1 kHz, got {}",
            center_db
        );

        // Monotonic decay within a band around the center
        for i in (center - 60)..center {
            assert!(
                curve.mags_db()[i] <= curve.mags_db()[i + 1] + 1e-4,
                "curve should rise toward the center below 1 kHz"
            );
        }
        for i in center..(center + 60) {
            assert!(
                curve.mags_db()[i + 1] <= curve.mags_db()[i] + 1e-4,
                "curve should fall away from the center above 1 kHz"
            );
        }
    }

    #[test]
    fn group_bypass_dominates_active_stages() {
        let mut chain = EqChain::new();
        let settings = ChainSettings {
            low_cut_freq_hz: 1000.0,
            low_cut_slope: CutSlope::Db48,
            ..ChainSettings::default()
        };
        chain.apply(&settings, SR);
        chain.set_bypassed(ChainPosition::HighCut, true);

        // With the group active, 48 dB/oct at 1 kHz crushes 100 Hz
        let active = ResponseCurve::sweep(&chain, SR, 200);
        let idx_100 = (fraction_at_freq(100.0) * 200.0) as usize;
        assert!(active.mags_db()[idx_100] < -40.0);

        // Group bypass wins even though all four stages stay marked active
        chain.set_bypassed(ChainPosition::LowCut, true);
        assert_eq!(chain.low_cut().active_stages(), 4);
        let bypassed = ResponseCurve::sweep(&chain, SR, 200);
        assert!(
            bypassed.mags_db()[idx_100].abs() < 0.01,
            "bypassed group must not shape the sweep, got {} dB",
            bypassed.mags_db()[idx_100]
        );
    }

    #[test]
    fn polyline_spans_width_and_maps_db() {
        let chain = flat_chain();
        let curve = ResponseCurve::sweep(&chain, SR, 300);
        let points = curve.to_polyline(10.0, 0.0, 200.0);

        assert_eq!(points.len(), 300);
        assert_eq!(points[0].0, 10.0);
        assert_eq!(points[299].0, 309.0);

        // 0 dB sits at the vertical midpoint of a ±24 dB window
        for &(_, y) in &points {
            assert!((y - 100.0).abs() < 0.1, "0 dB should map mid-window, got y={}", y);
        }
    }

    #[test]
    fn db_to_y_window_edges() {
        assert_eq!(db_to_y(DISPLAY_MAX_DB, 0.0, 200.0), 0.0);
        assert_eq!(db_to_y(DISPLAY_MIN_DB, 0.0, 200.0), 200.0);
    }
}
