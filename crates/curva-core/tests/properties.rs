//! Property-based tests for coefficient design and the chain invariants.
//!
//! Uses proptest to verify that any parameter combination a host could
//! throw at the factory yields finite, stable designs and that the
//! active-stage invariant holds after every rebuild.

use curva_core::{ChainPosition, ChainSettings, CutSlope, EqChain, make_low_cut_filter,
    make_peak_filter};
use proptest::prelude::*;

fn arbitrary_settings() -> impl Strategy<Value = ChainSettings> {
    (
        20.0f32..20000.0,
        -24.0f32..=24.0,
        0.1f32..=10.0,
        20.0f32..20000.0,
        20.0f32..20000.0,
        0usize..4,
        0usize..4,
    )
        .prop_map(
            |(peak_freq, peak_gain, peak_q, low_freq, high_freq, low_slope, high_slope)| {
                ChainSettings {
                    peak_freq_hz: peak_freq,
                    peak_gain_db: peak_gain,
                    peak_q,
                    low_cut_freq_hz: low_freq,
                    high_cut_freq_hz: high_freq,
                    low_cut_slope: CutSlope::from_index(low_slope),
                    high_cut_slope: CutSlope::from_index(high_slope),
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every design from in-range settings must be finite, and its
    /// magnitude response must be finite across the audible band.
    #[test]
    fn designs_stay_finite(settings in arbitrary_settings(), sr in 22050.0f32..192000.0) {
        let peak = make_peak_filter(&settings, sr);
        prop_assert!(peak.b0.is_finite() && peak.b1.is_finite() && peak.b2.is_finite());
        prop_assert!(peak.a1.is_finite() && peak.a2.is_finite());

        for freq in [20.0, 200.0, 2000.0, 20000.0f32] {
            let mag = peak.magnitude_at(freq.min(sr * 0.45), sr);
            prop_assert!(mag.is_finite() && mag >= 0.0);
        }

        for coeffs in make_low_cut_filter(&settings, sr) {
            prop_assert!(coeffs.b0.is_finite() && coeffs.a2.is_finite());
        }
    }

    /// After any rebuild, each cut bank has exactly `ordinal + 1` active
    /// stages and the rest report bypassed.
    #[test]
    fn active_stage_invariant(settings in arbitrary_settings(), sr in 22050.0f32..192000.0) {
        let mut chain = EqChain::new();
        chain.apply(&settings, sr);

        prop_assert_eq!(
            chain.low_cut().active_stages(),
            settings.low_cut_slope.sections()
        );
        prop_assert_eq!(
            chain.high_cut().active_stages(),
            settings.high_cut_slope.sections()
        );

        for idx in settings.low_cut_slope.sections()..4 {
            prop_assert!(chain.stage_bypassed(ChainPosition::LowCut, idx));
        }
    }

    /// Rebuilding twice from the same snapshot yields bit-identical
    /// coefficients on every stage.
    #[test]
    fn rebuild_idempotent(settings in arbitrary_settings()) {
        let sr = 48000.0;
        let mut first = EqChain::new();
        let mut second = EqChain::new();
        first.apply(&settings, sr);
        second.apply(&settings, sr);

        prop_assert_eq!(first.peak().coefficients(), second.peak().coefficients());
        for (a, b) in first
            .low_cut()
            .stages()
            .iter()
            .zip(second.low_cut().stages())
        {
            prop_assert_eq!(a.coefficients(), b.coefficients());
            prop_assert_eq!(a.is_bypassed(), b.is_bypassed());
        }
    }

    /// The processing path never produces non-finite samples for bounded
    /// input, whatever the settings.
    #[test]
    fn processing_stays_finite(
        settings in arbitrary_settings(),
        input in prop::collection::vec(-1.0f32..=1.0, 64),
    ) {
        let mut chain = EqChain::new();
        chain.apply(&settings, 48000.0);

        for sample in input {
            let out = chain.process(sample);
            prop_assert!(out.is_finite(), "non-finite output {} for input {}", out, sample);
        }
    }
}
