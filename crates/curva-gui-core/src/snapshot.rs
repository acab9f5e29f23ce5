//! One-shot parameter reads into an immutable [`ChainSettings`].

use crate::store::{
    HIGH_CUT_FREQ, HIGH_CUT_SLOPE, LOW_CUT_FREQ, LOW_CUT_SLOPE, PEAK_FREQ, PEAK_GAIN,
    PEAK_QUALITY, ParamStore,
};
use curva_core::{ChainSettings, CutSlope};

/// Reads one named parameter, falling back to `default` when the store
/// does not carry it. A missing name is a wiring bug, so it trips a
/// debug assertion and logs in release builds.
fn read_param(store: &dyn ParamStore, name: &str, default: f32) -> f32 {
    match store.index_of(name) {
        Some(index) => store.get(index),
        None => {
            debug_assert!(false, "parameter {name:?} missing from store");
            tracing::warn!(param = name, fallback = default, "parameter missing from store");
            default
        }
    }
}

/// Captures every chain parameter in a single pass over the store.
///
/// Values are read individually, so a concurrent write can land between
/// two reads; the snapshot is still internally valid because each field
/// is independently range-clamped by the store. Slope indices convert
/// through [`CutSlope::from_index`], saturating at the steepest slope.
pub fn read_chain_settings(store: &dyn ParamStore) -> ChainSettings {
    let defaults = ChainSettings::default();
    ChainSettings {
        peak_freq_hz: read_param(store, PEAK_FREQ, defaults.peak_freq_hz),
        peak_gain_db: read_param(store, PEAK_GAIN, defaults.peak_gain_db),
        peak_q: read_param(store, PEAK_QUALITY, defaults.peak_q),
        low_cut_freq_hz: read_param(store, LOW_CUT_FREQ, defaults.low_cut_freq_hz),
        high_cut_freq_hz: read_param(store, HIGH_CUT_FREQ, defaults.high_cut_freq_hz),
        low_cut_slope: CutSlope::from_index(
            read_param(store, LOW_CUT_SLOPE, 0.0).max(0.0) as usize
        ),
        high_cut_slope: CutSlope::from_index(
            read_param(store, HIGH_CUT_SLOPE, 0.0).max(0.0) as usize,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AtomicParamStore;
    use std::sync::Arc;

    #[test]
    fn snapshot_reflects_store_values() {
        let store = AtomicParamStore::with_eq_parameters();
        store.set(store.index_of(PEAK_FREQ).unwrap(), 1200.0);
        store.set(store.index_of(PEAK_GAIN).unwrap(), -6.0);
        store.set(store.index_of(LOW_CUT_SLOPE).unwrap(), 2.0);

        let settings = read_chain_settings(&store);
        assert_eq!(settings.peak_freq_hz, 1200.0);
        assert_eq!(settings.peak_gain_db, -6.0);
        assert_eq!(settings.low_cut_slope, CutSlope::Db36);
        assert_eq!(settings.high_cut_slope, CutSlope::Db12);
    }

    #[test]
    fn snapshot_of_defaults_is_default_settings() {
        let store = AtomicParamStore::with_eq_parameters();
        assert_eq!(read_chain_settings(&store), ChainSettings::default());
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn missing_parameters_fall_back_to_defaults() {
        // A store carrying only the peak band
        let store = AtomicParamStore::new(vec![curva_core::ParamDescriptor::frequency(
            PEAK_FREQ, 20.0, 20000.0, 750.0,
        )]);
        let settings = read_chain_settings(&store);
        assert_eq!(settings.peak_freq_hz, 750.0);
        assert_eq!(settings.low_cut_freq_hz, 20.0);
        assert_eq!(settings.high_cut_freq_hz, 20000.0);
    }

    #[test]
    fn slope_index_saturates_through_snapshot() {
        let store = AtomicParamStore::with_eq_parameters();
        // The store clamps the choice to its 0..=3 range already; the
        // snapshot conversion saturates as a second line of defense.
        store.set(store.index_of(HIGH_CUT_SLOPE).unwrap(), 3.0);
        let settings = read_chain_settings(&store);
        assert_eq!(settings.high_cut_slope, CutSlope::Db48);
    }

    #[test]
    fn snapshot_is_usable_through_trait_object() {
        let store: Arc<dyn ParamStore> = Arc::new(AtomicParamStore::with_eq_parameters());
        let settings = read_chain_settings(store.as_ref());
        assert_eq!(settings, ChainSettings::default());
    }
}
