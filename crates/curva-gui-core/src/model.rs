//! The display-side chain model and its per-tick update loop.

use crate::dirty::DirtyFlag;
use crate::snapshot::read_chain_settings;
use crate::store::{ListenerId, ParamStore};
use curva_analysis::ResponseCurve;
use curva_core::EqChain;
use std::sync::Arc;

/// Display-side mirror of the equalizer chain, kept in sync with a
/// parameter store through a coalescing dirty flag.
///
/// Construction subscribes a [`DirtyFlag`] to the store and performs one
/// unconditional rebuild, so the model never shows the neutral chain
/// when the store already holds edited values. Afterward the owner calls
/// [`tick`](ResponseCurveModel::tick) at the display rate; a tick with
/// no pending changes costs one atomic read.
pub struct ResponseCurveModel {
    store: Arc<dyn ParamStore>,
    flag: Arc<DirtyFlag>,
    listener: ListenerId,
    chain: EqChain,
    sample_rate: f32,
    rebuilds: u64,
}

impl ResponseCurveModel {
    /// Builds the model against a store and rebuilds once from its
    /// current values.
    pub fn new(store: Arc<dyn ParamStore>, sample_rate: f32) -> Self {
        let flag = Arc::new(DirtyFlag::new());
        let listener = store.subscribe(flag.clone());

        let mut model = Self {
            store,
            flag,
            listener,
            chain: EqChain::new(),
            sample_rate,
            rebuilds: 0,
        };
        model.rebuild();
        model
    }

    fn rebuild(&mut self) {
        let settings = read_chain_settings(self.store.as_ref());
        self.chain.apply(&settings, self.sample_rate);
        self.rebuilds += 1;
        tracing::trace!(
            peak_freq = settings.peak_freq_hz,
            peak_gain = settings.peak_gain_db,
            low_cut = settings.low_cut_freq_hz,
            high_cut = settings.high_cut_freq_hz,
            rebuilds = self.rebuilds,
            "chain rebuilt"
        );
    }

    /// One update-loop step: rebuild if anything changed since the last
    /// tick. Returns whether a rebuild happened, which is the caller's
    /// cue to redraw the curve.
    pub fn tick(&mut self) -> bool {
        if self.flag.take() {
            self.rebuild();
            true
        } else {
            false
        }
    }

    /// Sweeps the current chain at `width` points.
    pub fn curve(&self, width: usize) -> ResponseCurve {
        ResponseCurve::sweep(&self.chain, self.sample_rate, width)
    }

    /// The mirrored chain, for direct response queries.
    pub fn chain(&self) -> &EqChain {
        &self.chain
    }

    /// The backing store.
    pub fn store(&self) -> &Arc<dyn ParamStore> {
        &self.store
    }

    /// Current design sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Changes the design sample rate and schedules a rebuild.
    ///
    /// Coefficients depend on the rate, so this marks the flag rather
    /// than rebuilding inline; the next tick picks it up.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        if sample_rate != self.sample_rate {
            self.sample_rate = sample_rate;
            self.flag.mark();
        }
    }

    /// Rebuilds performed since construction, including the initial one.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

impl Drop for ResponseCurveModel {
    fn drop(&mut self) {
        self.store.unsubscribe(self.listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{AtomicParamStore, PEAK_FREQ, PEAK_GAIN};
    use curva_analysis::fraction_at_freq;

    fn store_and_model() -> (Arc<AtomicParamStore>, ResponseCurveModel) {
        let store = Arc::new(AtomicParamStore::with_eq_parameters());
        let model = ResponseCurveModel::new(store.clone(), 48000.0);
        (store, model)
    }

    #[test]
    fn initial_rebuild_reflects_preexisting_values() {
        let store = Arc::new(AtomicParamStore::with_eq_parameters());
        store.set(store.index_of(PEAK_GAIN).unwrap(), 12.0);

        let model = ResponseCurveModel::new(store, 48000.0);
        assert_eq!(model.rebuild_count(), 1);

        let curve = model.curve(500);
        let center = (fraction_at_freq(750.0) * 500.0).round() as usize;
        assert!(
            curve.mags_db()[center] > 11.0,
            "model must pick up values set before construction, got {} dB",
            curve.mags_db()[center]
        );
    }

    #[test]
    fn clean_ticks_do_nothing() {
        let (_, mut model) = store_and_model();
        assert!(!model.tick());
        assert!(!model.tick());
        assert_eq!(model.rebuild_count(), 1);
    }

    #[test]
    fn many_writes_coalesce_into_one_rebuild() {
        let (store, mut model) = store_and_model();
        let freq = store.index_of(PEAK_FREQ).unwrap();

        for i in 0..50 {
            store.set(freq, 100.0 + i as f32);
        }

        assert!(model.tick());
        assert_eq!(model.rebuild_count(), 2, "50 writes should rebuild once");
        assert!(!model.tick(), "flag must be clean after the rebuild tick");
    }

    #[test]
    fn write_landing_after_tick_is_seen_next_tick() {
        let (store, mut model) = store_and_model();
        let freq = store.index_of(PEAK_FREQ).unwrap();

        store.set(freq, 500.0);
        assert!(model.tick());

        store.set(freq, 600.0);
        assert!(model.tick(), "a mark after take must survive to the next tick");
    }

    #[test]
    fn sample_rate_change_marks_dirty() {
        let (_, mut model) = store_and_model();
        model.set_sample_rate(44100.0);
        assert!(model.tick());
        assert_eq!(model.sample_rate(), 44100.0);

        // Same rate again: nothing to do
        model.set_sample_rate(44100.0);
        assert!(!model.tick());
    }

    #[test]
    fn drop_unsubscribes_from_store() {
        let (store, model) = store_and_model();
        let freq = store.index_of(PEAK_FREQ).unwrap();
        drop(model);

        // No listener left; this must not touch freed state or panic
        store.set(freq, 900.0);
    }
}
