//! Thread-safe parameter storage with change notification.
//!
//! [`ParamStore`] abstracts over where parameter values live so the same
//! widgets and update loop work against any host. [`AtomicParamStore`]
//! is the standalone backing: values in lock-free atomic floats, a small
//! locked table for listeners.
//!
//! ```text
//! widgets ──► ParamStore::set(index, value)
//!                     │ clamp, store, notify
//!                     ▼
//!             ChangeListener::parameter_changed ──► DirtyFlag::mark
//!                     │
//! update loop ◄── ParamStore::get(index)   (next tick)
//! ```

use curva_core::{CutSlope, ParamDescriptor, ParamUnit};
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Peak band center frequency.
pub const PEAK_FREQ: &str = "Peak Freq";
/// Peak band gain.
pub const PEAK_GAIN: &str = "Peak Gain";
/// Peak band quality factor.
pub const PEAK_QUALITY: &str = "Peak Quality";
/// Low-cut corner frequency.
pub const LOW_CUT_FREQ: &str = "LowCut Freq";
/// High-cut corner frequency.
pub const HIGH_CUT_FREQ: &str = "HighCut Freq";
/// Low-cut slope choice.
pub const LOW_CUT_SLOPE: &str = "LowCut Slope";
/// High-cut slope choice.
pub const HIGH_CUT_SLOPE: &str = "HighCut Slope";

/// The full descriptor set for the three-band equalizer, in store order.
pub fn eq_parameters() -> Vec<ParamDescriptor> {
    vec![
        ParamDescriptor::frequency(PEAK_FREQ, 20.0, 20000.0, 750.0),
        ParamDescriptor::float(PEAK_GAIN, ParamUnit::Decibels, -24.0, 24.0, 0.0),
        ParamDescriptor::float(PEAK_QUALITY, ParamUnit::None, 0.1, 10.0, 1.0),
        ParamDescriptor::frequency(LOW_CUT_FREQ, 20.0, 20000.0, 20.0),
        ParamDescriptor::frequency(HIGH_CUT_FREQ, 20.0, 20000.0, 20000.0),
        ParamDescriptor::choice(LOW_CUT_SLOPE, &CutSlope::LABELS, 0.0),
        ParamDescriptor::choice(HIGH_CUT_SLOPE, &CutSlope::LABELS, 0.0),
    ]
}

/// Handle for removing a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Callback interface for parameter change notification.
///
/// Called synchronously from inside [`ParamStore::set`], possibly from
/// any thread. Implementations must be cheap and lock-free; heavy work
/// belongs in the update loop that the notification wakes.
pub trait ChangeListener: Send + Sync {
    /// A parameter's stored value changed.
    fn parameter_changed(&self, index: usize, value: f32);
}

/// Trait for parameter value storage shared between the control surface
/// and the update loop.
///
/// Implementations must be thread-safe: `get` and `set` may race from
/// different threads. Index-based access follows the order of the
/// descriptor set the store was built from; `index_of` resolves stable
/// names.
pub trait ParamStore: Send + Sync {
    /// Number of parameters in the store.
    fn param_count(&self) -> usize;

    /// Descriptor for display and validation.
    ///
    /// Returns `None` if the index is out of range.
    fn descriptor(&self, index: usize) -> Option<ParamDescriptor>;

    /// Resolves a stable parameter name to its store index.
    fn index_of(&self, name: &str) -> Option<usize>;

    /// Read the current value of a parameter.
    ///
    /// Returns the descriptor's default (or `0.0`) if the index is out
    /// of range.
    fn get(&self, index: usize) -> f32;

    /// Write a new value, clamped to the descriptor's range.
    ///
    /// Out-of-range indices are silently ignored. Listeners fire only
    /// when the stored bits actually change.
    fn set(&self, index: usize, value: f32);

    /// Registers a change listener; fires for every subsequent `set`
    /// that changes a value.
    fn subscribe(&self, listener: Arc<dyn ChangeListener>) -> ListenerId;

    /// Removes a previously registered listener. Unknown ids are a no-op.
    fn unsubscribe(&self, id: ListenerId);
}

/// Standalone [`ParamStore`] backed by atomic floats.
///
/// Values are stored as f32 bit patterns in `AtomicU32`, one per
/// descriptor, so reads never block writers. The listener table takes a
/// read lock per notification; subscription changes take the write lock
/// and only happen at view construction and teardown.
pub struct AtomicParamStore {
    descriptors: Vec<ParamDescriptor>,
    values: Vec<AtomicU32>,
    listeners: RwLock<Vec<(ListenerId, Arc<dyn ChangeListener>)>>,
    next_id: AtomicU64,
}

impl AtomicParamStore {
    /// Builds a store from a descriptor set, every value at its default.
    pub fn new(descriptors: Vec<ParamDescriptor>) -> Self {
        let values = descriptors
            .iter()
            .map(|d| AtomicU32::new(d.default.to_bits()))
            .collect();
        Self {
            descriptors,
            values,
            listeners: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// The standard equalizer store: all seven chain parameters.
    pub fn with_eq_parameters() -> Self {
        Self::new(eq_parameters())
    }

    fn notify(&self, index: usize, value: f32) {
        let listeners = self.listeners.read();
        for (_, listener) in listeners.iter() {
            listener.parameter_changed(index, value);
        }
    }
}

impl ParamStore for AtomicParamStore {
    fn param_count(&self) -> usize {
        self.descriptors.len()
    }

    fn descriptor(&self, index: usize) -> Option<ParamDescriptor> {
        self.descriptors.get(index).copied()
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.name == name)
    }

    fn get(&self, index: usize) -> f32 {
        self.values
            .get(index)
            .map_or(0.0, |v| f32::from_bits(v.load(Ordering::Acquire)))
    }

    fn set(&self, index: usize, value: f32) {
        if let Some((atomic, desc)) = self.values.get(index).zip(self.descriptors.get(index)) {
            let clamped = desc.clamp(value);
            let previous = atomic.swap(clamped.to_bits(), Ordering::AcqRel);
            if previous != clamped.to_bits() {
                self.notify(index, clamped);
            }
        }
    }

    fn subscribe(&self, listener: Arc<dyn ChangeListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.write().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.write().retain(|(lid, _)| *lid != id);
    }
}
