//! Store-bound knob: reads from and writes back to a [`ParamStore`].

use crate::store::ParamStore;
use crate::widgets::knob::Knob;
use egui::{Response, Ui, Widget};
use std::sync::Arc;

/// A [`Knob`] wired to one parameter in a shared store.
///
/// Reads the current value before drawing and writes back only when the
/// widget reports a change, so an idle knob never churns the store's
/// listeners.
pub struct BoundKnob {
    store: Arc<dyn ParamStore>,
    index: usize,
    diameter: f32,
}

impl BoundKnob {
    /// Binds a knob to the parameter at `index`.
    pub fn new(store: Arc<dyn ParamStore>, index: usize) -> Self {
        Self {
            store,
            index,
            diameter: 60.0,
        }
    }

    /// Binds by parameter name; `None` when the store lacks it.
    pub fn by_name(store: Arc<dyn ParamStore>, name: &str) -> Option<Self> {
        let index = store.index_of(name)?;
        Some(Self::new(store, index))
    }

    /// Sets the knob diameter in pixels.
    pub fn diameter(mut self, diameter: f32) -> Self {
        self.diameter = diameter;
        self
    }
}

impl Widget for BoundKnob {
    fn ui(self, ui: &mut Ui) -> Response {
        let Some(descriptor) = self.store.descriptor(self.index) else {
            return ui.label("?");
        };

        let mut value = self.store.get(self.index);
        let response = ui.add(Knob::new(&mut value, &descriptor).diameter(self.diameter));
        if response.changed() {
            self.store.set(self.index, value);
        }
        response
    }
}
