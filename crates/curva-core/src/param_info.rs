//! Parameter descriptors for the equalizer's control surface.
//!
//! Each user-facing parameter is described once, statically: display
//! name, unit, range, default, and normalization curve. The float/choice
//! split is a tagged [`ParamKind`] resolved wherever a value is read —
//! never re-discovered by runtime type inspection downstream.

/// Scaling curve mapping a plain value into normalized \[0, 1\] space.
///
/// Frequency parameters use [`Logarithmic`](ParamScale::Logarithmic) so a
/// knob's visual midpoint lands on the geometric mean of the range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamScale {
    /// Equal resolution across the range.
    #[default]
    Linear,
    /// More resolution at low values; requires `min > 0`.
    Logarithmic,
}

/// What kind of value a parameter carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A continuous float within the descriptor's range.
    Float,
    /// A discrete choice; the stored value is the index into `labels`.
    Choice {
        /// Display labels, index-aligned with stored values.
        labels: &'static [&'static str],
    },
}

/// Unit type for value formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    /// Hertz, shown with a "k" collapse above 999 Hz.
    Hertz,
    /// Decibels.
    Decibels,
    /// Dimensionless.
    None,
}

impl ParamUnit {
    /// Unit suffix for display.
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Hertz => " Hz",
            ParamUnit::Decibels => " dB",
            ParamUnit::None => "",
        }
    }
}

/// Static metadata for one named parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Stable identifier, also the display name (e.g. "Peak Freq").
    pub name: &'static str,
    /// Unit for value formatting.
    pub unit: ParamUnit,
    /// Minimum allowed value.
    pub min: f32,
    /// Maximum allowed value.
    pub max: f32,
    /// Value at initialization and on reset.
    pub default: f32,
    /// Normalization curve.
    pub scale: ParamScale,
    /// Float or choice, with labels for the latter.
    pub kind: ParamKind,
}

impl ParamDescriptor {
    /// A continuous float parameter with linear scaling.
    pub const fn float(
        name: &'static str,
        unit: ParamUnit,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            unit,
            min,
            max,
            default,
            scale: ParamScale::Linear,
            kind: ParamKind::Float,
        }
    }

    /// A frequency parameter: Hz unit, logarithmic scaling.
    pub const fn frequency(name: &'static str, min: f32, max: f32, default: f32) -> Self {
        Self {
            name,
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            scale: ParamScale::Logarithmic,
            kind: ParamKind::Float,
        }
    }

    /// A discrete choice parameter; values are label indices.
    pub const fn choice(name: &'static str, labels: &'static [&'static str], default: f32) -> Self {
        Self {
            name,
            unit: ParamUnit::None,
            min: 0.0,
            max: (labels.len() - 1) as f32,
            default,
            scale: ParamScale::Linear,
            kind: ParamKind::Choice { labels },
        }
    }

    /// Clamps a value to this parameter's range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Plain value to normalized \[0, 1\], respecting the scale curve.
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        }
    }

    /// Normalized \[0, 1\] back to a plain value.
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
        }
    }
}
