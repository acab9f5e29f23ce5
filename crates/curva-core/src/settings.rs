//! Immutable snapshot of the user-facing equalizer parameters.

/// Steepness of a cut filter, in 12 dB/octave steps.
///
/// Each step adds one more cascaded second-order section, so the
/// resulting Butterworth filter has order `2 * (ordinal + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutSlope {
    /// 12 dB/octave — one second-order section.
    #[default]
    Db12 = 0,
    /// 24 dB/octave — two sections.
    Db24 = 1,
    /// 36 dB/octave — three sections.
    Db36 = 2,
    /// 48 dB/octave — four sections.
    Db48 = 3,
}

impl CutSlope {
    /// Display labels, index-aligned with the slope ordinals.
    pub const LABELS: [&'static str; 4] = ["12 dB/Oct", "24 dB/Oct", "36 dB/Oct", "48 dB/Oct"];

    /// Slope from a choice-parameter index, saturating at the steepest.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Db12,
            1 => Self::Db24,
            2 => Self::Db36,
            _ => Self::Db48,
        }
    }

    /// Ordinal position, 0..=3.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of active second-order sections for this slope.
    pub fn sections(self) -> usize {
        self.index() + 1
    }
}

/// Snapshot of every chain parameter, taken in one read of the store.
///
/// Created fresh on each read; carries no identity beyond its values and
/// is never mutated after construction. Two snapshots with equal fields
/// rebuild to bit-identical coefficient sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainSettings {
    /// Parametric peak center frequency in Hz (> 0).
    pub peak_freq_hz: f32,
    /// Peak gain in dB, signed.
    pub peak_gain_db: f32,
    /// Peak quality factor (> 0).
    pub peak_q: f32,
    /// Low-cut (high-pass) corner frequency in Hz.
    pub low_cut_freq_hz: f32,
    /// High-cut (low-pass) corner frequency in Hz.
    pub high_cut_freq_hz: f32,
    /// Low-cut steepness.
    pub low_cut_slope: CutSlope,
    /// High-cut steepness.
    pub high_cut_slope: CutSlope,
}

impl Default for ChainSettings {
    /// Neutral settings: peak flat at 750 Hz, cuts parked at the band edges.
    fn default() -> Self {
        Self {
            peak_freq_hz: 750.0,
            peak_gain_db: 0.0,
            peak_q: 1.0,
            low_cut_freq_hz: 20.0,
            high_cut_freq_hz: 20000.0,
            low_cut_slope: CutSlope::Db12,
            high_cut_slope: CutSlope::Db12,
        }
    }
}
