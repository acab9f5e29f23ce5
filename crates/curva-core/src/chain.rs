//! The fixed-topology equalizer chain: 4 low-cut + 1 peak + 4 high-cut.
//!
//! The cascade is structurally fixed and behaviorally variable: slope
//! changes never resize anything, they flip per-stage bypass flags. That
//! keeps rebuilds allocation-free and the stage layout stable for the
//! response evaluator.

use crate::biquad::BiquadCoeffs;
use crate::design::{make_high_cut_filter, make_low_cut_filter, make_peak_filter};
use crate::settings::{ChainSettings, CutSlope};

/// Number of second-order slots in each cut bank.
pub const CUT_STAGES: usize = 4;

/// Named positions in the chain, signal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainPosition {
    /// High-pass cascade at the chain input.
    LowCut,
    /// Parametric peak in the middle.
    Peak,
    /// Low-pass cascade at the chain output.
    HighCut,
}

/// One second-order filter unit: a coefficient set, a bypass flag, and
/// Direct Form I delay-line state.
///
/// Constructed pass-through. Coefficients are swapped wholesale when the
/// chain rebuilds; the bypass flag toggles independently of any swap.
#[derive(Debug, Clone)]
pub struct FilterStage {
    coeffs: BiquadCoeffs,
    bypassed: bool,
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl FilterStage {
    /// A pass-through stage, active.
    pub fn new() -> Self {
        Self {
            coeffs: BiquadCoeffs::identity(),
            bypassed: false,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Replaces the coefficient set in a single assignment.
    #[inline]
    pub fn set_coefficients(&mut self, coeffs: BiquadCoeffs) {
        self.coeffs = coeffs;
    }

    /// The current coefficient set.
    #[inline]
    pub fn coefficients(&self) -> &BiquadCoeffs {
        &self.coeffs
    }

    /// Whether this stage is currently inactive.
    #[inline]
    pub fn is_bypassed(&self) -> bool {
        self.bypassed
    }

    /// Toggles the stage on or off without touching coefficients.
    #[inline]
    pub fn set_bypassed(&mut self, bypassed: bool) {
        self.bypassed = bypassed;
    }

    /// Runs one sample through the section (Direct Form I).
    ///
    /// A bypassed stage returns the input untouched and leaves its delay
    /// lines alone.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        if self.bypassed {
            return input;
        }
        let output = self.coeffs.b0 * input + self.coeffs.b1 * self.x1 + self.coeffs.b2 * self.x2
            - self.coeffs.a1 * self.y1
            - self.coeffs.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Clears the delay lines, keeping coefficients and bypass state.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

impl Default for FilterStage {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed bank of four cut-filter stages plus a group-level bypass.
///
/// The group flag dominates: a bypassed bank contributes nothing to the
/// signal or the response curve, whatever the per-stage flags say.
#[derive(Debug, Clone, Default)]
pub struct CutBank {
    stages: [FilterStage; CUT_STAGES],
    bypassed: bool,
}

impl CutBank {
    /// Installs a freshly designed cascade for the given slope.
    ///
    /// All four stages are disabled first, then exactly
    /// `slope.sections()` of them are re-enabled and assigned in order
    /// (stage 0 closest to the signal input). Disabling before
    /// reassigning means a newly enabled slot can never run one tick on
    /// a stale coefficient set.
    pub fn configure(&mut self, coeffs: &[BiquadCoeffs; CUT_STAGES], slope: CutSlope) {
        for stage in &mut self.stages {
            stage.set_bypassed(true);
        }
        for (stage, c) in self.stages.iter_mut().zip(coeffs).take(slope.sections()) {
            stage.set_coefficients(*c);
            stage.set_bypassed(false);
        }
    }

    /// Group-level bypass flag.
    pub fn is_bypassed(&self) -> bool {
        self.bypassed
    }

    /// Sets the group-level bypass flag.
    pub fn set_bypassed(&mut self, bypassed: bool) {
        self.bypassed = bypassed;
    }

    /// The stages in signal order.
    pub fn stages(&self) -> &[FilterStage; CUT_STAGES] {
        &self.stages
    }

    /// Number of stages currently active (not individually bypassed).
    pub fn active_stages(&self) -> usize {
        self.stages.iter().filter(|s| !s.is_bypassed()).count()
    }

    fn process(&mut self, input: f32) -> f32 {
        if self.bypassed {
            return input;
        }
        self.stages
            .iter_mut()
            .fold(input, |sample, stage| stage.process(sample))
    }

    fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
    }
}

/// The full equalizer cascade in signal order: low-cut bank, peak stage,
/// high-cut bank.
///
/// Mutated only by the update loop; read by the response evaluator on
/// the same actor right after mutation. Nothing here is synchronized —
/// cross-thread readers need their own arrangement.
#[derive(Debug, Clone, Default)]
pub struct EqChain {
    low_cut: CutBank,
    peak: FilterStage,
    high_cut: CutBank,
}

impl EqChain {
    /// A neutral chain: every stage pass-through, one stage active per
    /// cut bank (the default 12 dB/oct slope).
    pub fn new() -> Self {
        let mut chain = Self::default();
        chain.apply(&ChainSettings::default(), 48000.0);
        chain
    }

    /// Rebuilds every coefficient set from a settings snapshot.
    ///
    /// Runs the full factory pass and installs the results; after this
    /// returns, each cut bank has exactly `slope.sections()` active
    /// stages. No allocation happens on this path.
    pub fn apply(&mut self, settings: &ChainSettings, sample_rate: f32) {
        self.peak
            .set_coefficients(make_peak_filter(settings, sample_rate));
        self.low_cut
            .configure(&make_low_cut_filter(settings, sample_rate), settings.low_cut_slope);
        self.high_cut
            .configure(&make_high_cut_filter(settings, sample_rate), settings.high_cut_slope);
    }

    /// Group-level bypass query for a named chain position.
    pub fn is_bypassed(&self, position: ChainPosition) -> bool {
        match position {
            ChainPosition::LowCut => self.low_cut.is_bypassed(),
            ChainPosition::Peak => self.peak.is_bypassed(),
            ChainPosition::HighCut => self.high_cut.is_bypassed(),
        }
    }

    /// Sets the group-level bypass for a named chain position.
    pub fn set_bypassed(&mut self, position: ChainPosition, bypassed: bool) {
        match position {
            ChainPosition::LowCut => self.low_cut.set_bypassed(bypassed),
            ChainPosition::Peak => self.peak.set_bypassed(bypassed),
            ChainPosition::HighCut => self.high_cut.set_bypassed(bypassed),
        }
    }

    /// Per-stage bypass query for an indexed cut sub-stage.
    ///
    /// `ChainPosition::Peak` ignores the index and reports the peak
    /// stage itself. Out-of-range indices read as bypassed.
    pub fn stage_bypassed(&self, position: ChainPosition, index: usize) -> bool {
        match position {
            ChainPosition::LowCut => {
                self.low_cut.stages().get(index).is_none_or(FilterStage::is_bypassed)
            }
            ChainPosition::Peak => self.peak.is_bypassed(),
            ChainPosition::HighCut => {
                self.high_cut.stages().get(index).is_none_or(FilterStage::is_bypassed)
            }
        }
    }

    /// The low-cut bank.
    pub fn low_cut(&self) -> &CutBank {
        &self.low_cut
    }

    /// The peak stage.
    pub fn peak(&self) -> &FilterStage {
        &self.peak
    }

    /// The high-cut bank.
    pub fn high_cut(&self) -> &CutBank {
        &self.high_cut
    }

    /// Runs one sample through the whole cascade.
    pub fn process(&mut self, input: f32) -> f32 {
        let after_low = self.low_cut.process(input);
        let after_peak = self.peak.process(after_low);
        self.high_cut.process(after_peak)
    }

    /// Clears every stage's delay lines.
    pub fn reset(&mut self) {
        self.low_cut.reset();
        self.peak.reset();
        self.high_cut.reset();
    }
}
