//! Curva Core - filter-chain primitives for the equalizer visualizer
//!
//! This crate holds everything the response display needs to agree with
//! the audio processing it mirrors: coefficient design, the fixed
//! three-band cascade, and the parameter metadata driving both.
//!
//! # Core Abstractions
//!
//! ## Coefficients & Design
//!
//! - [`BiquadCoeffs`] - Normalized second-order coefficient set with a
//!   closed-form magnitude response (RBJ cookbook designs)
//! - [`make_peak_filter`] / [`make_low_cut_filter`] / [`make_high_cut_filter`] -
//!   Pure factory functions from a [`ChainSettings`] snapshot
//!
//! ## The Chain
//!
//! - [`FilterStage`] - One bypassable second-order unit
//! - [`CutBank`] - Fixed four-slot Butterworth cascade, slope-selectable
//! - [`EqChain`] - Low-cut bank → peak stage → high-cut bank
//!
//! ## Parameters
//!
//! - [`ChainSettings`] / [`CutSlope`] - Immutable parameter snapshot
//! - [`ParamDescriptor`] - Static metadata with a tagged float/choice kind
//!
//! # Design Principles
//!
//! - **Rebuilds allocate nothing**: slope changes flip bypass flags in a
//!   structurally fixed cascade
//! - **Deterministic**: one snapshot, one bit-identical coefficient set
//! - **no_std compatible**: pure `libm` math, `std` feature on by default

#![cfg_attr(not(feature = "std"), no_std)]

pub mod biquad;
pub mod chain;
pub mod design;
pub mod math;
pub mod param_info;
pub mod settings;

pub use biquad::BiquadCoeffs;
pub use chain::{CUT_STAGES, ChainPosition, CutBank, EqChain, FilterStage};
pub use design::{
    MIN_DESIGN_FREQ, MIN_Q, NYQUIST_MARGIN, make_high_cut_filter, make_low_cut_filter,
    make_peak_filter,
};
pub use math::{db_to_linear, linear_to_db};
pub use param_info::{ParamDescriptor, ParamKind, ParamScale, ParamUnit};
pub use settings::{ChainSettings, CutSlope};
