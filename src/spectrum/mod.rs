//! Spectrum layer: numeric intervals and slices of EM spectrum.
//!
//! Everything here is generic over the integer type; the plan tree uses
//! `Hertz` throughout.

pub mod range;
pub mod slice;

pub use range::Range;
pub use slice::SpectrumSlice;

/// Frequencies and sample rates in the plan tree.
pub type Hertz = u64;
