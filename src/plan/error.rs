//! Error type for building a frequency plan.

use crate::spectrum::{Hertz, Range};
use thiserror::Error;

/// Everything that can go wrong while turning a config tree into a plan.
/// The first violation found ends the build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("'{node}': frequency range {range} is not inside the input range {input}")]
    RangeViolation {
        node: String,
        input: Range<Hertz>,
        range: Range<Hertz>,
    },

    #[error("'{node}': input sample rate {input_rate} is not divisible by sample rate {rate}")]
    DivisibilityViolation {
        node: String,
        input_rate: Hertz,
        rate: Hertz,
    },

    #[error("'{node}': sample rate must not be zero")]
    ZeroSampleRate { node: String },

    #[error("'{node}': center frequency {center} with sample rate {rate} leaves the representable range")]
    SpectrumOverflow {
        node: String,
        center: Hertz,
        rate: Hertz,
    },

    #[error("'{child}' under decimate '{decimate}' is not a stream")]
    MissingStreamUnderDecimate { decimate: String, child: String },

    #[error("'{child}' has a SampleRate but sits under decimate '{decimate}'; decimation may only be nested one level deep")]
    NestedDecimation { decimate: String, child: String },

    #[error("'{node}': table has neither Frequency nor SampleRate")]
    UnclassifiableNode { node: String },

    #[error("'{node}': input spectrum ({found_center} Hz, {found_rate} S/s) does not match its parent output ({expected_center} Hz, {expected_rate} S/s)")]
    InputMismatch {
        node: String,
        expected_center: Hertz,
        expected_rate: Hertz,
        found_center: Hertz,
        found_rate: Hertz,
    },

    #[error("'{node}': missing required field {field}")]
    MissingField { node: String, field: &'static str },

    #[error("'{node}': field {field} must be {expected}, found {found}")]
    InvalidField {
        node: String,
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}
