//! Plans described by a list of offsets from the capture center instead of
//! a config file. Every offset becomes one stream fed directly by the
//! source, with ports counting up from `udp_start`.

use crate::plan::build::ROOT_NODE;
use crate::plan::{DEFAULT_HOST, Gains, PlanError, Stream, TETRA_SAMPLE_RATE, TopLevel};
use crate::spectrum::{Hertz, SpectrumSlice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetsPlan {
    pub center_frequency: Hertz,
    pub sample_rate: Hertz,
    pub device_string: String,
    pub gains: Gains,
    pub offsets: Vec<i64>,
    pub udp_start: u16,
}

impl OffsetsPlan {
    pub fn build(&self) -> Result<TopLevel, PlanError> {
        let spectrum = SpectrumSlice::new(self.center_frequency, self.sample_rate).ok_or_else(|| {
            PlanError::SpectrumOverflow {
                node: ROOT_NODE.to_string(),
                center: self.center_frequency,
                rate: self.sample_rate,
            }
        })?;

        let mut streams = Vec::with_capacity(self.offsets.len());
        for (index, offset) in self.offsets.iter().enumerate() {
            let frequency = self
                .center_frequency
                .checked_add_signed(*offset)
                .ok_or_else(|| PlanError::InvalidField {
                    node: format!("offset {offset}"),
                    field: "offsets",
                    expected: "an offset that keeps the frequency positive",
                    found: offset.to_string(),
                })?;
            let name = format!("Stream {frequency}");

            let port = u16::try_from(index)
                .ok()
                .and_then(|i| self.udp_start.checked_add(i))
                .ok_or_else(|| PlanError::InvalidField {
                    node: name.clone(),
                    field: "udp-start",
                    expected: "a start port that leaves room for every stream",
                    found: self.udp_start.to_string(),
                })?;

            let stream_spectrum = SpectrumSlice::new(frequency, TETRA_SAMPLE_RATE).ok_or_else(|| {
                PlanError::SpectrumOverflow {
                    node: name.clone(),
                    center: frequency,
                    rate: TETRA_SAMPLE_RATE,
                }
            })?;

            streams.push(Stream::new(name, spectrum, stream_spectrum, DEFAULT_HOST, port)?);
        }

        TopLevel::new(
            spectrum,
            self.device_string.clone(),
            self.gains,
            streams,
            Vec::new(),
            None,
        )
    }
}
