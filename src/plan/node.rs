//! Stream and Decimate nodes of the plan tree.
//!
//! Both are checked when constructed and never change afterwards: a value of
//! either type always satisfies
//! - its frequency range lies inside the range of its input
//! - the input sample rate is an exact multiple of its own sample rate

use crate::plan::PlanError;
use crate::spectrum::{Hertz, SpectrumSlice};
use serde::Serialize;

/// Native sample rate of a TETRA channel.
pub const TETRA_SAMPLE_RATE: Hertz = 25_000;

/// Where stream data goes when the config does not say. The pipeline sink
/// expects an address literal, not a host name.
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 42_000;

/// Validate that `spectrum` can be cut out of `input` and return the
/// decimation between them.
pub(crate) fn narrowing(
    node: &str,
    input: &SpectrumSlice<Hertz>,
    spectrum: &SpectrumSlice<Hertz>,
) -> Result<Hertz, PlanError> {
    if !input.frequency_range().contains(&spectrum.frequency_range()) {
        return Err(PlanError::RangeViolation {
            node: node.to_string(),
            input: input.frequency_range(),
            range: spectrum.frequency_range(),
        });
    }

    if spectrum.sample_rate() == 0 {
        return Err(PlanError::ZeroSampleRate {
            node: node.to_string(),
        });
    }

    if input.sample_rate() % spectrum.sample_rate() != 0 {
        return Err(PlanError::DivisibilityViolation {
            node: node.to_string(),
            input_rate: input.sample_rate(),
            rate: spectrum.sample_rate(),
        });
    }

    Ok(input.sample_rate() / spectrum.sample_rate())
}

/// Require that `node` is fed exactly by `expected`.
pub(crate) fn expect_input(
    node: &str,
    expected: &SpectrumSlice<Hertz>,
    found: &SpectrumSlice<Hertz>,
) -> Result<(), PlanError> {
    if expected != found {
        return Err(PlanError::InputMismatch {
            node: node.to_string(),
            expected_center: expected.center_frequency(),
            expected_rate: expected.sample_rate(),
            found_center: found.center_frequency(),
            found_rate: found.sample_rate(),
        });
    }
    Ok(())
}

/// Signed distance between two center frequencies, saturating at the `i64`
/// bounds. A node inside its input never gets there: the distance is at most
/// half the input rate.
fn center_offset(spectrum: &SpectrumSlice<Hertz>, input: &SpectrumSlice<Hertz>) -> i64 {
    let diff = i128::from(spectrum.center_frequency()) - i128::from(input.center_frequency());
    i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
}

/// A single narrow signal extracted from a wider input and sent to
/// `host:port`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream {
    name: String,
    input_spectrum: SpectrumSlice<Hertz>,
    spectrum: SpectrumSlice<Hertz>,
    decimation: Hertz,
    host: String,
    port: u16,
    iq_passthrough: bool,
}

impl Stream {
    pub fn new(
        name: impl Into<String>,
        input_spectrum: SpectrumSlice<Hertz>,
        spectrum: SpectrumSlice<Hertz>,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Self, PlanError> {
        let name = name.into();
        let decimation = narrowing(&name, &input_spectrum, &spectrum)?;

        Ok(Self {
            name,
            input_spectrum,
            spectrum,
            decimation,
            host: host.into(),
            port,
            iq_passthrough: false,
        })
    }

    /// Send raw I/Q samples instead of decoded bits.
    pub fn with_iq_passthrough(mut self, enabled: bool) -> Self {
        self.iq_passthrough = enabled;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_spectrum(&self) -> &SpectrumSlice<Hertz> {
        &self.input_spectrum
    }

    pub fn spectrum(&self) -> &SpectrumSlice<Hertz> {
        &self.spectrum
    }

    pub fn decimation(&self) -> Hertz {
        self.decimation
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn iq_passthrough(&self) -> bool {
        self.iq_passthrough
    }

    /// Frequency shift from the input center to this stream's center.
    pub fn offset(&self) -> i64 {
        center_offset(&self.spectrum, &self.input_spectrum)
    }
}

/// A decimation step whose output feeds `streams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decimate {
    name: String,
    input_spectrum: SpectrumSlice<Hertz>,
    spectrum: SpectrumSlice<Hertz>,
    decimation: Hertz,
    streams: Vec<Stream>,
}

impl Decimate {
    pub fn new(
        name: impl Into<String>,
        input_spectrum: SpectrumSlice<Hertz>,
        spectrum: SpectrumSlice<Hertz>,
        streams: Vec<Stream>,
    ) -> Result<Self, PlanError> {
        let name = name.into();
        let decimation = narrowing(&name, &input_spectrum, &spectrum)?;

        for stream in &streams {
            expect_input(stream.name(), &spectrum, stream.input_spectrum())?;
        }

        Ok(Self {
            name,
            input_spectrum,
            spectrum,
            decimation,
            streams,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_spectrum(&self) -> &SpectrumSlice<Hertz> {
        &self.input_spectrum
    }

    pub fn spectrum(&self) -> &SpectrumSlice<Hertz> {
        &self.spectrum
    }

    pub fn decimation(&self) -> Hertz {
        self.decimation
    }

    /// Child streams in document order.
    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    pub fn offset(&self) -> i64 {
        center_offset(&self.spectrum, &self.input_spectrum)
    }
}

/// A node of the plan tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Stream(Stream),
    Decimate(Decimate),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::Stream(s) => s.name(),
            Node::Decimate(d) => d.name(),
        }
    }
}
