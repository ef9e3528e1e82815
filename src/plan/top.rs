use crate::plan::node::expect_input;
use crate::plan::{Decimate, PlanError, Stream};
use crate::spectrum::{Hertz, SpectrumSlice};
use serde::Serialize;

pub const DEFAULT_PROMETHEUS_HOST: &str = "127.0.0.1";
pub const DEFAULT_PROMETHEUS_PORT: u16 = 9010;

/// Settings for the optional metrics exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prometheus {
    pub host: String,
    pub port: u16,
    /// Seconds between gauge updates.
    pub polling_interval: u32,
}

impl Prometheus {
    pub fn new(host: impl Into<String>, port: u16, polling_interval: u32) -> Self {
        Self {
            host: host.into(),
            port,
            polling_interval,
        }
    }

    /// Address the exporter should listen on, as `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Gain settings of the capture device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Gains {
    pub rf_gain: u32,
    pub if_gain: u32,
    pub bb_gain: u32,
}

/// Root of a validated frequency plan.
///
/// Root streams and decimators are cut directly out of the capture spectrum,
/// so their input must equal it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopLevel {
    spectrum: SpectrumSlice<Hertz>,
    device_string: String,
    gains: Gains,
    streams: Vec<Stream>,
    decimators: Vec<Decimate>,
    prometheus: Option<Prometheus>,
}

impl TopLevel {
    pub fn new(
        spectrum: SpectrumSlice<Hertz>,
        device_string: impl Into<String>,
        gains: Gains,
        streams: Vec<Stream>,
        decimators: Vec<Decimate>,
        prometheus: Option<Prometheus>,
    ) -> Result<Self, PlanError> {
        for stream in &streams {
            expect_input(stream.name(), &spectrum, stream.input_spectrum())?;
        }
        for decimate in &decimators {
            expect_input(decimate.name(), &spectrum, decimate.input_spectrum())?;
        }

        Ok(Self {
            spectrum,
            device_string: device_string.into(),
            gains,
            streams,
            decimators,
            prometheus,
        })
    }

    /// The slice captured by the device.
    pub fn spectrum(&self) -> &SpectrumSlice<Hertz> {
        &self.spectrum
    }

    pub fn device_string(&self) -> &str {
        &self.device_string
    }

    pub fn rf_gain(&self) -> u32 {
        self.gains.rf_gain
    }

    pub fn if_gain(&self) -> u32 {
        self.gains.if_gain
    }

    pub fn bb_gain(&self) -> u32 {
        self.gains.bb_gain
    }

    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    pub fn decimators(&self) -> &[Decimate] {
        &self.decimators
    }

    pub fn prometheus(&self) -> Option<&Prometheus> {
        self.prometheus.as_ref()
    }
}
