//! Classify config tables and build the validated plan tree.
//!
//! Table shapes:
//! - root:        CenterFrequency, DeviceString, SampleRate, [RF|IF|BB]Gain
//! - Prometheus:  Host, Port, PollInterval (root only)
//! - Decimate:    Frequency, SampleRate, child tables (each a Stream)
//! - Stream:      Frequency, Host, Port, IQPassthrough
//!
//! A node table is a Decimate iff it has a SampleRate. Streams always run at
//! the TETRA channel rate.

use crate::plan::node::narrowing;
use crate::plan::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_PROMETHEUS_HOST, DEFAULT_PROMETHEUS_PORT, Decimate, Gains,
    Node, PlanError, Prometheus, Stream, TETRA_SAMPLE_RATE, TopLevel,
};
use crate::source::{ConfigTable, Fields};
use crate::spectrum::{Hertz, SpectrumSlice};
use tracing::{debug, info};

/// Name used for the root table in errors.
pub const ROOT_NODE: &str = "<root>";

const PROMETHEUS_TABLE: &str = "Prometheus";

fn slice(node: &str, center: Hertz, rate: Hertz) -> Result<SpectrumSlice<Hertz>, PlanError> {
    SpectrumSlice::new(center, rate).ok_or_else(|| PlanError::SpectrumOverflow {
        node: node.to_string(),
        center,
        rate,
    })
}

/// Build and validate a plan from any config tree.
pub fn build_top_level<T: ConfigTable>(root: &T) -> Result<TopLevel, PlanError> {
    let f = Fields::new(ROOT_NODE, root);

    let center_frequency = f.required("CenterFrequency", f.u64("CenterFrequency")?)?;
    let device_string = f.required("DeviceString", f.string("DeviceString")?)?;
    let sample_rate = f.required("SampleRate", f.u64("SampleRate")?)?;
    let gains = Gains {
        rf_gain: f.u32("RFGain")?.unwrap_or(0),
        if_gain: f.u32("IFGain")?.unwrap_or(0),
        bb_gain: f.u32("BBGain")?.unwrap_or(0),
    };

    let spectrum = slice(ROOT_NODE, center_frequency, sample_rate)?;

    let mut streams = Vec::new();
    let mut decimators = Vec::new();
    let mut prometheus = None;

    for (name, table) in root.tables() {
        if name == PROMETHEUS_TABLE {
            prometheus = Some(build_prometheus(table)?);
            continue;
        }

        match build_node(name, table, &spectrum)? {
            Node::Stream(stream) => streams.push(stream),
            Node::Decimate(decimate) => decimators.push(decimate),
        }
    }

    let top = TopLevel::new(
        spectrum,
        device_string,
        gains,
        streams,
        decimators,
        prometheus,
    )?;

    info!(
        center_frequency,
        sample_rate,
        decimators = top.decimators().len(),
        streams = top.streams().len(),
        prometheus = top.prometheus().is_some(),
        "frequency plan built"
    );

    Ok(top)
}

/// Classify `table` and build the node it describes, fed by `input`.
fn build_node<T: ConfigTable>(
    name: &str,
    table: &T,
    input: &SpectrumSlice<Hertz>,
) -> Result<Node, PlanError> {
    if table.contains("SampleRate") {
        build_decimate(name, table, input).map(Node::Decimate)
    } else if table.contains("Frequency") {
        build_stream(name, table, input).map(Node::Stream)
    } else {
        Err(PlanError::UnclassifiableNode {
            node: name.to_string(),
        })
    }
}

fn build_prometheus<T: ConfigTable>(table: &T) -> Result<Prometheus, PlanError> {
    let f = Fields::new(PROMETHEUS_TABLE, table);

    let host = f
        .string("Host")?
        .unwrap_or_else(|| DEFAULT_PROMETHEUS_HOST.to_string());
    let port = f.port("Port")?.unwrap_or(DEFAULT_PROMETHEUS_PORT);
    let polling_interval = f.required("PollInterval", f.u32("PollInterval")?)?;

    debug!(%host, port, polling_interval, "prometheus exporter configured");
    Ok(Prometheus::new(host, port, polling_interval))
}

fn build_stream<T: ConfigTable>(
    name: &str,
    table: &T,
    input: &SpectrumSlice<Hertz>,
) -> Result<Stream, PlanError> {
    let f = Fields::new(name, table);

    let frequency = f.required("Frequency", f.u64("Frequency")?)?;
    let host = f.string("Host")?.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = f.port("Port")?.unwrap_or(DEFAULT_PORT);
    let iq_passthrough = f.boolean("IQPassthrough")?.unwrap_or(false);

    let spectrum = slice(name, frequency, TETRA_SAMPLE_RATE)?;
    let stream = Stream::new(name, *input, spectrum, host, port)?.with_iq_passthrough(iq_passthrough);

    debug!(
        node = name,
        frequency,
        decimation = stream.decimation(),
        host = stream.host(),
        port,
        "stream"
    );
    Ok(stream)
}

fn build_decimate<T: ConfigTable>(
    name: &str,
    table: &T,
    input: &SpectrumSlice<Hertz>,
) -> Result<Decimate, PlanError> {
    let f = Fields::new(name, table);

    let frequency = f.required("Frequency", f.u64("Frequency")?)?;
    let sample_rate = f.required("SampleRate", f.u64("SampleRate")?)?;
    let spectrum = slice(name, frequency, sample_rate)?;

    // The decimate itself must be sound before its output can feed anything.
    narrowing(name, input, &spectrum)?;

    // Children see the decimated output as their input. Only streams may
    // hang below a decimate.
    let mut streams = Vec::new();
    for (child, child_table) in table.tables() {
        if child == PROMETHEUS_TABLE {
            return Err(PlanError::MissingStreamUnderDecimate {
                decimate: name.to_string(),
                child: child.to_string(),
            });
        }

        match build_node(child, child_table, &spectrum)? {
            Node::Stream(stream) => streams.push(stream),
            nested @ Node::Decimate(_) => {
                return Err(PlanError::NestedDecimation {
                    decimate: name.to_string(),
                    child: nested.name().to_string(),
                });
            }
        }
    }

    let decimate = Decimate::new(name, *input, spectrum, streams)?;

    debug!(
        node = name,
        frequency,
        sample_rate,
        decimation = decimate.decimation(),
        streams = decimate.streams().len(),
        "decimate"
    );
    Ok(decimate)
}
