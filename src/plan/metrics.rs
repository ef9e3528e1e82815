//! What the metrics collaborator needs from a plan: one signal strength
//! gauge per stream, labelled by frequency and name.

use crate::plan::{Decimate, PlanVisitor, Stream, TopLevel};
use serde::Serialize;

/// Gauge family every stream reports into.
pub const SIGNAL_STRENGTH_GAUGE: &str = "signal_strength";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GaugeLabels {
    pub frequency: String,
    pub name: String,
}

impl GaugeLabels {
    pub fn for_stream(stream: &Stream) -> Self {
        Self {
            frequency: stream.spectrum().center_frequency().to_string(),
            name: stream.name().to_string(),
        }
    }
}

struct Collect(Vec<GaugeLabels>);

impl PlanVisitor for Collect {
    fn stream(&mut self, stream: &Stream, _parent: Option<&Decimate>) {
        self.0.push(GaugeLabels::for_stream(stream));
    }
}

/// Labels for every stream of the plan, in wiring order.
pub fn signal_strength_labels(top: &TopLevel) -> Vec<GaugeLabels> {
    let mut collect = Collect(Vec::new());
    top.walk(&mut collect);
    collect.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::from_toml_str;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_cover_nested_and_root_streams() {
        let top = from_toml_str(
            r#"
            CenterFrequency = 4000000
            DeviceString = ""
            SampleRate = 1000000

            [Prometheus]
            PollInterval = 10

            [DecimateA]
            Frequency = 4250000
            SampleRate = 500000
            [DecimateA.Stream0]
            Frequency = 4250010

            [Stream2]
            Frequency = 4000100
            "#,
        )
        .unwrap();

        let labels = signal_strength_labels(&top);
        assert_eq!(
            labels,
            vec![
                GaugeLabels {
                    frequency: "4250010".into(),
                    name: "Stream0".into(),
                },
                GaugeLabels {
                    frequency: "4000100".into(),
                    name: "Stream2".into(),
                },
            ]
        );
    }
}
