use crate::plan::{
    Decimate, PlanVisitor, SIGNAL_STRENGTH_GAUGE, Stream, TopLevel, signal_strength_labels,
};

/// Render an indented outline of a plan, one line per node.
///
/// Example:
/// capture 4000000 Hz @ 1000000 S/s [3500000, 4500000] device "" gains rf=0 if=14 bb=0
///   decimate DecimateA 4250000 Hz @ 500000 S/s [4000000, 4500000] /2 offset +250000
///     stream Stream0 4250010 Hz /20 offset +10 -> 127.0.0.1:4100
///   stream Stream2 4000100 Hz /40 offset +100 -> 127.0.0.2:4200
pub fn render_text(top: &TopLevel) -> String {
    let mut outline = Outline(String::new());
    top.walk(&mut outline);

    let mut out = outline.0;
    if let Some(p) = top.prometheus() {
        out.push_str(&format!(
            "prometheus {} every {}s, {} {} gauge(s)\n",
            p.bind_address(),
            p.polling_interval,
            signal_strength_labels(top).len(),
            SIGNAL_STRENGTH_GAUGE
        ));
    }
    out
}

struct Outline(String);

impl PlanVisitor for Outline {
    fn source(&mut self, top: &TopLevel) {
        let s = top.spectrum();
        self.0.push_str(&format!(
            "capture {} Hz @ {} S/s {} device {:?} gains rf={} if={} bb={}\n",
            s.center_frequency(),
            s.sample_rate(),
            s.frequency_range(),
            top.device_string(),
            top.rf_gain(),
            top.if_gain(),
            top.bb_gain()
        ));
    }

    fn decimate(&mut self, d: &Decimate) {
        let s = d.spectrum();
        self.0.push_str(&format!(
            "  decimate {} {} Hz @ {} S/s {} /{} offset {:+}\n",
            d.name(),
            s.center_frequency(),
            s.sample_rate(),
            s.frequency_range(),
            d.decimation(),
            d.offset()
        ));
    }

    fn stream(&mut self, st: &Stream, parent: Option<&Decimate>) {
        let indent = if parent.is_some() { "    " } else { "  " };
        let iq = if st.iq_passthrough() { " (iq)" } else { "" };
        self.0.push_str(&format!(
            "{}stream {} {} Hz /{} offset {:+} -> {}:{}{}\n",
            indent,
            st.name(),
            st.spectrum().center_frequency(),
            st.decimation(),
            st.offset(),
            st.host(),
            st.port(),
            iq
        ));
    }
}
