//! Plan layer: the validated tree of streams and decimators.
//!
//! It owns:
//! - node types (Stream, Decimate, TopLevel, Prometheus) and their invariants
//! - the builder that classifies config tables into nodes
//! - read-only views for pipeline and metrics collaborators

pub mod build;
pub mod error;
pub mod metrics;
pub mod node;
pub mod offsets;
pub mod top;
pub mod walk;

pub use build::build_top_level;
pub use error::PlanError;
pub use metrics::{GaugeLabels, SIGNAL_STRENGTH_GAUGE, signal_strength_labels};
pub use node::{DEFAULT_HOST, DEFAULT_PORT, Decimate, Node, Stream, TETRA_SAMPLE_RATE};
pub use offsets::OffsetsPlan;
pub use top::{DEFAULT_PROMETHEUS_HOST, DEFAULT_PROMETHEUS_PORT, Gains, Prometheus, TopLevel};
pub use walk::PlanVisitor;
