//! Frequency plan compiler for multi-channel TETRA receivers.
//!
//! A plan describes how one wideband capture is cut into narrow streams,
//! optionally through an intermediate decimation step:
//!
//! ```text
//! capture ──► Decimate ──► Stream, Stream, ...
//!         └─► Stream
//! ```
//!
//! Configs are read through [`source::ConfigTable`] (TOML or JSON), classified
//! and validated by [`plan::build_top_level`], and handed to downstream
//! collaborators as an immutable [`plan::TopLevel`].

pub mod load;
pub mod plan;
pub mod render;
pub mod source;
pub mod spectrum;

pub type Result<T> = anyhow::Result<T>;

pub use load::{from_json_str, from_toml_str, load_file};
pub use plan::{Decimate, PlanError, Prometheus, Stream, TopLevel};
pub use spectrum::{Hertz, Range, SpectrumSlice};
