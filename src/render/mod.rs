//! Rendering of validated plans for humans (text outline) and tools (JSON).

pub mod text;

pub use text::render_text;

use crate::plan::TopLevel;

/// Serialize a plan, derived fields included, as pretty-printed JSON.
pub fn render_json(top: &TopLevel) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(top)?)
}
