//! Reading plan configs from disk or memory.
//!
//! `.json` files are read as JSON, everything else as TOML. Syntax and I/O
//! failures carry the path as context; validation failures stay a
//! [`PlanError`] underneath so callers can `downcast_ref` them.

use crate::Result;
use crate::plan::{TopLevel, build_top_level};

use anyhow::{Context, bail};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Build a plan from TOML text.
pub fn from_toml_str(text: &str) -> Result<TopLevel> {
    let table: toml::Table = text.parse().context("parse TOML config")?;
    Ok(build_top_level(&table)?)
}

/// Build a plan from JSON text. The document must be an object.
pub fn from_json_str(text: &str) -> Result<TopLevel> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse JSON config")?;
    let Some(root) = value.as_object() else {
        bail!("JSON config must be an object at the top level");
    };
    Ok(build_top_level(root)?)
}

/// Read and build the plan stored at `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<TopLevel> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    debug!(path = %path.display(), json = is_json, "loading config");

    let top = if is_json {
        from_json_str(&text)
    } else {
        from_toml_str(&text)
    };
    top.with_context(|| format!("invalid config {}", path.display()))
}
