pub mod console;
pub mod corpus;
pub mod search;

use anyhow::{Context, Result};
use search_core::EngineConfig;
use std::path::Path;

pub use console::run_console;
pub use corpus::{build_engine, load_corpus};
pub use search::{run_search, run_stats, SearchOptions};

/// Read an `EngineConfig` from a JSON file; missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<EngineConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
