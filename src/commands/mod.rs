//! Command handlers for the billboard binary

mod content;
mod launcher;
mod serve;

pub use content::{cmd_carousel, cmd_marquee, cmd_render};
pub use launcher::{cmd_candidates, cmd_open};
pub use serve::cmd_serve;

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use billboard::config::{Config, LoadedConfig};

/// Resolve config; an explicit `--config` that fails to load is fatal.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let LoadedConfig {
        config, warnings, ..
    } = Config::resolve(explicit).with_context(|| match explicit {
        Some(path) => format!("loading config {}", path.display()),
        None => "loading config".to_string(),
    })?;
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
    Ok(config)
}

/// Write a single NDJSON event (one JSON object per line).
fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
