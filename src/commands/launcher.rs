//! Launcher command handlers

use std::path::Path;

use anyhow::Result;
use billboard::config::Config;
use billboard::infrastructure::SystemOpener;
use billboard::launcher::Launcher;

use super::{emit, load_config};

fn launcher(config: &Config) -> Launcher {
    Launcher::new(
        config.shortcuts_dir(),
        config.launcher.extension.as_str(),
        SystemOpener,
    )
}

pub fn cmd_candidates(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let launcher = launcher(&config);

    if json {
        let candidates: serde_json::Map<String, serde_json::Value> = launcher
            .candidates()
            .iter()
            .map(|(key, target)| (key.clone(), serde_json::json!(target.display().to_string())))
            .collect();
        emit(serde_json::json!({
            "event": "data",
            "command": "candidates",
            "dir": launcher.base().display().to_string(),
            "candidates": candidates,
        }))?;
        return Ok(());
    }

    for (key, target) in launcher.candidates() {
        println!("{key}\t{}", target.display());
    }
    Ok(())
}

pub fn cmd_open(config_path: Option<&Path>, key: &str, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let opened = launcher(&config).open_candidate(key)?;

    if json {
        emit(serde_json::json!({
            "event": "data",
            "command": "open",
            "key": key,
            "found": opened.is_some(),
            "target": opened.as_ref().map(|t| t.display().to_string()),
        }))?;
        return Ok(());
    }

    match opened {
        Some(target) => println!("{key} -> {}", target.display()),
        None => eprintln!("no candidate named '{key}'"),
    }
    Ok(())
}
