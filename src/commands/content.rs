//! Marquee, carousel and render command handlers

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use billboard::application::Billboard;
use billboard::domain::ports::FileSystem;
use billboard::domain::value_objects::Refresh;
use billboard::focus::{FocusController, HeadlessWindow};
use billboard::infrastructure::LocalFs;

use super::{emit, load_config};

fn billboard(config_path: Option<&Path>) -> Result<Billboard> {
    let config = load_config(config_path)?;
    Ok(Billboard::from_config(
        &config,
        FocusController::new(HeadlessWindow::new()),
    ))
}

pub fn cmd_marquee(config_path: Option<&Path>, json: bool) -> Result<()> {
    let mut billboard = billboard(config_path)?;
    let text = billboard.marquee_message()?;

    if json {
        emit(serde_json::json!({
            "event": "data",
            "command": "marquee",
            "text": text,
        }))?;
        return Ok(());
    }

    // Verbatim, no trailing newline added
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn cmd_carousel(config_path: Option<&Path>, force: bool, json: bool) -> Result<()> {
    let mut billboard = billboard(config_path)?;
    let refresh = billboard.carousel_pages(force)?;

    if json {
        let mut value = serde_json::to_value(&refresh)?;
        if let Some(obj) = value.as_object_mut() {
            obj.insert("event".to_string(), serde_json::json!("data"));
            obj.insert("command".to_string(), serde_json::json!("carousel"));
        }
        emit(value)?;
        return Ok(());
    }

    if let Refresh::Rendered(pages) = refresh {
        println!("{}", pages.join("\n\n"));
    }
    Ok(())
}

pub fn cmd_render(file: &Path, json: bool) -> Result<()> {
    let source = LocalFs
        .read(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let html = billboard::markup::render(&source);

    if json {
        emit(serde_json::json!({
            "event": "data",
            "command": "render",
            "file": file.display().to_string(),
            "html": html,
        }))?;
        return Ok(());
    }

    println!("{html}");
    Ok(())
}
