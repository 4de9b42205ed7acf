//! Configuration loading and resolution

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BillboardError, BillboardResult};
use crate::infrastructure::fs::billboard_config_dir;

use super::types::Config;

/// Project-local config file name, looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "billboard.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when built-in defaults were used
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BillboardResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text, attributing warnings to `file`
pub fn parse_with_warnings(
    content: &str,
    file: &Path,
) -> BillboardResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BillboardError::InvalidConfig {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: file.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit path must load. Discovered files that fail to parse are
/// logged and skipped.
pub fn resolve(explicit: Option<&Path>) -> BillboardResult<LoadedConfig> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok(loaded(config, Some(path.to_path_buf()), warnings));
    }

    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = billboard_config_dir() {
        candidates.push(dir.join("config.toml"));
    }

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => return Ok(loaded(config, Some(path), warnings)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            }
        }
    }

    Ok(loaded(Config::default(), None, Vec::new()))
}

fn loaded(config: Config, source: Option<PathBuf>, warnings: Vec<ConfigWarning>) -> LoadedConfig {
    for warning in &warnings {
        tracing::debug!("{warning}");
    }
    if let Some(path) = &source {
        tracing::debug!(path = %path.display(), "config loaded");
    }
    LoadedConfig {
        config: with_env_overrides(config, |key| std::env::var(key).ok()),
        source,
        warnings,
    }
}

/// Apply environment variable overrides (BILLBOARD_* prefix)
///
/// `var` looks a variable up; unparsable values are logged and ignored.
pub fn with_env_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // BILLBOARD_DATA_DIR
    if let Some(dir) = var("BILLBOARD_DATA_DIR").filter(|v| !v.is_empty()) {
        config.content.data_dir = Some(PathBuf::from(dir));
    }

    // BILLBOARD_CAROUSEL_MODE
    if let Some(mode) = var("BILLBOARD_CAROUSEL_MODE") {
        match mode.parse() {
            Ok(mode) => config.carousel.mode = mode,
            Err(e) => tracing::warn!(error = %e, "ignoring BILLBOARD_CAROUSEL_MODE"),
        }
    }

    // BILLBOARD_SHORTCUTS_DIR
    if let Some(dir) = var("BILLBOARD_SHORTCUTS_DIR").filter(|v| !v.is_empty()) {
        config.launcher.shortcuts_dir = Some(PathBuf::from(dir));
    }

    // BILLBOARD_HTTP_PORT
    if let Some(port) = var("BILLBOARD_HTTP_PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.http.port = port,
            Err(e) => tracing::warn!(value = %port, error = %e, "ignoring BILLBOARD_HTTP_PORT"),
        }
    }

    // BILLBOARD_HTTP_ENABLED
    if let Some(val) = var("BILLBOARD_HTTP_ENABLED") {
        config.http.enabled = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "content",
        "data_dir",
        "marquee_file",
        "carousel",
        "mode",
        "document",
        "extension",
        "launcher",
        "shortcuts_dir",
        "hotkey",
        "http",
        "enabled",
        "port",
        "serve",
        "interval_ms",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
