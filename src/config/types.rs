//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CarouselMode;
use crate::error::BillboardResult;
use crate::infrastructure::fs::{billboard_data_dir, expand_home};

use super::loader::{self, ConfigWarning, LoadedConfig};

/// Where the marquee and carousel files live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Data directory; `~` is expanded. Defaults to the user data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_marquee_file")]
    pub marquee_file: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            marquee_file: default_marquee_file(),
        }
    }
}

fn default_marquee_file() -> String {
    "marquee.txt".to_string()
}

/// Carousel source selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default)]
    pub mode: CarouselMode,

    /// File name used in document mode
    #[serde(default = "default_document")]
    pub document: String,

    /// Page extension used in pages mode, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            mode: CarouselMode::default(),
            document: default_document(),
            extension: default_extension(),
        }
    }
}

fn default_document() -> String {
    "carousel.adoc".to_string()
}

fn default_extension() -> String {
    "adoc".to_string()
}

/// Launcher shortcuts and hotkey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Defaults to `<data_dir>/shortcuts`
    #[serde(default)]
    pub shortcuts_dir: Option<PathBuf>,

    #[serde(default = "default_shortcut_extension")]
    pub extension: String,

    /// Accelerator the host binds to the focus toggle
    #[serde(default = "default_hotkey")]
    pub hotkey: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            shortcuts_dir: None,
            extension: default_shortcut_extension(),
            hotkey: default_hotkey(),
        }
    }
}

fn default_shortcut_extension() -> String {
    if cfg!(windows) { "lnk" } else { "desktop" }.to_string()
}

fn default_hotkey() -> String {
    "Alt+Space".to_string()
}

/// Loopback toggle endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_http_enabled")]
    pub enabled: bool,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            enabled: default_http_enabled(),
            port: default_port(),
        }
    }
}

/// Linux hosts lack a global shortcut API, so they toggle over HTTP
fn default_http_enabled() -> bool {
    cfg!(target_os = "linux")
}

fn default_port() -> u16 {
    18765
}

/// Poll loop settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    1000
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub launcher: LauncherConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BillboardResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BillboardResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file, then `./billboard.toml`, then the user config, then
    /// defaults; environment overrides on top.
    pub fn resolve(explicit: Option<&Path>) -> BillboardResult<LoadedConfig> {
        loader::resolve(explicit)
    }

    /// Apply environment variable overrides (BILLBOARD_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn data_dir(&self) -> PathBuf {
        self.content
            .data_dir
            .as_deref()
            .map(expand_home)
            .or_else(billboard_data_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn marquee_path(&self) -> PathBuf {
        self.data_dir().join(&self.content.marquee_file)
    }

    pub fn document_path(&self) -> PathBuf {
        self.data_dir().join(&self.carousel.document)
    }

    pub fn shortcuts_dir(&self) -> PathBuf {
        match &self.launcher.shortcuts_dir {
            Some(dir) => expand_home(dir),
            None => self.data_dir().join("shortcuts"),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.serve.interval_ms.max(1))
    }
}
