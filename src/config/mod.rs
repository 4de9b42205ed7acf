//! Configuration module for Billboard
//!
//! Resolution order:
//! 1. `--config <path>` (must load)
//! 2. `./billboard.toml`
//! 3. User config (`<config_dir>/billboard/config.toml`)
//! 4. Built-in defaults
//!
//! Environment variables (BILLBOARD_*) override whichever was used.

mod loader;
mod types;

pub use loader::{parse_with_warnings, ConfigWarning, LoadedConfig, LOCAL_CONFIG_FILE};
pub use types::{CarouselConfig, Config, ContentConfig, HttpConfig, LauncherConfig, ServeConfig};
