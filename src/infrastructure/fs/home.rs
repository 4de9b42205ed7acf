//! Home directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the system API rather than
//! environment variables, so setting `HOME` in tests has no effect there.
//! `BILLBOARD_TEST_HOME` is checked first for that reason.

use std::path::PathBuf;

/// Environment variable for test isolation of home directory.
pub const BILLBOARD_TEST_HOME_VAR: &str = "BILLBOARD_TEST_HOME";

/// Get the home directory for Billboard paths (config, data, shortcuts).
pub fn billboard_home_dir() -> Option<PathBuf> {
    home_dir_from(std::env::var_os(BILLBOARD_TEST_HOME_VAR).map(PathBuf::from))
}

fn home_dir_from(test_home: Option<PathBuf>) -> Option<PathBuf> {
    test_home
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(dirs::home_dir)
}

/// User configuration directory (`<config_dir>/billboard`)
///
/// Under test isolation this is `<test home>/.config/billboard` on every
/// platform so integration tests can lay it out portably.
pub fn billboard_config_dir() -> Option<PathBuf> {
    match std::env::var_os(BILLBOARD_TEST_HOME_VAR).filter(|v| !v.is_empty()) {
        Some(home) => Some(PathBuf::from(home).join(".config").join("billboard")),
        None => dirs::config_dir().map(|d| d.join("billboard")),
    }
}

/// User data directory (`<data_dir>/billboard`)
pub fn billboard_data_dir() -> Option<PathBuf> {
    match std::env::var_os(BILLBOARD_TEST_HOME_VAR).filter(|v| !v.is_empty()) {
        Some(home) => Some(
            PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("billboard"),
        ),
        None => dirs::data_dir().map(|d| d.join("billboard")),
    }
}
