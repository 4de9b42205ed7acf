//! System opener
//!
//! Hands targets to the platform's "open with default application" command.

use std::process::{Command, Stdio};

use crate::domain::ports::Opener;
use crate::error::{BillboardError, BillboardResult};

/// Opens files and URLs with `xdg-open`, `open` or `explorer`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    pub fn new() -> Self {
        Self
    }
}

impl Opener for SystemOpener {
    fn open(&self, target: &str) -> BillboardResult<()> {
        let mut child = open_command(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| BillboardError::Open {
                target: target.to_string(),
                message: e.to_string(),
            })?;
        tracing::debug!(open_target = %target, pid = child.id(), "opener spawned");

        // Reap in the background; the opener may outlive the call.
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

fn open_command(target: &str) -> Command {
    let (program, args) = open_invocation(std::env::consts::OS, target);
    let mut cmd = Command::new(program);
    cmd.args(args);
    cmd
}

/// Program and arguments that open `target` on `os`
///
/// The target is one argument and no shell sits in between, so `&`, `|`
/// and `^` in URLs stay literal.
fn open_invocation<'t>(os: &str, target: &'t str) -> (&'static str, [&'t str; 1]) {
    let program = match os {
        "windows" => "explorer",
        "macos" => "open",
        _ => "xdg-open",
    };
    (program, [target])
}

/// Opener that only records what it was asked to open
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    fail: bool,
}

#[cfg(test)]
impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener whose every call fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Opener for RecordingOpener {
    fn open(&self, target: &str) -> BillboardResult<()> {
        if self.fail {
            return Err(BillboardError::Open {
                target: target.to_string(),
                message: "no opener available".to_string(),
            });
        }
        self.opened.lock().unwrap().push(target.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_command_passes_target_as_single_argument() {
        let cmd = open_command("/opt/apps/My App.desktop");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.last().unwrap().to_str(), Some("/opt/apps/My App.desktop"));
    }

    #[test]
    fn windows_targets_bypass_the_shell() {
        let url = "https://example.org/a?b=1&c=2|d^e";
        let (program, args) = open_invocation("windows", url);
        assert_eq!(program, "explorer");
        assert_eq!(args, [url]);
    }

    #[test]
    fn each_platform_has_its_launcher() {
        assert_eq!(open_invocation("macos", "x").0, "open");
        assert_eq!(open_invocation("linux", "x").0, "xdg-open");
        assert_eq!(open_invocation("freebsd", "x").0, "xdg-open");
    }
}
