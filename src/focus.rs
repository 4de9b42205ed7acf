//! Shared focus state
//!
//! The HTTP toggle endpoint and the in-process command path each hold a
//! clone of one [`FocusController`], so both flip the same window under
//! the same lock.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::ports::FocusTarget;

type SharedTarget = Arc<Mutex<Box<dyn FocusTarget + Send>>>;

#[derive(Clone)]
pub struct FocusController {
    target: SharedTarget,
}

impl FocusController {
    pub fn new(target: impl FocusTarget + Send + 'static) -> Self {
        Self {
            target: Arc::new(Mutex::new(Box::new(target))),
        }
    }

    /// Blur when focused, focus otherwise. Returns the new focus state.
    pub fn toggle(&self) -> bool {
        let mut target = self.lock();
        if target.is_focused() {
            target.blur();
        } else {
            target.focus();
        }
        target.is_focused()
    }

    pub fn blur(&self) {
        self.lock().blur();
    }

    pub fn is_focused(&self) -> bool {
        self.lock().is_focused()
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn FocusTarget + Send>> {
        // A panic mid-toggle leaves a plain bool behind; keep using it
        self.target.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl fmt::Debug for FocusController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusController")
            .field("focused", &self.is_focused())
            .finish()
    }
}

type Transition = Box<dyn FnMut(bool) + Send>;

/// Window stand-in for headless hosts: a flag plus a transition callback
pub struct HeadlessWindow {
    focused: bool,
    on_change: Option<Transition>,
}

impl HeadlessWindow {
    pub fn new() -> Self {
        Self {
            focused: false,
            on_change: None,
        }
    }

    /// Call `f` with the new state whenever focus actually changes
    pub fn on_change(mut self, f: impl FnMut(bool) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    fn set(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        tracing::debug!(focused, "focus changed");
        if let Some(cb) = self.on_change.as_mut() {
            cb(focused);
        }
    }
}

impl Default for HeadlessWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for HeadlessWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessWindow")
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}

impl FocusTarget for HeadlessWindow {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.set(true);
    }

    fn blur(&mut self) {
        self.set(false);
    }
}
