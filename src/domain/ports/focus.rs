//! FocusTarget port - the window whose focus the toggle flips

/// A focusable window owned by the host UI
pub trait FocusTarget {
    fn is_focused(&self) -> bool;
    fn focus(&mut self);
    fn blur(&mut self);
}
