//! Input result type

use serde::Serialize;

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input changed desktop state (press, launch, drag, release)
    Handled,
    /// Input hit nothing interactive
    Unhandled,
    /// The user asked to quit
    Quit,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }

    /// Check if the frame loop should stop
    #[inline]
    pub fn is_quit(&self) -> bool {
        matches!(self, InputResult::Quit)
    }
}
