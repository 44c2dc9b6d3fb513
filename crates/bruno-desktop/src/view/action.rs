//! Button actions

use std::fmt;

/// What a button does when it is pressed
#[derive(Default)]
pub enum Action {
    /// Pressing the button has no side effect
    #[default]
    None,
    /// Zero-argument callback run once per press
    Callback(Box<dyn FnMut()>),
}

impl Action {
    /// Wrap a closure as an action
    pub fn from_fn(f: impl FnMut() + 'static) -> Self {
        Action::Callback(Box::new(f))
    }

    /// Check if this action does nothing
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }

    /// Run the action
    pub fn invoke(&mut self) {
        if let Action::Callback(f) = self {
            f();
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::None => write!(f, "Action::None"),
            Action::Callback(_) => write!(f, "Action::Callback(..)"),
        }
    }
}
