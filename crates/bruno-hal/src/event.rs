//! Input events produced by the platform event source

use serde::{Deserialize, Serialize};

/// Left mouse button bit in a held-button mask
pub const BUTTON_LEFT: u8 = 1 << 0;

/// Platform input event in screen coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// The user asked to quit
    Quit,
    /// A pointer button went down
    PointerDown { x: i32, y: i32 },
    /// The pointer moved; `buttons` is the mask of held buttons
    PointerMove { x: i32, y: i32, buttons: u8 },
    /// A pointer button was released
    PointerUp { x: i32, y: i32 },
}
