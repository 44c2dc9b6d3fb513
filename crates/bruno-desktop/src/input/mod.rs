//! Input routing module
//!
//! Provides the drag session state machine used while a window is being
//! moved by its titlebar.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragSession;
pub use result::InputResult;
