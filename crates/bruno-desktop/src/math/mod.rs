//! Geometry types and chrome metrics for the desktop
//!
//! The integer geometry itself lives in `bruno-hal` so backends and the core
//! share one vocabulary; this module re-exports it next to the frame style.

mod style;

pub use bruno_hal::{Point, Rect, Size};
pub use style::{FrameStyle, FRAME_STYLE};
