//! Rendering and input abstraction layer for the Brunotron desktop
//!
//! This crate defines the traits the desktop core draws and reads input
//! through, so the widget and window logic runs unchanged on any 2D backend
//! (an SDL window, a browser canvas, or a recording surface in tests).
//!
//! # Backend Implementations
//!
//! - **Native**: SDL2 renderer + SDL_ttf for text, SDL event pump for input
//! - **Testing**: `bruno-hal-mock` records draw calls and replays scripted events
//!
//! The core never depends on pixel formats. It only needs the draw primitives
//! below and the measured size of rendered text (used to center labels).

mod color;
mod event;
mod geometry;

pub use color::Color;
pub use event::{InputEvent, BUTTON_LEFT};
pub use geometry::{Point, Rect, Size};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Font resource handle
///
/// Backends resolve the path once and cache the loaded face; the core only
/// passes the handle through to text primitives.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Font {
    /// Path to the font file
    pub path: String,
    /// Point size
    pub point_size: u16,
}

impl Font {
    /// Create a font handle
    pub fn new(path: impl Into<String>, point_size: u16) -> Self {
        Self {
            path: path.into(),
            point_size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("pixel-letters.ttf", 16)
    }
}

/// Render surface trait
///
/// Implementations provide backend-specific drawing for:
/// - Solid rectangle fills
/// - Text rendering and measurement
/// - Image blitting
/// - Frame clear/present
///
/// Every primitive may fail; the error is returned to the caller and never
/// touches interaction state held by the desktop core.
pub trait Surface {
    /// Clear the whole surface to a color
    fn clear(&mut self, color: Color) -> Result<(), SurfaceError>;

    /// Fill a rectangle with a solid color
    fn fill(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError>;

    /// Measure the size text would occupy when rendered
    ///
    /// # Returns
    /// * `Ok(Size)` - Rendered width and height in pixels
    /// * `Err(SurfaceError::TextRender)` - The font could not render the text
    fn text_size(&mut self, text: &str, font: &Font) -> Result<Size, SurfaceError>;

    /// Draw text with its top-left corner at `position`
    ///
    /// # Returns
    /// * `Ok(Size)` - Size of the rendered text
    /// * `Err(SurfaceError::TextRender)` - The font could not render the text
    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        color: Color,
        font: &Font,
    ) -> Result<Size, SurfaceError>;

    /// Draw an image, scaled to `rect`
    ///
    /// # Arguments
    /// * `image` - Path or backend handle of the image resource
    /// * `rect` - Destination rectangle
    fn draw_image(&mut self, image: &str, rect: Rect) -> Result<(), SurfaceError>;

    /// Present the finished frame
    ///
    /// Backends without double buffering can keep the default no-op.
    fn present(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }
}

/// Input event source trait
///
/// Polled once per frame until it returns `None`.
pub trait EventSource {
    /// Take the next pending event (non-blocking)
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Surface errors
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// Text could not be rendered or measured
    #[error("text render failed: {0}")]
    TextRender(String),
    /// Image resource could not be loaded
    #[error("image load failed for '{path}': {reason}")]
    ImageLoad { path: String, reason: String },
    /// Any other backend failure
    #[error("backend error: {0}")]
    Backend(String),
}
