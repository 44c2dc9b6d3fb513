//! Error types for the desktop core

use bruno_hal::SurfaceError;
use thiserror::Error;

/// Errors that can occur while building or drawing the desktop
#[derive(Debug, Error)]
pub enum DesktopError {
    /// A widget or window was given a non-positive width or height
    #[error("invalid geometry for {what}: {width}x{height}")]
    InvalidGeometry {
        what: &'static str,
        width: i32,
        height: i32,
    },

    /// Configuration could not be parsed or is out of range
    #[error("configuration error: {0}")]
    Config(String),

    /// The rendering backend failed while drawing a frame
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        DesktopError::Config(e.to_string())
    }
}

/// Reject non-positive dimensions
pub(crate) fn check_geometry(
    what: &'static str,
    width: i32,
    height: i32,
) -> Result<(), DesktopError> {
    if width <= 0 || height <= 0 {
        return Err(DesktopError::InvalidGeometry { what, width, height });
    }
    Ok(())
}
