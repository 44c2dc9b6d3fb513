//! Desktop apps: an icon bound to one window

use bruno_hal::{Surface, SurfaceError};
use log::debug;
use crate::math::{Point, Rect, FRAME_STYLE};
use crate::window::{Window, WindowId, WindowRegistry};

/// Desktop icon that opens and closes one window
///
/// The app owns its window for its whole lifetime. Launching and closing
/// only toggle the window's registry membership.
#[derive(Debug)]
pub struct App {
    /// Icon rectangle on the desktop
    icon: Rect,
    /// Icon image path
    image: String,
    window: Window,
}

impl App {
    /// Create an app with its icon at a screen position
    pub fn new(x: i32, y: i32, image: impl Into<String>, window: Window) -> Self {
        Self {
            icon: Rect::new(x, y, FRAME_STYLE.icon_size, FRAME_STYLE.icon_size),
            image: image.into(),
            window,
        }
    }

    /// Get the icon rectangle
    #[inline]
    pub fn icon_rect(&self) -> Rect {
        self.icon
    }

    /// Get the icon image path
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Get the owned window
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Get the owned window mutably
    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    /// Get the owned window's id
    #[inline]
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    /// Check if the window is open
    pub fn is_open(&self, registry: &WindowRegistry) -> bool {
        registry.contains(self.window.id())
    }

    /// Open the window if it is not already open
    ///
    /// Returns `true` if the window was opened by this call.
    pub fn launch(&self, registry: &mut WindowRegistry) -> bool {
        let opened = registry.insert(self.window.id());
        if opened {
            debug!("Launched '{}' (window {})", self.window.title(), self.window.id());
        }
        opened
    }

    /// Close the window if it is open
    ///
    /// Returns `true` if the window was closed by this call.
    pub fn close(&self, registry: &mut WindowRegistry) -> bool {
        let closed = registry.remove(self.window.id());
        if closed {
            debug!("Closed '{}' (window {})", self.window.title(), self.window.id());
        }
        closed
    }

    /// Consume a pending close request from the window's close button
    ///
    /// Returns `true` if a request was pending.
    pub fn poll_close_request(&mut self, registry: &mut WindowRegistry) -> bool {
        if !self.window.take_close_request() {
            return false;
        }
        self.close(registry);
        true
    }

    /// Check if a point is on the icon (pure test)
    pub fn is_clicked(&self, x: i32, y: i32) -> bool {
        self.icon.contains(Point::new(x, y))
    }

    /// Handle any pending close request, then paint the icon
    pub fn draw_icon(
        &mut self,
        surface: &mut dyn Surface,
        registry: &mut WindowRegistry,
    ) -> Result<(), SurfaceError> {
        self.poll_close_request(registry);
        surface.draw_image(&self.image, self.icon)
    }
}
