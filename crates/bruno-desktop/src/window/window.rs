//! Window struct and chrome

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use bruno_hal::{Color, Font, Surface, SurfaceError};
use log::trace;
use crate::error::{check_geometry, DesktopError};
use crate::math::{Point, Rect, Size, FRAME_STYLE};
use crate::view::{Action, Button, Text, View};
use super::{WindowConfig, WindowId};

static NEXT_WINDOW_ID: AtomicU64 = AtomicU64::new(1);

/// A titled, movable, closable window
///
/// The window owns its title label and close button. Content is handed over
/// at construction and shifted into the body area below the titlebar.
pub struct Window {
    /// Unique identifier
    id: WindowId,
    /// Titlebar origin
    position: Point,
    /// Body size, excluding the titlebar
    size: Size,
    /// Screen the position is clamped to
    screen: Size,
    color: Color,
    titlebar_color: Color,
    title: Text,
    close_button: Button,
    content: Option<Box<dyn View>>,
    /// Set by the close button, consumed by the owning app
    close_requested: Rc<Cell<bool>>,
}

impl Window {
    /// Create a window around a content view
    ///
    /// # Returns
    /// * `Ok(Window)` - Window with content offset into its body
    /// * `Err(DesktopError::InvalidGeometry)` - Width or height is not positive
    pub fn new(config: WindowConfig, content: impl View + 'static) -> Result<Self, DesktopError> {
        Self::build(config, Some(Box::new(content)))
    }

    /// Create a window with an empty body
    pub fn without_content(config: WindowConfig) -> Result<Self, DesktopError> {
        Self::build(config, None)
    }

    fn build(
        config: WindowConfig,
        mut content: Option<Box<dyn View>>,
    ) -> Result<Self, DesktopError> {
        let WindowConfig {
            title,
            position,
            size,
            color,
            titlebar_color,
            button_color,
            button_hover_color,
            text_color,
            screen,
        } = config;
        check_geometry("window", size.width, size.height)?;
        check_geometry("screen", screen.width, screen.height)?;
        let position = clamp_origin(position, size, screen);

        let close_requested = Rc::new(Cell::new(false));
        let flag = Rc::clone(&close_requested);
        let button_size = FRAME_STYLE.close_button_size;
        let close_button = Button::new(
            position.x + size.width - button_size,
            position.y,
            button_size,
            button_size,
            "x",
        )?
        .with_color(button_color)
        .with_hover_color(button_hover_color)
        .with_text_color(text_color)
        .with_action(Action::from_fn(move || flag.set(true)));

        let title = Text::new(
            position.x + FRAME_STYLE.title_inset_x,
            position.y + FRAME_STYLE.title_inset_y,
            title,
        )
        .with_color(text_color);

        if let Some(view) = content.as_mut() {
            view.update_position(position.x, position.y + FRAME_STYLE.title_bar_height);
        }

        Ok(Self {
            id: NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed),
            position,
            size,
            screen,
            color,
            titlebar_color,
            title,
            close_button,
            content,
            close_requested,
        })
    }

    /// Get the window identifier
    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    /// Get the titlebar origin
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Get the body size
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Get the title text
    pub fn title(&self) -> &str {
        self.title.text()
    }

    /// Get the title label view
    pub fn title_view(&self) -> &Text {
        &self.title
    }

    /// Get the close button
    pub fn close_button(&self) -> &Button {
        &self.close_button
    }

    /// Get the content view
    pub fn content(&self) -> Option<&dyn View> {
        self.content.as_deref()
    }

    /// Get the titlebar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Get the body rectangle below the titlebar
    pub fn body_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y + FRAME_STYLE.title_bar_height,
            self.size.width,
            self.size.height,
        )
    }

    /// Check if the close button asked for the window to close
    #[inline]
    pub fn close_requested(&self) -> bool {
        self.close_requested.get()
    }

    /// Take the pending close request, clearing it
    pub fn take_close_request(&mut self) -> bool {
        self.close_requested.replace(false)
    }

    /// Draw titlebar, title, close button, body, then content
    pub fn draw(&self, surface: &mut dyn Surface, font: &Font) -> Result<(), SurfaceError> {
        surface.fill(self.title_bar_rect(), self.titlebar_color)?;
        self.title.draw(surface, font)?;
        self.close_button.draw(surface, font)?;
        surface.fill(self.body_rect(), self.color)?;
        if let Some(content) = &self.content {
            content.draw(surface, font)?;
        }
        Ok(())
    }

    /// Offer a click to the content view and the close button
    ///
    /// Both are evaluated; returns `true` if either consumed the click.
    pub fn check_clicked(&mut self, x: i32, y: i32) -> bool {
        let content_hit = match self.content.as_mut() {
            Some(content) => content.check_clicked(x, y),
            None => false,
        };
        let close_hit = self.close_button.check_clicked(x, y);
        content_hit | close_hit
    }

    /// Check if a point starts a drag
    ///
    /// The band reaches a few pixels above and left of the titlebar so a
    /// grab just outside the visible strip still counts.
    pub fn titlebar_hit(&self, x: i32, y: i32) -> bool {
        let tolerance = FRAME_STYLE.drag_tolerance;
        x >= self.position.x.saturating_sub(tolerance)
            && x <= self.position.x.saturating_add(self.size.width)
            && y >= self.position.y.saturating_sub(tolerance)
            && y <= self.position.y.saturating_add(FRAME_STYLE.title_bar_height)
    }

    /// Check if a point is over the close button (pure test, no press)
    pub fn is_close_hit(&self, x: i32, y: i32) -> bool {
        self.close_button.contains(x, y)
    }

    /// Move the titlebar origin to a point, clamped to the screen
    ///
    /// Content, title and close button follow by the same delta. Calling
    /// again with the resulting point is a no-op.
    pub fn move_to(&mut self, x: i32, y: i32) {
        let target = self.clamp_to_screen(Point::new(x, y));
        let delta = target - self.position;
        if delta == Point::ZERO {
            return;
        }
        trace!("Window {} moved to ({}, {})", self.id, target.x, target.y);

        self.position = target;
        self.title.update_position(delta.x, delta.y);
        self.close_button.update_position(delta.x, delta.y);
        if let Some(content) = self.content.as_mut() {
            content.update_position(delta.x, delta.y);
        }
    }

    /// Clear pressed latches in the content and on the close button
    pub fn unclick(&mut self) {
        if let Some(content) = self.content.as_mut() {
            content.unclick();
        }
        self.close_button.unclick();
    }

    fn clamp_to_screen(&self, p: Point) -> Point {
        clamp_origin(p, self.size, self.screen)
    }
}

/// Clamp a titlebar origin so the whole window stays on screen
fn clamp_origin(p: Point, size: Size, screen: Size) -> Point {
    let max_x = screen.width.saturating_sub(size.width).max(0);
    let max_y = screen
        .height
        .saturating_sub(size.height)
        .saturating_sub(FRAME_STYLE.title_bar_height)
        .max(0);
    Point::new(p.x.clamp(0, max_x), p.y.clamp(0, max_y))
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("id", &self.id)
            .field("title", &self.title.text())
            .field("position", &self.position)
            .field("size", &self.size)
            .field("close_requested", &self.close_requested.get())
            .finish()
    }
}
