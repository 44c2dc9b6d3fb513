//! Clickable button

use bruno_hal::{Color, Font, Surface, SurfaceError};
use log::trace;
use crate::error::{check_geometry, DesktopError};
use crate::math::{Point, Rect};
use super::{Action, View};

/// Rectangular push button with a centered label
///
/// States are Idle and Pressed. A click inside the rectangle while Idle
/// fires the action and latches Pressed; `unclick` returns to Idle.
#[derive(Debug)]
pub struct Button {
    rect: Rect,
    label: String,
    color: Color,
    hover_color: Color,
    text_color: Color,
    action: Action,
    pressed: bool,
}

impl Button {
    /// Create a button with the default palette and no action
    ///
    /// # Returns
    /// * `Ok(Button)` - Idle button at the given rectangle
    /// * `Err(DesktopError::InvalidGeometry)` - Width or height is not positive
    pub fn new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        label: impl Into<String>,
    ) -> Result<Self, DesktopError> {
        check_geometry("button", width, height)?;
        Ok(Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
            color: Color::SECONDARY,
            hover_color: Color::TERTIARY,
            text_color: Color::WHITE,
            action: Action::None,
            pressed: false,
        })
    }

    /// Set the idle fill color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the pressed fill color
    pub fn with_hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    /// Set the label color
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the action fired on press
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    /// Get the button rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the label text
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check if the button is latched down
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Check if a point is over the button, without pressing it
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains(Point::new(x, y))
    }

    /// Fill color for the current state
    pub fn current_color(&self) -> Color {
        if self.pressed {
            self.hover_color
        } else {
            self.color
        }
    }
}

impl View for Button {
    fn position(&self) -> Point {
        self.rect.position()
    }

    fn draw(&self, surface: &mut dyn Surface, font: &Font) -> Result<(), SurfaceError> {
        surface.fill(self.rect, self.current_color())?;
        let text_size = surface.text_size(&self.label, font)?;
        let origin = self.rect.center_of(text_size);
        surface.draw_text(&self.label, origin, self.text_color, font)?;
        Ok(())
    }

    fn check_clicked(&mut self, x: i32, y: i32) -> bool {
        if self.pressed || !self.contains(x, y) {
            return false;
        }
        trace!("Button '{}' pressed at ({}, {})", self.label, x, y);
        self.pressed = true;
        self.action.invoke();
        true
    }

    fn update_position(&mut self, dx: i32, dy: i32) {
        self.rect = self.rect.translate(dx, dy);
    }

    fn unclick(&mut self) {
        self.pressed = false;
    }
}
