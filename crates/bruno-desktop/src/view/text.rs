//! Static text label

use bruno_hal::{Color, Font, Surface, SurfaceError};
use crate::math::Point;
use super::View;

/// Non-interactive text label
#[derive(Clone, Debug)]
pub struct Text {
    position: Point,
    text: String,
    color: Color,
}

impl Text {
    /// Create a white label at a screen position
    pub fn new(x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            position: Point::new(x, y),
            text: text.into(),
            color: Color::WHITE,
        }
    }

    /// Set the text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Get the label text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the text color
    pub fn color(&self) -> Color {
        self.color
    }
}

impl View for Text {
    fn position(&self) -> Point {
        self.position
    }

    fn draw(&self, surface: &mut dyn Surface, font: &Font) -> Result<(), SurfaceError> {
        surface.draw_text(&self.text, self.position, self.color, font)?;
        Ok(())
    }

    fn check_clicked(&mut self, _x: i32, _y: i32) -> bool {
        false
    }

    fn update_position(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }
}
