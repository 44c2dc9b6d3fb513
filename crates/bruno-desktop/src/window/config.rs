//! Window configuration for creation

use serde::{Deserialize, Serialize};
use bruno_hal::Color;
use crate::config::DEFAULT_SCREEN;
use crate::math::{Point, Size};

/// Configuration for creating a window
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial titlebar origin
    pub position: Point,
    /// Body size (the titlebar sits above it)
    pub size: Size,
    /// Body fill color
    pub color: Color,
    /// Titlebar fill color
    pub titlebar_color: Color,
    /// Close button fill color
    pub button_color: Color,
    /// Close button fill color while pressed
    pub button_hover_color: Color,
    /// Title and close label color
    pub text_color: Color,
    /// Screen the window is clamped to while dragging
    pub screen: Size,
}

impl WindowConfig {
    /// Create a config with palette defaults
    pub fn new(title: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            title: title.into(),
            position: Point::new(x, y),
            size: Size::new(width, height),
            ..Default::default()
        }
    }

    /// Set the screen bounds used for clamping
    pub fn with_screen(mut self, screen: Size) -> Self {
        self.screen = screen;
        self
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            position: Point::ZERO,
            size: Size::new(200, 150),
            color: Color::BLACK,
            titlebar_color: Color::TERTIARY,
            button_color: Color::SECONDARY,
            button_hover_color: Color::TERTIARY,
            text_color: Color::WHITE,
            screen: DEFAULT_SCREEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_defaults() {
        let config = WindowConfig::new("Notes", 10, 20, 100, 80);
        assert_eq!(config.position, Point::new(10, 20));
        assert_eq!(config.size, Size::new(100, 80));
        assert_eq!(config.color, Color::BLACK);
        assert_eq!(config.titlebar_color, Color::TERTIARY);
        assert_eq!(config.button_color, Color::SECONDARY);
        assert_eq!(config.text_color, Color::WHITE);
        assert_eq!(config.screen, Size::new(512, 384));
    }

    #[test]
    fn test_window_config_partial_json() {
        let config: WindowConfig =
            serde_json::from_str(r#"{"title":"Calc","size":{"width":64,"height":48}}"#).unwrap();
        assert_eq!(config.title, "Calc");
        assert_eq!(config.size, Size::new(64, 48));
        assert_eq!(config.position, Point::ZERO);
        assert_eq!(config.titlebar_color, Color::TERTIARY);
    }
}
