//! Desktop configuration
//!
//! Everything the desktop needs at startup is plain data: screen size, the
//! named palette, the font handle and the menu bar. Configs can be built in
//! code or loaded from JSON; missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use bruno_hal::{Color, Font};
use crate::error::DesktopError;
use crate::math::{Point, Size};
use crate::window::WindowConfig;

/// Reference screen size
pub const DEFAULT_SCREEN: Size = Size::new(512, 384);

/// Named colors used by desktop chrome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub secondary: Color,
    pub tertiary: Color,
    pub white: Color,
    pub black: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            secondary: Color::SECONDARY,
            tertiary: Color::TERTIARY,
            white: Color::WHITE,
            black: Color::BLACK,
        }
    }
}

/// Menu bar across the top of the screen
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuBarConfig {
    /// Bar height in pixels
    pub height: i32,
    /// Label text
    pub label: String,
    /// Label origin
    pub label_position: Point,
}

impl Default for MenuBarConfig {
    fn default() -> Self {
        Self {
            height: 30,
            label: "Brunotron".to_string(),
            label_position: Point::new(7, 10),
        }
    }
}

/// Top-level desktop configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Screen size windows are clamped to
    pub screen: Size,
    /// Desktop chrome colors
    pub palette: Palette,
    /// Font for every label
    pub font: Font,
    /// Menu bar, or `None` to hide it
    pub menu_bar: Option<MenuBarConfig>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            screen: DEFAULT_SCREEN,
            palette: Palette::default(),
            font: Font::default(),
            menu_bar: Some(MenuBarConfig::default()),
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON config
    ///
    /// # Returns
    /// * `Ok(DesktopConfig)` - Parsed config with defaults for missing fields
    /// * `Err(DesktopError::Config)` - Malformed JSON or out-of-range values
    pub fn from_json(json: &str) -> Result<Self, DesktopError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, DesktopError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), DesktopError> {
        if self.screen.is_empty() {
            return Err(DesktopError::Config(format!(
                "screen must be positive, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if self.font.point_size == 0 {
            return Err(DesktopError::Config("font point size must be positive".to_string()));
        }
        if let Some(bar) = &self.menu_bar {
            if bar.height <= 0 || bar.height >= self.screen.height {
                return Err(DesktopError::Config(format!(
                    "menu bar height {} outside 1..{}",
                    bar.height, self.screen.height
                )));
            }
        }
        Ok(())
    }

    /// Window config on this desktop's screen, colored from its palette
    pub fn window(
        &self,
        title: impl Into<String>,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> WindowConfig {
        WindowConfig {
            color: self.palette.black,
            titlebar_color: self.palette.tertiary,
            button_color: self.palette.secondary,
            button_hover_color: self.palette.tertiary,
            text_color: self.palette.white,
            ..WindowConfig::new(title, x, y, width, height).with_screen(self.screen)
        }
    }
}
