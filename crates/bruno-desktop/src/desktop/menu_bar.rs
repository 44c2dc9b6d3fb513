//! Menu bar across the top of the screen

use bruno_hal::{Color, Font, Surface, SurfaceError};
use crate::config::{MenuBarConfig, Palette};
use crate::math::{Rect, Size};
use crate::view::{Text, View};

/// Full-width bar with a single label, drawn under everything else
#[derive(Clone, Debug)]
pub struct MenuBar {
    rect: Rect,
    color: Color,
    label: Text,
}

impl MenuBar {
    /// Build the bar for a screen
    pub fn new(config: &MenuBarConfig, palette: &Palette, screen: Size) -> Self {
        Self {
            rect: Rect::new(0, 0, screen.width, config.height),
            color: palette.secondary,
            label: Text::new(config.label_position.x, config.label_position.y, config.label.clone())
                .with_color(palette.white),
        }
    }

    /// Get the bar rectangle
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Get the label text
    pub fn label(&self) -> &str {
        self.label.text()
    }

    /// Draw the bar and its label
    pub fn draw(&self, surface: &mut dyn Surface, font: &Font) -> Result<(), SurfaceError> {
        surface.fill(self.rect, self.color)?;
        self.label.draw(surface, font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point;
    use bruno_hal_mock::{DrawCall, RecordingSurface};

    #[test]
    fn test_menu_bar_draw() {
        let bar = MenuBar::new(&MenuBarConfig::default(), &Palette::default(), Size::new(512, 384));
        assert_eq!(bar.rect(), Rect::new(0, 0, 512, 30));

        let mut surface = RecordingSurface::new();
        bar.draw(&mut surface, &Font::default()).unwrap();
        assert_eq!(
            surface.calls(),
            &[
                DrawCall::Fill { rect: Rect::new(0, 0, 512, 30), color: Color::SECONDARY },
                DrawCall::Text {
                    text: "Brunotron".to_string(),
                    position: Point::new(7, 10),
                    color: Color::WHITE,
                },
            ]
        );
    }
}
