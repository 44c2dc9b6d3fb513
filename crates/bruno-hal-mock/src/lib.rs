//! Mock backend for testing the Brunotron desktop
//!
//! This provides a recording implementation of the `Surface` trait and a
//! scripted `EventSource`, so the desktop core can be exercised frame by
//! frame without a window system.

use std::collections::{HashSet, VecDeque};
use bruno_hal::{Color, EventSource, Font, InputEvent, Point, Rect, Size, Surface, SurfaceError};

/// A single recorded draw call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Color),
    Fill { rect: Rect, color: Color },
    Text { text: String, position: Point, color: Color },
    Image { image: String, rect: Rect },
    Present,
}

/// Recording surface for unit testing
///
/// Text is measured with a fixed-width metric: every glyph is half the
/// point size wide and a full point size tall.
pub struct RecordingSurface {
    /// Captured draw calls in submission order
    calls: Vec<DrawCall>,
    /// Fail every text primitive while set
    fail_text: bool,
    /// Image paths that fail to load
    missing_images: HashSet<String>,
    /// Number of presented frames
    frames: u64,
}

impl RecordingSurface {
    /// Create an empty recording surface
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail_text: false,
            missing_images: HashSet::new(),
            frames: 0,
        }
    }

    /// Width and height the mock assigns to `text`
    pub fn measure(text: &str, font: &Font) -> Size {
        let glyph_width = i32::from(font.point_size / 2);
        Size::new(glyph_width * text.chars().count() as i32, i32::from(font.point_size))
    }

    /// Get all captured draw calls
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Forget captured draw calls
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Get the rendered strings in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Get the filled rectangles in draw order
    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Fill { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Find where a string was drawn
    pub fn text_position(&self, needle: &str) -> Option<Point> {
        self.calls.iter().find_map(|call| match call {
            DrawCall::Text { text, position, .. } if text == needle => Some(*position),
            _ => None,
        })
    }

    /// Make text rendering fail (or succeed again)
    pub fn set_fail_text(&mut self, fail: bool) {
        self.fail_text = fail;
    }

    /// Make loading an image path fail
    pub fn mark_image_missing(&mut self, image: impl Into<String>) {
        self.missing_images.insert(image.into());
    }

    /// Get the number of presented frames
    pub fn frames_presented(&self) -> u64 {
        self.frames
    }

    fn check_text(&self, text: &str) -> Result<(), SurfaceError> {
        if self.fail_text {
            Err(SurfaceError::TextRender(format!("mock refused '{}'", text)))
        } else {
            Ok(())
        }
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn fill(&mut self, rect: Rect, color: Color) -> Result<(), SurfaceError> {
        self.calls.push(DrawCall::Fill { rect, color });
        Ok(())
    }

    fn text_size(&mut self, text: &str, font: &Font) -> Result<Size, SurfaceError> {
        self.check_text(text)?;
        Ok(Self::measure(text, font))
    }

    fn draw_text(
        &mut self,
        text: &str,
        position: Point,
        color: Color,
        font: &Font,
    ) -> Result<Size, SurfaceError> {
        self.check_text(text)?;
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            position,
            color,
        });
        Ok(Self::measure(text, font))
    }

    fn draw_image(&mut self, image: &str, rect: Rect) -> Result<(), SurfaceError> {
        if self.missing_images.contains(image) {
            return Err(SurfaceError::ImageLoad {
                path: image.to_string(),
                reason: "no such file".to_string(),
            });
        }
        self.calls.push(DrawCall::Image {
            image: image.to_string(),
            rect,
        });
        Ok(())
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        self.frames += 1;
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}

/// Scripted event source
///
/// Replays queued events in order; `poll_event` returns `None` once the
/// queue is drained, which ends the current frame's input phase.
#[derive(Clone, Debug, Default)]
pub struct ScriptedEvents {
    queue: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    /// Create an event source from a list of events
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    /// Queue another event
    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Queue a press and release at one point
    pub fn click(&mut self, x: i32, y: i32) {
        self.push(InputEvent::PointerDown { x, y });
        self.push(InputEvent::PointerUp { x, y });
    }

    /// Get the number of pending events
    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_surface_captures_calls() {
        let mut surface = RecordingSurface::new();
        let font = Font::default();

        surface.clear(Color::BLACK).unwrap();
        surface.fill(Rect::new(0, 0, 10, 10), Color::WHITE).unwrap();
        let size = surface
            .draw_text("hi", Point::new(1, 2), Color::WHITE, &font)
            .unwrap();
        surface.present().unwrap();

        assert_eq!(size, Size::new(16, 16));
        assert_eq!(surface.calls().len(), 4);
        assert_eq!(surface.texts(), vec!["hi"]);
        assert_eq!(surface.text_position("hi"), Some(Point::new(1, 2)));
        assert_eq!(surface.frames_presented(), 1);
    }

    #[test]
    fn test_recording_surface_failures() {
        let mut surface = RecordingSurface::new();
        let font = Font::default();

        surface.set_fail_text(true);
        assert!(surface.text_size("x", &font).is_err());
        assert!(surface.draw_text("x", Point::ZERO, Color::WHITE, &font).is_err());
        assert!(surface.calls().is_empty());

        surface.mark_image_missing("icon.png");
        let err = surface.draw_image("icon.png", Rect::new(0, 0, 16, 16)).unwrap_err();
        assert!(matches!(err, SurfaceError::ImageLoad { .. }));
        assert!(surface.draw_image("other.png", Rect::new(0, 0, 16, 16)).is_ok());
    }

    #[test]
    fn test_scripted_events_order() {
        let mut events = ScriptedEvents::new([InputEvent::Quit]);
        events.click(4, 5);

        assert_eq!(events.pending(), 3);
        assert_eq!(events.poll_event(), Some(InputEvent::Quit));
        assert_eq!(events.poll_event(), Some(InputEvent::PointerDown { x: 4, y: 5 }));
        assert_eq!(events.poll_event(), Some(InputEvent::PointerUp { x: 4, y: 5 }));
        assert_eq!(events.poll_event(), None);
    }
}
