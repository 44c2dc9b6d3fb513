//! Frame drawing and the per-frame driver

use bruno_hal::{EventSource, Surface};
use log::warn;
use crate::error::DesktopError;
use super::{find_window, Desktop};

/// What the caller's loop should do after a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep running
    Continue,
    /// A quit event arrived; stop the loop
    Quit,
}

impl Desktop {
    /// Draw one frame: menu bar, icons, then open windows in paint order
    ///
    /// Pending close requests are consumed before anything is painted, so a
    /// window closed by its button this frame is not drawn.
    pub fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), DesktopError> {
        if let Some(menu_bar) = &self.menu_bar {
            menu_bar.draw(surface, &self.config.font)?;
        }

        for app in &mut self.apps {
            if app.poll_close_request(&mut self.registry) {
                self.input.forget_window(app.window_id());
            }
        }
        for app in &mut self.apps {
            app.draw_icon(surface, &mut self.registry)?;
        }

        for &id in self.registry.ids() {
            if let Some(window) = find_window(&self.apps, id) {
                window.draw(surface, &self.config.font)?;
            }
        }
        Ok(())
    }

    /// Run one frame against a backend
    ///
    /// Drains every pending event, then clears, draws and presents. A quit
    /// event stops the frame before anything is drawn.
    pub fn run_frame(
        &mut self,
        events: &mut dyn EventSource,
        surface: &mut dyn Surface,
    ) -> Result<FrameOutcome, DesktopError> {
        while let Some(event) = events.poll_event() {
            if self.handle_event(event).is_quit() {
                return Ok(FrameOutcome::Quit);
            }
        }

        surface.clear(self.config.palette.black)?;
        if let Err(e) = self.draw(surface) {
            warn!("Frame draw failed: {}", e);
            return Err(e);
        }
        surface.present()?;
        Ok(FrameOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use bruno_hal::{Color, InputEvent, SurfaceError};
    use bruno_hal_mock::{DrawCall, RecordingSurface, ScriptedEvents};
    use crate::config::DesktopConfig;
    use crate::desktop::App;
    use crate::error::DesktopError;
    use crate::math::Rect;
    use crate::view::Text;
    use crate::window::Window;
    use super::{Desktop, FrameOutcome};

    fn create_test_desktop(config: DesktopConfig) -> Desktop {
        let mut desktop = Desktop::new(config);
        let window_config = desktop.config().window("Notes", 100, 100, 120, 80);
        let window = Window::new(window_config, Text::new(5, 5, "hello")).unwrap();
        desktop.add_app(App::new(10, 40, "notes.png", window));
        desktop
    }

    #[test]
    fn test_draw_without_open_windows() {
        let mut desktop = create_test_desktop(DesktopConfig::default());
        let mut surface = RecordingSurface::new();
        desktop.draw(&mut surface).unwrap();

        assert_eq!(
            surface.calls(),
            &[
                DrawCall::Fill { rect: Rect::new(0, 0, 512, 30), color: Color::SECONDARY },
                DrawCall::Text {
                    text: "Brunotron".to_string(),
                    position: crate::math::Point::new(7, 10),
                    color: Color::WHITE,
                },
                DrawCall::Image { image: "notes.png".to_string(), rect: Rect::new(10, 40, 16, 16) },
            ]
        );
    }

    #[test]
    fn test_draw_order_with_open_window() {
        let config = DesktopConfig { menu_bar: None, ..Default::default() };
        let mut desktop = create_test_desktop(config);
        desktop.launch(0);

        let mut surface = RecordingSurface::new();
        desktop.draw(&mut surface).unwrap();

        assert_eq!(surface.texts(), vec!["Notes", "x", "hello"]);
        assert!(matches!(surface.calls()[0], DrawCall::Image { .. }));
        // Content sits below the titlebar
        assert_eq!(surface.text_position("hello"), Some(crate::math::Point::new(105, 125)));
    }

    #[test]
    fn test_close_request_removes_window_before_paint() {
        let mut desktop = create_test_desktop(DesktopConfig::default());
        desktop.launch(0);

        // Close button at (200, 100, 20, 20)
        desktop.handle_pointer_down(210, 110);
        let mut surface = RecordingSurface::new();
        desktop.draw(&mut surface).unwrap();

        assert!(desktop.registry().is_empty());
        assert!(!surface.texts().contains(&"Notes"));
    }

    #[test]
    fn test_run_frame_presents() {
        let mut desktop = create_test_desktop(DesktopConfig::default());
        let mut events = ScriptedEvents::default();
        events.click(12, 45);
        let mut surface = RecordingSurface::new();

        let outcome = desktop.run_frame(&mut events, &mut surface).unwrap();
        assert_eq!(outcome, FrameOutcome::Continue);
        assert_eq!(events.pending(), 0);
        assert_eq!(desktop.registry().len(), 1);
        assert_eq!(surface.frames_presented(), 1);
        assert_eq!(surface.calls().first(), Some(&DrawCall::Clear(Color::BLACK)));
        assert_eq!(surface.calls().last(), Some(&DrawCall::Present));
    }

    #[test]
    fn test_run_frame_quit_skips_drawing() {
        let mut desktop = create_test_desktop(DesktopConfig::default());
        let mut events =
            ScriptedEvents::new([InputEvent::Quit, InputEvent::PointerDown { x: 12, y: 45 }]);
        let mut surface = RecordingSurface::new();

        let outcome = desktop.run_frame(&mut events, &mut surface).unwrap();
        assert_eq!(outcome, FrameOutcome::Quit);
        assert!(surface.calls().is_empty());
        assert!(desktop.registry().is_empty());
        assert_eq!(events.pending(), 1);
    }

    #[test]
    fn test_failed_draw_keeps_state() {
        let mut desktop = create_test_desktop(DesktopConfig::default());
        desktop.launch(0);
        let mut surface = RecordingSurface::new();
        surface.set_fail_text(true);

        let err = desktop.run_frame(&mut ScriptedEvents::default(), &mut surface).unwrap_err();
        assert!(matches!(err, DesktopError::Surface(SurfaceError::TextRender(_))));
        assert_eq!(surface.frames_presented(), 0);
        assert_eq!(desktop.registry().len(), 1);

        surface.set_fail_text(false);
        surface.clear_calls();
        desktop.draw(&mut surface).unwrap();
        assert!(surface.texts().contains(&"Notes"));
    }

    #[test]
    fn test_missing_icon_still_consumes_close() {
        let mut desktop = create_test_desktop(DesktopConfig::default());
        desktop.launch(0);
        desktop.handle_pointer_down(210, 110);

        let mut surface = RecordingSurface::new();
        surface.mark_image_missing("notes.png");
        assert!(desktop.draw(&mut surface).is_err());
        assert!(desktop.registry().is_empty());
    }
}
