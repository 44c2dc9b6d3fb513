//! Input handling for pointer events and drag operations

use bruno_hal::InputEvent;
use log::trace;
use crate::input::InputResult;
use crate::math::Point;
use crate::window::WindowId;
use super::{find_window, find_window_mut, Desktop};

impl Desktop {
    /// Dispatch one input event
    pub fn handle_event(&mut self, event: InputEvent) -> InputResult {
        match event {
            InputEvent::Quit => InputResult::Quit,
            InputEvent::PointerDown { x, y } => self.handle_pointer_down(x, y),
            InputEvent::PointerMove { x, y, buttons } => self.handle_pointer_move(x, y, buttons),
            InputEvent::PointerUp { x, y } => self.handle_pointer_up(x, y),
        }
    }

    /// Handle pointer down
    ///
    /// Icons launch first. Each open window then gets the click in paint
    /// order; a window whose content and close button both ignore it starts
    /// a drag when the titlebar band is hit. The last such window wins.
    pub fn handle_pointer_down(&mut self, x: i32, y: i32) -> InputResult {
        trace!("Pointer down at ({}, {})", x, y);
        let point = Point::new(x, y);
        let mut handled = false;

        for app in &self.apps {
            if app.is_clicked(x, y) {
                app.launch(&mut self.registry);
                handled = true;
            }
        }

        let mut grab = None;
        for &id in self.registry.ids() {
            let Some(window) = find_window_mut(&mut self.apps, id) else {
                continue;
            };
            if window.check_clicked(x, y) {
                handled = true;
            } else if window.titlebar_hit(x, y) {
                grab = Some((id, point - window.position()));
            }
        }

        if let Some((id, offset)) = grab {
            self.input.start_window_move(id, offset);
            handled = true;
        }

        if handled {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Handle pointer move
    ///
    /// Moves the dragged window only while a button is held and the pointer
    /// stays in its titlebar band, off the close button.
    pub fn handle_pointer_move(&mut self, x: i32, y: i32, buttons: u8) -> InputResult {
        if buttons == 0 {
            return InputResult::Unhandled;
        }
        let Some(session) = self.input.drag_session().copied() else {
            return InputResult::Unhandled;
        };
        if !self.registry.contains(session.window_id) {
            self.input.forget_window(session.window_id);
            return InputResult::Unhandled;
        }

        let Some(window) = find_window_mut(&mut self.apps, session.window_id) else {
            return InputResult::Unhandled;
        };
        if !window.titlebar_hit(x, y) || window.is_close_hit(x, y) {
            return InputResult::Unhandled;
        }

        let target = session.target(Point::new(x, y));
        window.move_to(target.x, target.y);
        InputResult::Handled
    }

    /// Handle pointer up: end any drag and release every pressed latch
    ///
    /// Closed windows are released too; a window can leave the registry
    /// between the press and the release.
    pub fn handle_pointer_up(&mut self, x: i32, y: i32) -> InputResult {
        trace!("Pointer up at ({}, {})", x, y);
        let was_dragging = self.input.is_dragging();
        self.input.end_drag();

        for app in &mut self.apps {
            app.window_mut().unclick();
        }

        if was_dragging {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Check if a point is over any open window's titlebar band
    pub fn titlebar_at(&self, x: i32, y: i32) -> Option<WindowId> {
        self.registry
            .iter()
            .filter(|&id| find_window(&self.apps, id).is_some_and(|w| w.titlebar_hit(x, y)))
            .last()
    }
}
