//! Input router state machine

use log::debug;
use crate::math::Point;
use crate::window::WindowId;
use super::DragSession;

/// Input router managing the drag session
pub struct InputRouter {
    /// Current drag session
    drag: Option<DragSession>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag session
    #[inline]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start window move operation, replacing any current session
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Point) {
        debug!("Drag started on window {} (grab offset {:?})", window_id, offset);
        self.drag = Some(DragSession::new(window_id, offset));
    }

    /// End current drag operation
    pub fn end_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            debug!("Drag ended on window {}", session.window_id);
        }
    }

    /// Drop the session if it targets a window that is no longer open
    pub fn forget_window(&mut self, window_id: WindowId) {
        if self.drag.map(|s| s.window_id) == Some(window_id) {
            self.end_drag();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_router_move() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());

        router.start_window_move(1, Point::new(10, 10));
        assert!(router.is_dragging());
        assert_eq!(router.drag_session().map(|s| s.window_id), Some(1));

        router.end_drag();
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_later_start_replaces_session() {
        let mut router = InputRouter::new();
        router.start_window_move(1, Point::ZERO);
        router.start_window_move(2, Point::new(3, 4));

        assert_eq!(router.drag_session(), Some(&DragSession::new(2, Point::new(3, 4))));
    }

    #[test]
    fn test_forget_window() {
        let mut router = InputRouter::new();
        router.start_window_move(5, Point::ZERO);

        router.forget_window(6);
        assert!(router.is_dragging());

        router.forget_window(5);
        assert!(!router.is_dragging());
    }

    #[test]
    fn test_end_drag_when_idle() {
        let mut router = InputRouter::new();
        router.end_drag();
        assert!(!router.is_dragging());
    }
}
