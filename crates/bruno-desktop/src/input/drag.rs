//! Drag session for window moves

use crate::math::Point;
use crate::window::WindowId;

/// Window move in progress
///
/// Started by a pointer-down on a titlebar band and ended by pointer-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    /// Window being moved
    pub window_id: WindowId,
    /// Offset from window origin to the grab point
    pub offset: Point,
}

impl DragSession {
    /// Start a session grabbing `window_id` at `offset` from its origin
    pub fn new(window_id: WindowId, offset: Point) -> Self {
        Self { window_id, offset }
    }

    /// Window origin that keeps the grab point under the pointer
    #[inline]
    pub fn target(&self, pointer: Point) -> Point {
        pointer - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_target_preserves_grab_offset() {
        let session = DragSession::new(42, Point::new(15, 8));

        assert_eq!(session.target(Point::new(115, 108)), Point::new(100, 100));
        assert_eq!(session.target(Point::new(15, 8)), Point::ZERO);
    }

    #[test]
    fn test_zero_offset_targets_pointer() {
        let session = DragSession::new(1, Point::ZERO);
        assert_eq!(session.target(Point::new(30, 40)), Point::new(30, 40));
    }
}
