//! Widget composition module
//!
//! A `View` is the unit of drawable, clickable, positionable UI. Leaf views
//! (`Text`, `Button`) own their visuals; `MultiView` owns an ordered list of
//! children and fans every call out to them.
//!
//! ## Positioning
//!
//! Views are placed in absolute screen coordinates at construction. After
//! that the only way to move one is `update_position(dx, dy)`, which adds a
//! relative offset. Containers forward the same offset to every child, so a
//! whole subtree moves as a unit when its window is dragged.
//!
//! ## Click latching
//!
//! A `Button` fires on the Idle -> Pressed edge only. It stays pressed (and
//! refuses further clicks) until `unclick()` runs on pointer release.

mod action;
mod button;
mod multi;
mod text;

pub use action::Action;
pub use button::Button;
pub use multi::MultiView;
pub use text::Text;

use bruno_hal::{Font, Surface, SurfaceError};
use crate::math::Point;

/// Drawable, clickable, positionable UI unit
pub trait View {
    /// Current top-left position in screen space
    fn position(&self) -> Point;

    /// Paint the view from its current state
    ///
    /// Drawing reads state only; layout and latches are left untouched even
    /// when the surface returns an error.
    fn draw(&self, surface: &mut dyn Surface, font: &Font) -> Result<(), SurfaceError>;

    /// Offer a click at a screen point
    ///
    /// Returns `true` if this view (or, for a container, any descendant)
    /// consumed the click.
    fn check_clicked(&mut self, x: i32, y: i32) -> bool;

    /// Move the view by a relative offset
    fn update_position(&mut self, dx: i32, dy: i32);

    /// Clear any pressed latch after the pointer is released
    fn unclick(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_button(x: i32, y: i32, counter: &Rc<Cell<u32>>) -> Button {
        let counter = Rc::clone(counter);
        Button::new(x, y, 40, 20, "ok")
            .unwrap()
            .with_action(Action::from_fn(move || counter.set(counter.get() + 1)))
    }

    #[test]
    fn test_translation_is_additive() {
        let mut stepped = MultiView::new(0, 0)
            .with_child(Text::new(5, 5, "a"))
            .with_child(Button::new(10, 10, 20, 20, "b").unwrap());
        let mut combined = MultiView::new(0, 0)
            .with_child(Text::new(5, 5, "a"))
            .with_child(Button::new(10, 10, 20, 20, "b").unwrap());

        stepped.update_position(7, -3);
        stepped.update_position(-2, 11);
        combined.update_position(5, 8);

        assert_eq!(stepped.position(), combined.position());
        let positions = |view: &MultiView| -> Vec<Point> {
            view.children().iter().map(|c| c.position()).collect()
        };
        let stepped_children = positions(&stepped);
        let combined_children = positions(&combined);
        assert_eq!(stepped_children, combined_children);
        assert_eq!(stepped_children, vec![Point::new(10, 13), Point::new(15, 18)]);
    }

    #[test]
    fn test_overlapping_buttons_both_fire() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut view = MultiView::new(0, 0)
            .with_child(counting_button(0, 0, &first))
            .with_child(counting_button(20, 10, &second));

        // (30, 15) is inside both rectangles
        assert!(view.check_clicked(30, 15));
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_nested_unclick_releases_all_buttons() {
        let count = Rc::new(Cell::new(0));
        let inner = MultiView::new(0, 0).with_child(counting_button(0, 0, &count));
        let mut outer = MultiView::new(0, 0).with_child(inner);

        assert!(outer.check_clicked(5, 5));
        assert!(!outer.check_clicked(5, 5));
        outer.unclick();
        assert!(outer.check_clicked(5, 5));
        assert_eq!(count.get(), 2);
    }
}
