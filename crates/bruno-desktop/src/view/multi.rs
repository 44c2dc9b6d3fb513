//! Composite view

use bruno_hal::{Font, Surface, SurfaceError};
use crate::math::Point;
use super::View;

/// Ordered container of child views
///
/// Children are painted and hit-tested in insertion order. A click is offered
/// to every child, so overlapping children can all react to the same click.
#[derive(Default)]
pub struct MultiView {
    position: Point,
    /// Sum of all offsets applied since creation
    offset: Point,
    children: Vec<Box<dyn View>>,
}

impl MultiView {
    /// Create an empty container at a screen position
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
            offset: Point::ZERO,
            children: Vec::new(),
        }
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: impl View + 'static) -> Self {
        self.push(child);
        self
    }

    /// Append a child
    ///
    /// The child is given in the container's original coordinates; any
    /// offset the container has already received is applied to it, so late
    /// children land where earlier siblings did.
    pub fn push(&mut self, child: impl View + 'static) {
        let mut child: Box<dyn View> = Box::new(child);
        if self.offset != Point::ZERO {
            child.update_position(self.offset.x, self.offset.y);
        }
        self.children.push(child);
    }

    /// Get the children in paint order
    pub fn children(&self) -> &[Box<dyn View>] {
        &self.children
    }

    /// Get the number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Check if the container has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl View for MultiView {
    fn position(&self) -> Point {
        self.position
    }

    fn draw(&self, surface: &mut dyn Surface, font: &Font) -> Result<(), SurfaceError> {
        for child in &self.children {
            child.draw(surface, font)?;
        }
        Ok(())
    }

    fn check_clicked(&mut self, x: i32, y: i32) -> bool {
        // Non-short-circuit: every child sees the click
        self.children
            .iter_mut()
            .fold(false, |hit, child| child.check_clicked(x, y) | hit)
    }

    fn update_position(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
        self.offset = self.offset.offset(dx, dy);
        for child in &mut self.children {
            child.update_position(dx, dy);
        }
    }

    fn unclick(&mut self) {
        for child in &mut self.children {
            child.unclick();
        }
    }
}
