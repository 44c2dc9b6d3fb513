//! Registry of open windows

use super::WindowId;

/// Ordered set of open windows
///
/// Insertion order is paint order: the last entry is drawn on top. The
/// registry only holds ids; windows themselves are owned by their apps, so
/// removing an entry never destroys a window.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WindowRegistry {
    open: Vec<WindowId>,
}

impl WindowRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { open: Vec::new() }
    }

    /// Add a window at the top, if it is not already open
    ///
    /// Returns `true` if the window was inserted.
    pub fn insert(&mut self, id: WindowId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.open.push(id);
        true
    }

    /// Remove a window, if it is open
    ///
    /// Returns `true` if the window was removed.
    pub fn remove(&mut self, id: WindowId) -> bool {
        let before = self.open.len();
        self.open.retain(|&wid| wid != id);
        self.open.len() != before
    }

    /// Check if a window is open
    #[inline]
    pub fn contains(&self, id: WindowId) -> bool {
        self.open.contains(&id)
    }

    /// Iterate open windows in paint order
    pub fn iter(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.open.iter().copied()
    }

    /// Get open windows in paint order
    pub fn ids(&self) -> &[WindowId] {
        &self.open
    }

    /// Get the topmost open window
    pub fn topmost(&self) -> Option<WindowId> {
        self.open.last().copied()
    }

    /// Get the number of open windows
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Check if no window is open
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_insert_is_idempotent() {
        let mut registry = WindowRegistry::new();
        assert!(registry.insert(7));
        assert!(!registry.insert(7));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_remove_missing_is_noop() {
        let mut registry = WindowRegistry::new();
        assert!(!registry.remove(3));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry_preserves_insertion_order() {
        let mut registry = WindowRegistry::new();
        registry.insert(3);
        registry.insert(1);
        registry.insert(2);
        assert_eq!(registry.ids(), &[3, 1, 2]);
        assert_eq!(registry.topmost(), Some(2));

        registry.remove(1);
        registry.insert(1);
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec![3, 2, 1]);
    }
}
