//! Scroll-triggered reveal

use crate::constants::reveal;

#[derive(Debug, Clone)]
struct RevealItem<K> {
    key: K,
    top: f32,
    revealed: bool,
}

/// Tracks which page elements have scrolled into view.
///
/// Tops are page coordinates (distance from the top of the document).
/// Reveal is one-way.
#[derive(Debug, Clone)]
pub struct RevealTracker<K> {
    offset_px: f32,
    items: Vec<RevealItem<K>>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new(reveal::OFFSET_PX)
    }
}

impl<K> RevealTracker<K> {
    pub fn new(offset_px: f32) -> Self {
        Self {
            offset_px,
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn all_revealed(&self) -> bool {
        self.items.iter().all(|item| item.revealed)
    }
}

impl<K: Clone + PartialEq> RevealTracker<K> {
    /// Register an element, or move it if already registered.
    pub fn register(&mut self, key: K, top: f32) {
        match self.items.iter_mut().find(|item| item.key == key) {
            Some(item) => item.top = top,
            None => self.items.push(RevealItem {
                key,
                top,
                revealed: false,
            }),
        }
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.items
            .iter()
            .any(|item| &item.key == key && item.revealed)
    }

    /// Apply a scroll position and return the keys revealed by it.
    pub fn on_scroll(&mut self, scroll_offset: f32, viewport_height: f32) -> Vec<K> {
        let line = scroll_offset + viewport_height - self.offset_px;
        let mut newly = Vec::new();
        for item in self.items.iter_mut().filter(|item| !item.revealed) {
            if item.top < line {
                item.revealed = true;
                newly.push(item.key.clone());
            }
        }
        newly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_reveal_once_past_the_line() {
        let mut tracker = RevealTracker::new(150.0);
        tracker.register("about", 700.0);
        tracker.register("services", 1400.0);

        // line = 0 + 800 - 150 = 650
        assert!(tracker.on_scroll(0.0, 800.0).is_empty());
        // line = 100 + 800 - 150 = 750
        assert_eq!(tracker.on_scroll(100.0, 800.0), vec!["about"]);
        assert_eq!(tracker.on_scroll(800.0, 800.0), vec!["services"]);
        assert!(tracker.all_revealed());
    }

    #[test]
    fn reveal_is_one_way() {
        let mut tracker = RevealTracker::new(150.0);
        tracker.register(1, 300.0);
        tracker.on_scroll(0.0, 600.0);
        assert!(tracker.on_scroll(0.0, 100.0).is_empty());
        assert!(tracker.is_revealed(&1));
    }

    #[test]
    fn register_moves_existing_entries() {
        let mut tracker = RevealTracker::new(0.0);
        tracker.register('a', 1000.0);
        tracker.register('a', 10.0);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.on_scroll(0.0, 100.0), vec!['a']);
    }
}
