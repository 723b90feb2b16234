//! Site navigation: mobile menu toggle, header styling and link targets

use crate::constants::{breakpoints, header};

#[derive(Debug, Clone)]
pub struct NavMenu {
    open: bool,
    header_scrolled: bool,
    scrolled_after_px: f32,
    compact_below_px: f32,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self::new(header::SCROLLED_AFTER_PX, breakpoints::TABLET_MIN_WIDTH)
    }
}

impl NavMenu {
    /// `compact_below_px` is the width under which links collapse into the
    /// toggleable menu.
    pub fn new(scrolled_after_px: f32, compact_below_px: f32) -> Self {
        Self {
            open: false,
            header_scrolled: false,
            scrolled_after_px,
            compact_below_px,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    /// Whether links are collapsed behind the menu toggle at `width`.
    pub fn is_compact(&self, width: f32) -> bool {
        width < self.compact_below_px
    }

    /// Flip the menu. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A menu left open while the window grows past the compact width would
    /// otherwise reappear the next time the window shrinks.
    pub fn on_resize(&mut self, width: f32) {
        if !self.is_compact(width) && self.close() {
            log::debug!("nav menu closed: window no longer compact");
        }
    }

    /// Track the page scroll offset. Returns `true` if the header style
    /// changed.
    pub fn on_scroll(&mut self, offset_y: f32) -> bool {
        let scrolled = offset_y > self.scrolled_after_px;
        let changed = scrolled != self.header_scrolled;
        self.header_scrolled = scrolled;
        changed
    }

    /// Follow an in-page link: closes the menu and returns the scroll offset
    /// that puts `section_top` just below the fixed header.
    pub fn follow_link<F>(&mut self, section_top: f32, header_height: F) -> f32
    where
        F: FnOnce() -> f32,
    {
        self.close();
        (section_top - header_height()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_close_is_idempotent() {
        let mut nav = NavMenu::default();
        assert!(nav.toggle());
        assert!(!nav.toggle());
        nav.toggle();
        assert!(nav.close());
        assert!(!nav.close());
    }

    #[test]
    fn following_a_link_closes_menu_and_offsets_header() {
        let mut nav = NavMenu::default();
        nav.toggle();
        let target = nav.follow_link(900.0, || 80.0);
        assert_eq!(target, 820.0);
        assert!(!nav.is_open());
    }

    #[test]
    fn link_target_never_negative() {
        let mut nav = NavMenu::default();
        assert_eq!(nav.follow_link(20.0, || 80.0), 0.0);
    }

    #[test]
    fn header_scrolled_flag_reports_changes_only() {
        let mut nav = NavMenu::new(50.0, 768.0);
        assert!(!nav.on_scroll(10.0));
        assert!(nav.on_scroll(51.0));
        assert!(!nav.on_scroll(400.0));
        assert!(nav.is_header_scrolled());
        assert!(nav.on_scroll(0.0));
    }

    #[test]
    fn growing_past_compact_width_closes_menu() {
        let mut nav = NavMenu::new(50.0, 768.0);
        nav.toggle();
        nav.on_resize(700.0);
        assert!(nav.is_open());
        nav.on_resize(1024.0);
        assert!(!nav.is_open());
    }
}
