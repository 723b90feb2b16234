//! Page sections, scroll tracking and reveal-on-scroll

pub mod messages;
pub mod update;
pub mod view;

use iced::widget;
use lumen_core::RevealTracker;

pub use messages::Message;

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Services,
    About,
    Testimonials,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::Services,
        Self::About,
        Self::Testimonials,
        Self::Contact,
        Self::Footer,
    ];

    /// Sections reachable from the header links.
    pub const LINKED: [Self; 4] =
        [Self::Services, Self::About, Self::Testimonials, Self::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Services => "Services",
            Self::About => "About",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
            Self::Footer => "Footer",
        }
    }

    /// Fixed section height (px).
    pub fn height(self) -> f32 {
        match self {
            Self::Hero => 560.0,
            Self::Services => 720.0,
            Self::About => 420.0,
            Self::Testimonials => 480.0,
            Self::Contact => 820.0,
            Self::Footer => 160.0,
        }
    }

    /// Distance from the top of the page to this section (px).
    pub fn top(self) -> f32 {
        Self::ALL
            .iter()
            .take_while(|section| **section != self)
            .map(|section| section.height())
            .sum()
    }

    /// The hero is always shown; everything else fades in on scroll.
    pub fn reveals_on_scroll(self) -> bool {
        self != Self::Hero
    }
}

#[derive(Debug)]
pub struct PageState {
    pub scroll_id: widget::Id,
    pub reveal: RevealTracker<Section>,
    scroll_offset: f32,
    viewport_height: f32,
}

impl PageState {
    pub fn new(reveal_offset_px: f32, viewport_height: f32) -> Self {
        let mut reveal = RevealTracker::new(reveal_offset_px);
        for section in Section::ALL.into_iter().filter(|s| s.reveals_on_scroll()) {
            reveal.register(section, section.top());
        }
        Self {
            scroll_id: widget::Id::unique(),
            reveal,
            scroll_offset: 0.0,
            viewport_height,
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn is_visible(&self, section: Section) -> bool {
        !section.reveals_on_scroll() || self.reveal.is_revealed(&section)
    }

    /// Record the page scroll position and reveal what came into view.
    pub fn on_scroll(&mut self, offset_y: f32, viewport_height: f32) -> Vec<Section> {
        self.scroll_offset = offset_y.max(0.0);
        self.viewport_height = viewport_height;
        let revealed = self.reveal.on_scroll(self.scroll_offset, viewport_height);
        if !revealed.is_empty() {
            log::debug!("revealed sections: {revealed:?}");
        }
        revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_tops_accumulate_heights() {
        assert_eq!(Section::Hero.top(), 0.0);
        assert_eq!(Section::Services.top(), 560.0);
        assert_eq!(Section::About.top(), 1280.0);
        assert_eq!(Section::Testimonials.top(), 1700.0);
    }

    #[test]
    fn scrolling_reveals_sections_once() {
        let mut page = PageState::new(150.0, 800.0);
        assert!(page.is_visible(Section::Hero));
        assert!(!page.is_visible(Section::Services));

        assert_eq!(page.on_scroll(0.0, 800.0), vec![Section::Services]);
        assert!(page.is_visible(Section::Services));

        assert!(page.on_scroll(0.0, 800.0).is_empty());
        assert_eq!(page.on_scroll(1200.0, 800.0), vec![
            Section::About,
            Section::Testimonials
        ]);

        // Scrolling back up never hides anything
        assert!(page.on_scroll(0.0, 800.0).is_empty());
        assert!(page.is_visible(Section::About));
    }
}
