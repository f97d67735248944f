//! Page sections and the scroll-driven navbar state.
//!
//! Scroll offsets and viewport sizes are always passed in by the caller so
//! the rules here stay independent of the browser.

/// Scroll offset (px) after which the navbar switches to its solid style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Fraction of the viewport height a section top must cross to become active.
pub const ACTIVE_LINE: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Education,
    Projects,
    Contact,
}

impl Section {
    /// In page order.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Education,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    /// Label used by the footer's quick links.
    pub fn long_label(self) -> &'static str {
        match self {
            Section::About => "About Me",
            Section::Skills => "My Skills",
            s => s.label(),
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

/// Picks the section the reader is looking at.
///
/// `tops` holds each section's top edge relative to the viewport (as from
/// `getBoundingClientRect`). Order in the slice does not matter; page order
/// is taken from [`Section::ALL`].
pub fn active_section(tops: &[(Section, f64)], viewport_height: f64) -> Section {
    let line = viewport_height * ACTIVE_LINE;
    let mut sorted = tops.to_vec();
    sorted.sort_by_key(|(s, _)| *s);
    sorted
        .into_iter()
        .filter(|(_, top)| *top <= line)
        .map(|(s, _)| s)
        .last()
        .unwrap_or(Section::Home)
}

/// Open/closed state of the collapsed (mobile) navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always collapses the menu.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn test_active_section_at_top() {
        let tops = [
            (Section::Home, 0.0),
            (Section::About, 900.0),
            (Section::Skills, 1800.0),
        ];
        assert_eq!(active_section(&tops, 800.0), Section::Home);
    }

    #[test]
    fn test_active_section_mid_page() {
        // About has scrolled past the top, Skills just crossed 30% of 1000px
        let tops = [
            (Section::Skills, 250.0),
            (Section::Home, -1900.0),
            (Section::About, -950.0),
            (Section::Education, 1100.0),
        ];
        assert_eq!(active_section(&tops, 1000.0), Section::Skills);
        assert_eq!(active_section(&tops, 600.0), Section::About);
    }

    #[test]
    fn test_active_section_defaults_home() {
        assert_eq!(active_section(&[], 800.0), Section::Home);
        let tops = [(Section::Contact, 700.0)];
        assert_eq!(active_section(&tops, 800.0), Section::Home);
    }

    #[test]
    fn test_section_links() {
        assert_eq!(Section::Projects.href(), "#projects");
        assert_eq!(Section::About.long_label(), "About Me");
        assert_eq!(Section::Contact.long_label(), "Contact");
        let ids = Section::ALL.map(Section::id);
        assert_eq!(
            ids,
            ["home", "about", "skills", "education", "projects", "contact"]
        );
    }

    #[test]
    fn test_menu_state() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
