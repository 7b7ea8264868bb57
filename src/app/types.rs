//! Type definitions for the application state.
//!
//! Contains the core [`Page`] enum: the closed set of navigable views.

/// A navigable page. The closed set of views the app can display.
///
/// `Home` is the default and the fallback for any unrecognized textual
/// page id (see [`Page::from_id_or_home`]). It has no entry in the
/// navigation list; it is reached through the brand control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About,
    Work,
    Process,
    Contact,
}

impl Page {
    /// Every page, in display order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Work,
        Page::Process,
        Page::Contact,
    ];

    /// The destinations shown in the navigation bar. Home is excluded;
    /// it is reachable only via the brand control.
    pub const NAV_PAGES: [Page; 4] = [Page::About, Page::Work, Page::Process, Page::Contact];

    /// Stable textual id, used for config and logging.
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Work => "work",
            Page::Process => "process",
            Page::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Work => "Work",
            Page::Process => "Process",
            Page::Contact => "Contact",
        }
    }

    /// Parse a textual page id.
    pub fn from_id(id: &str) -> Option<Page> {
        match id {
            "home" => Some(Page::Home),
            "about" => Some(Page::About),
            "work" => Some(Page::Work),
            "process" => Some(Page::Process),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }

    /// Parse a textual page id, coercing anything unrecognized to `Home`.
    ///
    /// This is the only place an open-world value enters the closed page
    /// set, so the coercion policy lives here and nowhere else.
    pub fn from_id_or_home(id: &str) -> Page {
        Page::from_id(id).unwrap_or(Page::Home)
    }

    /// Position of this page in the nav list, if it has one.
    pub fn nav_index(self) -> Option<usize> {
        Page::NAV_PAGES.iter().position(|p| *p == self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_nav_pages_exclude_home() {
        assert!(!Page::NAV_PAGES.contains(&Page::Home));
        assert_eq!(Page::NAV_PAGES.len(), 4);
    }

    #[test]
    fn test_id_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn test_from_id_unknown_is_none() {
        assert_eq!(Page::from_id("blog"), None);
        assert_eq!(Page::from_id(""), None);
        assert_eq!(Page::from_id("HOME"), None);
    }

    #[test]
    fn test_from_id_or_home_coerces_unknown() {
        assert_eq!(Page::from_id_or_home("blog"), Page::Home);
        assert_eq!(Page::from_id_or_home(""), Page::Home);
        assert_eq!(Page::from_id_or_home("work"), Page::Work);
    }

    #[test]
    fn test_nav_index() {
        assert_eq!(Page::Home.nav_index(), None);
        assert_eq!(Page::About.nav_index(), Some(0));
        assert_eq!(Page::Contact.nav_index(), Some(3));
    }
}
