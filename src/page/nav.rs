use crate::config::PageConfig;
use crate::prefs::theme::Theme;
use serde::{Deserialize, Serialize};

/// Position and extent of one page section, as measured by the host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionGeometry {
    /// Section anchor id (without the leading `#`)
    pub id: String,

    /// Top offset of the section in the document
    pub top: f64,

    /// Rendered height of the section
    pub height: f64,
}

/// Presentation state the host applies after a scroll event
#[derive(Debug, Clone, PartialEq)]
pub struct NavUpdate {
    /// Anchor id of the link to mark active, if any section matched
    pub active_section: Option<String>,

    /// Navbar background to apply
    pub navbar_background: &'static str,
}

/// Maps scroll position to the active navigation link and navbar style.
///
/// The active section is the one whose band (top offset shifted up by the
/// configured section offset, spanning the section height) contains the
/// probe point below the scroll position. When no band matches, the
/// previously active link is kept.
pub struct NavTracker {
    sections: Vec<SectionGeometry>,
    config: PageConfig,
    active: Option<String>,
}

impl NavTracker {
    pub fn new(sections: Vec<SectionGeometry>, config: PageConfig) -> Self {
        Self {
            sections,
            config,
            active: None,
        }
    }

    /// Process a scroll event, returning what the host should render
    pub fn on_scroll(&mut self, scroll_y: f64, theme: Theme) -> NavUpdate {
        let probe = scroll_y + self.config.scroll_probe_offset;

        for section in &self.sections {
            let band_top = section.top - self.config.section_top_offset;
            let band_bottom = band_top + section.height;

            if probe >= band_top && probe <= band_bottom {
                self.active = Some(section.id.clone());
            }
        }

        NavUpdate {
            active_section: self.active.clone(),
            navbar_background: theme
                .navbar_background(scroll_y > self.config.navbar_scroll_threshold),
        }
    }

    /// Anchor id of the currently active section, if any
    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Scroll target for a navigation link.
    ///
    /// Accepts an anchor href (`#about`) or a bare id; returns the section
    /// top adjusted for the fixed navbar, or `None` for an unknown anchor,
    /// leaving that link inoperative.
    pub fn scroll_target(&self, href: &str) -> Option<f64> {
        let id = href.strip_prefix('#').unwrap_or(href);
        self.sections
            .iter()
            .find(|section| section.id == id)
            .map(|section| section.top - self.config.nav_link_offset)
    }
}
