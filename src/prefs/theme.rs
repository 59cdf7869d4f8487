use crate::error::Result;
use crate::prefs::preference_store::PreferenceStore;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Storage key for the dark-mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Page color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Navbar background for this theme at the given scroll depth
    pub fn navbar_background(&self, scrolled: bool) -> &'static str {
        match (self, scrolled) {
            (Theme::Dark, true) => "rgba(17, 24, 39, 0.98)",
            (Theme::Dark, false) => "rgba(17, 24, 39, 0.95)",
            (Theme::Light, true) => "rgba(255, 255, 255, 0.98)",
            (Theme::Light, false) => "rgba(255, 255, 255, 0.95)",
        }
    }

    /// Icon class for the toggle control in this theme
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Dark => "bi bi-sun-fill",
            Theme::Light => "bi bi-moon-fill",
        }
    }
}

/// Owns the dark-mode flag.
///
/// Reads the stored preference once at construction and writes it back on
/// every toggle. The store is the single source of persistence; the
/// controller holds the working copy.
pub struct ThemeController {
    store: Arc<dyn PreferenceStore>,
    theme: Theme,
}

impl ThemeController {
    /// Create a controller, restoring the persisted preference
    pub fn load(store: Arc<dyn PreferenceStore>) -> Self {
        let theme = match store.get(DARK_MODE_KEY).as_deref() {
            Some("true") => Theme::Dark,
            _ => Theme::Light,
        };
        debug!("Restored theme preference: {:?}", theme);

        Self { store, theme }
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether dark mode is active
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Flip the theme and persist the new preference
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set(next)?;
        Ok(self.theme)
    }

    /// Set a specific theme and persist it
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        let flag = if self.is_dark() { "true" } else { "false" };
        self.store.set(DARK_MODE_KEY, flag)
    }

    /// Icon class for the toggle control
    pub fn toggle_icon(&self) -> &'static str {
        self.theme.toggle_icon()
    }
}
