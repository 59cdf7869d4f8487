use crate::error::PageError;
use std::time::Duration;

/// Configuration for page interaction timings and thresholds
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Delay before the promotional badge appears (Default: 2s)
    pub badge_show_delay: Duration,

    /// Badge is hidden once this much time has elapsed from scheduling (Default: 12s)
    pub badge_hide_after: Duration,

    /// Simulated sending duration after an accepted submission (Default: 1.5s)
    pub sending_delay: Duration,

    /// Delay before a submitted form resets to its initial state (Default: 2s)
    pub reset_delay: Duration,

    /// Scroll offset past which the navbar background becomes more opaque (Default: 50)
    pub navbar_scroll_threshold: f64,

    /// Offset subtracted from a section top when scrolling to it, for the fixed navbar (Default: 80)
    pub nav_link_offset: f64,

    /// Offset added to the scroll position when probing for the active section (Default: 100)
    pub scroll_probe_offset: f64,

    /// Offset subtracted from a section top when computing its active band (Default: 150)
    pub section_top_offset: f64,

    /// Visibility ratio at which an element counts as intersecting (Default: 0.1)
    pub reveal_threshold: f64,

    /// Bottom inset of the intersection root, in pixels (Default: 50)
    pub reveal_bottom_margin: f64,

    /// Debounce window for scroll event dispatch (Default: 10ms)
    pub scroll_debounce: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            badge_show_delay: Duration::from_secs(2),
            badge_hide_after: Duration::from_secs(12),
            sending_delay: Duration::from_millis(1500),
            reset_delay: Duration::from_secs(2),
            navbar_scroll_threshold: 50.0,
            nav_link_offset: 80.0,
            scroll_probe_offset: 100.0,
            section_top_offset: 150.0,
            reveal_threshold: 0.1,
            reveal_bottom_margin: 50.0,
            scroll_debounce: Duration::from_millis(10),
        }
    }
}

impl PageConfig {
    /// Create a new configuration with all default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the standard production configuration
    pub fn standard() -> Self {
        Self::default()
    }

    /// Create a configuration with compressed delays, for demos and tests
    pub fn accelerated() -> Self {
        Self {
            badge_show_delay: Duration::from_millis(20),
            badge_hide_after: Duration::from_millis(120),
            sending_delay: Duration::from_millis(30),
            reset_delay: Duration::from_millis(40),
            scroll_debounce: Duration::from_millis(5),
            ..Self::default()
        }
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), PageError> {
        if self.badge_show_delay.is_zero() {
            return Err(PageError::InvalidConfig(
                "badge_show_delay must be greater than 0".to_string(),
            ));
        }

        if self.badge_hide_after <= self.badge_show_delay {
            return Err(PageError::InvalidConfig(
                "badge_hide_after must be greater than badge_show_delay".to_string(),
            ));
        }

        if self.sending_delay.is_zero() {
            return Err(PageError::InvalidConfig(
                "sending_delay must be greater than 0".to_string(),
            ));
        }

        if self.reset_delay.is_zero() {
            return Err(PageError::InvalidConfig(
                "reset_delay must be greater than 0".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(PageError::InvalidConfig(
                "reveal_threshold must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.reveal_bottom_margin < 0.0 {
            return Err(PageError::InvalidConfig(
                "reveal_bottom_margin must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}
