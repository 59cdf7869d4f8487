use crate::config::PageConfig;
use crate::schedule::clock::Clock;
use crate::schedule::timer_manager::TimerManager;
use chrono::Weekday;
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Days on which the promotional badge may appear
pub const PROMO_DAYS: [Weekday; 3] = [Weekday::Fri, Weekday::Sat, Weekday::Sun];

/// Visibility lifecycle of the promotional badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeState {
    /// Not shown; either never scheduled or the display window elapsed
    Hidden,
    /// Scheduled, waiting for the show delay
    Pending,
    /// Currently visible
    Visible,
    /// Dismissed by the user; will not re-show
    Dismissed,
}

/// Schedules the promotional badge.
///
/// The badge may appear only on Friday, Saturday, or Sunday. When eligible
/// it becomes visible after the show delay and is hidden once the full
/// display window has elapsed from scheduling. A dismissal (click or
/// Escape) hides it immediately and cancels the pending timers.
pub struct BadgeController {
    state: Arc<Mutex<BadgeState>>,
    timers: TimerManager,
    config: PageConfig,
}

impl BadgeController {
    pub fn new(config: PageConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(BadgeState::Hidden)),
            timers: TimerManager::new(),
            config,
        }
    }

    /// Whether today is a promo day according to the given clock
    pub fn is_promo_day(clock: &dyn Clock) -> bool {
        PROMO_DAYS.contains(&clock.today())
    }

    /// Evaluate the schedule and arm the show/hide timers when eligible.
    ///
    /// On a non-promo day the badge stays hidden regardless of other state.
    pub async fn start(&self, clock: &dyn Clock) -> BadgeState {
        if !Self::is_promo_day(clock) {
            debug!("Badge not scheduled: {:?} is not a promo day", clock.today());
            return BadgeState::Hidden;
        }

        {
            let mut state = self.state.lock().await;
            if *state != BadgeState::Hidden {
                return *state;
            }
            *state = BadgeState::Pending;
        }

        let show_state = Arc::clone(&self.state);
        self.timers
            .schedule(
                "badge:show",
                self.config.badge_show_delay,
                Box::new(move || {
                    tokio::spawn(async move {
                        let mut state = show_state.lock().await;
                        if *state == BadgeState::Pending {
                            *state = BadgeState::Visible;
                        }
                    });
                }),
            )
            .await;

        let hide_state = Arc::clone(&self.state);
        self.timers
            .schedule(
                "badge:hide",
                self.config.badge_hide_after,
                Box::new(move || {
                    tokio::spawn(async move {
                        let mut state = hide_state.lock().await;
                        if *state == BadgeState::Visible || *state == BadgeState::Pending {
                            *state = BadgeState::Hidden;
                        }
                    });
                }),
            )
            .await;

        BadgeState::Pending
    }

    /// Dismiss the badge (click or Escape) and cancel pending timers
    pub async fn dismiss(&self) {
        let mut state = self.state.lock().await;
        if *state == BadgeState::Pending || *state == BadgeState::Visible {
            *state = BadgeState::Dismissed;
            drop(state);
            self.timers.cancel("badge:show").await;
            self.timers.cancel("badge:hide").await;
        }
    }

    /// Current badge state
    pub async fn state(&self) -> BadgeState {
        *self.state.lock().await
    }

    /// Whether the host should render the badge as shown
    pub async fn is_visible(&self) -> bool {
        *self.state.lock().await == BadgeState::Visible
    }
}
