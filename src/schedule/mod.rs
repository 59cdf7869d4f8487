pub mod badge;
pub mod clock;
pub mod timer_manager;

pub use badge::{BadgeController, BadgeState, PROMO_DAYS};
pub use clock::{Clock, FixedClock, SystemClock};
pub use timer_manager::{TimerHandler, TimerManager};
