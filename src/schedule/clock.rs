use chrono::{Datelike, Local, Weekday};

/// Source of the current weekday.
///
/// The only calendar question the page asks is "what day is it", so the
/// trait surface stays that narrow; injecting it keeps day-gated behavior
/// testable on any day of the week.
pub trait Clock: Send + Sync {
    fn today(&self) -> Weekday;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Weekday {
        Local::now().weekday()
    }
}

/// Clock pinned to a fixed weekday
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Weekday);

impl Clock for FixedClock {
    fn today(&self) -> Weekday {
        self.0
    }
}
