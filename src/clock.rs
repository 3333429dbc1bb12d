use chrono::{DateTime, Local, NaiveDateTime};
use std::time::Duration;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The displayed wall-clock reading, also the cutoff for "future" hours.
///
/// Only `tick` writes the reading. Once `cancel` has run, ticks are ignored
/// and the app stops subscribing to the timer.
#[derive(Debug, Clone)]
pub struct ClockState {
    now: DateTime<Local>,
    running: bool,
}

impl Default for ClockState {
    fn default() -> Self {
        Self::starting_at(Local::now())
    }
}

impl ClockState {
    pub fn starting_at(now: DateTime<Local>) -> Self {
        Self { now, running: true }
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn cutoff(&self) -> NaiveDateTime {
        self.now.naive_local()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replace the reading. Returns false if the clock has been cancelled.
    pub fn tick(&mut self, now: DateTime<Local>) -> bool {
        if !self.running {
            return false;
        }
        self.now = now;
        true
    }

    /// Stop the clock. Returns true only on the call that actually stopped it.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, s).earliest().unwrap()
    }

    #[test]
    fn tick_replaces_reading() {
        let mut clock = ClockState::starting_at(local(2024, 1, 1, 10, 30, 0));
        assert!(clock.tick(local(2024, 1, 1, 10, 30, 1)));
        assert_eq!(clock.now(), local(2024, 1, 1, 10, 30, 1));
        assert_eq!(
            clock.cutoff(),
            local(2024, 1, 1, 10, 30, 1).naive_local()
        );
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut clock = ClockState::starting_at(local(2024, 1, 1, 10, 30, 0));
        assert!(clock.is_running());
        assert!(clock.cancel());
        assert!(!clock.cancel());
        assert!(!clock.is_running());
    }

    #[test]
    fn no_tick_lands_after_cancel() {
        let start = local(2024, 1, 1, 10, 30, 0);
        let mut clock = ClockState::starting_at(start);
        clock.cancel();

        assert!(!clock.tick(local(2024, 1, 1, 10, 30, 5)));
        assert_eq!(clock.now(), start);
    }
}
